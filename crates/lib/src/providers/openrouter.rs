use crate::{errors::RelayError, providers::ChatProvider, types::ChatOptions};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::error;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

// --- OpenRouter Provider implementation ---

/// A provider for chat completion via the OpenRouter gateway (or any
/// OpenAI-compatible endpoint).
///
/// OpenRouter attributes traffic through two optional headers: the deployment
/// origin as `HTTP-Referer` and an application title as `X-Title`.
#[derive(Clone, Debug)]
pub struct OpenRouterProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    referer: Option<String>,
    app_title: String,
}

impl OpenRouterProvider {
    /// Creates a new `OpenRouterProvider`.
    pub fn new(
        api_url: String,
        api_key: String,
        referer: Option<String>,
        app_title: String,
    ) -> Result<Self, RelayError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(RelayError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            referer,
            app_title,
        })
    }
}

#[async_trait]
impl ChatProvider for OpenRouterProvider {
    async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        options: &ChatOptions,
    ) -> Result<String, RelayError> {
        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            },
        ];

        let request_body = ChatRequest {
            model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let mut request_builder = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("X-Title", self.app_title.as_str());

        if let Some(referer) = &self.referer {
            request_builder = request_builder.header("HTTP-Referer", referer.as_str());
        }

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(RelayError::Request)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenRouter API error: {error_text}");
            // Gateway errors carry a structured body; surface its message.
            let message = serde_json::from_str::<serde_json::Value>(&error_text)
                .ok()
                .and_then(|body| body["error"]["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| "Unknown API error".to_string());
            return Err(RelayError::Api(message));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(RelayError::Deserialization)?;

        chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or(RelayError::EmptyResponse)
    }
}
