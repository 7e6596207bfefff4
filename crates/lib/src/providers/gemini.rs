use crate::{errors::RelayError, providers::VisionProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::error;

/// The MIME type declared for captured frames. The capture pipeline encodes
/// frames as PNG; if that ever changes, this declaration must change with it.
pub const CAPTURE_MIME_TYPE: &str = "image/png";

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    text: String,
}

// --- Gemini Provider implementation ---

/// A provider for image-to-text extraction via the Google Gemini API.
#[derive(Clone, Debug)]
pub struct GeminiVisionProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl GeminiVisionProvider {
    /// Creates a new `GeminiVisionProvider`.
    pub fn new(api_url: String, api_key: String) -> Result<Self, RelayError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(RelayError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl VisionProvider for GeminiVisionProvider {
    async fn extract_text(&self, image_base64: &str, prompt: &str) -> Result<String, RelayError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: CAPTURE_MIME_TYPE.to_string(),
                            data: image_base64.to_string(),
                        },
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(RelayError::Request)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error: {error_text}");
            return Err(RelayError::Api(error_text));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(RelayError::Deserialization)?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(RelayError::EmptyResponse)
    }
}
