use crate::{errors::RelayError, providers::WebhookForwarder};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use tracing::error;

/// Forwards JSON payloads to a fixed external webhook URL over plain HTTP POST.
#[derive(Clone, Debug)]
pub struct HttpWebhookForwarder {
    client: ReqwestClient,
    webhook_url: String,
}

impl HttpWebhookForwarder {
    /// Creates a new `HttpWebhookForwarder`.
    pub fn new(webhook_url: String) -> Result<Self, RelayError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(RelayError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            webhook_url,
        })
    }
}

#[async_trait]
impl WebhookForwarder for HttpWebhookForwarder {
    async fn forward(&self, payload: &Value) -> Result<Value, RelayError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(RelayError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Webhook error ({status}): {error_text}");
            return Err(RelayError::Api(format!(
                "webhook responded with status {status}"
            )));
        }

        let body = response.text().await.map_err(RelayError::Deserialization)?;
        // Workflow webhooks usually answer with JSON, but nothing guarantees
        // it; fall back to carrying the body as a plain string.
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}
