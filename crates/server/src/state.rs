//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The `AppState` holds all shared resources: the
//! configuration and one instantiated client per upstream service, making them
//! accessible to all request handlers. Handlers only see the capability
//! traits, so tests can stand substitutes behind the same state shape.

use crate::config::AppConfig;
use anyhow::bail;
use snaptext::providers::{
    gemini::GeminiVisionProvider, openrouter::OpenRouterProvider, webhook::HttpWebhookForwarder,
    ChatProvider, VisionProvider, WebhookForwarder,
};
use std::sync::Arc;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// The image-to-text extraction upstream.
    pub vision_provider: Arc<dyn VisionProvider>,
    /// The chat-completion gateway used for summarization.
    pub chat_provider: Arc<dyn ChatProvider>,
    /// The workflow webhook target.
    pub webhook_forwarder: Arc<dyn WebhookForwarder>,
}

/// Builds the shared application state from the configuration.
///
/// This validates the required upstream credentials and instantiates one
/// client per external service.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    if config.ocr.api_key.is_empty() {
        bail!("ocr.api_key is required. Please set GEMINI_API_KEY in your .env file.");
    }
    if config.summarize.api_key.is_empty() {
        bail!("summarize.api_key is required. Please set OPENROUTER_API_KEY in your .env file.");
    }
    if config.webhook.url.is_empty() {
        bail!("webhook.url is required. Please set CALENDAR_WEBHOOK_URL in your .env file.");
    }

    // If api_url is not provided in config, construct it from the model name.
    let ocr_api_url = config.ocr.api_url.clone().unwrap_or_else(|| {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            config.ocr.model_name
        )
    });

    let vision_provider =
        GeminiVisionProvider::new(ocr_api_url, config.ocr.api_key.clone())?;
    let chat_provider = OpenRouterProvider::new(
        config.summarize.api_url.clone(),
        config.summarize.api_key.clone(),
        config.app_referer.clone(),
        config.app_title.clone(),
    )?;
    let webhook_forwarder = HttpWebhookForwarder::new(config.webhook.url.clone())?;

    Ok(AppState {
        config: Arc::new(config),
        vision_provider: Arc::new(vision_provider),
        chat_provider: Arc::new(chat_provider),
        webhook_forwarder: Arc::new(webhook_forwarder),
    })
}
