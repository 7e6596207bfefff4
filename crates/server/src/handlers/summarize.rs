//! # Summarization Relay Handler
//!
//! Accepts free text and a model-tier selector, resolves the tier against the
//! configured mapping, and issues a single chat-completion request with the
//! fixed prompt pair and generation profile.

use crate::{errors::AppError, state::AppState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use snaptext::{
    prompts::{SUMMARY_MAX_TOKENS, SUMMARY_SYSTEM_PROMPT, SUMMARY_TEMPERATURE, SUMMARY_USER_PROMPT},
    ChatOptions, ModelTier,
};
use tracing::info;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "modelType")]
    pub model_type: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// The handler for the `/api/summarize` endpoint.
///
/// Both validation checks run before any outbound call: `text` first, then
/// the tier selector. The tier mapping in the configuration is the single
/// source of truth; no other model identifier can reach the gateway.
pub async fn summarize_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let text = payload
        .text
        .filter(|text| !text.is_empty())
        .ok_or(AppError::BadRequest("No text provided"))?;

    let tier = payload
        .model_type
        .as_deref()
        .and_then(ModelTier::parse)
        .ok_or(AppError::BadRequest("Invalid model type"))?;

    let model = app_state.config.summarize.models.model_for(tier);
    info!(
        "Received summarize request ({} chars, tier '{}')",
        text.len(),
        tier.as_str()
    );

    let user_prompt = SUMMARY_USER_PROMPT.replace("{text}", &text);
    let options = ChatOptions {
        max_tokens: SUMMARY_MAX_TOKENS,
        temperature: SUMMARY_TEMPERATURE,
    };

    let summary = app_state
        .chat_provider
        .complete(model, SUMMARY_SYSTEM_PROMPT, &user_prompt, &options)
        .await
        .map_err(AppError::Summarize)?;

    Ok(Json(SummarizeResponse { summary }))
}
