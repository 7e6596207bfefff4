//! # OCR Relay Handler
//!
//! Accepts a base64-encoded frame from the client, forwards it to the
//! text-extraction upstream with the fixed verbatim-extraction prompt, and
//! returns the stripped plain text.

use crate::{errors::AppError, state::AppState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use snaptext::{prompts::OCR_EXTRACTION_PROMPT, text::strip_code_fences};
use tracing::info;

#[derive(Deserialize)]
pub struct OcrRequest {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct OcrResponse {
    pub text: String,
}

/// The handler for the `/api/ocr` endpoint.
pub async fn ocr_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<OcrRequest>,
) -> Result<Json<OcrResponse>, AppError> {
    let image = payload
        .image
        .filter(|image| !image.is_empty())
        .ok_or(AppError::BadRequest("No image provided"))?;

    info!("Received OCR request ({} base64 bytes)", image.len());

    let raw = app_state
        .vision_provider
        .extract_text(&image, OCR_EXTRACTION_PROMPT)
        .await
        .map_err(AppError::Ocr)?;

    Ok(Json(OcrResponse {
        text: strip_code_fences(&raw),
    }))
}
