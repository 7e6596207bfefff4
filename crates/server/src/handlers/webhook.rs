//! # Webhook Relay Handler
//!
//! Accepts a free-form payload from the client and forwards it, without
//! interpretation, to the configured workflow-automation webhook.

use crate::{errors::AppError, state::AppState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

#[derive(Deserialize)]
pub struct CalendarEventRequest {
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Serialize, Deserialize)]
pub struct CalendarEventResponse {
    pub message: String,
    #[serde(rename = "n8nResponse")]
    pub n8n_response: Value,
}

/// The handler for the `/api/calendar-event` endpoint.
pub async fn calendar_event_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CalendarEventRequest>,
) -> Result<Json<CalendarEventResponse>, AppError> {
    let data = match payload.data {
        None | Some(Value::Null) => return Err(AppError::BadRequest("No data provided")),
        Some(Value::String(s)) if s.is_empty() => {
            return Err(AppError::BadRequest("No data provided"))
        }
        Some(value) => value,
    };

    info!("Forwarding calendar event payload to webhook");

    let body = app_state
        .webhook_forwarder
        .forward(&json!({ "data": data }))
        .await
        .map_err(AppError::Webhook)?;

    Ok(Json(CalendarEventResponse {
        message: "Success".to_string(),
        n8n_response: body,
    }))
}
