use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use snaptext::RelayError;
use tracing::error;

/// A custom error type for the server application.
///
/// Every failure a handler can produce becomes one of these variants, which
/// are converted into the client-facing HTTP responses here. Upstream errors
/// are logged with their underlying message and translated into the fixed
/// per-endpoint shapes; raw provider errors are never passed through, except
/// where the contract explicitly carries a `details` string.
pub enum AppError {
    /// The endpoint was called with anything other than POST.
    MethodNotAllowed,
    /// A required request field was missing or invalid. Detected before any
    /// outbound call is made.
    BadRequest(&'static str),
    /// The text-extraction upstream failed.
    Ocr(RelayError),
    /// The summarization gateway failed.
    Summarize(RelayError),
    /// The workflow webhook failed.
    Webhook(RelayError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::Ocr(err) => {
                // Log the original error for debugging purposes; the caller
                // only ever sees the generic message.
                error!("OCR relay error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to process image" }),
                )
            }
            AppError::Summarize(err) => {
                error!("Summarization relay error: {:?}", err);
                match err {
                    RelayError::Api(details) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "error": "Failed to generate summary", "details": details }),
                    ),
                    RelayError::EmptyResponse => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "error": "No summary generated" }),
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "error": "Internal server error" }),
                    ),
                }
            }
            AppError::Webhook(err) => {
                error!("Webhook relay error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to send to n8n", "details": err.to_string() }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
