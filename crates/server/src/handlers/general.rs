//! # General Route Handlers
//!
//! The operational endpoints plus the shared method-filtering fallback.

use crate::errors::AppError;

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "snaptext server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Fallback for the POST-only API routes: any other method lands here.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
