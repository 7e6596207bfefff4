use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
///
/// The three API routes accept POST only; every other method falls through to
/// a handler that answers 405 with the structured error body (axum's built-in
/// 405 response has an empty body).
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(
            "/api/ocr",
            post(handlers::ocr_handler)
                .fallback(handlers::method_not_allowed)
                // Base64-encoded webcam frames exceed axum's 2 MiB default.
                .layer(DefaultBodyLimit::max(10 * 1024 * 1024)),
        )
        .route(
            "/api/summarize",
            post(handlers::summarize_handler).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/calendar-event",
            post(handlers::calendar_event_handler).fallback(handlers::method_not_allowed),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
