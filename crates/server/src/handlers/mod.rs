//! # API Route Handlers
//!
//! This module organizes the Axum route handlers for the `snaptext-server`.
//! Each relay endpoint lives in its own sub-module, with its request and
//! response payload types next to the handler that uses them.

// Sub-modules for different handler categories.
pub mod general;
pub mod ocr;
pub mod summarize;
pub mod webhook;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use general::*;
pub use ocr::*;
pub use summarize::*;
pub use webhook::*;
