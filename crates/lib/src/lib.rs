//! # Snaptext
//!
//! This crate provides the upstream-facing half of the snaptext relay server:
//! narrow client interfaces for the external services the server forwards to
//! (multimodal text extraction, chat-completion gateway, workflow webhook),
//! together with the fixed prompts and the small amount of text post-processing
//! the relays perform.

pub mod errors;
pub mod prompts;
pub mod providers;
pub mod text;
pub mod types;

pub use errors::RelayError;
pub use types::{ChatOptions, ModelTier};
