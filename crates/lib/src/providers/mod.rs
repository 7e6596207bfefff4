//! # Upstream Provider Interfaces
//!
//! Each relay endpoint makes exactly one outbound call, and each call goes
//! through one of the narrow traits below. Handlers depend only on the trait,
//! so they can be exercised against a substitute implementation (or a mock
//! HTTP server standing behind the real one) without touching the network.

pub mod gemini;
pub mod openrouter;
pub mod webhook;

use crate::{errors::RelayError, types::ChatOptions};
use async_trait::async_trait;
use dyn_clone::DynClone;
use serde_json::Value;
use std::fmt::Debug;

/// A client for a multimodal generation API that can read text out of an image.
#[async_trait]
pub trait VisionProvider: Send + Sync + Debug + DynClone {
    /// Extracts text from a base64-encoded image, guided by `prompt`.
    ///
    /// Returns the model's raw text output; post-processing (fence stripping,
    /// trimming) is the caller's concern.
    async fn extract_text(&self, image_base64: &str, prompt: &str) -> Result<String, RelayError>;
}

dyn_clone::clone_trait_object!(VisionProvider);

/// A client for an OpenAI-style chat-completion gateway.
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug + DynClone {
    /// Issues a single system+user completion request against `model`.
    async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        options: &ChatOptions,
    ) -> Result<String, RelayError>;
}

dyn_clone::clone_trait_object!(ChatProvider);

/// A client that forwards a JSON payload to a fixed external webhook.
#[async_trait]
pub trait WebhookForwarder: Send + Sync + Debug + DynClone {
    /// Posts `payload` verbatim and returns the webhook's response body.
    async fn forward(&self, payload: &Value) -> Result<Value, RelayError>;
}

dyn_clone::clone_trait_object!(WebhookForwarder);
