//! # Relay Prompts
//!
//! This module contains the fixed prompt strings sent to the upstream AI
//! services, along with the fixed generation profile for summarization.
//! They are named constants so tests (and future configuration layers) can
//! reference them without duplicating the literals.

// --- Text Extraction ---

/// Instruction sent alongside a captured frame. The upstream model must
/// return the text verbatim; any commentary it adds would end up in the
/// user's clipboard.
pub const OCR_EXTRACTION_PROMPT: &str = "Extract all text from this image exactly as it appears. Preserve line breaks, spacing, and original formatting. Do not add any additional text or interpretation.";

// --- Summarization ---

pub const SUMMARY_SYSTEM_PROMPT: &str = r#"You are an expert at summarizing complex information in multiple languages. Always detect the user's input language automatically and respond in the exact same language without switching to another language. Provide clear, concise, and well-structured summaries using markdown formatting. Preserve all key technical details and important nuances. Limit the entire summary within 5000 tokens. Do not add unnecessary explanations or translations."#;

/// User-message template; `{text}` is replaced with the caller's text.
pub const SUMMARY_USER_PROMPT: &str = r#"Please create a comprehensive summary of the following text. Use the same language as the input text, preserving all technical details. The summary should be clear, concise, and formatted with markdown. Limit the response to 5000 tokens.

{text}"#;

/// Output cap for a summary. Mirrors the hard limit stated in the prompts.
pub const SUMMARY_MAX_TOKENS: u32 = 5000;

pub const SUMMARY_TEMPERATURE: f32 = 0.2;
