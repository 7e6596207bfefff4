//! # Application Configuration
//!
//! This module defines the configuration structure for the `snaptext-server`
//! and provides the logic for loading it from a `config.yml` file and
//! environment variables. The file may reference environment variables with
//! `${VAR}` placeholders, which keeps credentials out of the checked-in
//! template.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use snaptext::ModelTier;
use std::env;
use std::fs;
use tracing::info;

/// The default model identifier for the "fast" tier.
pub const DEFAULT_FAST_MODEL: &str = "deepseek/deepseek-r1-distill-qwen-32b:free";

/// The default model identifier for the "accurate" tier.
pub const DEFAULT_ACCURATE_MODEL: &str = "deepseek/deepseek-r1:free";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Application title, sent as the `X-Title` header to the summarization
    /// gateway.
    #[serde(default = "default_app_title")]
    pub app_title: String,
    /// Optional deployment origin, sent as the `HTTP-Referer` header to the
    /// summarization gateway.
    #[serde(default)]
    pub app_referer: Option<String>,
    /// Configuration for the text-extraction upstream.
    pub ocr: OcrConfig,
    /// Configuration for the summarization gateway.
    pub summarize: SummarizeConfig,
    /// Configuration for the workflow webhook.
    pub webhook: WebhookConfig,
}

fn default_port() -> u16 {
    9090
}

fn default_app_title() -> String {
    "snaptext".to_string()
}

/// Configuration for the multimodal text-extraction provider.
#[derive(Debug, Deserialize, Clone)]
pub struct OcrConfig {
    /// The API URL. Optional; when unset it is derived from the model name.
    #[serde(default)]
    pub api_url: Option<String>,
    pub api_key: String,
    #[serde(default = "default_ocr_model")]
    pub model_name: String,
}

fn default_ocr_model() -> String {
    "gemini-1.5-flash".to_string()
}

/// Configuration for the chat-completion gateway.
#[derive(Debug, Deserialize, Clone)]
pub struct SummarizeConfig {
    #[serde(default = "default_summarize_api_url")]
    pub api_url: String,
    pub api_key: String,
    /// The tier-to-model mapping. This table is the single source of truth
    /// for which model identifiers can ever be sent to the gateway.
    #[serde(default)]
    pub models: TierModels,
}

fn default_summarize_api_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

/// The model identifier behind each selectable tier.
#[derive(Debug, Deserialize, Clone)]
pub struct TierModels {
    #[serde(default = "default_fast_model")]
    pub fast: String,
    #[serde(default = "default_accurate_model")]
    pub accurate: String,
}

impl Default for TierModels {
    fn default() -> Self {
        Self {
            fast: default_fast_model(),
            accurate: default_accurate_model(),
        }
    }
}

impl TierModels {
    /// Resolves a tier to its configured model identifier.
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast,
            ModelTier::Accurate => &self.accurate,
        }
    }
}

fn default_fast_model() -> String {
    DEFAULT_FAST_MODEL.to_string()
}

fn default_accurate_model() -> String {
    DEFAULT_ACCURATE_MODEL.to_string()
}

/// Configuration for the outbound workflow webhook.
#[derive(Debug, Deserialize, Clone)]
pub struct WebhookConfig {
    pub url: String,
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").unwrap();
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|_| "".to_string())
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// This function reads the configuration from a file. It also merges in
/// environment variables, allowing for overrides and substitution in the YAML
/// file.
/// - Top-level keys like `port` are overridden by `PORT`.
/// - Nested keys are overridden by `SNAPTEXT_...` variables
///   (e.g., `SNAPTEXT_SUMMARIZE__MODELS__FAST`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let main_config_path = if let Some(override_path) = config_path_override {
        override_path.to_string()
    } else {
        let base_path = env!("CARGO_MANIFEST_DIR");
        let path = format!("{base_path}/config.yml");
        info!("Loading configuration from '{path}'.");
        path
    };

    let main_content = read_and_substitute(&main_config_path)?.ok_or_else(|| {
        ConfigError::NotFound(format!(
            "Config file not found at '{main_config_path}'. Please ensure 'config.yml' exists."
        ))
    })?;

    let settings = ConfigBuilder::builder()
        .add_source(File::from_str(&main_content, FileFormat::Yaml))
        // Load environment variables for top-level keys like PORT.
        .add_source(Environment::default())
        // Load prefixed environment variables for deeper overrides.
        .add_source(
            Environment::with_prefix("SNAPTEXT")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    // Deserialize the fully resolved configuration into our `AppConfig` struct.
    let mut config: AppConfig = settings.try_deserialize()?;

    // Unset `${VAR}` placeholders expand to empty strings; normalize the
    // optional fields back to `None` so downstream code sees one shape.
    if config.app_referer.as_deref() == Some("") {
        config.app_referer = None;
    }
    if config.ocr.api_url.as_deref() == Some("") {
        config.ocr.api_url = None;
    }

    Ok(config)
}
