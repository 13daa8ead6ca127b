//! Generator configuration loaded from `assetgen.toml`.
//!
//! Every field has a serde default so a missing or partial file still yields
//! a working configuration. The fine-tuned model identifier can additionally
//! be overridden through the `ASSETGEN_FINETUNED_MODEL` environment variable.

use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::error::AppError;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "assetgen.toml";

/// Environment variable overriding the fine-tuned model identifier.
pub const FINETUNED_MODEL_ENV: &str = "ASSETGEN_FINETUNED_MODEL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorConfig {
    /// Completion endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Snippet and limit settings.
    #[serde(default)]
    pub limits: LimitConfig,
}

impl GeneratorConfig {
    /// Load configuration from an explicit path, or from `assetgen.toml` in
    /// the working directory when present, or defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = Path::new(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default.to_path_buf()
            }
        };

        let content = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolved fine-tuned model identifier: environment override first,
    /// then the configured value (which itself defaults to a hard-coded
    /// identifier).
    pub fn finetuned_model(&self) -> String {
        std::env::var(FINETUNED_MODEL_ENV).unwrap_or_else(|_| self.api.finetuned_model.clone())
    }
}

/// Completion endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Chat completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Sampling temperature. Low by default to minimize variance while
    /// still allowing variation across repeated calls.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// General-purpose model identifier.
    #[serde(default = "default_standard_model")]
    pub standard_model: String,
    /// Fine-tuned model identifier.
    #[serde(default = "default_finetuned_model")]
    pub finetuned_model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
            standard_model: default_standard_model(),
            finetuned_model: default_finetuned_model(),
        }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("default URL is valid")
}

fn default_timeout() -> u64 {
    60
}

fn default_temperature() -> f32 {
    0.2
}

fn default_standard_model() -> String {
    "gpt-4o".to_string()
}

fn default_finetuned_model() -> String {
    "ft:gpt-4o-mini-2024-07-18:assetgen:copywriter:default".to_string()
}

/// Snippet and limit settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitConfig {
    /// Maximum characters of any context snippet embedded in a prompt.
    #[serde(default = "default_max_snippet_chars")]
    pub max_snippet_chars: usize,
    /// Limit shown in the user prompt for fields without a limit spec.
    #[serde(default = "default_limit_display")]
    pub default_limit_display: u32,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_snippet_chars: default_max_snippet_chars(),
            default_limit_display: default_limit_display(),
        }
    }
}

fn default_max_snippet_chars() -> usize {
    1500
}

fn default_limit_display() -> u32 {
    300
}

/// Which model identifier a generation run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    /// General-purpose model.
    #[default]
    Standard,
    /// Fine-tuned model from config or environment.
    FineTuned,
}

impl ModelKind {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "standard" => Ok(ModelKind::Standard),
            "fine-tuned" | "finetuned" => Ok(ModelKind::FineTuned),
            other => Err(AppError::InvalidModel(other.to_string())),
        }
    }

    /// Resolve to the concrete model identifier.
    pub fn resolve(&self, config: &GeneratorConfig) -> String {
        match self {
            ModelKind::Standard => config.api.standard_model.clone(),
            ModelKind::FineTuned => config.finetuned_model(),
        }
    }
}
