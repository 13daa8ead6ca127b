//! Chat-completion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ApiConfig, AppError};
use crate::ports::{CompletionClient, CompletionRequest};

const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// HTTP client for the chat-completion endpoint.
///
/// One call per request, no retries: a failed call is reported once and the
/// caller decides whether to skip it (batch mode) or abort.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            temperature: config.temperature,
            client,
        })
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env(config: &ApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            AppError::config_error(format!("{API_KEY_ENV} environment variable not set"))
        })?;

        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        let context = format!("model '{}'", request.model);

        let body = ChatRequest {
            model: &request.model,
            messages: [
                ChatMessage { role: "system", content: &request.system },
                ChatMessage { role: "user", content: &request.user },
            ],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| AppError::generation(context.as_str(), format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::generation(
                &context,
                format!("API error ({}): {}", status.as_u16(), error_text),
            ));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| AppError::generation(context.as_str(), format!("Failed to parse response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::generation(context.as_str(), "No completion content in response"))
    }
}
