//! Completion client port definition.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

use crate::domain::AppError;

/// One chat-style completion request: two role-tagged text blocks and a
/// model identifier.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System block (role statement, context, output contract).
    pub system: String,
    /// User block (field list with limits).
    pub user: String,
    /// Concrete model identifier.
    pub model: String,
}

/// Port for the outbound completion call. Implementations return the raw
/// response text; parsing happens in the domain.
pub trait CompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError>;
}

/// Test double returning queued scripted responses, in order.
///
/// Also backs `generate --mock` runs so the pipeline can be exercised
/// without network access.
#[derive(Debug, Default)]
pub struct ScriptedCompletionClient {
    responses: RefCell<VecDeque<String>>,
}

impl ScriptedCompletionClient {
    pub fn new(responses: Vec<String>) -> Self {
        Self { responses: RefCell::new(responses.into()) }
    }

    /// Load scripted responses from a JSON array of strings.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let responses: Vec<String> = serde_json::from_str(&content).map_err(|err| {
            AppError::config_error(format!(
                "Mock responses file {} is not a JSON array of strings: {err}",
                path.display()
            ))
        })?;
        Ok(Self::new(responses))
    }
}

impl CompletionClient for ScriptedCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        self.responses.borrow_mut().pop_front().ok_or_else(|| {
            AppError::generation(
                format!("model '{}'", request.model),
                "no scripted response left in the queue",
            )
        })
    }
}
