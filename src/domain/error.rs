use std::io;

use thiserror::Error;

/// Library-wide error type for assetgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Malformed or incomplete template structure, or a bad setting.
    /// Fatal: aborts before any generation step.
    #[error("{0}")]
    Configuration(String),

    /// A reference document or claims file could not be read.
    /// Contained to that one source; the pipeline continues with an empty snippet.
    #[error("Failed to extract {source_name}: {reason}")]
    Extraction { source_name: String, reason: String },

    /// The completion call failed or its output could not be parsed.
    /// Contained to one generation request in batch mode.
    #[error("Generation failed for {context}: {reason}")]
    Generation { context: String, reason: String },

    /// Model selector string is invalid.
    #[error("Invalid model '{0}': must be 'standard' or 'fine-tuned'")]
    InvalidModel(String),

    /// CSV read/write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet write error.
    #[error("Spreadsheet write error: {0}")]
    Xlsx(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn extraction<S: Into<String>, R: Into<String>>(source_name: S, reason: R) -> Self {
        AppError::Extraction { source_name: source_name.into(), reason: reason.into() }
    }

    pub fn generation<C: Into<String>, R: Into<String>>(context: C, reason: R) -> Self {
        AppError::Generation { context: context.into(), reason: reason.into() }
    }
}
