//! assetgen: fill marketing asset templates with AI-generated copy
//! validated against per-field character limits.
//!
//! The pipeline normalizes an uploaded template spreadsheet (or the
//! built-in default), extracts context from reference documents and an
//! approved-claims list, builds deterministic prompts, calls a
//! chat-completion endpoint once per target/variation, reconciles the
//! parsed output back into the template under each field's character
//! limit, and exports the result as CSV and XLSX.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use app::{
    AppContext,
    commands::{generate, template},
};
use ports::ScriptedCompletionClient;
use services::HttpCompletionClient;

pub use app::commands::generate::{GenerateOptions, GenerateReport};
pub use app::commands::template::TemplateOptions;
pub use domain::{
    AppError, ContentType, ContextSnippets, GenerationRequest, GenerationResult, GeneratorConfig,
    LimitWarning, ModelKind, ParseOrigin, Template, TemplateRow,
};

/// Run the generation pipeline and export the filled template.
///
/// The completion client is chosen here: the HTTP client against the
/// configured endpoint, or a scripted client when `mock_responses` points
/// to a JSON array of canned response strings.
pub fn generate(
    options: GenerateOptions,
    config_path: Option<&Path>,
    mock_responses: Option<&Path>,
) -> Result<GenerateReport, AppError> {
    let config = GeneratorConfig::load(config_path)?;

    let report = match mock_responses {
        Some(path) => {
            let client = ScriptedCompletionClient::from_file(path)?;
            let ctx = AppContext::new(client, config);
            generate::execute(&ctx, &options)?
        }
        None => {
            let client = HttpCompletionClient::from_env(&config.api)?;
            let ctx = AppContext::new(client, config);
            generate::execute(&ctx, &options)?
        }
    };

    for warning in &report.warnings {
        println!("⚠ {warning}");
    }
    for (column, reason) in &report.skipped {
        println!("✗ {column}: {reason}");
    }
    for column in &report.columns_filled {
        println!("✅ Filled column '{column}'");
    }
    if let Some(path) = &options.out_csv {
        println!("✅ Exported CSV to {}", path.display());
    }
    if let Some(path) = &options.out_xlsx {
        println!("✅ Exported XLSX to {}", path.display());
    }

    Ok(report)
}

/// Write the built-in default template to CSV and/or XLSX.
pub fn template(options: TemplateOptions) -> Result<(), AppError> {
    let written = template::execute(&options)?;
    for path in written {
        println!("✅ Wrote template to {}", path.display());
    }
    Ok(())
}
