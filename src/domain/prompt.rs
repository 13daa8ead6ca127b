//! Deterministic prompt construction.
//!
//! Two text blocks are built per generation request: a system block carrying
//! the role statement, bounded context snippets, and the JSON-only output
//! contract, and a user block listing the generation-eligible fields with
//! their limit specs. Identical inputs yield byte-identical blocks.

use std::collections::HashMap;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::error::AppError;
use crate::domain::generation::GenerationRequest;

/// System block template. Only `{{ ... }}` interpolation; optional sentences
/// are composed before rendering so the template stays flat.
const SYSTEM_TEMPLATE: &str = r#"You are a marketing copywriter. Brand guidelines: {{ branding }}. Product details: {{ product }}. Approved claims: {{ claims }}. CTN: {{ target }}.{{ notes }}{{ functional }} Generate copy for each field in the following template. Only reference the provided product information; do not mention unrelated products or categories. Output MUST be a single valid JSON object whose keys exactly match the template's "Field Name" values and whose values are the generated strings. Do not include any markdown or explanatory text - only the JSON. Example format:
{
  "Wow": "...",
  "Subwow": "...",
  "Marketing Text": "...",
  "Feature 1 Name": "...",
  ...
}
"#;

/// Bound a context snippet to at most `max` characters before it is
/// embedded in a prompt. Bounds prompt size and cost regardless of how
/// large the uploaded document was.
pub fn truncate_snippet(snippet: &str, max: usize) -> String {
    snippet.chars().take(max).collect()
}

/// Render the system block for a generation request.
pub fn build_system_prompt(
    request: &GenerationRequest,
    max_snippet_chars: usize,
) -> Result<String, AppError> {
    let notes = if request.context.user_notes.trim().is_empty() {
        String::new()
    } else {
        format!(" Additional context: {}.", request.context.user_notes.trim())
    };

    let functional = if request.functional.is_empty() {
        String::new()
    } else {
        let joined = request
            .functional
            .iter()
            .map(|(field, value)| format!("{field}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        format!(" Functional descriptions: {joined}.")
    };

    let mut variables = HashMap::new();
    variables.insert("branding", truncate_snippet(&request.context.branding, max_snippet_chars));
    variables.insert("product", truncate_snippet(&request.context.product, max_snippet_chars));
    variables.insert("claims", truncate_snippet(&request.context.claims, max_snippet_chars));
    variables.insert("target", request.target.clone());
    variables.insert("notes", notes);
    variables.insert("functional", functional);

    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(SYSTEM_TEMPLATE, &variables)
        .map_err(|err| AppError::config_error(format!("System prompt render failed: {err}")))
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render the user block: one line per generation-eligible field stating
/// its limit spec. A spec already in `<N>` form is used verbatim; an unset
/// spec falls back to the default display limit.
pub fn build_user_prompt(request: &GenerationRequest, default_limit_display: u32) -> String {
    let mut out = String::from("Fields with limits:\n");
    for (field, spec) in &request.fields {
        let spec = spec.trim();
        let display = if spec.starts_with('<') {
            spec.to_string()
        } else if spec.is_empty() {
            format!("<{default_limit_display}>")
        } else {
            format!("<{spec}>")
        };
        out.push_str(&format!("- {field} ({display}) chars\n"));
    }
    out
}
