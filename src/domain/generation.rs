//! Generation request/result models and response parsing.
//!
//! A request pairs one target identifier (and optional variation) with the
//! extracted context snippets and the generation-eligible fields. The result
//! is a flat field-name → value map parsed from the raw model response,
//! tagged with which parser produced it.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::error::AppError;
use crate::domain::template::Template;

/// Plain-text context extracted from the uploaded reference sources.
///
/// Absent sources are empty strings, never errors.
#[derive(Debug, Clone, Default)]
pub struct ContextSnippets {
    pub branding: String,
    pub product: String,
    pub claims: String,
    pub user_notes: String,
}

/// One generation call: a target identifier, optional variation index, the
/// context snippets, and the fields to generate with their verbatim limit
/// specs.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub target: String,
    pub variation: Option<u32>,
    pub context: ContextSnippets,
    /// Pre-filled functional-description values, echoed into the system
    /// prompt as product context.
    pub functional: Vec<(String, String)>,
    /// (field name, verbatim limit spec) for generation-eligible rows, in
    /// template order.
    pub fields: Vec<(String, String)>,
}

impl GenerationRequest {
    /// Collect the generation-eligible rows of a template into a request.
    pub fn from_template(
        template: &Template,
        target: impl Into<String>,
        variation: Option<u32>,
        context: ContextSnippets,
        functional: Vec<(String, String)>,
    ) -> Self {
        let fields = template
            .rows()
            .iter()
            .filter(|row| row.content_type.is_generated())
            .map(|row| (row.field_name.clone(), row.limit_spec.clone()))
            .collect();

        Self { target: target.into(), variation, context, functional, fields }
    }
}

/// Which parser produced a generation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOrigin {
    /// Strict JSON object decode of the full response.
    Structured,
    /// Heuristic `**key:** value` segment extraction, used only when the
    /// structured decode fails. Not guaranteed to be complete.
    PatternExtracted,
}

/// Field-name → generated-value mapping parsed from a raw model response.
///
/// Partial by design: fields absent from the map are left unfilled.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub fields: BTreeMap<String, String>,
    pub origin: ParseOrigin,
}

impl GenerationResult {
    /// Parse a raw response, preferring a strict JSON object decode and
    /// falling back to `**key:** value` pattern extraction.
    ///
    /// Fails with a `Generation` error when neither parser yields any pair.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
            let fields = map
                .into_iter()
                .map(|(key, value)| (key.trim().to_string(), coerce_to_text(value)))
                .collect();
            return Ok(Self { fields, origin: ParseOrigin::Structured });
        }

        let fields = extract_marked_pairs(raw);
        if fields.is_empty() {
            return Err(AppError::generation(
                "response parsing",
                "response is neither a JSON object nor **key:** value segments",
            ));
        }
        Ok(Self { fields, origin: ParseOrigin::PatternExtracted })
    }

    pub fn get(&self, field_name: &str) -> Option<&str> {
        self.fields.get(field_name.trim()).map(|v| v.as_str())
    }
}

fn coerce_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

static KEY_MARKER: OnceLock<Regex> = OnceLock::new();

fn key_marker() -> &'static Regex {
    // Bold key markers on their own line start: `**Wow:** value`.
    KEY_MARKER.get_or_init(|| Regex::new(r"\*\*(.+?):\*\*").expect("marker pattern is valid"))
}

/// Scan the text for `**<key>:**` markers; each value runs to the next
/// marker or end of text. Keys and values are trimmed.
fn extract_marked_pairs(raw: &str) -> BTreeMap<String, String> {
    let marks: Vec<(String, usize)> = key_marker()
        .captures_iter(raw)
        .map(|caps| {
            let whole = caps.get(0).expect("match has a whole capture");
            (caps[1].trim().to_string(), whole.end())
        })
        .collect();

    let starts: Vec<usize> =
        key_marker().find_iter(raw).map(|m| m.start()).skip(1).chain([raw.len()]).collect();

    marks
        .into_iter()
        .zip(starts)
        .filter(|((key, _), _)| !key.is_empty())
        .map(|((key, value_start), value_end)| (key, raw[value_start..value_end].trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_object() {
        let result = GenerationResult::parse(r#"{"Wow": "Sparkling clean in seconds"}"#).unwrap();
        assert_eq!(result.origin, ParseOrigin::Structured);
        assert_eq!(result.get("Wow"), Some("Sparkling clean in seconds"));
    }

    #[test]
    fn coerces_non_string_json_values_to_text() {
        let result = GenerationResult::parse(r#"{"Count": 3, "Fresh": true}"#).unwrap();
        assert_eq!(result.get("Count"), Some("3"));
        assert_eq!(result.get("Fresh"), Some("true"));
    }

    #[test]
    fn trims_json_keys() {
        let result = GenerationResult::parse(r#"{" Wow ": "value"}"#).unwrap();
        assert_eq!(result.get("Wow"), Some("value"));
    }

    #[test]
    fn falls_back_to_pattern_extraction() {
        let raw = "**Wow:** Great product\n**Subwow:** Even better";
        let result = GenerationResult::parse(raw).unwrap();
        assert_eq!(result.origin, ParseOrigin::PatternExtracted);
        assert_eq!(result.get("Wow"), Some("Great product"));
        assert_eq!(result.get("Subwow"), Some("Even better"));
    }

    #[test]
    fn pattern_values_may_span_lines() {
        let raw = "**Marketing Text:** First line.\nSecond line.\n**Wow:** Short";
        let result = GenerationResult::parse(raw).unwrap();
        assert_eq!(result.get("Marketing Text"), Some("First line.\nSecond line."));
    }

    #[test]
    fn unparseable_response_is_a_generation_error() {
        let err = GenerationResult::parse("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, AppError::Generation { .. }));
    }

    #[test]
    fn json_array_is_not_a_result_object() {
        // Valid JSON, but not a flat object: falls through to the pattern
        // parser, which finds nothing.
        assert!(GenerationResult::parse(r#"["Wow"]"#).is_err());
    }

    #[test]
    fn collects_eligible_fields_from_template() {
        let template = Template::builtin();
        let request = GenerationRequest::from_template(
            &template,
            "1234567890",
            None,
            ContextSnippets::default(),
            Vec::new(),
        );
        // 16 rows minus the 2 functional descriptions.
        assert_eq!(request.fields.len(), 14);
        assert_eq!(request.fields[0], ("Wow".to_string(), "<50".to_string()));
    }
}
