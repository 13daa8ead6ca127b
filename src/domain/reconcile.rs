//! Reconciliation of a generation result into a template column.
//!
//! Each parsed field is matched to its template row by exact trimmed field
//! name and written into the active output column, truncated to the row's
//! character limit when it exceeds it. Truncations are surfaced as warnings,
//! never silently dropped. Re-applying the same result to the same column is
//! idempotent.

use crate::domain::generation::GenerationResult;
use crate::domain::template::Template;

/// A generated value exceeded its declared limit and was prefix-truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitWarning {
    pub column: String,
    pub field_name: String,
    pub limit: u32,
}

impl std::fmt::Display for LimitWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} exceeds {} characters in column '{}'; truncated",
            self.field_name, self.limit, self.column
        )
    }
}

/// Apply a generation result into the named output column.
///
/// Rows whose field is absent from the result, or present with an empty
/// value, keep their existing cell value. Over-limit values are cut to the
/// first `limit` characters (plain prefix cut, counted in characters).
pub fn apply(
    template: &mut Template,
    column_label: &str,
    result: &GenerationResult,
) -> Vec<LimitWarning> {
    let column = template.ensure_column(column_label);

    let mut updates: Vec<(usize, String)> = Vec::new();
    let mut warnings = Vec::new();

    for (row_idx, row) in template.rows().iter().enumerate() {
        let field = row.field_name.trim();
        let Some(value) = result.get(field) else { continue };
        if value.is_empty() {
            continue;
        }

        let mut value = value.to_string();
        if let Some(limit) = row.char_limit()
            && value.chars().count() > limit as usize
        {
            warnings.push(LimitWarning {
                column: column_label.to_string(),
                field_name: field.to_string(),
                limit,
            });
            value = value.chars().take(limit as usize).collect();
        }
        updates.push((row_idx, value));
    }

    for (row_idx, value) in updates {
        template.set_cell(row_idx, column, value);
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_of(pairs: &[(&str, &str)]) -> GenerationResult {
        let json: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        GenerationResult::parse(&serde_json::Value::Object(json).to_string()).unwrap()
    }

    #[test]
    fn under_limit_value_is_written_unmodified() {
        let mut template = Template::builtin();
        let warnings = apply(&mut template, "CTN", &result_of(&[("Wow", "Sparkling clean in seconds")]));
        assert!(warnings.is_empty());
        let row = template.row_index("Wow").unwrap();
        assert_eq!(template.cell(row, 0), "Sparkling clean in seconds");
    }

    #[test]
    fn over_limit_value_is_truncated_with_one_warning() {
        let mut template = Template::builtin();
        let long = "X".repeat(60);
        let warnings = apply(&mut template, "CTN", &result_of(&[("Wow", &long)]));

        assert_eq!(
            warnings,
            vec![LimitWarning { column: "CTN".to_string(), field_name: "Wow".to_string(), limit: 50 }]
        );
        let row = template.row_index("Wow").unwrap();
        assert_eq!(template.cell(row, 0), "X".repeat(50));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let mut template = Template::builtin();
        let value = "é".repeat(60);
        let warnings = apply(&mut template, "CTN", &result_of(&[("Wow", &value)]));
        assert_eq!(warnings.len(), 1);
        let row = template.row_index("Wow").unwrap();
        assert_eq!(template.cell(row, 0).chars().count(), 50);
    }

    #[test]
    fn absent_or_empty_fields_leave_cells_unchanged() {
        let mut template = Template::builtin();
        template.set_field("CTN", "Subwow", "Existing copy");
        let warnings = apply(&mut template, "CTN", &result_of(&[("Wow", "New"), ("Subwow", "")]));
        assert!(warnings.is_empty());
        let row = template.row_index("Subwow").unwrap();
        assert_eq!(template.cell(row, 0), "Existing copy");
    }

    #[test]
    fn unlimited_rows_are_never_truncated() {
        let mut template = Template::builtin();
        let long = "A".repeat(5000);
        let warnings = apply(&mut template, "CTN", &result_of(&[("Pack Contents", &long)]));
        assert!(warnings.is_empty());
        let row = template.row_index("Pack Contents").unwrap();
        assert_eq!(template.cell(row, 0).len(), 5000);
    }

    #[test]
    fn reapplying_the_same_result_is_idempotent() {
        let mut template = Template::builtin();
        let result = result_of(&[("Wow", &"X".repeat(60)), ("Subwow", "Short")]);

        apply(&mut template, "CTN", &result);
        let snapshot: Vec<String> =
            template.columns()[0].cells.iter().cloned().collect();

        let warnings = apply(&mut template, "CTN", &result);
        assert_eq!(template.columns()[0].cells, snapshot);
        // The warning is re-emitted per batch, not deduplicated.
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn field_match_is_exact_after_trimming() {
        let mut template = Template::builtin();
        apply(&mut template, "CTN", &result_of(&[("wow", "lowercase key")]));
        let row = template.row_index("Wow").unwrap();
        assert_eq!(template.cell(row, 0), "");
    }
}
