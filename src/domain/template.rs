//! Canonical asset template model and spreadsheet normalization.
//!
//! A template is an ordered set of field rows (name, content type, char-limit
//! spec) plus zero or more output columns, one per target identifier. It is
//! built either from an uploaded spreadsheet grid or from the built-in
//! default row set, then mutated in place as columns are added and filled.

use crate::domain::char_limit::parse_char_limit;
use crate::domain::content_type::ContentType;
use crate::domain::error::AppError;

/// Required column labels, matched case-insensitively after trimming.
const REQUIRED_COLUMNS: [&str; 3] = ["field name", "content type", "char count"];

/// One field row of the template.
#[derive(Debug, Clone)]
pub struct TemplateRow {
    /// Unique join key used to reconcile generated content back into the row.
    pub field_name: String,
    pub content_type: ContentType,
    /// Verbatim limit spec from the "Char Count" column (e.g. `"<50"`, `"—"`).
    pub limit_spec: String,
}

impl TemplateRow {
    pub fn new(
        field_name: impl Into<String>,
        content_type: ContentType,
        limit_spec: impl Into<String>,
    ) -> Self {
        Self { field_name: field_name.into(), content_type, limit_spec: limit_spec.into() }
    }

    /// Parsed integer limit, `None` when the spec carries no digits.
    pub fn char_limit(&self) -> Option<u32> {
        parse_char_limit(&self.limit_spec)
    }
}

/// One output column (one target identifier or target/variation pair).
#[derive(Debug, Clone)]
pub struct OutputColumn {
    pub label: String,
    /// One cell per template row, in row order. Never missing: empty string
    /// stands in for an unfilled cell.
    pub cells: Vec<String>,
}

/// Ordered template rows plus output columns.
#[derive(Debug, Clone)]
pub struct Template {
    rows: Vec<TemplateRow>,
    columns: Vec<OutputColumn>,
}

impl Template {
    /// Build a template from validated rows. Fails when a field name is
    /// empty or duplicated, since field names are the reconciliation keys.
    pub fn new(rows: Vec<TemplateRow>) -> Result<Self, AppError> {
        validate_rows(&rows)?;
        Ok(Self { rows, columns: Vec::new() })
    }

    /// Built-in template used when no spreadsheet is uploaded: two
    /// functional descriptions, a headline/marketing group, three feature
    /// groups, and pack contents / disclaimer rows.
    pub fn builtin() -> Self {
        let mut rows = Vec::new();
        for i in 1..=2 {
            rows.push(TemplateRow::new(
                format!("Functional Description {i}"),
                ContentType::FunctionalDescription,
                "—",
            ));
        }
        rows.push(TemplateRow::new("Wow", ContentType::Headline, "<50"));
        rows.push(TemplateRow::new("Subwow", ContentType::Headline, "<100"));
        rows.push(TemplateRow::new("Marketing Text", ContentType::MarketingText, "<200"));
        for idx in 1..=3 {
            rows.push(TemplateRow::new(format!("Feature {idx} Name"), ContentType::FeatureName, "—"));
            rows.push(TemplateRow::new(
                format!("Feature {idx} Description"),
                ContentType::FeatureDescription,
                "<100",
            ));
            rows.push(TemplateRow::new(
                format!("Feature {idx} Glossary"),
                ContentType::FeatureGlossary,
                "<300",
            ));
        }
        rows.push(TemplateRow::new("Pack Contents", ContentType::PackContents, "—"));
        rows.push(TemplateRow::new("Disclaimer", ContentType::Disclaimer, "—"));

        // The built-in row set is valid by construction.
        Self { rows, columns: Vec::new() }
    }

    /// Normalize a raw spreadsheet grid into a template.
    ///
    /// Drops fully-empty rows and columns, detects a header row embedded as
    /// data ("Field Name" + "Content Type" on the first data row), locates
    /// the three required columns case-insensitively, and preserves any
    /// extra columns as pre-existing output columns.
    pub fn from_grid(grid: Vec<Vec<String>>) -> Result<Self, AppError> {
        let grid = drop_empty_rows_and_columns(grid);
        let mut iter = grid.into_iter();

        let Some(mut labels) = iter.next() else {
            return Err(AppError::config_error(
                "Template is empty after dropping blank rows and columns",
            ));
        };
        let mut data: Vec<Vec<String>> = iter.collect();

        // The uploaded sheet sometimes carries its header as the first data
        // row; promote it when both marker labels are present.
        if let Some(first) = data.first() {
            let trimmed: Vec<&str> = first.iter().map(|c| c.trim()).collect();
            if trimmed.contains(&"Field Name") && trimmed.contains(&"Content Type") {
                labels = data.remove(0);
            }
        }

        let labels: Vec<String> = labels.iter().map(|l| l.trim().to_string()).collect();

        let mut required_idx = [None; 3];
        for (i, label) in labels.iter().enumerate() {
            let lower = label.to_lowercase();
            if let Some(slot) = REQUIRED_COLUMNS.iter().position(|r| *r == lower) {
                required_idx[slot].get_or_insert(i);
            }
        }
        let [Some(field_idx), Some(type_idx), Some(limit_idx)] = required_idx else {
            return Err(AppError::config_error(
                "Missing required columns: Field Name, Content Type, Char Count",
            ));
        };

        let cell = |row: &[String], idx: usize| -> String {
            row.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
        };

        let rows: Vec<TemplateRow> = data
            .iter()
            .map(|row| {
                TemplateRow::new(
                    cell(row, field_idx),
                    ContentType::from_label(&cell(row, type_idx)),
                    cell(row, limit_idx),
                )
            })
            .collect();
        validate_rows(&rows)?;

        // Remaining labelled columns carry already-filled values and survive
        // as output columns in their original order.
        let mut columns = Vec::new();
        for (i, label) in labels.iter().enumerate() {
            if i == field_idx || i == type_idx || i == limit_idx || label.is_empty() {
                continue;
            }
            let cells = data.iter().map(|row| cell(row, i)).collect();
            columns.push(OutputColumn { label: label.clone(), cells });
        }

        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> &[TemplateRow] {
        &self.rows
    }

    pub fn columns(&self) -> &[OutputColumn] {
        &self.columns
    }

    /// Index of the row whose trimmed field name matches exactly.
    pub fn row_index(&self, field_name: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.field_name.trim() == field_name.trim())
    }

    /// Index of the output column with the given label, adding an empty
    /// column when absent. Columns are never removed once added.
    pub fn ensure_column(&mut self, label: &str) -> usize {
        if let Some(idx) = self.columns.iter().position(|c| c.label == label) {
            return idx;
        }
        self.columns
            .push(OutputColumn { label: label.to_string(), cells: vec![String::new(); self.rows.len()] });
        self.columns.len() - 1
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        &self.columns[column].cells[row]
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) {
        self.columns[column].cells[row] = value.into();
    }

    /// Write a value into the named column for the named field, if that
    /// field exists. Convenience for filling fixed rows.
    pub fn set_field(&mut self, column_label: &str, field_name: &str, value: impl Into<String>) {
        if let Some(row) = self.row_index(field_name) {
            let col = self.ensure_column(column_label);
            self.set_cell(row, col, value);
        }
    }
}

fn validate_rows(rows: &[TemplateRow]) -> Result<(), AppError> {
    let mut seen = std::collections::HashSet::new();
    for row in rows {
        let name = row.field_name.trim();
        if name.is_empty() {
            return Err(AppError::config_error("Template contains a row with an empty field name"));
        }
        if !seen.insert(name) {
            return Err(AppError::config_error(format!("Duplicate field name '{name}' in template")));
        }
    }
    Ok(())
}

fn drop_empty_rows_and_columns(grid: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let rows: Vec<Vec<String>> =
        grid.into_iter().filter(|row| row.iter().any(|c| !c.trim().is_empty())).collect();

    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let keep: Vec<bool> = (0..width)
        .map(|i| rows.iter().any(|r| r.get(i).is_some_and(|c| !c.trim().is_empty())))
        .collect();

    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .filter(|(i, _)| keep[*i])
                .map(|(_, c)| c)
                .collect()
        })
        .collect()
}
