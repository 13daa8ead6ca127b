//! Approved-claims list loading.
//!
//! The claims CSV carries pre-approved marketing statements plus two
//! pass-through columns, "Pack Contents" and "Disclaimer", whose values are
//! copied verbatim into the matching template rows instead of being fed to
//! the generation context.

use std::path::Path;

use crate::domain::AppError;

/// Columns copied into template rows rather than into the prompt context.
const PASS_THROUGH_COLUMNS: [&str; 2] = ["Pack Contents", "Disclaimer"];

/// Parsed approved-claims list.
#[derive(Debug, Clone, Default)]
pub struct ClaimsList {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ClaimsList {
    /// Read a claims CSV. A file that cannot be read is an extraction
    /// error, which the pipeline contains to this one source.
    pub fn from_csv_path(path: &Path) -> Result<Self, AppError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| AppError::extraction(path.display().to_string(), e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| AppError::extraction(path.display().to_string(), e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| AppError::extraction(path.display().to_string(), e.to_string()))?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(Self { headers, rows })
    }

    fn column_values(&self, column: &str) -> Vec<&str> {
        let Some(idx) = self.headers.iter().position(|h| h == column) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|row| row.get(idx))
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Unique pack-contents values in first-seen order, comma-separated.
    pub fn pack_contents(&self) -> String {
        let mut seen = Vec::new();
        for value in self.column_values("Pack Contents") {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen.join(", ")
    }

    /// All disclaimer values, newline-separated.
    pub fn disclaimer(&self) -> String {
        self.column_values("Disclaimer").join("\n")
    }

    /// Claims text fed to the generation context: every column except the
    /// pass-through ones, space-joined per row, rows joined with newlines.
    pub fn context_snippet(&self) -> String {
        let claim_columns: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !PASS_THROUGH_COLUMNS.contains(&h.as_str()))
            .map(|(i, _)| i)
            .collect();

        self.rows
            .iter()
            .map(|row| {
                claim_columns
                    .iter()
                    .filter_map(|&i| row.get(i))
                    .map(|c| c.trim())
                    .filter(|c| !c.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
