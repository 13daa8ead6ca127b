//! Spreadsheet reading: first sheet of an uploaded workbook as a raw grid.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::domain::AppError;

/// Read the first sheet of a workbook into a grid of cell strings.
///
/// Numeric cells are formatted without a trailing `.0` so char-count cells
/// like `50` parse the same whether typed as text or number. Empty cells
/// become empty strings. A file that cannot be opened is a configuration
/// error: the template is the one input the pipeline cannot continue
/// without.
pub fn read_grid(path: &Path) -> Result<Vec<Vec<String>>, AppError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AppError::config_error(format!("Error loading template {}: {e}", path.display())))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            AppError::config_error(format!("Template {} has no sheets", path.display()))
        })?
        .map_err(|e| AppError::config_error(format!("Error reading template sheet: {e}")))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
