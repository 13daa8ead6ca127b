//! Emit the built-in default template so users can start from the
//! canonical row structure.

use std::path::PathBuf;

use crate::domain::{AppError, Template};
use crate::services::{write_csv, write_xlsx};

/// Options for the template command.
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub out_csv: Option<PathBuf>,
    pub out_xlsx: Option<PathBuf>,
}

/// Write the built-in template to the requested formats and return the
/// paths written.
pub fn execute(options: &TemplateOptions) -> Result<Vec<PathBuf>, AppError> {
    if options.out_csv.is_none() && options.out_xlsx.is_none() {
        return Err(AppError::config_error(
            "Nothing to write: pass --out-csv and/or --out-xlsx",
        ));
    }

    let template = Template::builtin();
    let mut written = Vec::new();

    if let Some(path) = &options.out_csv {
        write_csv(&template, path)?;
        written.push(path.clone());
    }
    if let Some(path) = &options.out_xlsx {
        write_xlsx(&template, path)?;
        written.push(path.clone());
    }

    Ok(written)
}
