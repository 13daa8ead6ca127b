//! PDF text extraction for reference documents.

use std::path::Path;

use lopdf::Document;

use crate::domain::AppError;

/// Extract plain text from a PDF, page by page, joined with newlines.
///
/// Extraction is best-effort per page: a page that yields no text
/// contributes an empty string rather than failing the whole document.
/// Only a document that cannot be opened at all is an extraction error.
pub fn extract_pdf_text(path: &Path) -> Result<String, AppError> {
    let doc = Document::load(path)
        .map_err(|e| AppError::extraction(path.display().to_string(), e.to_string()))?;

    let pages: Vec<String> = doc
        .get_pages()
        .keys()
        .map(|page| doc.extract_text(&[*page]).unwrap_or_default())
        .collect();

    Ok(pages.join("\n"))
}
