//! Adapters touching the outside world: file formats and the completion
//! endpoint.

pub mod claims;
pub mod export;
pub mod openai_http;
pub mod pdf_text;
pub mod workbook;

pub use claims::ClaimsList;
pub use export::{write_csv, write_xlsx};
pub use openai_http::HttpCompletionClient;
pub use pdf_text::extract_pdf_text;
pub use workbook::read_grid;
