//! Pure domain types and logic: template model, limit parsing, prompt
//! construction, response parsing, and reconciliation.

pub mod char_limit;
pub mod config;
pub mod content_type;
pub mod error;
pub mod generation;
pub mod prompt;
pub mod reconcile;
pub mod template;

pub use char_limit::parse_char_limit;
pub use config::{ApiConfig, GeneratorConfig, LimitConfig, ModelKind};
pub use content_type::ContentType;
pub use error::AppError;
pub use generation::{ContextSnippets, GenerationRequest, GenerationResult, ParseOrigin};
pub use reconcile::LimitWarning;
pub use template::{OutputColumn, Template, TemplateRow};
