//! The generation pipeline: normalize → extract → prompt → complete →
//! reconcile → export.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    AppError, ContentType, ContextSnippets, GenerationRequest, GenerationResult, LimitWarning,
    ModelKind, Template, prompt, reconcile,
};
use crate::ports::{CompletionClient, CompletionRequest};
use crate::services::{ClaimsList, extract_pdf_text, read_grid, write_csv, write_xlsx};

/// Options for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Asset template spreadsheet; the built-in template is used when absent.
    pub template_path: Option<PathBuf>,
    /// Brand guidelines PDF.
    pub branding_pdf: Option<PathBuf>,
    /// Product details PDF.
    pub product_pdf: Option<PathBuf>,
    /// Approved claims list CSV.
    pub claims_csv: Option<PathBuf>,
    /// Target identifiers (CTNs); one output column per target/variation.
    pub targets: Vec<String>,
    /// Candidate copies to generate per target.
    pub variations: u32,
    /// Model selection.
    pub model: ModelKind,
    /// Free-text context appended to the system prompt.
    pub notes: Option<String>,
    /// User-entered (field name, value) pairs, e.g. functional descriptions.
    pub fields: Vec<(String, String)>,
    /// CSV export path.
    pub out_csv: Option<PathBuf>,
    /// XLSX export path.
    pub out_xlsx: Option<PathBuf>,
}

/// Outcome of one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// The filled template as exported.
    pub template: Template,
    /// Output columns that received generated content.
    pub columns_filled: Vec<String>,
    /// (column, error) pairs for requests that failed and were skipped.
    pub skipped: Vec<(String, String)>,
    /// Truncation warnings accumulated over the whole batch.
    pub warnings: Vec<LimitWarning>,
    /// Reference sources that could not be read.
    pub extraction_failures: Vec<String>,
}

/// Run the pipeline. Only configuration errors (bad template, bad options)
/// abort the run; extraction and generation failures are contained to their
/// unit of work.
pub fn execute<C: CompletionClient>(
    ctx: &AppContext<C>,
    options: &GenerateOptions,
) -> Result<GenerateReport, AppError> {
    let mut template = match &options.template_path {
        Some(path) => Template::from_grid(read_grid(path)?)?,
        None => Template::builtin(),
    };

    let mut extraction_failures = Vec::new();
    let mut extract = |path: &Option<PathBuf>| -> String {
        match path {
            Some(path) => match extract_pdf_text(path) {
                Ok(text) => text,
                Err(err) => {
                    eprintln!("⚠ {err}");
                    extraction_failures.push(err.to_string());
                    String::new()
                }
            },
            None => String::new(),
        }
    };
    let branding = extract(&options.branding_pdf);
    let product = extract(&options.product_pdf);

    let claims = match &options.claims_csv {
        Some(path) => match ClaimsList::from_csv_path(path) {
            Ok(claims) => Some(claims),
            Err(err) => {
                eprintln!("⚠ {err}");
                extraction_failures.push(err.to_string());
                None
            }
        },
        None => None,
    };

    let context = ContextSnippets {
        branding,
        product,
        claims: claims.as_ref().map(|c| c.context_snippet()).unwrap_or_default(),
        user_notes: options.notes.clone().unwrap_or_default(),
    };

    let functional: Vec<(String, String)> = options
        .fields
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .cloned()
        .collect();

    let labels = column_labels(&options.targets, options.variations);
    for (_, _, label) in &labels {
        fill_fixed_fields(&mut template, label, &functional, claims.as_ref());
    }

    let model = options.model.resolve(ctx.config());
    let limits = &ctx.config().limits;

    let mut columns_filled = Vec::new();
    let mut skipped = Vec::new();
    let mut warnings = Vec::new();

    // Requests run strictly sequentially; a failure in one is recorded and
    // iteration continues with the next.
    for (target, variation, label) in &labels {
        let request = GenerationRequest::from_template(
            &template,
            target.clone(),
            *variation,
            context.clone(),
            functional.clone(),
        );

        let completion = CompletionRequest {
            system: prompt::build_system_prompt(&request, limits.max_snippet_chars)?,
            user: prompt::build_user_prompt(&request, limits.default_limit_display),
            model: model.clone(),
        };

        let outcome = ctx
            .client()
            .complete(&completion)
            .and_then(|raw| GenerationResult::parse(&raw));

        match outcome {
            Ok(result) => {
                warnings.extend(reconcile::apply(&mut template, label, &result));
                columns_filled.push(label.clone());
            }
            Err(err) => {
                eprintln!("⚠ Column '{label}' skipped: {err}");
                skipped.push((label.clone(), err.to_string()));
            }
        }
    }

    if let Some(path) = &options.out_csv {
        write_csv(&template, path)?;
    }
    if let Some(path) = &options.out_xlsx {
        write_xlsx(&template, path)?;
    }

    Ok(GenerateReport { template, columns_filled, skipped, warnings, extraction_failures })
}

/// One (target, variation, column label) triple per request. A single
/// variation keeps the bare target as label; multiple variations get a
/// `_vN` suffix. No targets at all falls back to a lone `CTN` column.
fn column_labels(targets: &[String], variations: u32) -> Vec<(String, Option<u32>, String)> {
    let targets: Vec<String> = if targets.is_empty() {
        vec!["CTN".to_string()]
    } else {
        targets.iter().map(|t| t.trim().to_string()).filter(|t| !t.is_empty()).collect()
    };
    let variations = variations.max(1);

    let mut labels = Vec::new();
    for target in &targets {
        if variations == 1 {
            labels.push((target.clone(), None, target.clone()));
        } else {
            for v in 1..=variations {
                labels.push((target.clone(), Some(v), format!("{target}_v{v}")));
            }
        }
    }
    labels
}

/// Fill user-entered fields and claims pass-through rows into a column
/// before generation runs.
fn fill_fixed_fields(
    template: &mut Template,
    label: &str,
    functional: &[(String, String)],
    claims: Option<&ClaimsList>,
) {
    template.ensure_column(label);
    for (field, value) in functional {
        template.set_field(label, field, value.clone());
    }

    if let Some(claims) = claims {
        let pass_through: Vec<(usize, String)> = template
            .rows()
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| match row.content_type {
                ContentType::PackContents => Some((idx, claims.pack_contents())),
                ContentType::Disclaimer => Some((idx, claims.disclaimer())),
                _ => None,
            })
            .collect();
        let column = template.ensure_column(label);
        for (row, value) in pass_through {
            template.set_cell(row, column, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_variation_uses_bare_target_labels() {
        let labels = column_labels(&["1234567890".to_string()], 1);
        assert_eq!(labels, vec![("1234567890".to_string(), None, "1234567890".to_string())]);
    }

    #[test]
    fn multiple_variations_get_suffixed_labels() {
        let labels = column_labels(&["A1".to_string()], 3);
        let names: Vec<&str> = labels.iter().map(|(_, _, l)| l.as_str()).collect();
        assert_eq!(names, ["A1_v1", "A1_v2", "A1_v3"]);
        assert_eq!(labels[1].1, Some(2));
    }

    #[test]
    fn no_targets_falls_back_to_ctn() {
        let labels = column_labels(&[], 1);
        assert_eq!(labels[0].2, "CTN");
    }

    #[test]
    fn zero_variations_still_issues_one_request() {
        assert_eq!(column_labels(&["A1".to_string()], 0).len(), 1);
    }
}
