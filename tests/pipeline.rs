//! Library-level pipeline tests with a scripted completion client.

use assetgen::app::{AppContext, commands::generate};
use assetgen::ports::ScriptedCompletionClient;
use assetgen::{GenerateOptions, GeneratorConfig, ModelKind, ParseOrigin};

fn context(responses: &[&str]) -> AppContext<ScriptedCompletionClient> {
    let client = ScriptedCompletionClient::new(responses.iter().map(|r| r.to_string()).collect());
    AppContext::new(client, GeneratorConfig::default())
}

#[test]
fn fills_default_template_from_structured_response() {
    let ctx = context(&[r#"{"Wow": "Sparkling clean in seconds", "Subwow": "Effortless"}"#]);
    let options = GenerateOptions { targets: vec!["1234567890".to_string()], ..Default::default() };

    let report = generate::execute(&ctx, &options).unwrap();

    assert_eq!(report.columns_filled, ["1234567890"]);
    assert!(report.warnings.is_empty());
    assert!(report.skipped.is_empty());

    let template = &report.template;
    let wow = template.row_index("Wow").unwrap();
    assert_eq!(template.cell(wow, 0), "Sparkling clean in seconds");
}

#[test]
fn truncates_over_limit_values_and_reports_one_warning() {
    let long = "X".repeat(60);
    let response = format!(r#"{{"Wow": "{long}"}}"#);
    let ctx = context(&[&response]);
    let options = GenerateOptions { targets: vec!["A1".to_string()], ..Default::default() };

    let report = generate::execute(&ctx, &options).unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].field_name, "Wow");
    assert_eq!(report.warnings[0].limit, 50);

    let wow = report.template.row_index("Wow").unwrap();
    assert_eq!(report.template.cell(wow, 0), "X".repeat(50));
}

#[test]
fn pattern_extracted_response_fills_fields() {
    let ctx = context(&["**Wow:** Great product\n**Subwow:** Even better"]);
    let options = GenerateOptions { targets: vec!["A1".to_string()], ..Default::default() };

    let report = generate::execute(&ctx, &options).unwrap();

    let template = &report.template;
    let wow = template.row_index("Wow").unwrap();
    let subwow = template.row_index("Subwow").unwrap();
    assert_eq!(template.cell(wow, 0), "Great product");
    assert_eq!(template.cell(subwow, 0), "Even better");

    // The parser itself tags the fallback strategy.
    let parsed = assetgen::GenerationResult::parse("**Wow:** Great product").unwrap();
    assert_eq!(parsed.origin, ParseOrigin::PatternExtracted);
}

#[test]
fn batch_failure_is_contained_to_its_own_column() {
    // First target gets an unparseable response, second succeeds.
    let ctx = context(&["I refuse to answer in JSON.", r#"{"Wow": "Second target works"}"#]);
    let options = GenerateOptions {
        targets: vec!["AAA".to_string(), "BBB".to_string()],
        ..Default::default()
    };

    let report = generate::execute(&ctx, &options).unwrap();

    assert_eq!(report.columns_filled, ["BBB"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].0, "AAA");

    let template = &report.template;
    let wow = template.row_index("Wow").unwrap();
    // Failed column keeps its empty cell; successful column is filled.
    assert_eq!(template.cell(wow, 0), "");
    assert_eq!(template.cell(wow, 1), "Second target works");
}

#[test]
fn variations_create_one_column_per_candidate() {
    let ctx = context(&[r#"{"Wow": "First take"}"#, r#"{"Wow": "Second take"}"#]);
    let options = GenerateOptions {
        targets: vec!["A1".to_string()],
        variations: 2,
        ..Default::default()
    };

    let report = generate::execute(&ctx, &options).unwrap();

    assert_eq!(report.columns_filled, ["A1_v1", "A1_v2"]);
    let template = &report.template;
    let wow = template.row_index("Wow").unwrap();
    assert_eq!(template.cell(wow, 0), "First take");
    assert_eq!(template.cell(wow, 1), "Second take");
}

#[test]
fn user_fields_survive_generation() {
    let ctx = context(&[r#"{"Wow": "Generated"}"#]);
    let options = GenerateOptions {
        targets: vec!["A1".to_string()],
        fields: vec![(
            "Functional Description 1".to_string(),
            "Cordless stick vacuum".to_string(),
        )],
        ..Default::default()
    };

    let report = generate::execute(&ctx, &options).unwrap();

    let template = &report.template;
    let fd = template.row_index("Functional Description 1").unwrap();
    assert_eq!(template.cell(fd, 0), "Cordless stick vacuum");
}

#[test]
fn model_kind_standard_is_the_default() {
    let options = GenerateOptions::default();
    assert_eq!(options.model, ModelKind::Standard);
}
