use std::path::PathBuf;

use assetgen::{AppError, GenerateOptions, ModelKind, TemplateOptions};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "assetgen")]
#[command(version)]
#[command(
    about = "Fill marketing asset templates with AI-generated copy",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the generation pipeline and export the filled template
    #[clap(visible_alias = "g")]
    Generate {
        /// Asset template spreadsheet (XLSX/XLSM); built-in template when omitted
        #[arg(long)]
        template: Option<PathBuf>,
        /// Brand guidelines PDF
        #[arg(long)]
        branding: Option<PathBuf>,
        /// Product details PDF
        #[arg(long)]
        product: Option<PathBuf>,
        /// Approved claims list CSV
        #[arg(long)]
        claims: Option<PathBuf>,
        /// Target identifier (repeatable), e.g. 1234567890
        #[arg(long = "ctn")]
        ctns: Vec<String>,
        /// Candidate copies per target
        #[arg(long, default_value_t = 1)]
        variations: u32,
        /// Model selection: standard or fine-tuned
        #[arg(long, default_value = "standard")]
        model: String,
        /// Free-text context for the system prompt
        #[arg(long)]
        notes: Option<String>,
        /// Pre-filled field value as NAME=VALUE (repeatable)
        #[arg(long = "field")]
        fields: Vec<String>,
        /// CSV export path
        #[arg(long)]
        out_csv: Option<PathBuf>,
        /// XLSX export path
        #[arg(long)]
        out_xlsx: Option<PathBuf>,
        /// Config file path (defaults to ./assetgen.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// JSON array of scripted responses instead of calling the API
        #[arg(long)]
        mock: Option<PathBuf>,
    },
    /// Write the built-in default template
    #[clap(visible_alias = "tp")]
    Template {
        /// CSV output path
        #[arg(long)]
        out_csv: Option<PathBuf>,
        /// XLSX output path
        #[arg(long)]
        out_xlsx: Option<PathBuf>,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate {
            template,
            branding,
            product,
            claims,
            ctns,
            variations,
            model,
            notes,
            fields,
            out_csv,
            out_xlsx,
            config,
            mock,
        } => run_generate(
            template, branding, product, claims, ctns, variations, &model, notes, fields, out_csv,
            out_xlsx, config, mock,
        ),
        Commands::Template { out_csv, out_xlsx } => {
            assetgen::template(TemplateOptions { out_csv, out_xlsx })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_generate(
    template: Option<PathBuf>,
    branding: Option<PathBuf>,
    product: Option<PathBuf>,
    claims: Option<PathBuf>,
    ctns: Vec<String>,
    variations: u32,
    model: &str,
    notes: Option<String>,
    fields: Vec<String>,
    out_csv: Option<PathBuf>,
    out_xlsx: Option<PathBuf>,
    config: Option<PathBuf>,
    mock: Option<PathBuf>,
) -> Result<(), AppError> {
    let options = GenerateOptions {
        template_path: template,
        branding_pdf: branding,
        product_pdf: product,
        claims_csv: claims,
        targets: ctns,
        variations,
        model: ModelKind::parse(model)?,
        notes,
        fields: parse_field_args(&fields)?,
        out_csv,
        out_xlsx,
    };

    assetgen::generate(options, config.as_deref(), mock.as_deref()).map(|_| ())
}

/// Split repeated `--field NAME=VALUE` arguments.
fn parse_field_args(fields: &[String]) -> Result<Vec<(String, String)>, AppError> {
    fields
        .iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(name, value)| (name.trim().to_string(), value.to_string()))
                .ok_or_else(|| {
                    AppError::config_error(format!("Invalid --field '{arg}': expected NAME=VALUE"))
                })
        })
        .collect()
}
