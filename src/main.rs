//! aegis-report: IT maturity audit report generator
//!
//! Reads a client assessment JSON file and renders three radar charts plus
//! a paginated PDF under `output/<client-slug>/`.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aegis_report::loader::ScorePolicy;
use aegis_report::pipeline::{self, exit_code_for, PipelineConfig, DEFAULT_INPUT_PATH};
use aegis_report::paths::DEFAULT_OUTPUT_ROOT;

#[derive(Parser)]
#[command(name = "aegis-report")]
#[command(version)]
#[command(about = "IT maturity audit report generator", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Report generated
    1  Malformed input data (message names the offending field)
    2  Filesystem or rendering failure
    3  Other error

EXAMPLES:
    # Zero-configuration demo run (absent input file uses safe defaults)
    aegis-report

    # Generate from a specific client file
    aegis-report --input clients/acme.json

    # Accept messy demo data, coercing invalid scores to 0
    aegis-report --input demo.json --lenient-scores")]
struct Cli {
    /// Path to the client data JSON (absent file is a supported,
    /// defaulted state)
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Root directory for generated artifacts
    #[arg(short, long, default_value = DEFAULT_OUTPUT_ROOT)]
    output_root: PathBuf,

    /// Alternate taxonomy table (JSON)
    #[arg(long, env = "AEGIS_TAXONOMY")]
    taxonomy: Option<PathBuf>,

    /// Coerce non-integer scores to 0 instead of rejecting them
    #[arg(long)]
    lenient_scores: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = PipelineConfig {
        input: cli.input,
        output_root: cli.output_root,
        taxonomy_file: cli.taxonomy,
        score_policy: if cli.lenient_scores {
            ScorePolicy::Lenient
        } else {
            ScorePolicy::Strict
        },
    };

    match pipeline::run(&config) {
        Ok(outcome) => {
            if !cli.quiet {
                println!("Generated: {}", outcome.report_path.display());
                println!(
                    "Outputs saved in: {}/ ({} artifacts)",
                    outcome
                        .report_path
                        .parent()
                        .unwrap_or_else(|| std::path::Path::new("."))
                        .display(),
                    outcome.artifact_count
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::from(exit_code_for(&err) as u8)
        }
    }
}
