//! Pipeline orchestration for report generation.
//!
//! One run processes one client: load → aggregate → summarize → resolve
//! output paths → render. Validation completes before any filesystem write
//! under the output root, so malformed input never produces partial
//! artifacts.

use std::path::PathBuf;

use crate::aggregate::aggregate;
use crate::error::{ReportError, Result};
use crate::loader::{load, ScorePolicy};
use crate::paths::{OutputLayout, DEFAULT_OUTPUT_ROOT};
use crate::render::render_report;
use crate::slug::slugify;
use crate::summary::summarize;
use crate::taxonomy::Taxonomy;

/// Default client data file, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data/client_data.json";

/// Everything one pipeline run needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Client data file; an absent file is a supported defaulted state.
    pub input: PathBuf,
    /// Root under which the slug-scoped output directory is created.
    pub output_root: PathBuf,
    /// Optional alternate taxonomy table.
    pub taxonomy_file: Option<PathBuf>,
    /// Score validation policy.
    pub score_policy: ScorePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            taxonomy_file: None,
            score_policy: ScorePolicy::Strict,
        }
    }
}

/// Artifacts produced by a successful run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub client_name: String,
    pub slug: String,
    pub report_path: PathBuf,
    pub artifact_count: usize,
}

/// Execute one report generation run.
pub fn run(config: &PipelineConfig) -> Result<RunOutcome> {
    let taxonomy = match &config.taxonomy_file {
        Some(path) => Taxonomy::from_file(path)?,
        None => Taxonomy::default(),
    };

    let model = load(&config.input, &taxonomy, config.score_policy)?;
    let vectors = aggregate(&model, &taxonomy);
    let summary = summarize(&vectors);

    let slug = slugify(&model.client_name);
    let layout = OutputLayout::resolve(&config.output_root, &slug)?;
    tracing::info!(
        client = %model.client_name,
        slug = %slug,
        dir = %layout.dir().display(),
        "rendering report"
    );

    let artifact_count = render_report(&model, &vectors, &summary, &layout)?;

    Ok(RunOutcome {
        client_name: model.client_name,
        slug,
        report_path: layout.report_path(),
        artifact_count,
    })
}

/// Exit codes for CI integration.
pub mod exit_codes {
    /// Report generated
    pub const SUCCESS: i32 = 0;
    /// Malformed input data
    pub const DATA_FORMAT: i32 = 1;
    /// Filesystem or rendering failure
    pub const OUTPUT_WRITE: i32 = 2;
    /// Any other error
    pub const ERROR: i32 = 3;
}

/// Map an error onto the exit code table.
#[must_use]
pub fn exit_code_for(err: &ReportError) -> i32 {
    match err {
        ReportError::DataFormat { .. } => exit_codes::DATA_FORMAT,
        ReportError::OutputWrite { .. } | ReportError::Render { .. } => exit_codes::OUTPUT_WRITE,
        ReportError::InputRead { .. } | ReportError::Config(_) => exit_codes::ERROR,
    }
}
