//! **IT maturity audit report generator.**
//!
//! `aegis-report` turns a per-client JSON file of maturity scores into a
//! fixed-layout audit report: three radar charts (Operations, Users,
//! Devices) plus a paginated PDF with an executive summary and findings
//! table, written under a slug-scoped output directory.
//!
//! The interesting part of the crate is the validation and defaulting
//! pipeline, not the drawing code. Client JSON is arbitrary and partial;
//! the [`loader`] turns it into a canonical [`ReportModel`] with every
//! taxonomy slot filled, clamped scores, and a deliberate two-state
//! policy: an absent input file falls back to safe defaults, while a
//! malformed file fails hard with the offending field path.
//!
//! ## Modules
//!
//! - [`taxonomy`]: the canonical category/subcategory table, an explicit
//!   config value passed into the loader and aggregator.
//! - [`loader`]: JSON validation and defaulting into a [`ReportModel`].
//! - [`aggregate`]: derives per-category axis vectors in canonical order
//!   so radar axes stay comparable across clients.
//! - [`summary`]: mean scores and the five-level maturity ladder.
//! - [`slug`] / [`paths`]: deterministic output path resolution.
//! - [`render`]: chart rasters and PDF assembly.
//! - [`pipeline`]: one-client run-to-completion orchestration.
//!
//! ## Example
//!
//! ```no_run
//! use aegis_report::pipeline::{run, PipelineConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let outcome = run(&PipelineConfig::default())?;
//!     println!("report written to {}", outcome.report_path.display());
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Chart geometry casts between u32/i64/f64 are bounded by the raster size
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod model;
pub mod paths;
pub mod pipeline;
pub mod render;
pub mod slug;
pub mod summary;
pub mod taxonomy;

// Re-export main types for convenience
pub use aggregate::{aggregate, Axis, CategoryVector, CategoryVectors};
pub use error::{DataFormatKind, ReportError, Result};
pub use loader::{load, ScorePolicy};
pub use model::{Finding, ReportModel, Score};
pub use paths::{OutputLayout, REPORT_FILE_NAME};
pub use pipeline::{run, PipelineConfig, RunOutcome};
pub use slug::slugify;
pub use summary::{summarize, MaturityLevel, ReportSummary};
pub use taxonomy::{Category, Taxonomy};
