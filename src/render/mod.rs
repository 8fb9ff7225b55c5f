//! Report rendering: radar chart rasters plus the paginated PDF.
//!
//! Rendering runs strictly after validation, so a failed run never leaves
//! a partially written artifact set for a previously valid slug. Artifacts
//! are written under fixed names and overwritten in place on reruns.

pub mod chart;
pub mod pdf;

pub use chart::{encode_png, render_radar, CHART_SIZE_PX};
pub use pdf::{write_report, REPORT_TITLE};

use crate::aggregate::{CategoryVector, CategoryVectors};
use crate::error::{ReportError, Result};
use crate::model::ReportModel;
use crate::paths::OutputLayout;
use crate::summary::ReportSummary;

/// Render all four artifacts into the resolved output layout.
///
/// Produces one radar PNG per category and the multi-page PDF embedding
/// them. Returns the number of artifacts written.
pub fn render_report(
    model: &ReportModel,
    vectors: &CategoryVectors,
    summary: &ReportSummary,
    layout: &OutputLayout,
) -> Result<usize> {
    let [operations, users, devices] = vectors.iter();
    let chart_pngs = [
        write_chart(operations, layout)?,
        write_chart(users, layout)?,
        write_chart(devices, layout)?,
    ];

    let report_path = layout.report_path();
    write_report(model, vectors, summary, &chart_pngs, &report_path)?;
    tracing::info!(path = %report_path.display(), "report written");

    Ok(4)
}

/// Render one category chart and write it under its fixed file name.
fn write_chart(vector: &CategoryVector, layout: &OutputLayout) -> Result<Vec<u8>> {
    let png = encode_png(&render_radar(vector))?;
    let path = layout.chart_path(vector.category);
    std::fs::write(&path, &png).map_err(|source| ReportError::output_write(&path, source))?;
    tracing::debug!(path = %path.display(), "chart written");
    Ok(png)
}
