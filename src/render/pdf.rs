//! Paginated PDF assembly.
//!
//! Builds the fixed-layout report document: an executive summary page with
//! the findings table, then one page per category embedding its radar
//! chart plus an axis legend. Uses the PDF builtin Helvetica faces so no
//! font assets need to ship with the binary.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rgb,
};

use crate::aggregate::CategoryVectors;
use crate::error::{ReportError, Result};
use crate::model::ReportModel;
use crate::summary::ReportSummary;

/// Report title shown on every page.
pub const REPORT_TITLE: &str = "IT Systems Audit Snapshot";

// US Letter.
const PAGE_W: f64 = 215.9;
const PAGE_H: f64 = 279.4;
const MARGIN: f64 = 19.0;

// Chart raster is 900 px; embedded at 150 dpi it spans 152.4 mm.
const CHART_DPI: f64 = 150.0;
const CHART_MM: f64 = 152.4;

const TEXT_COLOR: (f64, f64, f64) = (0.06, 0.09, 0.16);
const MUTED_COLOR: (f64, f64, f64) = (0.39, 0.45, 0.55);

/// Findings rows longer than this are truncated with an ellipsis.
const MAX_FINDING_CHARS: usize = 95;

struct Page {
    layer: PdfLayerReference,
    number: u32,
}

/// Write the complete report document to `path`.
///
/// `chart_pngs` must hold one encoded chart per category, in the same
/// order as `vectors.iter()`.
pub fn write_report(
    model: &ReportModel,
    vectors: &CategoryVectors,
    summary: &ReportSummary,
    chart_pngs: &[Vec<u8>; 3],
    path: &Path,
) -> Result<()> {
    let (doc, page_index, layer_index) =
        PdfDocument::new(REPORT_TITLE, Mm(PAGE_W), Mm(PAGE_H), "page 1");
    let regular = builtin_font(&doc, BuiltinFont::Helvetica)?;
    let bold = builtin_font(&doc, BuiltinFont::HelveticaBold)?;

    let mut page = Page {
        layer: doc.get_page(page_index).get_layer(layer_index),
        number: 1,
    };
    decorate_page(&page, model, &regular);

    write_summary_page(&doc, &mut page, model, summary, &regular, &bold)?;

    for (vector, png) in vectors.iter().into_iter().zip(chart_pngs) {
        page = add_page(&doc, page.number + 1, model, &regular);

        set_text_color(&page.layer, TEXT_COLOR);
        page.layer.use_text(
            format!("{} Maturity", vector.category),
            15.0,
            Mm(MARGIN),
            Mm(PAGE_H - 24.0),
            &bold,
        );

        embed_chart(&page.layer, png, vector.category.chart_file_name())?;

        // Axis legend: the raster has no labels, so map spokes to names
        // here. Axis 1 sits at twelve o'clock, numbering runs clockwise.
        let mut y = 96.0;
        set_text_color(&page.layer, MUTED_COLOR);
        page.layer
            .use_text("Axes, clockwise from top:", 10.0, Mm(MARGIN), Mm(y), &regular);
        y -= 7.0;
        set_text_color(&page.layer, TEXT_COLOR);
        for (i, axis) in vector.axes.iter().enumerate() {
            page.layer.use_text(
                format!("{}. {}  -  {}", i + 1, axis.subcategory, axis.score),
                10.0,
                Mm(MARGIN + 4.0),
                Mm(y),
                &regular,
            );
            y -= 6.5;
        }
    }

    let file = File::create(path).map_err(|source| ReportError::output_write(path, source))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|err| ReportError::render(path.display().to_string(), err))
}

fn write_summary_page(
    doc: &PdfDocumentReference,
    page: &mut Page,
    model: &ReportModel,
    summary: &ReportSummary,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) -> Result<()> {
    let layer = &page.layer;

    set_text_color(layer, TEXT_COLOR);
    layer.use_text(REPORT_TITLE, 18.0, Mm(MARGIN), Mm(PAGE_H - 26.0), bold);

    set_text_color(layer, MUTED_COLOR);
    layer.use_text(
        format!(
            "{}  -  Assessment Date: {}",
            model.client_name,
            today_iso()
        ),
        11.0,
        Mm(MARGIN),
        Mm(PAGE_H - 34.0),
        regular,
    );

    set_text_color(layer, TEXT_COLOR);
    layer.use_text("Executive Summary", 13.0, Mm(MARGIN), Mm(PAGE_H - 48.0), bold);
    layer.use_text(
        format!(
            "Overall maturity score: {:.2} / 5.00 ({})",
            summary.overall, summary.overall_level
        ),
        10.5,
        Mm(MARGIN),
        Mm(PAGE_H - 56.0),
        regular,
    );
    let mut y = PAGE_H - 63.0;
    for category in &summary.categories {
        layer.use_text(
            format!(
                "{}: {:.2} / 5.00 ({})",
                category.category, category.mean, category.level
            ),
            10.5,
            Mm(MARGIN + 4.0),
            Mm(y),
            regular,
        );
        y -= 7.0;
    }

    y -= 8.0;
    layer.use_text("Key Findings", 13.0, Mm(MARGIN), Mm(y), bold);
    y -= 8.0;

    if model.findings.is_empty() {
        set_text_color(layer, MUTED_COLOR);
        layer.use_text("No findings recorded.", 10.0, Mm(MARGIN), Mm(y), regular);
        return Ok(());
    }

    let mut layer = layer.clone();
    for finding in &model.findings {
        if y < MARGIN + 8.0 {
            *page = add_page(doc, page.number + 1, model, regular);
            layer = page.layer.clone();
            set_text_color(&layer, TEXT_COLOR);
            layer.use_text("Key Findings (continued)", 13.0, Mm(MARGIN), Mm(PAGE_H - 26.0), bold);
            y = PAGE_H - 36.0;
        }
        set_text_color(&layer, TEXT_COLOR);
        layer.use_text(&finding.label, 9.5, Mm(MARGIN), Mm(y), bold);
        layer.use_text(
            truncate(&finding.description, MAX_FINDING_CHARS),
            9.5,
            Mm(MARGIN + 33.0),
            Mm(y),
            regular,
        );
        y -= 7.0;
    }
    Ok(())
}

/// Add a fresh page with the shared footer decoration.
fn add_page(
    doc: &PdfDocumentReference,
    number: u32,
    model: &ReportModel,
    regular: &IndirectFontRef,
) -> Page {
    let (page_index, layer_index) =
        doc.add_page(Mm(PAGE_W), Mm(PAGE_H), format!("page {number}"));
    let page = Page {
        layer: doc.get_page(page_index).get_layer(layer_index),
        number,
    };
    decorate_page(&page, model, regular);
    page
}

/// Footer rule, report/client line, and page number.
fn decorate_page(page: &Page, model: &ReportModel, regular: &IndirectFontRef) {
    let layer = &page.layer;

    layer.set_outline_color(Color::Rgb(Rgb::new(0.8, 0.84, 0.88, None)));
    layer.set_outline_thickness(0.6);
    layer.add_shape(Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(14.0)), false),
            (Point::new(Mm(PAGE_W - MARGIN), Mm(14.0)), false),
        ],
        is_closed: false,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    });

    set_text_color(layer, MUTED_COLOR);
    layer.use_text(
        format!("{REPORT_TITLE}  -  {}", model.client_name),
        8.5,
        Mm(MARGIN),
        Mm(9.0),
        regular,
    );
    layer.use_text(
        format!("Page {}", page.number),
        8.5,
        Mm(PAGE_W - MARGIN - 14.0),
        Mm(9.0),
        regular,
    );
}

/// Decode and place a chart raster, horizontally centered.
fn embed_chart(layer: &PdfLayerReference, png: &[u8], context: &str) -> Result<()> {
    let decoded = printpdf::image_crate::load_from_memory(png)
        .map_err(|err| ReportError::render(context, err))?;
    Image::from_dynamic_image(&decoded).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm((PAGE_W - CHART_MM) / 2.0)),
            translate_y: Some(Mm(PAGE_H - 32.0 - CHART_MM)),
            dpi: Some(CHART_DPI),
            ..Default::default()
        },
    );
    Ok(())
}

fn builtin_font(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|err| ReportError::render("builtin font", err))
}

fn set_text_color(layer: &PdfLayerReference, (r, g, b): (f64, f64, f64)) {
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Truncate to a character budget with a trailing ellipsis, keeping the
/// output single-line friendly for the findings table.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 95), "short");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        let long = "x".repeat(200);
        let out = truncate(&long, 95);
        assert_eq!(out.chars().count(), 95);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        let text = "é".repeat(100);
        let out = truncate(&text, 10);
        assert_eq!(out.chars().count(), 10);
    }
}
