//! Radar chart rasterization.
//!
//! Draws one polar maturity chart per category: five concentric score
//! bands colored red through green, one spoke per canonical subcategory,
//! and the client's score polygon on top. Axis labels live in the PDF
//! legend next to each chart, so the raster stays label-free.

use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageOutputFormat, Rgb, RgbImage};

use crate::aggregate::CategoryVector;
use crate::error::{ReportError, Result};

/// Output raster is square, CHART_SIZE_PX on each side.
pub const CHART_SIZE_PX: u32 = 900;

const CENTER: f64 = CHART_SIZE_PX as f64 / 2.0;
const RADIUS: f64 = 360.0;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const SPOKE: Rgb<u8> = Rgb([71, 85, 105]);
const POLYGON: Rgb<u8> = Rgb([15, 23, 42]);

/// Score band colors from worst (innermost) to best (outermost).
const RING_COLORS: [Rgb<u8>; 5] = [
    Rgb([204, 0, 0]),
    Rgb([255, 127, 0]),
    Rgb([255, 212, 0]),
    Rgb([122, 201, 67]),
    Rgb([0, 160, 0]),
];

/// Render the radar chart for one category vector.
///
/// Deterministic: identical vectors produce identical buffers.
#[must_use]
pub fn render_radar(vector: &CategoryVector) -> RgbImage {
    let mut image = ring_background();

    let n = vector.axes.len();
    if n == 0 {
        return image;
    }

    // Spokes, one per axis, from center to rim.
    for i in 0..n {
        let (x, y) = polar_point(axis_angle(i, n), RADIUS);
        draw_segment(&mut image, (CENTER, CENTER), (x, y), 1.0, SPOKE);
    }

    // Score polygon with vertex dots.
    let points: Vec<(f64, f64)> = vector
        .axes
        .iter()
        .enumerate()
        .map(|(i, axis)| polar_point(axis_angle(i, n), axis.score.fraction() * RADIUS))
        .collect();
    for i in 0..n {
        let next = (i + 1) % n;
        draw_segment(&mut image, points[i], points[next], 2.5, POLYGON);
    }
    for &point in &points {
        draw_disc(&mut image, point, 6.0, POLYGON);
    }

    image
}

/// Encode a rendered chart as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .map_err(|err| ReportError::render("radar chart PNG", err))?;
    Ok(bytes)
}

/// Concentric band background: band k covers scores (k, k+1].
fn ring_background() -> RgbImage {
    ImageBuffer::from_fn(CHART_SIZE_PX, CHART_SIZE_PX, |x, y| {
        let dx = f64::from(x) - CENTER;
        let dy = f64::from(y) - CENTER;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist <= RADIUS {
            let band = ((dist / RADIUS * 5.0) as usize).min(4);
            RING_COLORS[band]
        } else {
            BACKGROUND
        }
    })
}

/// Angle of axis `i` of `n`: first axis at twelve o'clock, clockwise.
fn axis_angle(i: usize, n: usize) -> f64 {
    i as f64 * std::f64::consts::TAU / n as f64
}

/// Convert a chart angle/radius pair to raster coordinates.
fn polar_point(angle: f64, radius: f64) -> (f64, f64) {
    (CENTER + radius * angle.sin(), CENTER - radius * angle.cos())
}

/// Draw a line segment by stamping discs along its length.
fn draw_segment(
    image: &mut RgbImage,
    from: (f64, f64),
    to: (f64, f64),
    thickness: f64,
    color: Rgb<u8>,
) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = (dx * dx + dy * dy).sqrt();
    let steps = length.ceil().max(1.0) as usize;
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        draw_disc(image, (from.0 + dx * t, from.1 + dy * t), thickness, color);
    }
}

/// Fill a disc of the given radius, clipped to the image bounds.
fn draw_disc(image: &mut RgbImage, center: (f64, f64), radius: f64, color: Rgb<u8>) {
    let r = radius.ceil() as i64;
    let (cx, cy) = (center.0.round() as i64, center.1.round() as i64);
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx * dx + dy * dy) as f64 > radius * radius {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate, CategoryVectors};
    use crate::model::ReportModel;
    use crate::taxonomy::Taxonomy;

    fn sample_vectors() -> CategoryVectors {
        let taxonomy = Taxonomy {
            default_score: 3,
            ..Taxonomy::default()
        };
        aggregate(&ReportModel::defaulted(&taxonomy), &taxonomy)
    }

    #[test]
    fn test_chart_dimensions() {
        let image = render_radar(&sample_vectors().operations);
        assert_eq!(image.width(), CHART_SIZE_PX);
        assert_eq!(image.height(), CHART_SIZE_PX);
    }

    #[test]
    fn test_corners_are_background() {
        let image = render_radar(&sample_vectors().operations);
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
        assert_eq!(
            *image.get_pixel(CHART_SIZE_PX - 1, CHART_SIZE_PX - 1),
            BACKGROUND
        );
    }

    #[test]
    fn test_outer_band_is_green_between_spokes() {
        let image = render_radar(&sample_vectors().operations);
        // Just inside the rim, between the twelve o'clock spoke and its
        // neighbor, nothing is drawn over the outermost band.
        let angle = std::f64::consts::TAU / 12.0;
        let (x, y) = polar_point(angle, RADIUS - 4.0);
        assert_eq!(*image.get_pixel(x as u32, y as u32), RING_COLORS[4]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let vectors = sample_vectors();
        let a = render_radar(&vectors.users);
        let b = render_radar(&vectors.users);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_png_encoding_roundtrip_dimensions() {
        let image = render_radar(&sample_vectors().devices);
        let bytes = encode_png(&image).expect("encode");
        let decoded = image::load_from_memory(&bytes).expect("decode");
        assert_eq!(decoded.width(), CHART_SIZE_PX);
    }
}
