//! Anti-aliased squircle opacity masks.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use std::f64::consts::PI;

/// Number of angular samples used to approximate the superellipse
/// boundary as a closed polygon.
const BOUNDARY_SAMPLES: usize = 1000;

/// Builds an anti-aliased squircle opacity mask of `size` x `size`
/// pixels.
///
/// The mask boundary is the superellipse `|x/a|^n + |y/b|^n = 1` with
/// equal half-axes, so the shape is a square squircle. The curve is
/// shaped by `exponent` alone; `radius` is the nominal corner radius of
/// the shape and participates only in the precondition check. Pixels
/// strictly inside the boundary are fully opaque (255), pixels strictly
/// outside are fully transparent (0), and boundary pixels carry partial
/// opacity produced by rasterizing at `supersample` times the target
/// resolution and downscaling with a Lanczos filter.
///
/// The result is deterministic for fixed inputs and symmetric under 90
/// degree rotations. Out-of-range inputs (`size == 0`, a non-positive
/// `exponent`, a radius larger than half the size) are precondition
/// violations.
pub fn build(size: u32, radius: f32, exponent: f32, supersample: u32) -> GrayImage {
    debug_assert!(size > 0 && supersample > 0);
    debug_assert!(exponent > 0.0);
    debug_assert!(radius > 0.0 && radius * 2.0 <= size as f32);

    let hi_size = size * supersample;
    let points = boundary_points(hi_size, f64::from(exponent));
    let mut hi_mask = GrayImage::new(hi_size, hi_size);
    fill_polygon(&mut hi_mask, &points);

    imageops::resize(&hi_mask, size, size, FilterType::Lanczos3)
}

/// Traces the superellipse boundary as a closed polygon centered on a
/// `hi_size` x `hi_size` canvas, in parametric form:
///
/// ```text
/// x = a * sign(cos t) * |cos t|^(2/n)
/// y = b * sign(sin t) * |sin t|^(2/n)
/// ```
///
/// with `a = b = hi_size / 2`.
fn boundary_points(hi_size: u32, exponent: f64) -> Vec<(f64, f64)> {
    let half = f64::from(hi_size) / 2.0;
    let power = 2.0 / exponent;
    let mut points = Vec::with_capacity(BOUNDARY_SAMPLES);
    for i in 0..BOUNDARY_SAMPLES {
        let t = 2.0 * PI * i as f64 / BOUNDARY_SAMPLES as f64;
        let (sin_t, cos_t) = t.sin_cos();
        let x = half * sign(cos_t) * cos_t.abs().powf(power);
        let y = half * sign(sin_t) * sin_t.abs().powf(power);
        points.push((half + x, half + y));
    }
    points
}

/// Rasterizes the polygon interior as fully opaque pixels, using an
/// even-odd scanline fill sampled at pixel centers.
fn fill_polygon(mask: &mut GrayImage, points: &[(f64, f64)]) {
    let (width, height) = mask.dimensions();
    let mut crossings: Vec<f64> = Vec::new();
    for y in 0..height {
        let scan = f64::from(y) + 0.5;
        crossings.clear();
        for i in 0..points.len() {
            let (x1, y1) = points[i];
            let (x2, y2) = points[(i + 1) % points.len()];
            if (y1 <= scan && y2 > scan) || (y2 <= scan && y1 > scan) {
                crossings.push(x1 + (scan - y1) / (y2 - y1) * (x2 - x1));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for span in crossings.chunks_exact(2) {
            // Pixels whose centers fall within the span.
            let first = ((span[0] - 0.5).ceil().max(0.0)) as u32;
            let last = (span[1] - 0.5).floor();
            if last < 0.0 {
                continue;
            }
            let last = (last as u32).min(width - 1);
            for x in first..=last {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }
}

/// Returns the sign of `v` (-1, 0, or 1). Unlike `f64::signum`, zero
/// maps to zero.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
