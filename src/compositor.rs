//! Masks and centers source artwork on the icon canvas.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::config::IconConfig;
use crate::mask;

/// Masks source artwork to the squircle shape and centers it on the
/// padded icon canvas.
///
/// The source is normalized to RGBA and stretched to the art area (no
/// cropping is performed, so non-square artwork is distorted), the
/// squircle mask is applied to its alpha channel, and the result is
/// pasted onto a fully transparent canvas offset by the configured
/// inset. The returned image always has the configured canvas
/// dimensions, regardless of the source dimensions, and the inset
/// border rings are fully transparent.
pub fn apply_mask(source: &DynamicImage, config: &IconConfig) -> RgbaImage {
    let art_size = config.art_size();
    let mut art = source
        .resize_exact(art_size, art_size, FilterType::Lanczos3)
        .to_rgba8();

    let mask = mask::build(
        art_size,
        config.corner_radius(),
        config.exponent,
        config.supersample,
    );

    // A pixel is never more opaque than either the artwork or the mask.
    for (x, y, pixel) in art.enumerate_pixels_mut() {
        pixel[3] = pixel[3].min(mask.get_pixel(x, y)[0]);
    }

    let mut canvas = RgbaImage::new(config.canvas_size, config.canvas_size);
    imageops::replace(
        &mut canvas,
        &art,
        i64::from(config.inset),
        i64::from(config.inset),
    );
    canvas
}
