//! Library for generating platform application icons from a single piece
//! of source artwork.
//!
//! The artwork is stretched to the icon art area, masked to Apple's
//! continuous-corner "squircle" shape, and centered on a padded
//! transparent canvas; every output resolution is then derived from that
//! one masked master image. Packaging the macOS iconset into a `.icns`
//! container is delegated to an external tool behind the [`Packager`]
//! trait.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::DynamicImage;
use std::fs;
use std::path::Path;

pub mod compositor;
pub mod config;
pub mod iconset;
pub mod mask;
pub mod packager;

pub use compositor::apply_mask;
pub use config::IconConfig;
pub use iconset::IconsetSize;
pub use packager::{Iconutil, Packager};

/// Pixel size of the standalone icon written for platforms without
/// native icon-container support.
pub const LINUX_ICON_SIZE: u32 = 512;

/// Runs the full icon pipeline: masks the source artwork, stages the
/// mandated iconset in a temporary directory, packages it into
/// `icon.icns`, and writes `icon.icns` plus a 512x512 `icon.png` into
/// `resources_dir`.
///
/// The temporary directory is released on every exit path. If packaging
/// fails, nothing is written under `resources_dir`.
pub fn generate(
    source: &DynamicImage,
    config: &IconConfig,
    packager: &dyn Packager,
    resources_dir: &Path,
) -> Result<()> {
    println!("Applying macOS squircle mask...");
    let masked = compositor::apply_mask(source, config);

    let staging = tempfile::tempdir().context("failed to create temporary directory")?;

    println!("Generating iconset...");
    let iconset_dir = iconset::write(&masked, staging.path())?;

    println!("Building .icns...");
    let staged_icns = staging.path().join("icon.icns");
    packager.package(&iconset_dir, &staged_icns)?;

    fs::create_dir_all(resources_dir)
        .with_context(|| format!("failed to create {}", resources_dir.display()))?;
    let icns_path = resources_dir.join("icon.icns");
    fs::copy(&staged_icns, &icns_path)
        .with_context(|| format!("failed to write {}", icns_path.display()))?;
    let icns_size = fs::metadata(&icns_path)
        .with_context(|| format!("failed to stat {}", icns_path.display()))?
        .len();
    println!("  Built {} ({} bytes)", icns_path.display(), icns_size);

    let linux_icon = imageops::resize(
        &masked,
        LINUX_ICON_SIZE,
        LINUX_ICON_SIZE,
        FilterType::Lanczos3,
    );
    let png_path = resources_dir.join("icon.png");
    linux_icon
        .save(&png_path)
        .with_context(|| format!("failed to write {}", png_path.display()))?;
    println!(
        "  Wrote {} ({}x{})",
        png_path.display(),
        LINUX_ICON_SIZE,
        LINUX_ICON_SIZE
    );

    Ok(())
}
