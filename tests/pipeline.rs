use anyhow::{bail, Result};
use image::{DynamicImage, Rgba, RgbaImage};
use squircle::{apply_mask, generate, iconset, IconConfig, IconsetSize, Packager};
use std::fs;
use std::path::Path;
use std::process::Command;

#[test]
fn masked_icon_is_canvas_sized_for_any_source() {
    let config = IconConfig::default();
    let tiny = apply_mask(&solid_red(200, 300), &config);
    assert_eq!(tiny.dimensions(), (1024, 1024));
    let huge = apply_mask(&solid_red(4000, 4000), &config);
    assert_eq!(huge.dimensions(), (1024, 1024));
}

#[test]
fn pipeline_is_deterministic() {
    let config = IconConfig::default();
    let first = apply_mask(&solid_red(1000, 1000), &config);
    let second = apply_mask(&solid_red(1000, 1000), &config);
    assert!(first.as_raw() == second.as_raw());
}

#[test]
fn red_square_master_icon() {
    let icon = apply_mask(&solid_red(1000, 1000), &IconConfig::default());
    assert_eq!(icon.get_pixel(0, 0)[3], 0);
    assert_eq!(icon.get_pixel(512, 512), &Rgba([255, 0, 0, 255]));
}

#[test]
fn red_square_smallest_output() {
    let icon = apply_mask(&solid_red(1000, 1000), &IconConfig::default());
    let rendered = iconset::render(&icon);
    let (_, smallest) = rendered
        .iter()
        .find(|(entry, _)| *entry == IconsetSize::Icon_16x16)
        .unwrap();

    // Squircle corners stay transparent (within resampler tolerance) and
    // the center keeps the source color.
    for (x, y) in [(0, 0), (15, 0), (0, 15), (15, 15)] {
        assert!(smallest.get_pixel(x, y)[3] <= 8, "opaque corner at ({}, {})", x, y);
    }
    assert_eq!(smallest.get_pixel(8, 8), &Rgba([255, 0, 0, 255]));

    // The squircle edge leaves a smoothly varying band.
    let partial = smallest
        .pixels()
        .filter(|pixel| pixel[3] > 0 && pixel[3] < 255)
        .count();
    assert!(partial > 0, "expected an anti-aliasing band");
}

#[test]
fn generate_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let resources = dir.path().join("resources");
    let source = solid_red(1000, 1000);

    generate(&source, &IconConfig::default(), &StubPackager, &resources).unwrap();

    assert_eq!(fs::read(resources.join("icon.icns")).unwrap(), b"icns stub");
    let linux_icon = image::open(resources.join("icon.png")).unwrap().to_rgba8();
    assert_eq!(linux_icon.dimensions(), (512, 512));
    assert_eq!(linux_icon.get_pixel(0, 0)[3], 0);
    assert_eq!(linux_icon.get_pixel(256, 256), &Rgba([255, 0, 0, 255]));
}

#[test]
fn packaging_failure_writes_no_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let resources = dir.path().join("resources");
    let source = solid_red(200, 200);

    let err = generate(&source, &IconConfig::default(), &FailingPackager, &resources)
        .unwrap_err();
    assert!(err.to_string().contains("Invalid Iconset."));
    assert!(!resources.exists());
}

#[test]
fn missing_source_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_squircle"))
        .arg("--source")
        .arg("missing-artwork.png")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("source artwork not found"), "stderr: {}", stderr);
    assert!(!dir.path().join("resources").exists());
}

fn solid_red(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([255, 0, 0, 255]),
    ))
}

/// Stands in for `iconutil`: checks the staged iconset is complete, then
/// writes a stub container.
struct StubPackager;

impl Packager for StubPackager {
    fn package(&self, iconset_dir: &Path, destination: &Path) -> Result<()> {
        for entry in IconsetSize::ALL {
            assert!(
                iconset_dir.join(entry.filename()).is_file(),
                "iconset is missing {}",
                entry.filename()
            );
        }
        fs::write(destination, b"icns stub")?;
        Ok(())
    }
}

/// Fails the way `iconutil` does on a malformed iconset.
struct FailingPackager;

impl Packager for FailingPackager {
    fn package(&self, _iconset_dir: &Path, _destination: &Path) -> Result<()> {
        bail!("iconutil failed: Invalid Iconset.")
    }
}
