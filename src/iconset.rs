//! The mandated iconset size table and output fan-out.

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// The entries of a macOS `.iconset` bundle. `iconutil` requires exactly
/// these ten, named `icon_<label>.png`.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IconsetSize {
    /// 16x16 icon at standard density.
    Icon_16x16,
    /// 16x16 icon at 2x "retina" density (so, 32 by 32 pixels).
    Icon_16x16_2x,
    /// 32x32 icon at standard density.
    Icon_32x32,
    /// 32x32 icon at 2x "retina" density (so, 64 by 64 pixels).
    Icon_32x32_2x,
    /// 128x128 icon at standard density.
    Icon_128x128,
    /// 128x128 icon at 2x "retina" density (so, 256 by 256 pixels).
    Icon_128x128_2x,
    /// 256x256 icon at standard density.
    Icon_256x256,
    /// 256x256 icon at 2x "retina" density (so, 512 by 512 pixels).
    Icon_256x256_2x,
    /// 512x512 icon at standard density.
    Icon_512x512,
    /// 512x512 icon at 2x "retina" density (so, 1024 by 1024 pixels).
    Icon_512x512_2x,
}

impl IconsetSize {
    /// All ten entries, in the conventional iconset order.
    pub const ALL: [IconsetSize; 10] = [
        IconsetSize::Icon_16x16,
        IconsetSize::Icon_16x16_2x,
        IconsetSize::Icon_32x32,
        IconsetSize::Icon_32x32_2x,
        IconsetSize::Icon_128x128,
        IconsetSize::Icon_128x128_2x,
        IconsetSize::Icon_256x256,
        IconsetSize::Icon_256x256_2x,
        IconsetSize::Icon_512x512,
        IconsetSize::Icon_512x512_2x,
    ];

    /// Returns the nominal screen size of this entry, in points.
    /// Normally this is the same as the pixel size, but for 2x "retina"
    /// density entries, this will be half that value.
    ///
    /// # Examples
    /// ```
    /// use squircle::IconsetSize;
    /// assert_eq!(IconsetSize::Icon_128x128.screen_size(), 128);
    /// assert_eq!(IconsetSize::Icon_128x128_2x.screen_size(), 128);
    /// ```
    pub fn screen_size(self) -> u32 {
        match self {
            IconsetSize::Icon_16x16 => 16,
            IconsetSize::Icon_16x16_2x => 16,
            IconsetSize::Icon_32x32 => 32,
            IconsetSize::Icon_32x32_2x => 32,
            IconsetSize::Icon_128x128 => 128,
            IconsetSize::Icon_128x128_2x => 128,
            IconsetSize::Icon_256x256 => 256,
            IconsetSize::Icon_256x256_2x => 256,
            IconsetSize::Icon_512x512 => 512,
            IconsetSize::Icon_512x512_2x => 512,
        }
    }

    /// Returns the pixel density for this entry -- that is, 2 for 2x
    /// "retina" density entries, or 1 otherwise.
    pub fn density(self) -> u32 {
        match self {
            IconsetSize::Icon_16x16_2x
            | IconsetSize::Icon_32x32_2x
            | IconsetSize::Icon_128x128_2x
            | IconsetSize::Icon_256x256_2x
            | IconsetSize::Icon_512x512_2x => 2,
            _ => 1,
        }
    }

    /// Returns the pixel data width and height of this entry.
    ///
    /// # Examples
    /// ```
    /// use squircle::IconsetSize;
    /// assert_eq!(IconsetSize::Icon_256x256.pixel_size(), 256);
    /// assert_eq!(IconsetSize::Icon_256x256_2x.pixel_size(), 512);
    /// ```
    pub fn pixel_size(self) -> u32 {
        self.screen_size() * self.density()
    }

    /// Returns the label that identifies this entry within the iconset
    /// (e.g. `512x512` or `512x512@2x`).
    pub fn label(self) -> String {
        let size = self.screen_size();
        match self.density() {
            2 => format!("{}x{}@2x", size, size),
            _ => format!("{}x{}", size, size),
        }
    }

    /// Returns the filename `iconutil` expects for this entry.
    ///
    /// # Examples
    /// ```
    /// use squircle::IconsetSize;
    /// assert_eq!(IconsetSize::Icon_16x16.filename(), "icon_16x16.png");
    /// assert_eq!(IconsetSize::Icon_16x16_2x.filename(), "icon_16x16@2x.png");
    /// ```
    pub fn filename(self) -> String {
        format!("icon_{}.png", self.label())
    }
}

/// Renders the masked icon at every mandated iconset size.
///
/// Each entry is an independent Lanczos resize of the single masked
/// master image; outputs are never re-masked per size.
pub fn render(icon: &RgbaImage) -> Vec<(IconsetSize, RgbaImage)> {
    IconsetSize::ALL
        .iter()
        .map(|&entry| {
            let size = entry.pixel_size();
            (entry, imageops::resize(icon, size, size, FilterType::Lanczos3))
        })
        .collect()
}

/// Writes an `icon.iconset` directory under `dir` containing the ten
/// mandated PNGs, and returns its path.
pub fn write(icon: &RgbaImage, dir: &Path) -> Result<PathBuf> {
    let iconset_dir = dir.join("icon.iconset");
    fs::create_dir_all(&iconset_dir)
        .with_context(|| format!("failed to create {}", iconset_dir.display()))?;
    let entries = render(icon);
    for (entry, image) in &entries {
        let path = iconset_dir.join(entry.filename());
        image
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    println!(
        "  Generated {} iconset PNGs in {}",
        entries.len(),
        iconset_dir.display()
    );
    Ok(iconset_dir)
}
