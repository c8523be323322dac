//! Packaging of iconsets into an icon container.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Bundles a written `.iconset` directory into a single icon-container
/// file. The core pipeline only depends on this interface, so it can be
/// tested on hosts without the platform packaging tool.
pub trait Packager {
    /// Packages `iconset_dir` into an icon container at `destination`.
    /// A failure of the underlying tool is fatal and carries its
    /// diagnostic text.
    fn package(&self, iconset_dir: &Path, destination: &Path) -> Result<()>;
}

/// Packages iconsets with `iconutil`, which ships with the Xcode
/// Command Line Tools.
pub struct Iconutil;

impl Packager for Iconutil {
    fn package(&self, iconset_dir: &Path, destination: &Path) -> Result<()> {
        let output = Command::new("iconutil")
            .arg("--convert")
            .arg("icns")
            .arg(iconset_dir)
            .arg("-o")
            .arg(destination)
            .output()
            .context("failed to run iconutil (requires macOS with Xcode Command Line Tools)")?;
        if !output.status.success() {
            bail!("iconutil failed: {}", String::from_utf8_lossy(&output.stderr));
        }
        Ok(())
    }
}
