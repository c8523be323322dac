//! Generates macOS and Linux application icons from source artwork.
//!
//! Applies Apple's squircle (continuous superellipse) mask with proper
//! padding so the icon matches other macOS dock icons in size and shape,
//! then writes `resources/icon.icns` (all 10 required sizes) and
//! `resources/icon.png` (512x512, Linux).

use anyhow::{bail, Context, Result};
use clap::Parser;
use squircle::{generate, IconConfig, Iconutil};
use std::path::{Path, PathBuf};

/// Conventional location of the full-bleed source artwork, relative to
/// the project root.
const DEFAULT_SOURCE: &str = "resources/icon-source.png";

/// Directory the final icon artifacts are written to.
const RESOURCES_DIR: &str = "resources";

#[derive(Debug, Parser)]
#[command(
    name = "squircle",
    about = "Generate macOS and Linux app icons from source artwork"
)]
struct Args {
    /// Path to the source artwork (default: resources/icon-source.png).
    #[arg(long, value_name = "PATH")]
    source: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let source_path = args
        .source
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));

    if !source_path.exists() {
        bail!(
            "source artwork not found: {}\n\
             place your full-bleed artwork at {} or pass --source path/to/artwork.png",
            source_path.display(),
            DEFAULT_SOURCE
        );
    }

    println!("Source: {}", source_path.display());
    let source = image::open(&source_path)
        .with_context(|| format!("failed to decode {}", source_path.display()))?;
    println!("  Dimensions: {}x{}", source.width(), source.height());

    generate(
        &source,
        &IconConfig::default(),
        &Iconutil,
        Path::new(RESOURCES_DIR),
    )?;

    println!();
    println!("Done! Icon files updated in {}/", RESOURCES_DIR);
    println!("  - icon.icns  (macOS)");
    println!("  - icon.png   (Linux)");
    Ok(())
}
