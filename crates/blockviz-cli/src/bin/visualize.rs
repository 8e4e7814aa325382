//! Batch overlay visualizer.
//!
//! Draws every detected layout block onto the page image, colored by how
//! many other blocks it overlaps, and prints a per-tier histogram so dense
//! clusters of mis-segmented regions stand out.
//!
//! # Usage
//!
//! ```bash
//! visualize page.png page-layout.json
//! visualize page.png page-layout.json annotated.png
//! RUST_LOG=debug visualize page.png page-layout.json
//! ```

use anyhow::{Context, Result};
use blockviz_cli::render;
use blockviz_core::{
    classify, detect_format, extract_blocks, CanvasSize, OverlapTier, ScaleFactors, TierHistogram,
};
use clap::Parser;
use image::GenericImageView;
use std::fs;
use std::path::PathBuf;

/// Draw OCR layout blocks onto the page image, colored by overlap density
#[derive(Parser, Debug)]
#[command(name = "visualize")]
#[command(version, about, long_about = None)]
struct Args {
    /// Page image the blocks were detected on
    image: PathBuf,

    /// Layout-detection JSON (gemini or documentai shape)
    json: PathBuf,

    /// Output image path (default: inserts `-annotated` before the extension)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raster = image::open(&args.image)
        .with_context(|| format!("failed to open image {}", args.image.display()))?;
    let raw = fs::read_to_string(&args.json)
        .with_context(|| format!("failed to read JSON {}", args.json.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse JSON {}", args.json.display()))?;

    let format = detect_format(&payload);
    println!("Detected format: {}", format.name());
    let doc = extract_blocks(&payload, format)?;

    let actual = CanvasSize::from_pixels(raster.width(), raster.height());
    let declared = doc.declared_or(actual);
    let scale = ScaleFactors::between(declared, actual)?;
    log::debug!("scale factors: x={:.4}, y={:.4}", scale.x, scale.y);

    println!("Image dimensions:");
    println!("  declared: {:.0}x{:.0}", declared.width, declared.height);
    println!("  actual:   {}x{}", raster.width(), raster.height());
    println!("  scale:    x={:.2}, y={:.2}", scale.x, scale.y);
    if !scale.is_identity() {
        println!("  coordinates will be scaled");
    }

    // Overlaps are counted in the reported space, before any rescaling.
    let boxes = doc.bounding_boxes();
    let tiers = classify(&boxes);
    let hist = TierHistogram::tally(&tiers);

    println!();
    println!("Found {} blocks", boxes.len());
    println!("  no overlaps:  {}", hist.none);
    println!("  1-2 overlaps: {}", hist.low);
    println!("  3-4 overlaps: {}", hist.medium);
    println!("  5+ overlaps:  {}", hist.high);

    let mut img = raster.to_rgba8();
    let pixel_rects: Vec<_> = boxes.iter().map(|b| scale.apply(b)).collect();
    render::draw_overlays(&mut img, &pixel_rects, &tiers, render::line_thickness(scale.x));

    let output = args
        .output
        .unwrap_or_else(|| render::derive_output_path(&args.image, "-annotated"));
    render::save_overlay(&img, &output)
        .with_context(|| format!("failed to save {}", output.display()))?;

    println!();
    println!("Saved visualization to {}", output.display());
    println!();
    println!("Color legend:");
    for tier in [
        OverlapTier::None,
        OverlapTier::Low,
        OverlapTier::Medium,
        OverlapTier::High,
    ] {
        println!("  {:7} = {}", tier.color_name(), tier.describe());
    }

    Ok(())
}
