//! Single-block coordinate debugger.
//!
//! Draws one block with corner markers and prints its original vs. scaled
//! coordinates, for checking where a detector's box actually lands on the
//! raster.
//!
//! # Usage
//!
//! ```bash
//! debug-block page.png page-layout.json 3
//! ```

use anyhow::{Context, Result};
use blockviz_cli::render;
use blockviz_core::{detect_format, extract_blocks, BlockvizError, CanvasSize, ScaleFactors};
use clap::Parser;
use image::GenericImageView;
use std::fs;
use std::path::PathBuf;

/// Longest text preview printed for a block.
const TEXT_PREVIEW_CHARS: usize = 100;

/// Inspect a single layout block's coordinates on the page image
#[derive(Parser, Debug)]
#[command(name = "debug-block")]
#[command(version, about, long_about = None)]
struct Args {
    /// Page image the block was detected on
    image: PathBuf,

    /// Layout-detection JSON (gemini or documentai shape)
    json: PathBuf,

    /// Zero-based index into the extracted block list
    block_index: usize,
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

    if args.block_index >= doc.blocks.len() {
        return Err(BlockvizError::IndexError {
            index: args.block_index,
            count: doc.blocks.len(),
        }
        .into());
    }
    let block = &doc.blocks[args.block_index];

    let actual = CanvasSize::from_pixels(raster.width(), raster.height());
    let declared = doc.declared_or(actual);
    let scale = ScaleFactors::between(declared, actual)?;
    log::debug!("scale factors: x={:.4}, y={:.4}", scale.x, scale.y);

    println!(
        "Image: {:.0}x{:.0} -> {}x{}",
        declared.width,
        declared.height,
        raster.width(),
        raster.height()
    );
    println!("Scale: x={:.4}, y={:.4}", scale.x, scale.y);
    println!();

    let original = block.bounding_box;
    let scaled = scale.apply(&original);

    println!("Block {} ({}):", args.block_index, block.id);
    println!("  Type: {}", block.kind);
    println!("  Reading order: {}", block.reading_order);
    let preview: String = block.text.chars().take(TEXT_PREVIEW_CHARS).collect();
    println!("  Text: {preview}...");
    println!();
    println!(
        "Original (reported on the {:.0}x{:.0} canvas):",
        declared.width, declared.height
    );
    println!(
        "  x={}, y={}, w={}, h={}",
        original.x, original.y, original.width, original.height
    );
    println!("  bottom-right: ({}, {})", original.right(), original.bottom());
    println!();
    println!(
        "Scaled (drawn on the {}x{} raster):",
        raster.width(),
        raster.height()
    );
    println!(
        "  x={}, y={}, w={}, h={}",
        scaled.x, scaled.y, scaled.width, scaled.height
    );
    println!("  bottom-right: ({}, {})", scaled.right(), scaled.bottom());

    let mut img = raster.to_rgba8();
    render::draw_debug_overlay(&mut img, &scaled);

    let output = render::derive_output_path(
        &args.image,
        &format!("-debug-block{}", args.block_index),
    );
    render::save_overlay(&img, &output)
        .with_context(|| format!("failed to save {}", output.display()))?;

    println!();
    println!("Saved to {}", output.display());

    Ok(())
}
