//! Integration tests for the visualize and debug-block binaries.
//!
//! Each test runs the real binary against a synthetic raster and payload
//! written into a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Helper to run the batch visualizer.
fn visualize() -> Command {
    Command::new(env!("CARGO_BIN_EXE_visualize"))
}

/// Helper to run the single-block debugger.
fn debug_block() -> Command {
    Command::new(env!("CARGO_BIN_EXE_debug-block"))
}

fn write_raster(path: &Path, width: u32, height: u32) {
    image::RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]))
        .save(path)
        .unwrap();
}

fn gemini_payload() -> serde_json::Value {
    serde_json::json!({
        "imageWidth": 600,
        "imageHeight": 400,
        "blocks": [{
            "id": "block-1",
            "type": "paragraph",
            "boundingBox": {"x": 0, "y": 0, "width": 300, "height": 200},
            "text": "Revenue grew in every region.",
            "readingOrder": 1
        }]
    })
}

// ============ USAGE ERRORS ============

#[test]
fn test_visualize_no_args_shows_usage() {
    visualize()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_visualize_one_arg_shows_usage() {
    visualize()
        .arg("page.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_debug_block_missing_index_shows_usage() {
    debug_block()
        .arg("page.png")
        .arg("layout.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ============ INPUT ERRORS ============

#[test]
fn test_visualize_missing_image_fails() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("layout.json");
    std::fs::write(&json_path, gemini_payload().to_string()).unwrap();

    visualize()
        .arg(dir.path().join("nope.png"))
        .arg(&json_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open image"));
}

#[test]
fn test_visualize_missing_json_fails() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("page.png");
    write_raster(&image_path, 100, 100);

    visualize()
        .arg(&image_path)
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read JSON"));
}

#[test]
fn test_visualize_unknown_format_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("page.png");
    let json_path = dir.path().join("layout.json");
    write_raster(&image_path, 100, 100);
    std::fs::write(&json_path, "{}").unwrap();

    visualize()
        .arg(&image_path)
        .arg(&json_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown layout format"));

    assert!(!dir.path().join("page-annotated.png").exists());
}

#[test]
fn test_visualize_zero_declared_dimension_is_fatal() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("page.png");
    let json_path = dir.path().join("layout.json");
    write_raster(&image_path, 100, 100);

    let payload = serde_json::json!({
        "imageWidth": 0,
        "imageHeight": 400,
        "blocks": [{
            "boundingBox": {"x": 0, "y": 0, "width": 10, "height": 10}
        }]
    });
    std::fs::write(&json_path, payload.to_string()).unwrap();

    visualize()
        .arg(&image_path)
        .arg(&json_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Geometry error"));

    assert!(!dir.path().join("page-annotated.png").exists());
}

// ============ BATCH VISUALIZER ============

#[test]
fn test_visualize_scales_declared_coordinates() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("page.png");
    let json_path = dir.path().join("layout.json");
    write_raster(&image_path, 1200, 800);
    std::fs::write(&json_path, gemini_payload().to_string()).unwrap();

    visualize()
        .arg(&image_path)
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected format: gemini"))
        .stdout(predicate::str::contains("x=2.00, y=2.00"))
        .stdout(predicate::str::contains("coordinates will be scaled"))
        .stdout(predicate::str::contains("Found 1 blocks"));

    let output_path = dir.path().join("page-annotated.png");
    assert!(output_path.exists());

    // The single block has no overlaps (green) and scales 2x on both axes
    // to (0, 0, 600, 400).
    let annotated = image::open(&output_path).unwrap().to_rgba8();
    let green = image::Rgba([0, 255, 0, 255]);
    let white = image::Rgba([255, 255, 255, 255]);
    assert_eq!(annotated.get_pixel(0, 0), &green);
    assert_eq!(annotated.get_pixel(599, 0), &green);
    assert_eq!(annotated.get_pixel(0, 399), &green);
    assert_eq!(annotated.get_pixel(700, 500), &white);
}

#[test]
fn test_visualize_identity_scale_draws_in_place() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("page.png");
    let json_path = dir.path().join("layout.json");
    write_raster(&image_path, 600, 400);
    std::fs::write(&json_path, gemini_payload().to_string()).unwrap();

    let output = visualize()
        .arg(&image_path)
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("x=1.00, y=1.00"))
        .get_output()
        .clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("coordinates will be scaled"));

    let annotated = image::open(dir.path().join("page-annotated.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(annotated.get_pixel(0, 0), &image::Rgba([0, 255, 0, 255]));
    assert_eq!(annotated.get_pixel(299, 0), &image::Rgba([0, 255, 0, 255]));
}

#[test]
fn test_visualize_explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("page.png");
    let json_path = dir.path().join("layout.json");
    let output_path = dir.path().join("custom.png");
    write_raster(&image_path, 600, 400);
    std::fs::write(&json_path, gemini_payload().to_string()).unwrap();

    visualize()
        .arg(&image_path)
        .arg(&json_path)
        .arg(&output_path)
        .assert()
        .success();

    assert!(output_path.exists());
    assert!(!dir.path().join("page-annotated.png").exists());
}

#[test]
fn test_visualize_prints_legend_and_histogram() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("page.png");
    let json_path = dir.path().join("layout.json");
    write_raster(&image_path, 600, 400);
    std::fs::write(&json_path, gemini_payload().to_string()).unwrap();

    visualize()
        .arg(&image_path)
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no overlaps:  1"))
        .stdout(predicate::str::contains("Color legend:"))
        .stdout(predicate::str::contains("green"))
        .stdout(predicate::str::contains("magenta = 5+ overlaps"));
}

#[test]
fn test_visualize_document_ai_without_pages() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("page.png");
    let json_path = dir.path().join("layout.json");
    write_raster(&image_path, 200, 100);
    std::fs::write(
        &json_path,
        serde_json::json!({"processor": "Document AI Enterprise OCR"}).to_string(),
    )
    .unwrap();

    visualize()
        .arg(&image_path)
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected format: documentai"))
        .stdout(predicate::str::contains("Found 0 blocks"));

    assert!(dir.path().join("page-annotated.png").exists());
}

// ============ SINGLE-BLOCK DEBUGGER ============

#[test]
fn test_debug_block_renders_markers_and_report() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("page.png");
    let json_path = dir.path().join("layout.json");
    write_raster(&image_path, 100, 100);

    let payload = serde_json::json!({
        "imageWidth": 100,
        "imageHeight": 100,
        "blocks": [{
            "id": "block-1",
            "type": "paragraph",
            "boundingBox": {"x": 30, "y": 30, "width": 40, "height": 40},
            "text": "hello",
            "readingOrder": 1
        }]
    });
    std::fs::write(&json_path, payload.to_string()).unwrap();

    debug_block()
        .arg(&image_path)
        .arg(&json_path)
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Block 0 (block-1)"))
        .stdout(predicate::str::contains("Type: paragraph"))
        .stdout(predicate::str::contains("bottom-right: (70, 70)"));

    let output_path = dir.path().join("page-debug-block0.png");
    assert!(output_path.exists());

    // Corner markers land red on every corner of the box.
    let debug = image::open(&output_path).unwrap().to_rgba8();
    let red = image::Rgba([255, 0, 0, 255]);
    assert_eq!(debug.get_pixel(30, 30), &red);
    assert_eq!(debug.get_pixel(70, 70), &red);
    assert_eq!(debug.get_pixel(30, 70), &red);
    assert_eq!(debug.get_pixel(70, 30), &red);
}

#[test]
fn test_debug_block_index_out_of_range() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("page.png");
    let json_path = dir.path().join("layout.json");
    write_raster(&image_path, 100, 100);
    std::fs::write(&json_path, gemini_payload().to_string()).unwrap();

    debug_block()
        .arg(&image_path)
        .arg(&json_path)
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "block index 5 out of range (valid: 0..1)",
        ));

    assert!(!dir.path().join("page-debug-block5.png").exists());
}
