//! Sequential draw calls over the loaded raster.
//!
//! Rectangles arrive already normalized to raster pixel space; this module
//! clamps them to the image bounds, draws hollow outlines in tier colors,
//! and adds the corner markers for single-block debug mode.

use blockviz_core::{OverlapTier, PixelRect};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

/// Debug-mode box and marker color.
const DEBUG_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
/// Debug-mode outline thickness in pixels.
const DEBUG_LINE_THICKNESS: u32 = 5;
/// Debug-mode corner marker radius in pixels.
const MARKER_RADIUS: i32 = 20;

/// Outline thickness for batch overlays, scaled with the raster so boxes
/// stay visible on high-resolution scans.
#[inline]
#[must_use]
pub fn line_thickness(scale_x: f64) -> u32 {
    ((3.0 * scale_x) as u32).max(2)
}

/// Visible portion of a pixel rectangle, or `None` when it lies entirely
/// off-raster.
fn clamped(rect: &PixelRect, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let x = rect.x.clamp(0, i64::from(width)) as u32;
    let y = rect.y.clamp(0, i64::from(height)) as u32;
    let w = (rect.right().clamp(0, i64::from(width)) - i64::from(x)).max(0) as u32;
    let h = (rect.bottom().clamp(0, i64::from(height)) - i64::from(y)).max(0) as u32;
    if w == 0 || h == 0 {
        None
    } else {
        Some((x, y, w, h))
    }
}

/// Draws one hollow rectangle, insetting each pass so thick outlines grow
/// inward instead of spilling past the box.
fn draw_outline(
    img: &mut RgbaImage,
    (x, y, w, h): (u32, u32, u32, u32),
    thickness: u32,
    color: Rgba<u8>,
) {
    for t in 0..thickness {
        let inner_w = w.saturating_sub(2 * t);
        let inner_h = h.saturating_sub(2 * t);
        if inner_w == 0 || inner_h == 0 {
            break;
        }
        let rect = Rect::at((x + t) as i32, (y + t) as i32).of_size(inner_w, inner_h);
        draw_hollow_rect_mut(img, rect, color);
    }
}

/// Draws every block's box in its tier color.
///
/// `rects` and `tiers` are parallel sequences from the same block list;
/// anything clamped down to zero area is skipped.
pub fn draw_overlays(
    img: &mut RgbaImage,
    rects: &[PixelRect],
    tiers: &[OverlapTier],
    thickness: u32,
) {
    let (width, height) = img.dimensions();
    for (rect, tier) in rects.iter().zip(tiers) {
        if let Some(bounds) = clamped(rect, width, height) {
            let (r, g, b) = tier.color();
            draw_outline(img, bounds, thickness, Rgba([r, g, b, 255]));
        }
    }
}

/// Draws a single block the debug way: red outline plus filled circular
/// markers at all four corners, so the corners stay visible even when the
/// box runs off the raster.
pub fn draw_debug_overlay(img: &mut RgbaImage, rect: &PixelRect) {
    let (width, height) = img.dimensions();
    if let Some(bounds) = clamped(rect, width, height) {
        draw_outline(img, bounds, DEBUG_LINE_THICKNESS, DEBUG_COLOR);
    }
    for corner_x in [rect.x, rect.right()] {
        for corner_y in [rect.y, rect.bottom()] {
            draw_filled_circle_mut(
                img,
                (corner_x as i32, corner_y as i32),
                MARKER_RADIUS,
                DEBUG_COLOR,
            );
        }
    }
}

/// Derives an output path by inserting `marker` before the extension:
/// `page.png` with `-annotated` becomes `page-annotated.png`.
#[must_use]
pub fn derive_output_path(input: &Path, marker: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().into_owned());
    match input.extension() {
        Some(ext) => input.with_file_name(format!("{stem}{marker}.{}", ext.to_string_lossy())),
        None => input.with_file_name(format!("{stem}{marker}")),
    }
}

/// Saves the annotated raster in the format its extension implies.
///
/// JPEG has no alpha channel, so RGBA buffers are flattened to RGB first.
///
/// # Errors
///
/// Returns the encoder error when the image cannot be written.
pub fn save_overlay(img: &RgbaImage, path: &Path) -> image::ImageResult<()> {
    let is_jpeg = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"));
    if is_jpeg {
        DynamicImage::ImageRgba8(img.clone()).to_rgb8().save(path)
    } else {
        img.save(path)
    }
}
