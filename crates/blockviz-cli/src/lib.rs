// Overlay rendering casts between f64 box coordinates and raster pixel
// indices. These are safe because:
// - normalized rectangles are clamped to the raster before drawing
// - line thickness and marker sizes are small constants
#![allow(
    clippy::cast_possible_truncation, // clamped pixel coords fit the raster
    clippy::cast_sign_loss,           // coordinates are clamped non-negative first
    clippy::cast_precision_loss       // raster dimensions fit f64 exactly
)]

//! Overlay rendering and CLI support for blockviz.
//!
//! The interesting logic (geometry, normalization, overlap classification,
//! format parsing) lives in `blockviz-core`; this crate is the drawing and
//! file I/O glue plus the `visualize` and `debug-block` binaries.

pub mod render;
