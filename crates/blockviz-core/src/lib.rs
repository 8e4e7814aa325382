//! # blockviz-core
//!
//! Geometry, coordinate normalization, overlap classification, and layout
//! format parsing for the blockviz overlay tools.
//!
//! OCR layout detectors report bounding boxes against the resolution they
//! believe the page has, which frequently differs from the raster that gets
//! annotated. This crate holds everything needed to turn a raw detector
//! payload into drawable pixel rectangles:
//!
//! - [`Rect`] and its overlap predicate ([`Rect::overlaps`])
//! - [`ScaleFactors`] / [`normalize`] for mapping declared coordinates onto
//!   the actual raster, truncating toward zero
//! - [`classify`] / [`OverlapTier`] for bucketing overlap density
//! - [`detect_format`] / [`extract_blocks`] for the supported upstream JSON
//!   shapes
//!
//! ## Quick start
//!
//! ```rust
//! use blockviz_core::{classify, parse_layout, CanvasSize, ScaleFactors};
//!
//! let payload = serde_json::json!({
//!     "imageWidth": 600,
//!     "imageHeight": 400,
//!     "blocks": [{
//!         "id": "block-1",
//!         "type": "paragraph",
//!         "boundingBox": {"x": 0, "y": 0, "width": 300, "height": 200},
//!         "text": "Revenue grew in every region.",
//!         "readingOrder": 1
//!     }]
//! });
//!
//! let doc = parse_layout(&payload)?;
//! let actual = CanvasSize::from_pixels(1200, 800);
//! let scale = ScaleFactors::between(doc.declared_or(actual), actual)?;
//! assert_eq!((scale.x, scale.y), (2.0, 2.0));
//!
//! let tiers = classify(&doc.bounding_boxes());
//! assert_eq!(tiers.len(), 1);
//! # Ok::<(), blockviz_core::BlockvizError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod overlap;
pub mod scale;
pub mod schema;

pub use error::{BlockvizError, Result};
pub use geometry::Rect;
pub use overlap::{classify, overlap_counts, OverlapTier, TierHistogram};
pub use scale::{normalize, CanvasSize, PixelRect, ScaleFactors};
pub use schema::{
    detect_format, extract_blocks, parse_layout, Block, LayoutDocument, LayoutFormat,
};
