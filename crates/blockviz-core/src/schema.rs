//! Upstream layout-format detection and block extraction.
//!
//! Two JSON shapes are supported: the flat Gemini layout output (top-level
//! `blocks` with coordinates declared against `imageWidth`/`imageHeight`)
//! and the nested Document AI output (`pages[0].blocks`, coordinates
//! already in raster pixels). The payload shape is sniffed once into a
//! [`LayoutFormat`] and extraction goes through one constructor per schema.

use crate::error::{BlockvizError, Result};
use crate::geometry::Rect;
use crate::scale::CanvasSize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker identifying Document AI payloads inside their `processor` field.
const DOCUMENT_AI_MARKER: &str = "Document AI";

/// Known upstream layout output shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutFormat {
    /// Flat shape: top-level `blocks`, coordinates declared against
    /// `imageWidth`/`imageHeight`.
    Gemini,
    /// Nested shape: blocks at `pages[0].blocks`, coordinates already in
    /// actual raster pixels.
    DocumentAi,
    /// Neither known shape matched.
    Unknown,
}

impl LayoutFormat {
    /// Short name for reports and error messages.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::DocumentAi => "documentai",
            Self::Unknown => "unknown",
        }
    }
}

/// One detected layout region.
///
/// `boundingBox` is required; the remaining fields default when a payload
/// omits them. Created by parsing, never mutated, discarded after
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Region identifier assigned by the detector.
    #[serde(default)]
    pub id: String,
    /// Region type (paragraph, heading, table, ...).
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Box in the coordinate space the payload declares.
    pub bounding_box: Rect,
    /// Text content of the region.
    #[serde(default)]
    pub text: String,
    /// Position in the detector's reading order.
    #[serde(default)]
    pub reading_order: i64,
}

/// Uniform extraction result: the blocks plus the canvas they were
/// reported against, when the payload declares one.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    /// The shape the payload matched.
    pub format: LayoutFormat,
    /// Declared canvas (`imageWidth`/`imageHeight`), if present.
    pub declared: Option<CanvasSize>,
    /// Extracted blocks in payload order.
    pub blocks: Vec<Block>,
}

impl LayoutDocument {
    /// Declared canvas, falling back to the actual raster size (scale 1).
    #[must_use]
    pub fn declared_or(&self, actual: CanvasSize) -> CanvasSize {
        self.declared.unwrap_or(actual)
    }

    /// Reported-space boxes, in block order.
    #[must_use]
    pub fn bounding_boxes(&self) -> Vec<Rect> {
        self.blocks.iter().map(|b| b.bounding_box).collect()
    }
}

/// Sniffs which upstream produced a payload. Rules are ordered; the first
/// match wins:
///
/// 1. a string `processor` field containing `"Document AI"` → [`LayoutFormat::DocumentAi`]
/// 2. a `layoutStructure` field, or both a `blocks` list and an
///    `imageWidth` field → [`LayoutFormat::Gemini`]
/// 3. otherwise → [`LayoutFormat::Unknown`]
#[must_use]
pub fn detect_format(raw: &Value) -> LayoutFormat {
    let processor = raw.get("processor").and_then(Value::as_str);
    if processor.is_some_and(|p| p.contains(DOCUMENT_AI_MARKER)) {
        return LayoutFormat::DocumentAi;
    }
    let has_blocks = raw.get("blocks").is_some_and(Value::is_array);
    if raw.get("layoutStructure").is_some() || (has_blocks && raw.get("imageWidth").is_some()) {
        return LayoutFormat::Gemini;
    }
    LayoutFormat::Unknown
}

/// Extracts the uniform block list for a detected format.
///
/// # Errors
///
/// [`BlockvizError::SchemaError`] for [`LayoutFormat::Unknown`], or when a
/// required field is missing or malformed. No partial results.
pub fn extract_blocks(raw: &Value, format: LayoutFormat) -> Result<LayoutDocument> {
    match format {
        LayoutFormat::Gemini => from_gemini(raw),
        LayoutFormat::DocumentAi => from_document_ai(raw),
        LayoutFormat::Unknown => Err(BlockvizError::SchemaError(
            "unknown layout format: expected a gemini or documentai payload".to_string(),
        )),
    }
}

/// Detects and extracts in one step.
///
/// # Errors
///
/// Same conditions as [`extract_blocks`].
pub fn parse_layout(raw: &Value) -> Result<LayoutDocument> {
    let format = detect_format(raw);
    log::debug!("detected layout format: {}", format.name());
    extract_blocks(raw, format)
}

/// `imageWidth`/`imageHeight` when both are present. A payload carrying
/// only one of the two falls back entirely to the raster size.
fn declared_canvas(raw: &Value) -> Option<CanvasSize> {
    let width = raw.get("imageWidth").and_then(Value::as_f64)?;
    let height = raw.get("imageHeight").and_then(Value::as_f64)?;
    Some(CanvasSize::new(width, height))
}

fn parse_block_list(list: &Value, format: LayoutFormat) -> Result<Vec<Block>> {
    serde_json::from_value(list.clone()).map_err(|e| {
        BlockvizError::SchemaError(format!("malformed {} block list: {e}", format.name()))
    })
}

fn from_gemini(raw: &Value) -> Result<LayoutDocument> {
    let blocks = raw.get("blocks").ok_or_else(|| {
        BlockvizError::SchemaError("gemini payload is missing its `blocks` list".to_string())
    })?;
    Ok(LayoutDocument {
        format: LayoutFormat::Gemini,
        declared: declared_canvas(raw),
        blocks: parse_block_list(blocks, LayoutFormat::Gemini)?,
    })
}

fn from_document_ai(raw: &Value) -> Result<LayoutDocument> {
    // Absent or empty `pages` is a valid empty result, not an error.
    let first_page = raw
        .get("pages")
        .and_then(Value::as_array)
        .and_then(|pages| pages.first());
    let blocks = match first_page.and_then(|page| page.get("blocks")) {
        Some(list) => parse_block_list(list, LayoutFormat::DocumentAi)?,
        None => Vec::new(),
    };
    Ok(LayoutDocument {
        format: LayoutFormat::DocumentAi,
        declared: declared_canvas(raw),
        blocks,
    })
}
