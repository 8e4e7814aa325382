//! Axis-aligned rectangles and the overlap predicate.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in a single coordinate space.
///
/// Coordinates stay exactly as the upstream detector reported them; `width`
/// and `height` are never negative. Immutable once constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Creates a new `Rect` from its top-left corner and extent.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether two rectangles in the same coordinate space overlap.
    ///
    /// Comparisons are strict: rectangles that merely touch along an edge
    /// do not overlap, so abutting text columns never count against each
    /// other. Zero-area rectangles get no special handling.
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
