//! Mapping declared-canvas coordinates onto the actual raster.
//!
//! Detectors report boxes against the resolution they assumed the page has
//! (`imageWidth`/`imageHeight`), which routinely differs from the pixel
//! dimensions of the raster being annotated. Everything here is pure;
//! callers log the computed factors for diagnostics.

use crate::error::{BlockvizError, Result};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Canvas dimensions, declared by a payload or taken from a raster.
///
/// Kept as `f64` because some detectors report fractional page dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width in pixels (or page units).
    pub width: f64,
    /// Height in pixels (or page units).
    pub height: f64,
}

impl CanvasSize {
    /// Creates a new `CanvasSize`.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of an actual raster.
    #[inline]
    #[must_use]
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }
}

/// Per-axis factors mapping a declared canvas onto the actual raster.
///
/// Both factors are strictly positive; `(1, 1)` when the declared and
/// actual dimensions match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    /// Horizontal factor (`actual.width / declared.width`).
    pub x: f64,
    /// Vertical factor (`actual.height / declared.height`).
    pub y: f64,
}

impl ScaleFactors {
    /// Computes the factors that map `declared` onto `actual`.
    ///
    /// # Errors
    ///
    /// [`BlockvizError::GeometryError`] when a declared dimension is zero
    /// or negative; failing here keeps inf/NaN out of every downstream
    /// coordinate.
    pub fn between(declared: CanvasSize, actual: CanvasSize) -> Result<Self> {
        if declared.width <= 0.0 || declared.height <= 0.0 {
            return Err(BlockvizError::GeometryError(format!(
                "declared canvas {}x{} must have positive dimensions",
                declared.width, declared.height
            )));
        }
        Ok(Self {
            x: actual.width / declared.width,
            y: actual.height / declared.height,
        })
    }

    /// True when no rescaling is needed on either axis.
    #[inline]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        (self.x - 1.0).abs() < f64::EPSILON && (self.y - 1.0).abs() < f64::EPSILON
    }

    /// Applies the factors to a reported rectangle.
    ///
    /// Each coordinate is truncated toward zero (`as` cast semantics, not
    /// rounding); truncation keeps rendered output byte-stable across
    /// reimplementations.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn apply(&self, rect: &Rect) -> PixelRect {
        PixelRect {
            x: (rect.x * self.x) as i64,
            y: (rect.y * self.y) as i64,
            width: (rect.width * self.x) as i64,
            height: (rect.height * self.y) as i64,
        }
    }
}

/// Rectangle in actual raster pixel space, produced by normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    /// Left edge in pixels.
    pub x: i64,
    /// Top edge in pixels.
    pub y: i64,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
}

impl PixelRect {
    /// Right edge (`x + width`).
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

/// Maps a reported rectangle onto the actual raster in one step.
///
/// # Errors
///
/// [`BlockvizError::GeometryError`] when a declared dimension is zero or
/// negative.
pub fn normalize(rect: &Rect, declared: CanvasSize, actual: CanvasSize) -> Result<PixelRect> {
    Ok(ScaleFactors::between(declared, actual)?.apply(rect))
}
