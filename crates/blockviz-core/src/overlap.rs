//! Overlap counting and severity tiers.
//!
//! Dense clusters of mutually overlapping boxes usually mean the detector
//! mis-segmented a region, so each block is colored by how many other
//! blocks its box intersects. Counting is O(n²) pairwise; block counts are
//! tens to low hundreds per page, so no spatial index is needed.

use crate::geometry::Rect;

/// Severity bucket for how many other blocks a block's box intersects.
///
/// The tier-to-color mapping is stable: it doubles as the legend printed
/// with every visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapTier {
    /// No intersections with any other block.
    None,
    /// 1-2 intersections.
    Low,
    /// 3-4 intersections.
    Medium,
    /// 5 or more intersections.
    High,
}

impl OverlapTier {
    /// Buckets an overlap count.
    #[inline]
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1..=2 => Self::Low,
            3..=4 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Stable display color as RGB.
    #[inline]
    #[must_use]
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            Self::None => (0, 255, 0),
            Self::Low => (255, 165, 0),
            Self::Medium => (255, 0, 0),
            Self::High => (255, 0, 255),
        }
    }

    /// Color name for the legend.
    #[inline]
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Self::None => "green",
            Self::Low => "orange",
            Self::Medium => "red",
            Self::High => "magenta",
        }
    }

    /// Human-readable bucket description for the legend and histogram.
    #[inline]
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::None => "no overlaps",
            Self::Low => "1-2 overlaps",
            Self::Medium => "3-4 overlaps",
            Self::High => "5+ overlaps",
        }
    }
}

/// Counts, for each rectangle, how many OTHER rectangles it overlaps.
///
/// Comparison is by index, not geometry: a rectangle is never compared
/// against itself, but identical geometry at a different index counts.
/// All rectangles must share one coordinate space.
#[must_use]
pub fn overlap_counts(rects: &[Rect]) -> Vec<usize> {
    rects
        .iter()
        .enumerate()
        .map(|(i, rect)| {
            rects
                .iter()
                .enumerate()
                .filter(|&(j, other)| i != j && rect.overlaps(other))
                .count()
        })
        .collect()
}

/// One tier per rectangle, same order as the input.
#[must_use]
pub fn classify(rects: &[Rect]) -> Vec<OverlapTier> {
    overlap_counts(rects)
        .into_iter()
        .map(OverlapTier::from_count)
        .collect()
}

/// Per-tier totals for the console report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierHistogram {
    /// Blocks with no intersections.
    pub none: usize,
    /// Blocks with 1-2 intersections.
    pub low: usize,
    /// Blocks with 3-4 intersections.
    pub medium: usize,
    /// Blocks with 5+ intersections.
    pub high: usize,
}

impl TierHistogram {
    /// Tallies a tier sequence.
    #[must_use]
    pub fn tally(tiers: &[OverlapTier]) -> Self {
        let mut hist = Self::default();
        for tier in tiers {
            match tier {
                OverlapTier::None => hist.none += 1,
                OverlapTier::Low => hist.low += 1,
                OverlapTier::Medium => hist.medium += 1,
                OverlapTier::High => hist.high += 1,
            }
        }
        hist
    }
}
