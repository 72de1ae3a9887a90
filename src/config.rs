//! Configuration for the layout and rendering pipeline.

use std::ops::RangeInclusive;

use crate::renderers::charset::CharSet;

/// Maximum number of fitted text lines a node carries.
pub const MAX_TEXT_LINES: usize = 2;

/// Box widths and heights the pipeline honours; values outside are clamped.
pub const NODE_SIZE_RANGE: RangeInclusive<usize> = 3..=200;

/// Gaps between boxes the pipeline honours; larger values are clamped.
pub const SPACING_RANGE: RangeInclusive<usize> = 0..=100;

/// Fixed box geometry and glyph set shared by layout and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width of every node box, borders included.
    pub node_width: usize,
    /// Height of every node box, borders included.
    pub node_height: usize,
    /// Blank rows between vertically adjacent boxes.
    pub v_spacing: usize,
    /// Blank columns between horizontally adjacent boxes.
    pub h_spacing: usize,
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            node_width: 25,
            node_height: 5,
            v_spacing: 3,
            h_spacing: 7,
            charset: CharSet::Unicode,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters available to a single line of node text.
    pub fn max_text_width(&self) -> usize {
        clamp(self.node_width, &NODE_SIZE_RANGE).saturating_sub(4)
    }

    pub(crate) fn width(&self) -> i64 {
        coord(self.node_width, &NODE_SIZE_RANGE)
    }

    pub(crate) fn height(&self) -> i64 {
        coord(self.node_height, &NODE_SIZE_RANGE)
    }

    pub(crate) fn vertical_gap(&self) -> i64 {
        coord(self.v_spacing, &SPACING_RANGE)
    }

    pub(crate) fn horizontal_gap(&self) -> i64 {
        coord(self.h_spacing, &SPACING_RANGE)
    }
}

fn clamp(value: usize, range: &RangeInclusive<usize>) -> usize {
    value.clamp(*range.start(), *range.end())
}

fn coord(value: usize, range: &RangeInclusive<usize>) -> i64 {
    i64::try_from(clamp(value, range)).unwrap_or(i64::MAX)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
