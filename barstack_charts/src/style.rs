// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-segment display attributes.

extern crate alloc;

use alloc::string::String;

use peniko::Color;
use peniko::color::palette::css;

/// Fill pattern drawn over a bar's solid color.
///
/// Renderers that cannot hatch may ignore this and draw a solid fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Hatch {
    /// Solid fill only.
    #[default]
    None,
    /// Diagonal lines rising to the right (`/`).
    ForwardSlash,
    /// Diagonal lines falling to the right (`\`).
    BackwardSlash,
    /// Vertical lines.
    Vertical,
    /// Horizontal lines.
    Horizontal,
    /// Vertical and horizontal lines.
    Grid,
    /// Both diagonals.
    Cross,
    /// Circle outlines.
    HollowCircle,
    /// Filled circles.
    FilledCircle,
}

const PALETTE: [Color; 8] = [
    css::CORNFLOWER_BLUE,
    css::ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::CRIMSON,
    css::GOLDENROD,
    css::SLATE_BLUE,
    css::DARK_CYAN,
    css::HOT_PINK,
];

/// Returns the default fill for the segment at `depth` in a chain (the base is depth `0`).
///
/// Colors are taken from named CSS colors and repeat after eight segments.
pub fn default_segment_color(depth: usize) -> Color {
    PALETTE[depth % PALETTE.len()]
}

/// Display attributes of one segment: legend label, fill color and hatch.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentStyle {
    /// Legend label. Empty labels are left out of the legend.
    pub label: String,
    /// Fill color.
    pub color: Color,
    /// Hatch pattern drawn over the fill.
    pub hatch: Hatch,
}

impl SegmentStyle {
    /// Creates an unlabelled style with the default fill for the segment at `depth`.
    pub fn for_depth(depth: usize) -> Self {
        Self {
            label: String::new(),
            color: default_segment_color(depth),
            hatch: Hatch::None,
        }
    }

    /// Sets the legend label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the hatch pattern.
    pub fn with_hatch(mut self, hatch: Hatch) -> Self {
        self.hatch = hatch;
        self
    }
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self::for_depth(0)
    }
}
