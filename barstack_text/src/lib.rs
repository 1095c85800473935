// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for chart chrome.
//!
//! Bar charts only place text in a few spots: axis marker labels, the chart
//! title, the axis titles and the legend. Placing those needs rough metrics
//! before anything is drawn (how wide is the widest value label, how tall is
//! the title line), but actual shaping happens in whatever renderer the chart
//! is drawn with. This crate is the narrow interface between the two:
//! - [`TextMeasurer`] is implemented by renderers (or by [`HeuristicTextMeasurer`]),
//! - [`TextStyle`] and [`TextMetrics`] carry the inputs and outputs, and
//! - [`TextAnchor`] / [`TextBaseline`] describe how a drawn label sits on its point.
//!
//! The crate is `no_std` and has no dependencies.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface used for chart chrome layout.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers split on `\n` themselves.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Returns the widest advance among `labels`, or `0.0` if there are none.
    fn max_advance<'a>(
        &self,
        labels: &mut dyn Iterator<Item = &'a str>,
        style: &TextStyle,
    ) -> f64 {
        labels
            .map(|label| self.measure(label, style).advance_width)
            .fold(0.0, f64::max)
    }
}

/// Text styling inputs relevant to measurement and drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a sans-serif, normal-weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Returns a copy of this style with a bold weight.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.font_weight = FontWeight::BOLD;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Horizontal placement of a label relative to its anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The point is at the start of the text.
    #[default]
    Start,
    /// The point is at the horizontal center of the text.
    Middle,
    /// The point is at the end of the text.
    End,
}

/// Vertical placement of a label relative to its anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The point is on the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The point is at the vertical middle of the line.
    Middle,
    /// The point is at the top of the line.
    Hanging,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A tiny heuristic text measurer suitable for tests and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}
