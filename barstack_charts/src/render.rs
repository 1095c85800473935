// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing backend interface.
//!
//! Charts never rasterize anything themselves. They compute geometry and issue a short list of
//! primitive commands through [`Renderer`]. Renderer space has its origin at the bottom-left
//! corner with y growing upwards; backends with a y-down surface (SVG, most canvases) flip
//! coordinates on their side.

extern crate alloc;

use alloc::vec::Vec;

use barstack_text::{TextAnchor, TextBaseline, TextMeasurer, TextMetrics, TextStyle};
use kurbo::{Point, Rect, Vec2};
use peniko::Color;

use crate::style::Hatch;

/// How a drawn label sits on its location.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextPlacement {
    /// Horizontal alignment relative to the location.
    pub anchor: TextAnchor,
    /// Vertical alignment relative to the location.
    pub baseline: TextBaseline,
    /// Counter-clockwise rotation about the location, in degrees.
    pub angle: f64,
}

impl TextPlacement {
    /// Creates an unrotated placement.
    pub fn new(anchor: TextAnchor, baseline: TextBaseline) -> Self {
        Self {
            anchor,
            baseline,
            angle: 0.0,
        }
    }

    /// Sets the rotation in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

/// A drawing backend.
///
/// Text measurement comes from the [`TextMeasurer`] supertrait so that chrome can be laid out
/// with the same metrics the backend will draw with.
pub trait Renderer: TextMeasurer {
    /// Fills `rect` with `fill`, then draws `hatch` over it.
    fn draw_solid_rect(&mut self, rect: Rect, fill: Color, hatch: Hatch);

    /// Draws a single line of text at `location`.
    fn draw_text(
        &mut self,
        text: &str,
        location: Point,
        style: &TextStyle,
        fill: Color,
        placement: TextPlacement,
    );

    /// Strokes an open polyline through `points`.
    fn draw_polyline(&mut self, points: &[Point], stroke_width: f64, stroke: Color, dashed: bool);
}

/// Forwards to another renderer with every coordinate shifted by `offset`.
pub(crate) struct Translated<'a> {
    inner: &'a mut dyn Renderer,
    offset: Vec2,
}

impl<'a> Translated<'a> {
    pub(crate) fn new(inner: &'a mut dyn Renderer, offset: Vec2) -> Self {
        Self { inner, offset }
    }
}

impl core::fmt::Debug for Translated<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Translated")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl TextMeasurer for Translated<'_> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.inner.measure(text, style)
    }
}

impl Renderer for Translated<'_> {
    fn draw_solid_rect(&mut self, rect: Rect, fill: Color, hatch: Hatch) {
        self.inner.draw_solid_rect(rect + self.offset, fill, hatch);
    }

    fn draw_text(
        &mut self,
        text: &str,
        location: Point,
        style: &TextStyle,
        fill: Color,
        placement: TextPlacement,
    ) {
        self.inner
            .draw_text(text, location + self.offset, style, fill, placement);
    }

    fn draw_polyline(&mut self, points: &[Point], stroke_width: f64, stroke: Color, dashed: bool) {
        let shifted: Vec<Point> = points.iter().map(|p| *p + self.offset).collect();
        self.inner
            .draw_polyline(&shifted, stroke_width, stroke, dashed);
    }
}
