// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The segment chain behind every bar chart.
//!
//! A chart is a [`crate::BarChart`] base segment with zero or more
//! [`crate::StackedBarChart`] segments attached on top, each owning the chain below it.
//! Both passes over a chart (layout and draw) are continuation chains: each segment wraps the
//! continuation handed to it by the segment above and passes the wrapped continuation down to
//! its parent. The base then drives iteration, invoking the composed continuation once per
//! column, so every segment's iterator advances in lockstep with the base's column index.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Size;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::adapter::{HeightAdapter, Scalar};
use crate::config::ChartConfig;
use crate::geometry::LayoutResult;
use crate::legend::LegendItem;
use crate::markers::PlotMarkers;
use crate::render::Renderer;
use crate::stacked::StackedBarChart;
use crate::style::SegmentStyle;

/// How an attached segment combines with the segments below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Extends the current bar, on the positive or negative side by the sign of each value.
    Stack,
    /// Starts a new bar beside the current one in the same column.
    Series,
}

/// Per-column height bookkeeping for the layout pass.
///
/// Each bar slot keeps one signed subtotal. Values of opposite sign stacked in the same slot
/// cancel out, and only the net height of each slot reaches the column's extents.
#[derive(Clone, Debug)]
pub struct ColumnTally {
    subtotal: f64,
    max_positive: f64,
    min_negative: f64,
    series_count: usize,
}

impl ColumnTally {
    pub(crate) fn new() -> Self {
        Self {
            subtotal: 0.0,
            max_positive: 0.0,
            min_negative: 0.0,
            series_count: 1,
        }
    }

    /// Adds one value to the bar being built. Non-finite heights contribute nothing.
    pub(crate) fn add(&mut self, height: f64) {
        if height.is_finite() {
            self.subtotal += height;
        }
    }

    fn collapse(&mut self) {
        self.max_positive = self.max_positive.max(self.subtotal);
        self.min_negative = self.min_negative.min(self.subtotal);
        self.subtotal = 0.0;
    }

    /// Closes the current bar and starts the next one beside it.
    pub(crate) fn begin_series(&mut self) {
        self.collapse();
        self.series_count += 1;
    }

    /// Closes the last bar and returns the column's `(min, max)` extents.
    pub(crate) fn finish(&mut self) -> (f64, f64) {
        self.collapse();
        (self.min_negative, self.max_positive)
    }

    /// Number of side-by-side bars in this column so far.
    pub fn series_count(&self) -> usize {
        self.series_count
    }
}

/// Per-column pixel bookkeeping for the draw pass.
#[derive(Clone, Debug)]
pub struct RunningDrawState {
    column: usize,
    axis_location: f64,
    positive: f64,
    negative: f64,
}

impl RunningDrawState {
    pub(crate) fn new(layout: &LayoutResult, column: usize) -> Self {
        Self {
            column,
            axis_location: layout.column_location(column),
            positive: 0.0,
            negative: 0.0,
        }
    }

    /// Index of the column being drawn.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Start of the current bar along the category axis.
    pub fn axis_location(&self) -> f64 {
        self.axis_location
    }

    /// Moves to the next bar slot in the column and resets both extents.
    pub(crate) fn begin_series(&mut self, layout: &LayoutResult) {
        self.axis_location += layout.series_step();
        self.positive = 0.0;
        self.negative = 0.0;
    }

    /// Draws one segment of the current bar and extends the matching extent.
    ///
    /// The segment abuts the positive extent for non-negative heights and the negative extent
    /// otherwise. Its pixel length is `ceil(height * scale)`.
    pub(crate) fn push_bar(
        &mut self,
        layout: &LayoutResult,
        height: f64,
        style: &SegmentStyle,
        renderer: &mut dyn Renderer,
    ) {
        let length = if height.is_finite() {
            (height * layout.scale).ceil()
        } else {
            0.0
        };
        let rect = if length >= 0.0 {
            let rect = layout.bar_rect(self.axis_location, self.positive, length);
            self.positive += length;
            rect
        } else {
            let rect = layout.bar_rect(self.axis_location, self.negative, length);
            self.negative += length;
            rect
        };
        renderer.draw_solid_rect(rect, style.color, style.hatch);
    }
}

/// The layout continuation: contributes to a column's tally and reports whether any segment
/// from here up had data for it.
pub type LayoutContinuation<'a> = dyn FnMut(&mut ColumnTally) -> bool + 'a;

/// The draw continuation: draws a column's segments and reports whether any segment from here
/// up had data for it.
pub type DrawContinuation<'a> = dyn FnMut(&mut RunningDrawState, &mut dyn Renderer) -> bool + 'a;

/// A node of a bar chart chain.
///
/// Implemented by [`crate::BarChart`] (the base) and [`crate::StackedBarChart`] (every attached
/// segment). Chart code usually only calls [`BarSegments::layout`], [`BarSegments::draw`], the
/// attachment builders and the configuration accessors.
pub trait BarSegments {
    /// The chart-wide configuration, stored at the base.
    fn config(&self) -> &ChartConfig;

    /// Mutable access to the chart-wide configuration.
    fn config_mut(&mut self) -> &mut ChartConfig;

    /// Number of segments in the chain, counting the base.
    fn segment_count(&self) -> usize;

    /// Appends the legend entries of this segment and everything below it, base first.
    fn collect_legend_items(&self, items: &mut Vec<LegendItem>);

    /// Runs the layout pass with `next` as the contribution of the segments above this one.
    fn layout_columns(
        &self,
        size: Size,
        next: &mut LayoutContinuation<'_>,
    ) -> (LayoutResult, PlotMarkers);

    /// Runs the draw pass with `next` drawing the segments above this one.
    fn draw_columns(
        &self,
        layout: &LayoutResult,
        renderer: &mut dyn Renderer,
        next: &mut DrawContinuation<'_>,
    );

    /// Legend entries for every labelled segment, base first, in attachment order.
    fn legend_items(&self) -> Vec<LegendItem> {
        let mut items = Vec::new();
        self.collect_legend_items(&mut items);
        items
    }

    /// Computes the geometry and axis markers for a plot area of `size` pixels.
    ///
    /// This is a pure function of the chain and `size`: every segment's data is re-iterated
    /// from a fresh clone.
    fn layout(&self, size: Size) -> (LayoutResult, PlotMarkers) {
        self.layout_columns(size, &mut |_: &mut ColumnTally| false)
    }

    /// Draws every bar of the chart.
    ///
    /// `layout` must come from [`BarSegments::layout`] on this same chain.
    ///
    /// # Panics
    ///
    /// Panics if a segment still has data after the last laid-out column has been drawn, which
    /// means `layout` was computed for a different chart.
    fn draw(&self, layout: &LayoutResult, renderer: &mut dyn Renderer) {
        self.draw_columns(
            layout,
            renderer,
            &mut |_: &mut RunningDrawState, _: &mut dyn Renderer| false,
        );
    }

    /// Stacks `values` on top of each column's current bar.
    fn stacked_with<J>(
        self,
        values: J,
        style: impl FnOnce(SegmentStyle) -> SegmentStyle,
    ) -> StackedBarChart<Self, J>
    where
        Self: Sized,
        J: IntoIterator + Clone,
        J::Item: Scalar + 'static,
    {
        self.stacked_with_adapter(values, HeightAdapter::linear(), style)
    }

    /// Stacks `values` on top of each column's current bar, measuring them with `adapter`.
    fn stacked_with_adapter<J>(
        self,
        values: J,
        adapter: HeightAdapter<J::Item>,
        style: impl FnOnce(SegmentStyle) -> SegmentStyle,
    ) -> StackedBarChart<Self, J>
    where
        Self: Sized,
        J: IntoIterator + Clone,
    {
        StackedBarChart::new(self, SegmentKind::Stack, values, adapter, style)
    }

    /// Draws `values` as a new bar beside each column's current bar.
    fn alongside<J>(
        self,
        values: J,
        style: impl FnOnce(SegmentStyle) -> SegmentStyle,
    ) -> StackedBarChart<Self, J>
    where
        Self: Sized,
        J: IntoIterator + Clone,
        J::Item: Scalar + 'static,
    {
        self.alongside_with_adapter(values, HeightAdapter::linear(), style)
    }

    /// Draws `values` as a new bar beside each column's current bar, measuring them with
    /// `adapter`.
    fn alongside_with_adapter<J>(
        self,
        values: J,
        adapter: HeightAdapter<J::Item>,
        style: impl FnOnce(SegmentStyle) -> SegmentStyle,
    ) -> StackedBarChart<Self, J>
    where
        Self: Sized,
        J: IntoIterator + Clone,
    {
        StackedBarChart::new(self, SegmentKind::Series, values, adapter, style)
    }
}
