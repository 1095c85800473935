// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative bar charts with stacked and side-by-side segments.
//!
//! A chart is built as a chain of segments:
//! - a base [`BarChart`] over any clonable sequence, with a [`HeightAdapter`] that turns each
//!   element into a signed height and a [`LabelFormatter`] for the category axis,
//! - any number of [`StackedBarChart`] segments attached with
//!   [`BarSegments::stacked_with`] (extend the current bar) or [`BarSegments::alongside`]
//!   (start a new bar beside it).
//!
//! [`BarSegments::layout`] computes pixel geometry and axis markers for a plot size, and
//! [`BarSegments::draw`] issues rectangles through a [`Renderer`]. [`render_chart`] adds the
//! surrounding chrome (marker labels, title, axis titles, gridlines and legend).
//!
//! ```
//! use barstack_charts::{BarSegments, bar_chart};
//! use kurbo::Size;
//!
//! let chart = bar_chart([320, -100, 420, 500])
//!     .with_style(|s| s.with_label("2008"))
//!     .stacked_with([100, 100, 220, 245], |s| s.with_label("2009"));
//! let (layout, _markers) = chart.layout(Size::new(640.0, 480.0));
//! assert_eq!(layout.max_bar_height, 745.0);
//! ```
//!
//! Rendering itself is out of scope: renderers decide how rectangles, hatches and text end up
//! on a surface.

#![no_std]

extern crate alloc;

mod adapter;
mod bar_chart;
mod chain;
#[cfg(test)]
mod chain_tests;
mod config;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod frame;
mod geometry;
mod legend;
mod markers;
mod render;
mod stacked;
mod style;

pub use adapter::{HeightAdapter, Scalar};
pub use bar_chart::{BarChart, bar_chart};
pub use barstack_text::{
    FontFamily, FontWeight, HeuristicTextMeasurer, TextAnchor, TextBaseline, TextMeasurer,
    TextMetrics, TextStyle,
};
pub use chain::{
    BarSegments, ColumnTally, DrawContinuation, LayoutContinuation, RunningDrawState,
    SegmentKind,
};
pub use config::{ChartConfig, Orientation};
pub use format::LabelFormatter;
pub use frame::{RenderedChart, render_chart};
pub use geometry::{ColumnGeometry, LayoutResult, ValueAxis};
pub use legend::{Legend, LegendItem};
pub use markers::{Marker, PlotMarkers, value_markers};
pub use render::{Renderer, TextPlacement};
pub use stacked::StackedBarChart;
pub use style::{Hatch, SegmentStyle, default_segment_color};
