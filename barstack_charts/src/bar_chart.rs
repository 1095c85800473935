// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The base segment of a bar chart.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt::Display;

use kurbo::Size;

use crate::adapter::{HeightAdapter, Scalar};
use crate::chain::{
    BarSegments, ColumnTally, DrawContinuation, LayoutContinuation, RunningDrawState,
};
use crate::config::ChartConfig;
use crate::format::LabelFormatter;
use crate::geometry::LayoutResult;
use crate::legend::LegendItem;
use crate::markers::{PlotMarkers, category_markers, value_markers};
use crate::render::Renderer;
use crate::style::SegmentStyle;

/// The bottom segment of a chart chain.
///
/// The base owns the chart's [`ChartConfig`] and its column labels, and it drives both passes:
/// every column of the chart corresponds to one iteration of the base's loop, including columns
/// beyond the end of its own data when attached segments are longer.
pub struct BarChart<I: IntoIterator> {
    values: I,
    adapter: HeightAdapter<I::Item>,
    formatter: LabelFormatter<I::Item>,
    style: SegmentStyle,
    config: ChartConfig,
}

impl<I: IntoIterator> core::fmt::Debug for BarChart<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BarChart")
            .field("style", &self.style)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Creates a bar chart of built-in numeric values, labelled with the values themselves.
///
/// ```
/// use barstack_charts::{BarSegments, bar_chart};
/// use kurbo::Size;
///
/// let chart = bar_chart([320, -100, 420, 500]);
/// let (layout, markers) = chart.layout(Size::new(400.0, 300.0));
/// assert_eq!(layout.num_columns, 4);
/// assert_eq!(markers.category_markers[1].label, "-100");
/// ```
pub fn bar_chart<I>(values: I) -> BarChart<I>
where
    I: IntoIterator + Clone,
    I::Item: Scalar + Display + 'static,
{
    BarChart::with_adapter(values, HeightAdapter::linear()).with_formatter(LabelFormatter::display())
}

impl<I> BarChart<I>
where
    I: IntoIterator + Clone,
    I::Item: 'static,
{
    /// Creates a bar chart whose heights come from `adapter`.
    ///
    /// Columns are labelled by index until a formatter is set.
    pub fn with_adapter(values: I, adapter: HeightAdapter<I::Item>) -> Self {
        Self {
            values,
            adapter,
            formatter: LabelFormatter::index(),
            style: SegmentStyle::for_depth(0),
            config: ChartConfig::default(),
        }
    }
}

impl<I> BarChart<I>
where
    I: IntoIterator + Clone,
{
    /// Sets the category-axis label formatter.
    pub fn with_formatter(mut self, formatter: LabelFormatter<I::Item>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Restyles the base segment.
    pub fn with_style(mut self, style: impl FnOnce(SegmentStyle) -> SegmentStyle) -> Self {
        self.style = style(self.style);
        self
    }

    /// Updates the chart configuration.
    pub fn with_config(mut self, config: impl FnOnce(ChartConfig) -> ChartConfig) -> Self {
        self.config = config(self.config);
        self
    }

    /// The base segment's style.
    pub fn style(&self) -> &SegmentStyle {
        &self.style
    }
}

impl<I> BarSegments for BarChart<I>
where
    I: IntoIterator + Clone,
{
    fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    fn segment_count(&self) -> usize {
        1
    }

    fn collect_legend_items(&self, items: &mut Vec<LegendItem>) {
        items.extend(LegendItem::for_segment(&self.style));
    }

    fn layout_columns(
        &self,
        size: Size,
        next: &mut LayoutContinuation<'_>,
    ) -> (LayoutResult, PlotMarkers) {
        let mut values = self.values.clone().into_iter().fuse();
        let mut labels = Vec::new();
        let mut num_series = 1;
        let mut min_bar_height = 0.0_f64;
        let mut max_bar_height = 0.0_f64;

        loop {
            let mut tally = ColumnTally::new();
            let element = values.next();
            if let Some(element) = &element {
                tally.add(self.adapter.height(element));
            }
            let above = next(&mut tally);
            if element.is_none() && !above {
                break;
            }
            let (min, max) = tally.finish();
            min_bar_height = min_bar_height.min(min);
            max_bar_height = max_bar_height.max(max);
            num_series = num_series.max(tally.series_count());
            labels.push(self.formatter.label(element.as_ref(), labels.len()));
        }

        let num_columns = labels.len();
        if num_columns == 0 {
            return (
                LayoutResult::empty(self.config.orientation),
                PlotMarkers::default(),
            );
        }

        let layout = LayoutResult::compute(
            &self.config,
            size,
            num_columns,
            num_series,
            min_bar_height,
            max_bar_height,
        );
        let (_, value_extent) = self.config.orientation.extents(size);
        let markers = PlotMarkers {
            value_markers: value_markers(
                layout.value_origin(),
                layout.scale,
                value_extent,
                min_bar_height,
                max_bar_height,
            ),
            category_markers: category_markers(&layout, labels),
        };
        (layout, markers)
    }

    fn draw_columns(
        &self,
        layout: &LayoutResult,
        renderer: &mut dyn Renderer,
        next: &mut DrawContinuation<'_>,
    ) {
        let mut values = self.values.clone().into_iter().fuse();
        for column in 0..layout.num_columns {
            let mut state = RunningDrawState::new(layout, column);
            let height = values
                .next()
                .map_or(0.0, |element| self.adapter.height(&element));
            state.push_bar(layout, height, &self.style, renderer);
            next(&mut state, &mut *renderer);
        }

        let mut column = layout.num_columns;
        loop {
            let mut state = RunningDrawState::new(layout, column);
            if !next(&mut state, &mut *renderer) {
                break;
            }
            log::warn!("drew column {column} beyond the {} laid out", layout.num_columns);
            column += 1;
        }

        assert!(
            values.next().is_none(),
            "base segment has data beyond the {} laid-out columns; \
             the layout was computed for a different chart",
            layout.num_columns
        );
    }
}
