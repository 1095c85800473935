// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column, series and value-axis geometry.
//!
//! Everything here is plain arithmetic on pixel extents. Layout space has its origin at the
//! corner where the category axis meets the value axis, with values growing away from the
//! category axis (upwards for vertical charts, rightwards for horizontal ones).

use kurbo::{Point, Rect, Size};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::config::{ChartConfig, Orientation};

/// Fraction of the value extent reserved beyond the data on each side of the origin that has
/// bars.
const VALUE_MARGIN: f64 = 0.1;

/// Sizes and gaps along the category axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnGeometry {
    /// Whole-pixel width of one column (all of its series).
    pub column_size: f64,
    /// Gap between columns, including before the first and after the last.
    pub column_separation: f64,
    /// Whole-pixel width of one bar.
    pub bar_size: f64,
    /// Gap between side-by-side bars in a column.
    pub series_separation: f64,
}

impl ColumnGeometry {
    /// Distributes `extent` pixels over `num_columns` columns of `num_series` bars each.
    ///
    /// Bar and column sizes are whole pixels. Sizes never go below one pixel per bar, so at
    /// extreme column counts the configured minimum separations may not be honored; that is
    /// logged as a warning and the geometry is returned anyway.
    pub fn compute(
        extent: f64,
        num_columns: usize,
        min_column_separation: f64,
        num_series: usize,
        min_series_separation: f64,
    ) -> Self {
        let num_series = num_series.max(1);
        if num_columns == 0 {
            return Self {
                column_size: num_series as f64,
                column_separation: 0.0,
                bar_size: 1.0,
                series_separation: 0.0,
            };
        }
        let columns = num_columns as f64;
        let series = num_series as f64;

        let space_for_columns = extent - (columns + 1.0) * min_column_separation;
        let column_size = (space_for_columns / columns).floor().max(series);
        // Rounding down can leave a large gap at the end (800 columns in 900 pixels leaves 100
        // pixels), so the slack is spread over the separations instead.
        let column_separation = (extent - columns * column_size) / (columns + 1.0);
        if column_separation < min_column_separation {
            log::warn!(
                "not enough space to honor the minimum column separation \
                 ({column_separation:.2}px < {min_column_separation}px)"
            );
        }

        let space_for_bars = column_size - (series - 1.0) * min_series_separation;
        let bar_size = (space_for_bars / series).floor().max(1.0);
        let series_separation = if num_series > 1 {
            (column_size - series * bar_size) / (series - 1.0)
        } else {
            0.0
        };
        if num_series > 1 && series_separation < min_series_separation {
            log::warn!(
                "not enough space to honor the minimum series separation \
                 ({series_separation:.2}px < {min_series_separation}px)"
            );
        }

        Self {
            column_size,
            column_separation,
            bar_size,
            series_separation,
        }
    }
}

/// Scale and origin along the value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueAxis {
    /// Pixels per data unit.
    pub scale: f64,
    /// Pixel offset of the zero value from the category axis.
    pub origin: f64,
}

impl ValueAxis {
    /// Fits `[min, max]` into `extent` pixels.
    ///
    /// `min` and `max` must bracket zero. A margin is kept past the data on each side of the
    /// origin that has bars. If the range or the extent is degenerate the scale falls back to
    /// one pixel per unit.
    pub fn compute(extent: f64, min: f64, max: f64) -> Self {
        let margin = extent * VALUE_MARGIN;
        let far_margin = if max > 0.0 { margin } else { 0.0 };
        let near_margin = if min < 0.0 { margin } else { 0.0 };
        let data_extent = extent - far_margin - near_margin;

        let mut scale = data_extent / (max - min);
        if !scale.is_finite() || scale <= 0.0 {
            scale = 1.0;
        }
        let origin = (min.abs() * scale + near_margin).round();
        Self { scale, origin }
    }
}

/// The result of laying out a bar chart for one pixel size.
///
/// Produced by [`crate::BarSegments::layout`] and consumed by [`crate::BarSegments::draw`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutResult {
    /// Direction in which bars grow.
    pub orientation: Orientation,
    /// Pixels per data unit.
    pub scale: f64,
    /// The zero point in layout space.
    ///
    /// `(0, origin)` for vertical charts and `(origin, 0)` for horizontal ones.
    pub origin: Point,
    /// Number of columns along the category axis.
    pub num_columns: usize,
    /// Number of side-by-side bars per column.
    pub num_series: usize,
    /// Column width in pixels.
    pub column_size: f64,
    /// Bar width in pixels.
    pub bar_size: f64,
    /// Gap between columns.
    pub column_separation: f64,
    /// Gap between bars within a column.
    pub series_separation: f64,
    /// Lowest stacked extent over all columns (never above zero).
    pub min_bar_height: f64,
    /// Highest stacked extent over all columns (never below zero).
    pub max_bar_height: f64,
}

impl LayoutResult {
    /// The layout of a chart without data.
    pub fn empty(orientation: Orientation) -> Self {
        Self {
            orientation,
            scale: 1.0,
            origin: Point::ZERO,
            num_columns: 0,
            num_series: 1,
            column_size: 0.0,
            bar_size: 1.0,
            column_separation: 0.0,
            series_separation: 0.0,
            min_bar_height: 0.0,
            max_bar_height: 0.0,
        }
    }

    /// Computes geometry for the aggregated chart extents.
    pub(crate) fn compute(
        config: &ChartConfig,
        size: Size,
        num_columns: usize,
        num_series: usize,
        min_bar_height: f64,
        max_bar_height: f64,
    ) -> Self {
        let orientation = config.orientation;
        let (category_extent, value_extent) = orientation.extents(size);
        if num_columns as f64 > category_extent {
            log::warn!(
                "chart is too small: less than 1 pixel per column \
                 ({num_columns} columns in {category_extent}px)"
            );
        }
        let columns = ColumnGeometry::compute(
            category_extent,
            num_columns,
            config.minimum_column_separation,
            num_series,
            config.minimum_series_separation,
        );
        let axis = ValueAxis::compute(value_extent, min_bar_height, max_bar_height);
        let origin = match orientation {
            Orientation::Vertical => Point::new(0.0, axis.origin),
            Orientation::Horizontal => Point::new(axis.origin, 0.0),
        };
        log::debug!(
            "bar layout: {num_columns} columns x {num_series} series, bar {}px, scale {}",
            columns.bar_size,
            axis.scale
        );
        Self {
            orientation,
            scale: axis.scale,
            origin,
            num_columns,
            num_series: num_series.max(1),
            column_size: columns.column_size,
            bar_size: columns.bar_size,
            column_separation: columns.column_separation,
            series_separation: columns.series_separation,
            min_bar_height,
            max_bar_height,
        }
    }

    /// Offset of the origin along the value axis.
    pub fn value_origin(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.origin.y,
            Orientation::Horizontal => self.origin.x,
        }
    }

    /// Start of column `index` along the category axis.
    pub fn column_location(&self, index: usize) -> f64 {
        index as f64 * self.column_size + (index + 1) as f64 * self.column_separation
    }

    /// Center of column `index` along the category axis.
    pub fn marker_location(&self, index: usize) -> f64 {
        self.column_location(index) + 0.5 * self.column_size
    }

    /// Distance between the starts of adjacent side-by-side bars.
    pub fn series_step(&self) -> f64 {
        self.bar_size + self.series_separation
    }

    /// The rectangle of a bar starting at `axis_location` on the category axis and spanning
    /// `length` pixels from `start` pixels past the origin.
    ///
    /// Negative lengths extend toward the category axis; the returned rectangle is normalized.
    pub fn bar_rect(&self, axis_location: f64, start: f64, length: f64) -> Rect {
        let v0 = self.value_origin() + start;
        let v1 = v0 + length;
        let c0 = axis_location;
        let c1 = axis_location + self.bar_size;
        match self.orientation {
            Orientation::Vertical => Rect::new(c0, v0, c1, v1).abs(),
            Orientation::Horizontal => Rect::new(v0, c0, v1, c1).abs(),
        }
    }
}
