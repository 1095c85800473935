// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-wide configuration.
//!
//! A chart chain stores exactly one [`ChartConfig`], at its base segment. Every
//! attached segment forwards [`crate::BarSegments::config`] and
//! [`crate::BarSegments::config_mut`] to its parent, so the configuration can be read or
//! changed from the outermost chain value without copying it through each layer.

extern crate alloc;

use alloc::string::String;

use kurbo::Size;

/// Direction in which bars grow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Columns run along x; bars grow along y.
    #[default]
    Vertical,
    /// Columns run along y; bars grow along x.
    Horizontal,
}

impl Orientation {
    /// Returns `(category_extent, value_extent)` for a pixel size.
    pub fn extents(self, size: Size) -> (f64, f64) {
        match self {
            Self::Vertical => (size.width, size.height),
            Self::Horizontal => (size.height, size.width),
        }
    }
}

/// Layout settings and plot chrome shared by every segment of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Direction in which bars grow.
    pub orientation: Orientation,
    /// Minimum pixel gap between adjacent columns.
    ///
    /// At extreme column counts this cannot always be honored; a warning is logged instead.
    pub minimum_column_separation: f64,
    /// Minimum pixel gap between side-by-side bars within one column.
    pub minimum_series_separation: f64,
    /// Optional chart title.
    pub title: Option<String>,
    /// Optional title for the horizontal axis.
    pub x_label: Option<String>,
    /// Optional title for the vertical axis.
    pub y_label: Option<String>,
    /// Whether to draw gridlines at the value-axis markers.
    pub grid: bool,
}

impl ChartConfig {
    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the minimum column separation in pixels.
    pub fn with_minimum_column_separation(mut self, separation: f64) -> Self {
        self.minimum_column_separation = separation;
        self
    }

    /// Sets the minimum series separation in pixels.
    pub fn with_minimum_series_separation(mut self, separation: f64) -> Self {
        self.minimum_series_separation = separation;
        self
    }

    /// Sets the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the horizontal and vertical axis titles.
    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    /// Enables or disables value-axis gridlines.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            minimum_column_separation: 20.0,
            minimum_series_separation: 4.0,
            title: None,
            x_label: None,
            y_label: None,
            grid: false,
        }
    }
}
