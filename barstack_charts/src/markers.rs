// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis ticks for the value and category axes.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::config::Orientation;
use crate::format::format_marker_value;
use crate::geometry::LayoutResult;

/// Upper bound on the number of value-axis ticks across the whole extent.
const MAX_DIVISIONS: f64 = 50.0;

/// A single tick: its offset along the axis and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Offset along the axis in layout space.
    pub location: f64,
    /// Text drawn next to the tick.
    pub label: String,
}

/// Ticks for both axes of a laid-out chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotMarkers {
    /// Ticks along the axis bars grow on.
    pub value_markers: Vec<Marker>,
    /// One tick per column, at the column's center.
    pub category_markers: Vec<Marker>,
}

impl PlotMarkers {
    /// Ticks along the horizontal axis.
    pub fn x_markers(&self, orientation: Orientation) -> &[Marker] {
        match orientation {
            Orientation::Vertical => &self.category_markers,
            Orientation::Horizontal => &self.value_markers,
        }
    }

    /// Ticks along the vertical axis.
    pub fn y_markers(&self, orientation: Orientation) -> &[Marker] {
        match orientation {
            Orientation::Vertical => &self.value_markers,
            Orientation::Horizontal => &self.category_markers,
        }
    }
}

/// Digits in the integer part of `value`, ignoring sign. Zero has none.
fn integer_digits(value: f64) -> i32 {
    let mut remaining = value.abs().trunc();
    if !remaining.is_finite() {
        return 0;
    }
    let mut digits = 0;
    while remaining >= 1.0 {
        remaining = (remaining / 10.0).trunc();
        digits += 1;
    }
    digits
}

/// Data-unit distance between ticks: a power of ten one or two orders below the range.
fn marker_step(min: f64, max: f64) -> f64 {
    let digits = integer_digits(max).max(integer_digits(min));
    if digits > 1 && max <= 10_f64.powi(digits - 1) {
        10_f64.powi(digits - 2)
    } else if digits > 1 {
        10_f64.powi(digits - 1)
    } else {
        1.0
    }
}

/// Generates value-axis ticks outward from `origin`.
///
/// `extent` is the length of the value axis in pixels and `[min, max]` the data range, which
/// must include zero. Ticks above the origin come first, in increasing order, followed by the
/// ticks below it in decreasing order.
pub fn value_markers(origin: f64, scale: f64, extent: f64, min: f64, max: f64) -> Vec<Marker> {
    let marker = |location: f64| Marker {
        location,
        label: format_marker_value(((location - origin) / scale).round()),
    };
    if max - min == 0.0 || scale.is_nan() || scale <= 0.0 {
        return alloc::vec![marker(origin)];
    }

    let mut increment = marker_step(min, max) * scale;
    if extent / increment > MAX_DIVISIONS {
        increment = extent / MAX_DIVISIONS;
    }
    if increment.is_nan() || increment <= 0.0 {
        return alloc::vec![marker(origin)];
    }

    let mut markers = Vec::new();
    let mut location = origin;
    while location <= extent {
        if location >= 0.0 {
            markers.push(marker(location));
        }
        location += increment;
    }
    location = origin - increment;
    while location > 0.0 {
        markers.push(marker(location));
        location -= increment;
    }
    markers
}

/// One tick per column, centered on the column and labeled by `labels[index]`.
pub(crate) fn category_markers(layout: &LayoutResult, labels: Vec<String>) -> Vec<Marker> {
    labels
        .into_iter()
        .enumerate()
        .take(layout.num_columns)
        .map(|(index, label)| Marker {
            location: layout.marker_location(index),
            label,
        })
        .collect()
}
