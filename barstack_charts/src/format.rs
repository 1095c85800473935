// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label formatting for axis markers.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Display;

/// Produces the category-axis label for a column.
///
/// The formatter receives the base segment's element for the column and the column index. The
/// element is `None` when the chart has more columns than the base segment has data.
pub struct LabelFormatter<T> {
    format: Arc<dyn Fn(Option<&T>, usize) -> String>,
}

impl<T> Clone for LabelFormatter<T> {
    fn clone(&self) -> Self {
        Self {
            format: self.format.clone(),
        }
    }
}

impl<T> core::fmt::Debug for LabelFormatter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LabelFormatter")
            .field("format", &"<fn>")
            .finish()
    }
}

impl<T: 'static> LabelFormatter<T> {
    /// Uses a custom closure.
    pub fn custom(format: impl Fn(Option<&T>, usize) -> String + 'static) -> Self {
        Self {
            format: Arc::new(format),
        }
    }

    /// Labels each column with its index.
    pub fn index() -> Self {
        Self::custom(|_, index| index.to_string())
    }

    /// Looks each column's label up by index; columns past the end get an empty label.
    pub fn array<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        let labels: Arc<[String]> = labels.into_iter().map(Into::into).collect::<Vec<_>>().into();
        Self::custom(move |_, index| labels.get(index).cloned().unwrap_or_default())
    }
}

impl<T: Display + 'static> LabelFormatter<T> {
    /// Stringifies the element; padding columns get an empty label.
    pub fn display() -> Self {
        Self::custom(|element, _| element.map(ToString::to_string).unwrap_or_default())
    }
}

impl<T> LabelFormatter<T> {
    /// Returns the label for column `index`.
    pub fn label(&self, element: Option<&T>, index: usize) -> String {
        (self.format)(element, index)
    }
}

/// Formats a value-axis marker label.
///
/// Values are rounded to whole data units, and negative zero prints as `0`.
pub(crate) fn format_marker_value(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    format!("{value}")
}
