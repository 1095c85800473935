// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend swatches.
//!
//! A legend is a list of color swatches with text labels, one per labelled chain segment, laid
//! out top-to-bottom and then left-to-right into columns.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use barstack_text::{TextAnchor, TextBaseline, TextMeasurer, TextStyle};
use kurbo::{Point, Rect, Size};
use peniko::Color;
use peniko::color::palette::css;

use crate::render::{Renderer, TextPlacement};
use crate::style::{Hatch, SegmentStyle};

/// One legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// Swatch fill.
    pub color: Color,
    /// Swatch hatch.
    pub hatch: Hatch,
}

impl LegendItem {
    /// Convenience constructor for a solid swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            hatch: Hatch::None,
        }
    }

    /// The legend entry of a segment, or `None` if the segment is unlabelled.
    pub(crate) fn for_segment(style: &SegmentStyle) -> Option<Self> {
        if style.label.is_empty() {
            return None;
        }
        Some(Self {
            label: style.label.clone(),
            color: style.color,
            hatch: style.hatch,
        })
    }
}

/// Legend appearance and contents.
#[derive(Clone, Debug)]
pub struct Legend {
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Number of columns.
    pub columns: usize,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Padding between the frame and the rows.
    pub padding: f64,
    /// Label text style.
    pub text_style: TextStyle,
    /// Label color.
    pub text_fill: Color,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl Legend {
    /// Creates a single-column legend with default styling.
    pub fn new(items: Vec<LegendItem>) -> Self {
        Self {
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            columns: 1,
            column_gap: 12.0,
            padding: 6.0,
            text_style: TextStyle::new(10.0),
            text_fill: css::BLACK,
            items,
        }
    }

    /// Sets the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Sets the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Sets the label text style.
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    fn rows_per_column(&self) -> usize {
        self.items.len().div_ceil(self.columns.max(1))
    }

    fn row_height(&self, measurer: &dyn TextMeasurer) -> f64 {
        let text = measurer.measure("", &self.text_style).line_height();
        self.swatch_size.max(text)
    }

    fn column_widths(&self, measurer: &dyn TextMeasurer) -> Vec<f64> {
        let rows = self.rows_per_column().max(1);
        self.items
            .chunks(rows)
            .map(|column| {
                let label = measurer.max_advance(
                    &mut column.iter().map(|item| item.label.as_str()),
                    &self.text_style,
                );
                self.swatch_size + self.label_dx + label
            })
            .collect()
    }

    /// Measures the legend, including padding. An empty legend has zero size.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        if self.items.is_empty() {
            return Size::ZERO;
        }
        let widths = self.column_widths(measurer);
        let gaps = (widths.len() - 1) as f64 * self.column_gap;
        let rows = self.rows_per_column() as f64;
        let height = rows * self.row_height(measurer) + (rows - 1.0) * self.row_gap;
        Size::new(
            widths.iter().sum::<f64>() + gaps + 2.0 * self.padding,
            height + 2.0 * self.padding,
        )
    }

    /// Draws the legend with its top-left corner at `top_left`.
    ///
    /// Coordinates are in renderer space, so rows advance towards smaller y.
    pub fn draw(&self, renderer: &mut dyn Renderer, top_left: Point) {
        if self.items.is_empty() {
            return;
        }
        let size = self.measure(&*renderer);
        let frame = Rect::new(
            top_left.x,
            top_left.y - size.height,
            top_left.x + size.width,
            top_left.y,
        );
        renderer.draw_polyline(
            &[
                Point::new(frame.x0, frame.y0),
                Point::new(frame.x1, frame.y0),
                Point::new(frame.x1, frame.y1),
                Point::new(frame.x0, frame.y1),
                Point::new(frame.x0, frame.y0),
            ],
            1.0,
            css::GRAY,
            false,
        );

        let rows = self.rows_per_column().max(1);
        let row_height = self.row_height(&*renderer);
        let widths = self.column_widths(&*renderer);
        let placement = TextPlacement::new(TextAnchor::Start, TextBaseline::Middle);
        let mut x = top_left.x + self.padding;
        for (column, width) in self.items.chunks(rows).zip(widths) {
            for (row, item) in column.iter().enumerate() {
                let top = top_left.y - self.padding - row as f64 * (row_height + self.row_gap);
                let middle = top - 0.5 * row_height;
                let swatch = Rect::new(
                    x,
                    middle - 0.5 * self.swatch_size,
                    x + self.swatch_size,
                    middle + 0.5 * self.swatch_size,
                );
                renderer.draw_solid_rect(swatch, item.color, item.hatch);
                renderer.draw_text(
                    &item.label,
                    Point::new(x + self.swatch_size + self.label_dx, middle),
                    &self.text_style,
                    self.text_fill,
                    placement,
                );
            }
            x += width + self.column_gap;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use barstack_text::HeuristicTextMeasurer;

    use super::*;

    #[test]
    fn measure_accounts_for_columns() {
        let measurer = HeuristicTextMeasurer;
        let items = vec![
            LegendItem::solid("A", css::BLACK),
            LegendItem::solid("BBBB", css::BLACK),
            LegendItem::solid("CC", css::BLACK),
            LegendItem::solid("DDDDDD", css::BLACK),
        ];

        let one_col = Legend::new(items.clone()).with_columns(1);
        let two_col = Legend::new(items).with_columns(2);

        let s1 = one_col.measure(&measurer);
        let s2 = two_col.measure(&measurer);

        assert!(s2.width > s1.width);
        assert!(s2.height < s1.height);
    }

    #[test]
    fn empty_legend_has_no_size() {
        let legend = Legend::new(vec![]);
        assert_eq!(legend.measure(&HeuristicTextMeasurer), Size::ZERO);
    }

    #[test]
    fn unlabelled_segments_have_no_entry() {
        let style = SegmentStyle::for_depth(2);
        assert!(LegendItem::for_segment(&style).is_none());
        let item = LegendItem::for_segment(&style.with_label("Tax")).unwrap();
        assert_eq!(item.label, "Tax");
    }
}
