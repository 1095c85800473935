// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;

use barstack_text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
use kurbo::{Point, Rect, Size};
use peniko::Color;
use peniko::color::palette::css;

use crate::{
    BarChart, BarSegments, HeightAdapter, Hatch, LabelFormatter, Orientation, Renderer,
    TextPlacement, bar_chart, render_chart,
};

/// Records every draw call instead of rasterizing.
#[derive(Debug, Default)]
struct RecordingRenderer {
    rects: Vec<(Rect, Color, Hatch)>,
    texts: Vec<(String, Point, TextPlacement)>,
    polylines: Vec<(Vec<Point>, bool)>,
}

impl TextMeasurer for RecordingRenderer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        HeuristicTextMeasurer.measure(text, style)
    }
}

impl Renderer for RecordingRenderer {
    fn draw_solid_rect(&mut self, rect: Rect, fill: Color, hatch: Hatch) {
        self.rects.push((rect, fill, hatch));
    }

    fn draw_text(
        &mut self,
        text: &str,
        location: Point,
        _style: &TextStyle,
        _fill: Color,
        placement: TextPlacement,
    ) {
        self.texts.push((String::from(text), location, placement));
    }

    fn draw_polyline(&mut self, points: &[Point], _stroke_width: f64, _stroke: Color, dashed: bool) {
        self.polylines.push((points.to_vec(), dashed));
    }
}

impl RecordingRenderer {
    fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|(t, _, _)| t == text)
    }
}

fn assert_rect_close(a: Rect, b: Rect) {
    let eps = 1e-9;
    assert!((a.x0 - b.x0).abs() <= eps, "x0 {a:?} != {b:?}");
    assert!((a.y0 - b.y0).abs() <= eps, "y0 {a:?} != {b:?}");
    assert!((a.x1 - b.x1).abs() <= eps, "x1 {a:?} != {b:?}");
    assert!((a.y1 - b.y1).abs() <= eps, "y1 {a:?} != {b:?}");
}

#[test]
fn simple_chart_spans_negative_and_positive() {
    let chart = bar_chart([320, -100, 420, 500]);
    let (layout, markers) = chart.layout(Size::new(400.0, 300.0));

    assert_eq!(layout.num_columns, 4);
    assert_eq!(layout.num_series, 1);
    assert_eq!(layout.min_bar_height, -100.0);
    assert_eq!(layout.max_bar_height, 500.0);
    assert!(layout.origin.y > 0.0 && layout.origin.y < 300.0);
    assert_eq!(layout.origin.x, 0.0);

    let labels: Vec<&str> = markers
        .category_markers
        .iter()
        .map(|m| m.label.as_str())
        .collect();
    assert_eq!(labels, ["320", "-100", "420", "500"]);
    assert!(markers.value_markers.iter().any(|m| m.label == "0"));
    assert!(markers.value_markers.iter().any(|m| m.label == "-100"));
}

#[test]
fn stacked_segment_raises_maximum() {
    let chart = bar_chart([320, -100, 420, 500]).stacked_with([100, 100, 220, 245], |s| s);
    let (layout, _) = chart.layout(Size::new(400.0, 300.0));

    assert_eq!(layout.num_columns, 4);
    assert_eq!(layout.max_bar_height, 745.0);
    // Column 1 stacks 100 onto -100 and nets out.
    assert_eq!(layout.min_bar_height, 0.0);
}

#[test]
fn opposite_stacked_values_net_out_in_layout() {
    let chart = bar_chart([-100]).stacked_with([100], |s| s);
    let (layout, _) = chart.layout(Size::new(400.0, 300.0));
    assert_eq!(layout.max_bar_height, 0.0);
    assert_eq!(layout.min_bar_height, 0.0);

    // Drawing still splits the extents by sign.
    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);
    assert_eq!(renderer.rects.len(), 2);
    assert_eq!(renderer.rects[0].0.y1, layout.origin.y);
    assert_eq!(renderer.rects[1].0.y0, layout.origin.y);
}

#[test]
fn longer_alongside_segment_extends_columns() {
    let base: Vec<i32> = vec![10, 20, 30, 40, 50];
    let extra: Vec<i32> = (1..=15).collect();
    let chart = bar_chart(base).alongside(extra, |s| s.with_label("Extra"));
    let (layout, markers) = chart.layout(Size::new(800.0, 300.0));

    assert_eq!(layout.num_columns, 15);
    assert_eq!(layout.num_series, 2);
    assert_eq!(markers.category_markers.len(), 15);
    // Columns past the base's data have no element to display.
    assert_eq!(markers.category_markers[4].label, "50");
    assert_eq!(markers.category_markers[5].label, "");
}

#[test]
fn zero_base_with_one_sided_stacks_has_valid_scale() {
    let negative = bar_chart([0, 0, 0]).stacked_with([-1, -2, -3], |s| s);
    let (layout, _) = negative.layout(Size::new(300.0, 200.0));
    assert!(layout.scale.is_finite() && layout.scale > 0.0);
    assert_eq!(layout.min_bar_height, -3.0);
    assert_eq!(layout.max_bar_height, 0.0);

    let positive = bar_chart([0, 0, 0]).stacked_with([1, 2, 3], |s| s);
    let (layout, _) = positive.layout(Size::new(300.0, 200.0));
    assert!(layout.scale.is_finite() && layout.scale > 0.0);
    assert_eq!(layout.min_bar_height, 0.0);
    assert_eq!(layout.max_bar_height, 3.0);
}

#[test]
fn all_zero_chart_still_marks_origin() {
    let chart = bar_chart([0, 0]);
    let (layout, markers) = chart.layout(Size::new(200.0, 100.0));
    assert_eq!(layout.scale, 1.0);
    assert_eq!(markers.value_markers.len(), 1);
    assert_eq!(markers.value_markers[0].label, "0");
}

#[test]
fn min_and_max_bracket_zero() {
    for values in [vec![5, 10, 2], vec![-5, -10, -2], vec![-5, 10, 0]] {
        let (layout, _) = bar_chart(values).layout(Size::new(300.0, 200.0));
        assert!(layout.min_bar_height <= 0.0);
        assert!(layout.max_bar_height >= 0.0);
    }
}

#[test]
fn draws_primary_bars_per_series_and_one_rect_per_stacked_value() {
    let chart = bar_chart([1, 2, 3])
        .stacked_with([1, 2], |s| s)
        .alongside([5, 6, 7, 8], |s| s);
    let (layout, _) = chart.layout(Size::new(400.0, 300.0));
    assert_eq!(layout.num_columns, 4);
    assert_eq!(layout.num_series, 2);

    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);
    // 4 columns x 2 bars, plus the two stacked values.
    assert_eq!(renderer.rects.len(), 10);
}

#[test]
fn layout_is_idempotent() {
    let chart = bar_chart([3, -1, 4, 1, -5])
        .stacked_with([9, 2, -6], |s| s)
        .alongside([5, 3], |s| s);
    let size = Size::new(640.0, 480.0);
    assert_eq!(chart.layout(size), chart.layout(size));
}

#[test]
fn bars_are_whole_pixels_down_to_zero_extent() {
    let chart = bar_chart(vec![1; 40]).alongside(vec![2; 40], |s| s);
    for width in [0.0, 1.0, 39.0, 80.0, 1000.0] {
        let (layout, _) = chart.layout(Size::new(width, 100.0));
        assert!(layout.bar_size >= 1.0);
        assert!(layout.column_size >= 2.0);
        assert_eq!(layout.bar_size % 1.0, 0.0);
    }
}

#[test]
fn bar_length_is_height_times_scale() {
    // Height 100: a 10px margin above the data leaves 90px for a value of 9.
    let chart = bar_chart([9]);
    let (layout, _) = chart.layout(Size::new(100.0, 100.0));
    assert_eq!(layout.scale, 10.0);

    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);
    let (rect, _, _) = renderer.rects[0];
    assert_rect_close(rect, Rect::new(20.0, 0.0, 80.0, 90.0));
}

#[test]
fn negative_bars_grow_below_origin() {
    // Extent 250 over [-100, 100]: 25px margins and one pixel per unit.
    let chart = bar_chart([100]).alongside([-100], |s| s);
    let (layout, _) = chart.layout(Size::new(100.0, 250.0));
    assert_eq!(layout.scale, 1.0);
    assert_eq!(layout.origin.y, 125.0);

    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);
    assert_eq!(renderer.rects.len(), 2);
    let x0 = layout.column_location(0);
    let x1 = x0 + layout.bar_size;
    assert_rect_close(renderer.rects[0].0, Rect::new(x0, 125.0, x1, 225.0));
    let (x0, x1) = (x0 + layout.series_step(), x1 + layout.series_step());
    assert_rect_close(renderer.rects[1].0, Rect::new(x0, 25.0, x1, 125.0));
}

#[test]
fn stacked_values_abut_previous_extent() {
    let chart = bar_chart([10, 10]).stacked_with([5, -5], |s| s).stacked_with([5, 5], |s| s);
    let (layout, _) = chart.layout(Size::new(200.0, 200.0));
    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);

    // Column 0 is base, then both stacks; all positive, so each starts where the last ended.
    let rects: Vec<Rect> = renderer.rects.iter().map(|(r, _, _)| *r).collect();
    assert_eq!(rects.len(), 6);
    assert_eq!(rects[1].y0, rects[0].y1);
    assert_eq!(rects[2].y0, rects[1].y1);
    // Column 1's negative stack hangs below the origin; the next positive one sits on the base.
    assert_eq!(rects[4].y1, layout.origin.y);
    assert_eq!(rects[5].y0, rects[3].y1);
}

#[test]
fn alongside_bars_are_offset_by_series_step() {
    let chart = bar_chart([1, 1]).alongside([1, 1], |s| s);
    let (layout, _) = chart.layout(Size::new(300.0, 100.0));
    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);

    let first = renderer.rects[0].0;
    let second = renderer.rects[1].0;
    assert_eq!(second.x0, first.x0 + layout.bar_size + layout.series_separation);
    assert_eq!(second.y0, layout.origin.y);
}

#[test]
fn horizontal_orientation_swaps_axes() {
    let mut chart = bar_chart([10, 20, -5]);
    chart.config_mut().orientation = Orientation::Horizontal;
    let (layout, markers) = chart.layout(Size::new(300.0, 200.0));
    assert_eq!(layout.origin.y, 0.0);
    assert!(layout.origin.x > 0.0);
    assert_eq!(markers.y_markers(Orientation::Horizontal).len(), 3);

    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);
    let (rect, _, _) = renderer.rects[0];
    assert_eq!(rect.x0, layout.origin.x);
    assert_eq!(rect.height(), layout.bar_size);
    let (negative, _, _) = renderer.rects[2];
    assert_eq!(negative.x1, layout.origin.x);
}

#[test]
fn configuration_is_shared_through_the_chain() {
    let mut chart = bar_chart([1, 2])
        .with_config(|c| c.with_minimum_column_separation(6.0))
        .stacked_with([1, 1], |s| s)
        .alongside([2, 2], |s| s);
    assert_eq!(chart.config().minimum_column_separation, 6.0);

    chart.config_mut().grid = true;
    assert!(chart.parent().parent().config().grid);
}

#[test]
fn legend_lists_labelled_segments_in_attachment_order() {
    let chart = bar_chart([1, 2])
        .with_style(|s| s.with_label("Base"))
        .stacked_with([1, 1], |s| s.with_label("Stacked").with_hatch(Hatch::Cross))
        .stacked_with([1, 1], |s| s)
        .alongside([2, 2], |s| s.with_label("Beside").with_color(css::TEAL));

    let items = chart.legend_items();
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["Base", "Stacked", "Beside"]);
    assert_eq!(items[1].hatch, Hatch::Cross);
    assert_eq!(items[2].color, css::TEAL);
    assert_eq!(chart.segment_count(), 4);
}

#[test]
fn segments_default_to_distinct_colors() {
    let chart = bar_chart([1]).stacked_with([1], |s| s);
    assert_ne!(chart.style().color, chart.parent().style().color);
}

#[test]
fn struct_elements_use_field_adapters() {
    #[derive(Clone, Copy, Debug)]
    struct Sale {
        year: u16,
        units: i32,
    }

    let sales = vec![
        Sale {
            year: 2019,
            units: 40,
        },
        Sale {
            year: 2020,
            units: -12,
        },
    ];
    let chart = BarChart::with_adapter(sales, HeightAdapter::field(|s: &Sale| s.units))
        .with_formatter(LabelFormatter::custom(|s: Option<&Sale>, _| {
            s.map(|s| std::format!("{}", s.year)).unwrap_or_default()
        }));
    let (layout, markers) = chart.layout(Size::new(200.0, 200.0));
    assert_eq!(layout.min_bar_height, -12.0);
    assert_eq!(layout.max_bar_height, 40.0);
    assert_eq!(markers.category_markers[0].label, "2019");
}

#[test]
fn empty_chart_draws_nothing() {
    let chart = bar_chart(Vec::<f64>::new());
    let (layout, markers) = chart.layout(Size::new(200.0, 200.0));
    assert_eq!(layout.num_columns, 0);
    assert!(markers.value_markers.is_empty());
    assert!(markers.category_markers.is_empty());

    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);
    assert!(renderer.rects.is_empty());
}

#[test]
#[should_panic(expected = "has data beyond")]
fn drawing_with_a_foreign_layout_panics() {
    let (layout, _) = bar_chart([1, 2]).layout(Size::new(200.0, 200.0));
    let longer = bar_chart([1, 2, 3]);
    longer.draw(&layout, &mut RecordingRenderer::default());
}

#[test]
fn segments_longer_than_the_layout_are_drained() {
    let (layout, _) = bar_chart([1, 2]).layout(Size::new(200.0, 200.0));
    let chart = bar_chart([1, 2])
        .alongside([1, 2, 3], |s| s)
        .stacked_with([1, 2, 3, 4], |s| s);

    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);
    // Two laid-out columns of three rects, then two extra columns holding the leftovers.
    assert_eq!(renderer.rects.len(), 6 + 2 + 1);
}

#[test]
fn render_chart_draws_chrome() {
    let chart = bar_chart([320, -100, 420, 500])
        .with_style(|s| s.with_label("2008"))
        .with_config(|c| {
            c.with_title("Sales")
                .with_axis_labels("Quarter", "Units")
                .with_grid(true)
        })
        .stacked_with([100, -100, 220, 245], |s| s.with_label("2009"));

    let mut renderer = RecordingRenderer::default();
    let view = Size::new(640.0, 480.0);
    let rendered = render_chart(&chart, view, &mut renderer);

    assert!(rendered.plot.x0 > 0.0 && rendered.plot.x1 < view.width);
    assert!(rendered.plot.y0 > 0.0 && rendered.plot.y1 < view.height);
    assert_eq!(rendered.layout.num_columns, 4);
    for text in ["Sales", "Quarter", "Units", "2008", "2009", "-100"] {
        assert!(renderer.has_text(text), "missing text {text:?}");
    }
    // Bars plus two legend swatches, all translated into the plot rectangle.
    assert_eq!(renderer.rects.len(), 4 + 4 + 2);
    for (rect, _, _) in &renderer.rects[..8] {
        assert!(rect.x0 >= rendered.plot.x0 && rect.x1 <= rendered.plot.x1);
        assert!(rect.y0 >= rendered.plot.y0 && rect.y1 <= rendered.plot.y1);
    }
    assert!(renderer.polylines.iter().any(|(_, dashed)| *dashed));
}

#[test]
fn shorter_alongside_segment_gets_empty_bars() {
    let chart = bar_chart([1, 2, 3, 4]).alongside([5], |s| s);
    let (layout, _) = chart.layout(Size::new(400.0, 300.0));
    assert_eq!(layout.num_columns, 4);
    assert_eq!(layout.num_series, 2);

    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);
    assert_eq!(renderer.rects.len(), 8);
    assert!(renderer.rects[1].0.height() > 0.0);
    for column in 1..4 {
        let (rect, _, _) = renderer.rects[2 * column + 1];
        assert_eq!(rect.height(), 0.0);
        assert_eq!(rect.y0, layout.origin.y);
        assert_eq!(rect.x0, layout.column_location(column) + layout.series_step());
    }
}

/// A sequence that counts how many elements have been pulled out of it.
#[derive(Clone, Debug)]
struct Counted {
    values: Vec<i32>,
    visits: Rc<Cell<usize>>,
}

impl Counted {
    fn new(values: &[i32]) -> Self {
        Self {
            values: values.to_vec(),
            visits: Rc::new(Cell::new(0)),
        }
    }
}

#[derive(Debug)]
struct CountedIter {
    inner: vec::IntoIter<i32>,
    visits: Rc<Cell<usize>>,
}

impl Iterator for CountedIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let value = self.inner.next()?;
        self.visits.set(self.visits.get() + 1);
        Some(value)
    }
}

impl IntoIterator for Counted {
    type Item = i32;
    type IntoIter = CountedIter;

    fn into_iter(self) -> CountedIter {
        CountedIter {
            inner: self.values.into_iter(),
            visits: self.visits,
        }
    }
}

#[test]
fn every_element_is_visited_once_per_pass() {
    let base = Counted::new(&[1, 2, 3]);
    let stack = Counted::new(&[4, -5]);
    let beside = Counted::new(&[6, 7, 8, 9]);
    let chart = bar_chart(base.clone())
        .stacked_with(stack.clone(), |s| s)
        .alongside(beside.clone(), |s| s);

    let (layout, _) = chart.layout(Size::new(400.0, 300.0));
    assert_eq!(layout.num_columns, 4);
    assert_eq!(base.visits.get(), 3);
    assert_eq!(stack.visits.get(), 2);
    assert_eq!(beside.visits.get(), 4);

    chart.draw(&layout, &mut RecordingRenderer::default());
    assert_eq!(base.visits.get(), 6);
    assert_eq!(stack.visits.get(), 4);
    assert_eq!(beside.visits.get(), 8);
}

/// Yields one value, reports exhaustion once, then yields a stray value.
#[derive(Clone, Copy, Debug)]
struct Relapsing;

#[derive(Debug)]
struct RelapsingIter {
    calls: usize,
}

impl Iterator for RelapsingIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.calls += 1;
        match self.calls {
            1 => Some(5),
            3 => Some(100),
            _ => None,
        }
    }
}

impl IntoIterator for Relapsing {
    type Item = i32;
    type IntoIter = RelapsingIter;

    fn into_iter(self) -> RelapsingIter {
        RelapsingIter { calls: 0 }
    }
}

#[test]
fn segments_stop_at_their_first_exhaustion() {
    let chart = bar_chart([1, 2, 3]).stacked_with(Relapsing, |s| s);
    let (layout, _) = chart.layout(Size::new(400.0, 300.0));
    assert_eq!(layout.num_columns, 3);
    assert_eq!(layout.max_bar_height, 6.0);

    let mut renderer = RecordingRenderer::default();
    chart.draw(&layout, &mut renderer);
    assert_eq!(renderer.rects.len(), 4);
}
