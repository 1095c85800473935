// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot chrome around the bars: title, axis titles, marker labels, gridlines and legend.
//!
//! [`render_chart`] follows a small measure/arrange scheme:
//! - **Measure**: reserve margins for the title, axis titles and the legend, run a provisional
//!   layout on what is left, and measure its marker labels.
//! - **Arrange**: shrink the plot rectangle by the marker labels, lay the chart out for that
//!   rectangle and draw everything relative to it.
//!
//! All coordinates are in renderer space (origin bottom-left, y up).

use barstack_text::{TextAnchor, TextBaseline, TextMeasurer, TextStyle};
use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;
use peniko::color::palette::css;

use crate::chain::BarSegments;
use crate::config::Orientation;
use crate::geometry::LayoutResult;
use crate::legend::Legend;
use crate::markers::{Marker, PlotMarkers};
use crate::render::{Renderer, TextPlacement, Translated};

/// Padding around the whole chart.
const OUTER_PADDING: f64 = 10.0;
/// Gap between a piece of chrome and whatever it is placed next to.
const CHROME_GAP: f64 = 8.0;
/// Gap between the plot border and marker labels.
const TICK_GAP: f64 = 5.0;

const TITLE_FONT_SIZE: f64 = 16.0;
const AXIS_TITLE_FONT_SIZE: f64 = 12.0;
const MARKER_FONT_SIZE: f64 = 10.0;

const BORDER_COLOR: Color = css::BLACK;
const GRID_COLOR: Color = css::LIGHT_GRAY;
const TEXT_COLOR: Color = css::BLACK;

/// Where everything landed in a rendered chart.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedChart {
    /// The plot rectangle the bars were drawn in.
    pub plot: Rect,
    /// The layout used for the bars, relative to `plot`.
    pub layout: LayoutResult,
    /// The markers of that layout, relative to `plot`.
    pub markers: PlotMarkers,
}

/// Margin thicknesses reserved by chrome, before marker labels are known.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ChromeMargins {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl ChromeMargins {
    fn plot_rect(&self, view_size: Size) -> Rect {
        let x0 = self.left;
        let y0 = self.bottom;
        let x1 = (view_size.width - self.right).max(x0);
        let y1 = (view_size.height - self.top).max(y0);
        Rect::new(x0, y0, x1, y1)
    }
}

fn line_height(measurer: &dyn TextMeasurer, style: &TextStyle) -> f64 {
    measurer.measure("", style).line_height()
}

/// Height of a row of horizontal marker labels, or zero if there are none.
fn x_marker_thickness(measurer: &dyn TextMeasurer, markers: &[Marker], style: &TextStyle) -> f64 {
    if markers.is_empty() {
        0.0
    } else {
        TICK_GAP + line_height(measurer, style)
    }
}

/// Width of a column of right-aligned marker labels, or zero if there are none.
fn y_marker_thickness(measurer: &dyn TextMeasurer, markers: &[Marker], style: &TextStyle) -> f64 {
    if markers.is_empty() {
        return 0.0;
    }
    let widest = measurer.max_advance(&mut markers.iter().map(|m| m.label.as_str()), style);
    TICK_GAP + widest
}

fn outline(rect: Rect) -> [Point; 5] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
        Point::new(rect.x0, rect.y0),
    ]
}

/// Draws `chart` with its chrome into a `view_size` area of `renderer`.
///
/// The title and axis titles come from the chart's [`crate::ChartConfig`]; the legend lists
/// every labelled segment. Returns the plot rectangle and the layout used, so that callers can
/// place annotations of their own.
pub fn render_chart<C>(chart: &C, view_size: Size, renderer: &mut dyn Renderer) -> RenderedChart
where
    C: BarSegments + ?Sized,
{
    let config = chart.config();
    let orientation = config.orientation;
    let title_style = TextStyle::new(TITLE_FONT_SIZE).bold();
    let axis_title_style = TextStyle::new(AXIS_TITLE_FONT_SIZE);
    let marker_style = TextStyle::new(MARKER_FONT_SIZE);
    let legend = Legend::new(chart.legend_items());

    // Measure.
    let mut margins = ChromeMargins {
        left: OUTER_PADDING,
        right: OUTER_PADDING,
        top: OUTER_PADDING,
        bottom: OUTER_PADDING,
    };
    if config.title.is_some() {
        margins.top += line_height(&*renderer, &title_style) + CHROME_GAP;
    }
    if config.x_label.is_some() {
        margins.bottom += line_height(&*renderer, &axis_title_style) + CHROME_GAP;
    }
    if config.y_label.is_some() {
        margins.left += line_height(&*renderer, &axis_title_style) + CHROME_GAP;
    }
    let legend_size = legend.measure(&*renderer);
    if legend_size.width > 0.0 {
        margins.right += legend_size.width + CHROME_GAP;
    }

    let provisional = margins.plot_rect(view_size);
    let (_, provisional_markers) = chart.layout(provisional.size());
    let x_ticks = provisional_markers.x_markers(orientation);
    let y_ticks = provisional_markers.y_markers(orientation);
    let mut arranged = margins;
    arranged.bottom += x_marker_thickness(&*renderer, x_ticks, &marker_style);
    arranged.left += y_marker_thickness(&*renderer, y_ticks, &marker_style);

    // Arrange.
    let plot = arranged.plot_rect(view_size);
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        log::warn!("no room left for the plot area in a {view_size:?} view");
    }
    let (layout, markers) = chart.layout(plot.size());
    let offset = Vec2::new(plot.x0, plot.y0);

    if config.grid {
        for marker in &markers.value_markers {
            let line = match orientation {
                Orientation::Vertical => [
                    Point::new(plot.x0, plot.y0 + marker.location),
                    Point::new(plot.x1, plot.y0 + marker.location),
                ],
                Orientation::Horizontal => [
                    Point::new(plot.x0 + marker.location, plot.y0),
                    Point::new(plot.x0 + marker.location, plot.y1),
                ],
            };
            renderer.draw_polyline(&line, 0.5, GRID_COLOR, true);
        }
    }

    chart.draw(&layout, &mut Translated::new(&mut *renderer, offset));
    renderer.draw_polyline(&outline(plot), 1.0, BORDER_COLOR, false);

    let below = TextPlacement::new(TextAnchor::Middle, TextBaseline::Hanging);
    for marker in markers.x_markers(orientation) {
        renderer.draw_text(
            &marker.label,
            Point::new(plot.x0 + marker.location, plot.y0 - TICK_GAP),
            &marker_style,
            TEXT_COLOR,
            below,
        );
    }
    let left_of = TextPlacement::new(TextAnchor::End, TextBaseline::Middle);
    for marker in markers.y_markers(orientation) {
        renderer.draw_text(
            &marker.label,
            Point::new(plot.x0 - TICK_GAP, plot.y0 + marker.location),
            &marker_style,
            TEXT_COLOR,
            left_of,
        );
    }

    let centered = TextPlacement::new(TextAnchor::Middle, TextBaseline::Middle);
    if let Some(title) = &config.title {
        let y = view_size.height - OUTER_PADDING - 0.5 * line_height(&*renderer, &title_style);
        renderer.draw_text(
            title,
            Point::new(0.5 * view_size.width, y),
            &title_style,
            TEXT_COLOR,
            centered,
        );
    }
    if let Some(x_label) = &config.x_label {
        let y = OUTER_PADDING + 0.5 * line_height(&*renderer, &axis_title_style);
        renderer.draw_text(
            x_label,
            Point::new(plot.center().x, y),
            &axis_title_style,
            TEXT_COLOR,
            centered,
        );
    }
    if let Some(y_label) = &config.y_label {
        let x = OUTER_PADDING + 0.5 * line_height(&*renderer, &axis_title_style);
        renderer.draw_text(
            y_label,
            Point::new(x, plot.center().y),
            &axis_title_style,
            TEXT_COLOR,
            centered.with_angle(90.0),
        );
    }

    legend.draw(renderer, Point::new(plot.x1 + CHROME_GAP, plot.y1));

    RenderedChart {
        plot,
        layout,
        markers,
    }
}
