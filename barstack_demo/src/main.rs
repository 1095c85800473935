// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the reference bar charts to SVG files.
//!
//! Set `RUST_LOG=warn` (or `debug`) to see layout warnings and tracing.

mod svg;

use std::path::Path;

use barstack_charts::{
    BarSegments, HeightAdapter, Hatch, LabelFormatter, Orientation, bar_chart, render_chart,
};
use kurbo::Size;
use peniko::color::palette::css;

const OUTPUT_DIR: &str = "barstack_demo_out";
const VIEW: Size = Size::new(800.0, 600.0);

fn main() -> std::io::Result<()> {
    env_logger::init();

    let out = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(out)?;

    let charts = [
        ("bar_chart", simple_demo(Hatch::None)),
        ("bar_chart_forward_slash", simple_demo(Hatch::ForwardSlash)),
        ("bar_chart_backward_slash", simple_demo(Hatch::BackwardSlash)),
        ("bar_chart_vertical_hatch", simple_demo(Hatch::Vertical)),
        ("bar_chart_cross_hatch", simple_demo(Hatch::Cross)),
        ("bar_chart_filled_circles", simple_demo(Hatch::FilledCircle)),
        ("stacked_vertical", stacked_demo(Orientation::Vertical)),
        ("stacked_horizontal", stacked_demo(Orientation::Horizontal)),
        ("stacking_homogeneous_v", homogeneous_demo(Orientation::Vertical)),
        ("stacking_homogeneous_h", homogeneous_demo(Orientation::Horizontal)),
        ("stacking_heterogeneous_v", heterogeneous_demo(Orientation::Vertical)),
        ("stacking_heterogeneous_h", heterogeneous_demo(Orientation::Horizontal)),
        ("stacking_beyond_series_v", beyond_series_demo(Orientation::Vertical)),
        ("stacking_beyond_series_h", beyond_series_demo(Orientation::Horizontal)),
        ("stacking_zero_all_negative", zero_series_demo(false)),
        ("stacking_zero_all_positive", zero_series_demo(true)),
        ("alongside", alongside_demo()),
    ];

    for (name, svg) in charts {
        let path = out.join(format!("{name}.svg"));
        std::fs::write(&path, svg)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn render(chart: &impl BarSegments) -> String {
    let mut renderer = svg::SvgRenderer::new(VIEW);
    render_chart(chart, VIEW, &mut renderer);
    renderer.to_svg_string()
}

fn simple_demo(hatch: Hatch) -> String {
    let chart = bar_chart([320.0_f32, -100.0, 420.0, 500.0])
        .with_formatter(LabelFormatter::array(["2008", "2009", "2010", "2011"]))
        .with_style(|s| {
            s.with_label("Plot 1")
                .with_color(css::ORANGE)
                .with_hatch(hatch)
        })
        .with_config(|c| c.with_title("BAR CHART").with_axis_labels("X-AXIS", "Y-AXIS"));
    render(&chart)
}

fn stacked_demo(orientation: Orientation) -> String {
    let chart = bar_chart([320.0_f32, -100.0, 420.0, 500.0])
        .with_formatter(LabelFormatter::array(["2008", "2009", "2010", "2011"]))
        .with_style(|s| s.with_label("Plot 1").with_color(css::ORANGE))
        .with_config(|c| {
            c.with_orientation(orientation)
                .with_title("BAR CHART")
                .with_axis_labels("X-AXIS", "Y-AXIS")
        })
        .stacked_with([100.0_f32, 100.0, 220.0, 245.0], |s| {
            s.with_label("Plot 2").with_color(css::BLUE)
        });
    render(&chart)
}

fn homogeneous_demo(orientation: Orientation) -> String {
    let (x_label, y_label) = match orientation {
        Orientation::Vertical => ("Year", "Profit ($m)"),
        Orientation::Horizontal => ("Profit ($m)", "Year"),
    };
    let chart = bar_chart(5..20)
        .with_formatter(LabelFormatter::custom(|_, index| (2000 + index).to_string()))
        .with_style(|s| s.with_label("Existing product").with_color(css::ORANGE))
        .with_config(|c| {
            c.with_orientation(orientation)
                .with_title("Financial Results")
                .with_axis_labels(x_label, y_label)
        })
        .stacked_with(0..15, |s| s.with_label("New product").with_color(css::GREEN))
        .stacked_with(-10..1, |s| s.with_label("Bad product").with_color(css::RED));
    render(&chart)
}

#[derive(Clone, Copy, Debug)]
struct Hater {
    value: i8,
}

fn heterogeneous_demo(orientation: Orientation) -> String {
    let (x_label, y_label) = match orientation {
        Orientation::Vertical => ("Category", "Viewers (%)"),
        Orientation::Horizontal => ("Viewers (%)", "Category"),
    };
    let factors = ["Plot", "Casting", "Direction", "Script", "Score", "Effects"];
    let likes: Vec<u8> = vec![0, 16, 3, 0, 15, 1];
    let moderates: Vec<i64> = vec![20, 34, 12, 16, 24, 20];
    let dislikes: Vec<f32> = vec![-65.0, -34.0, -70.0, -64.0, -42.0, -59.0];
    let haters = (15..=20_i8).map(|v| Hater { value: -v });

    let chart = bar_chart(moderates)
        .with_formatter(LabelFormatter::array(factors))
        .with_style(|s| s.with_label("Liked").with_color(css::ORANGE))
        .with_config(|c| {
            c.with_orientation(orientation)
                .with_minimum_column_separation(40.0)
                .with_title("Viewer feedback")
                .with_axis_labels(x_label, y_label)
                .with_grid(true)
        })
        .stacked_with(likes, |s| {
            s.with_label("Strongly liked").with_color(css::GREEN)
        })
        .stacked_with(dislikes, |s| s.with_label("Disliked").with_color(css::RED))
        .stacked_with_adapter(haters, HeightAdapter::field(|h: &Hater| h.value), |s| {
            s.with_label("Strongly disliked")
                .with_color(css::DARK_RED)
                .with_hatch(Hatch::BackwardSlash)
        });
    render(&chart)
}

fn beyond_series_demo(orientation: Orientation) -> String {
    let chart = bar_chart(0..20)
        .with_style(|s| s.with_label("Base").with_color(css::DARK_RED))
        .with_config(|c| {
            c.with_orientation(orientation)
                .with_minimum_column_separation(4.0)
        })
        .stacked_with((-25..=10).rev(), |s| s.with_label("Stack").with_color(css::PINK))
        .stacked_with(-25..=20, |s| s.with_label("Stack 2").with_color(css::BROWN));
    render(&chart)
}

fn zero_series_demo(positive: bool) -> String {
    let base = bar_chart(std::iter::repeat_n(0, 10))
        .with_formatter(LabelFormatter::index())
        .with_style(|s| s.with_label("Base").with_color(css::DARK_RED));
    if positive {
        let chart = base
            .stacked_with(0..10, |s| s.with_label("Stack").with_color(css::PINK))
            .stacked_with((0..=5).rev(), |s| {
                s.with_label("Stack 2").with_color(css::BROWN)
            });
        render(&chart)
    } else {
        let chart = base
            .stacked_with((-9..=0).rev(), |s| {
                s.with_label("Stack").with_color(css::PINK)
            })
            .stacked_with(-5..=0, |s| s.with_label("Stack 2").with_color(css::BROWN));
        render(&chart)
    }
}

fn alongside_demo() -> String {
    let chart = bar_chart([12, 18, 9, 22, 15])
        .with_formatter(LabelFormatter::custom(|_, index| format!("Q{}", index + 1)))
        .with_style(|s| s.with_label("North"))
        .with_config(|c| c.with_title("Quarterly sales").with_grid(true))
        .stacked_with([3, 4, -2, 5, 1], |s| {
            s.with_label("North (online)").with_hatch(Hatch::Grid)
        })
        .alongside([10, 14, 16, 11, 19, 8, 13], |s| s.with_label("South"))
        .stacked_with([-4, 2, 3], |s| {
            s.with_label("South (online)").with_hatch(Hatch::HollowCircle)
        })
        .alongside([7, 9, 6], |s| {
            s.with_label("West").with_hatch(Hatch::Horizontal)
        });
    render(&chart)
}
