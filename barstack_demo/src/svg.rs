// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG renderer for `barstack_demo`.
//!
//! Chart coordinates are y-up; SVG is y-down, so every y is flipped against the view height.

use barstack_charts::{
    Hatch, HeuristicTextMeasurer, Renderer, TextAnchor, TextBaseline, TextMeasurer, TextMetrics,
    TextPlacement, TextStyle,
};
use kurbo::{Point, Rect, Size};
use peniko::Color;

const HATCH_SPACING: f64 = 8.0;

#[derive(Debug)]
pub(crate) struct SvgRenderer {
    size: Size,
    body: String,
    hatches: Vec<Hatch>,
}

impl SvgRenderer {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
            hatches: Vec::new(),
        }
    }

    fn flip(&self, p: Point) -> Point {
        Point::new(p.x, self.size.height - p.y)
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            "viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n",
            w = self.size.width,
            h = self.size.height,
        ));
        if !self.hatches.is_empty() {
            out.push_str("<defs>\n");
            for hatch in &self.hatches {
                write_hatch_pattern(&mut out, *hatch);
            }
            out.push_str("</defs>\n");
        }
        out.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl TextMeasurer for SvgRenderer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        HeuristicTextMeasurer.measure(text, style)
    }
}

impl Renderer for SvgRenderer {
    fn draw_solid_rect(&mut self, rect: Rect, fill: Color, hatch: Hatch) {
        let top_left = self.flip(Point::new(rect.x0, rect.y1));
        let (w, h) = (rect.width(), rect.height());
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{w}" height="{h}""#,
            top_left.x, top_left.y
        ));
        write_color_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");

        if let Some(id) = hatch_id(hatch) {
            if !self.hatches.contains(&hatch) {
                self.hatches.push(hatch);
            }
            self.body.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{w}\" height=\"{h}\" fill=\"url(#{id})\"/>\n",
                top_left.x, top_left.y
            ));
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        location: Point,
        style: &TextStyle,
        fill: Color,
        placement: TextPlacement,
    ) {
        let p = self.flip(location);
        let baseline = match placement.baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
            TextBaseline::Hanging => "hanging",
        };
        let anchor = match placement.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" font-weight="{}" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
            p.x,
            p.y,
            style.font_size,
            style.font_family.as_css_family(),
            style.font_weight.0,
        ));
        if placement.angle != 0.0 {
            // Counter-clockwise in y-up space is clockwise-negative in SVG.
            self.body.push_str(&format!(
                r#" transform="rotate({} {} {})""#,
                -placement.angle, p.x, p.y
            ));
        }
        write_color_attr(&mut self.body, "fill", fill);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    fn draw_polyline(&mut self, points: &[Point], stroke_width: f64, stroke: Color, dashed: bool) {
        if points.len() < 2 {
            return;
        }
        let coords: Vec<String> = points
            .iter()
            .map(|p| {
                let q = self.flip(*p);
                format!("{},{}", q.x, q.y)
            })
            .collect();
        self.body.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke-width="{stroke_width}""#,
            coords.join(" ")
        ));
        write_color_attr(&mut self.body, "stroke", stroke);
        if dashed {
            self.body.push_str(r#" stroke-dasharray="4 3""#);
        }
        self.body.push_str("/>\n");
    }
}

fn hatch_id(hatch: Hatch) -> Option<&'static str> {
    match hatch {
        Hatch::None => None,
        Hatch::ForwardSlash => Some("hatch-forward-slash"),
        Hatch::BackwardSlash => Some("hatch-backward-slash"),
        Hatch::Vertical => Some("hatch-vertical"),
        Hatch::Horizontal => Some("hatch-horizontal"),
        Hatch::Grid => Some("hatch-grid"),
        Hatch::Cross => Some("hatch-cross"),
        Hatch::HollowCircle => Some("hatch-hollow-circle"),
        Hatch::FilledCircle => Some("hatch-filled-circle"),
    }
}

fn write_hatch_pattern(out: &mut String, hatch: Hatch) {
    let Some(id) = hatch_id(hatch) else {
        return;
    };
    let s = HATCH_SPACING;
    let half = 0.5 * s;
    let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        format!(r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"/>"#)
    };
    let shapes = match hatch {
        Hatch::None => String::new(),
        Hatch::ForwardSlash => line(0.0, s, s, 0.0),
        Hatch::BackwardSlash => line(0.0, 0.0, s, s),
        Hatch::Vertical => line(half, 0.0, half, s),
        Hatch::Horizontal => line(0.0, half, s, half),
        Hatch::Grid => line(half, 0.0, half, s) + &line(0.0, half, s, half),
        Hatch::Cross => line(0.0, s, s, 0.0) + &line(0.0, 0.0, s, s),
        Hatch::HollowCircle => {
            format!(r#"<circle cx="{half}" cy="{half}" r="{}" fill="none"/>"#, 0.3 * s)
        }
        Hatch::FilledCircle => {
            format!(r#"<circle cx="{half}" cy="{half}" r="{}" fill="black"/>"#, 0.3 * s)
        }
    };
    out.push_str(&format!(
        r#"<pattern id="{id}" width="{s}" height="{s}" patternUnits="userSpaceOnUse"><g stroke="black" stroke-opacity="0.6" stroke-width="1">{shapes}</g></pattern>"#
    ));
    out.push('\n');
}

fn write_color_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != 255 {
        out.push_str(&format!(
            r#" {name}-opacity="{}""#,
            f64::from(rgba.a) / 255.0
        ));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hatched_rect_emits_fill_and_pattern() {
        let mut svg = SvgRenderer::new(Size::new(100.0, 50.0));
        svg.draw_solid_rect(
            Rect::new(10.0, 0.0, 20.0, 30.0),
            Color::from_rgba8(255, 0, 0, 255),
            Hatch::Cross,
        );
        let out = svg.to_svg_string();
        assert!(out.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50""#));
        assert!(out.contains(r##"<rect x="10" y="20" width="10" height="30" fill="#ff0000"/>"##));
        assert!(out.contains(r#"<pattern id="hatch-cross""#));
        assert!(out.contains(r#"fill="url(#hatch-cross)""#));
    }

    #[test]
    fn rotated_text_is_escaped_and_flipped() {
        let mut svg = SvgRenderer::new(Size::new(100.0, 50.0));
        svg.draw_text(
            "a<b",
            Point::new(5.0, 10.0),
            &TextStyle::new(12.0),
            Color::from_rgba8(0, 0, 0, 128),
            TextPlacement::new(TextAnchor::Middle, TextBaseline::Middle).with_angle(90.0),
        );
        let out = svg.to_svg_string();
        assert!(out.contains(r#"x="5" y="40""#));
        assert!(out.contains(r#"transform="rotate(-90 5 40)""#));
        assert!(out.contains(r#"fill-opacity="#));
        assert!(out.contains(">a&lt;b</text>"));
    }
}
