//! SVG output: path data for outlines and a standalone preview document.

use std::fmt;

use glam::DVec2;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use crate::bubble::{BubbleGeometry, BubbleOutlines};
use crate::errors::SvgError;
use crate::geometry::outline::{Outline, PathSink, arc_point};
use crate::geometry::style::Color;
use crate::types::{Angle, Rect, Size};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Format a coordinate with at most three decimals, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.3}");
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

fn same_point(a: DVec2, b: DVec2) -> bool {
    const EPSILON: f64 = 1e-6;
    a.distance(b) < EPSILON
}

/// [`PathSink`] that writes SVG path data (`M`, `L`, `A`, `Z`).
#[derive(Debug, Default)]
pub struct SvgPathWriter {
    data: String,
    current: DVec2,
    start: DVec2,
}

impl SvgPathWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.data
    }

    fn command(&mut self, letter: char, args: &[f64]) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(letter);
        let args: Vec<String> = args.iter().map(|v| fmt_num(*v)).collect();
        self.data.push_str(&args.join(" "));
    }
}

impl PathSink for SvgPathWriter {
    fn move_to(&mut self, p: DVec2) {
        self.command('M', &[p.x, p.y]);
        self.current = p;
        self.start = p;
    }

    fn line_to(&mut self, p: DVec2) {
        self.command('L', &[p.x, p.y]);
        self.current = p;
    }

    fn arc_to(&mut self, oval: Rect, start: Angle, sweep: Angle) {
        let from = arc_point(&oval, start);
        let to = arc_point(&oval, Angle(start.0 + sweep.0));
        if !same_point(self.current, from) {
            self.line_to(from);
        }
        if same_point(from, to) {
            return;
        }
        let (rx, ry) = (oval.width() / 2.0, oval.height() / 2.0);
        if rx <= 0.0 || ry <= 0.0 {
            self.line_to(to);
            return;
        }
        let large_arc = if sweep.0.abs() > 180.0 { 1.0 } else { 0.0 };
        let clockwise = if sweep.0 > 0.0 { 1.0 } else { 0.0 };
        self.command('A', &[rx, ry, 0.0, large_arc, clockwise, to.x, to.y]);
        self.current = to;
    }

    fn close(&mut self) {
        self.command('Z', &[]);
        self.current = self.start;
    }
}

/// SVG path data for an outline.
pub fn path_data(outline: &Outline) -> String {
    let mut writer = SvgPathWriter::new();
    outline.replay(&mut writer);
    writer.finish()
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&path_data(self))
    }
}

/// Paint settings for a preview document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPaint {
    pub fill: Color,
    pub border: Color,
    pub border_width: f64,
}

/// Add `name` (and `name-opacity` for translucent colors) to an element.
fn push_paint(element: &mut BytesStart<'_>, name: &str, color: Color) {
    element.push_attribute((name, color.to_rgb_string().as_str()));
    if color.alpha() != 0xFF {
        let opacity_name = format!("{name}-opacity");
        element.push_attribute((opacity_name.as_str(), fmt_num(color.opacity()).as_str()));
    }
}

/// Standalone SVG document painting the fill, then the border stroke.
///
/// The stroke is left out when the border width is zero.
pub fn svg_document(
    outlines: &BubbleOutlines,
    paint: &PreviewPaint,
    size: Size,
) -> Result<String, SvgError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let (w, h) = (fmt_num(size.w), fmt_num(size.h));
    let view_box = format!("0 0 {w} {h}");
    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", SVG_NAMESPACE));
    svg.push_attribute(("width", w.as_str()));
    svg.push_attribute(("height", h.as_str()));
    svg.push_attribute(("viewBox", view_box.as_str()));
    writer.write_event(Event::Start(svg))?;

    let fill_data = path_data(&outlines.fill);
    let mut fill = BytesStart::new("path");
    fill.push_attribute(("d", fill_data.as_str()));
    push_paint(&mut fill, "fill", paint.fill);
    writer.write_event(Event::Empty(fill))?;

    if paint.border_width > 0.0 {
        let border_data = path_data(&outlines.border);
        let stroke_width = fmt_num(paint.border_width);
        let mut border = BytesStart::new("path");
        border.push_attribute(("d", border_data.as_str()));
        border.push_attribute(("fill", "none"));
        push_paint(&mut border, "stroke", paint.border);
        border.push_attribute(("stroke-width", stroke_width.as_str()));
        border.push_attribute(("stroke-linecap", "round"));
        border.push_attribute(("stroke-linejoin", "round"));
        writer.write_event(Event::Empty(border))?;
    }

    writer.write_event(Event::End(BytesEnd::new("svg")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Preview of a bubble in its current state.
pub fn preview_svg(geometry: &BubbleGeometry) -> Result<String, SvgError> {
    let style = geometry.style();
    let paint = PreviewPaint {
        fill: geometry.current_fill_color(),
        border: style.border_color,
        border_width: style.border_width.raw(),
    };
    svg_document(&geometry.outlines(), &paint, geometry.container_size())
}
