//! Vector export of rendered patterns as SVG markup

use std::fmt::Write;

use crate::geometry::pattern::{Curve, Dot, RenderedPattern};
use crate::tiles::catalog::CurvePoint;

/// Options applied to the SVG document
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SvgOptions {
    /// Fill color of a full-size background rectangle
    pub background: Option<String>,
}

/// Escape a value for use inside a double-quoted XML attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build SVG path data for a curve point list
///
/// Each segment is a quadratic curve. Points without an explicit control point
/// use the midpoint of the segment, which draws a straight line.
pub fn svg_path(points: &[CurvePoint]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = format!("M {} {}", first.x, first.y);
    for pair in points.windows(2) {
        let [previous, point] = pair else {
            continue;
        };
        let [cx, cy] = point
            .control
            .unwrap_or([(previous.x + point.x) / 2.0, (previous.y + point.y) / 2.0]);
        let _ = write!(path, " Q {cx} {cy} {} {}", point.x, point.y);
    }
    path
}

fn write_dot(svg: &mut String, dot: &Dot) {
    let color = escape_attribute(&dot.color);
    let (fill, stroke_width) = if dot.filled {
        (color.as_str(), 0)
    } else {
        ("none", 1)
    };
    let _ = write!(
        svg,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}" stroke="{color}" stroke-width="{stroke_width}" />"#,
        dot.center.x, dot.center.y, dot.radius
    );
}

fn write_curve(svg: &mut String, curve: &Curve) {
    let color = escape_attribute(&curve.color);
    if curve.curve_points.len() > 1 {
        let _ = write!(
            svg,
            r#"<path d="{}" stroke="{color}" stroke-width="{}" fill="none" stroke-linecap="round" stroke-linejoin="round" />"#,
            svg_path(&curve.curve_points),
            curve.stroke_width
        );
    } else {
        let _ = write!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{}" stroke-linecap="round" />"#,
            curve.start.x, curve.start.y, curve.end.x, curve.end.y, curve.stroke_width
        );
    }
}

/// Render a pattern as a standalone SVG document
///
/// Dots are emitted before curves, each in pattern order. Colors are escaped
/// so they cannot end their attribute.
pub fn to_svg(pattern: &RenderedPattern, options: &SvgOptions) -> String {
    let width = pattern.dimensions.width;
    let height = pattern.dimensions.height;
    let mut svg = format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
    );

    if let Some(background) = &options.background {
        let background = escape_attribute(background);
        let _ = write!(
            svg,
            r#"<rect width="100%" height="100%" fill="{background}" />"#
        );
    }

    for dot in &pattern.dots {
        write_dot(&mut svg, dot);
    }
    for curve in &pattern.curves {
        write_curve(&mut svg, curve);
    }

    svg.push_str("</svg>");
    svg
}
