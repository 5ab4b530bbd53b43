//! SVG serialization of a [`ChartScene`].

use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::scene::ChartScene;
use std::fmt::Write;

pub const PLANET_CLASS: &str = "kundali-planet";

/// Escape text for use in XML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn fmt_num(v: f32) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint(color: &Color) -> String {
    if color.a == 0 {
        "none".to_string()
    } else {
        color.to_css_string()
    }
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    match stroke {
        None => " stroke=\"none\"".to_string(),
        Some(stroke) => {
            let mut attrs = format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                paint(&stroke.color),
                fmt_num(stroke.width)
            );
            if let Some(dash) = &stroke.dash_array {
                let dash: Vec<String> = dash.iter().map(|d| fmt_num(*d)).collect();
                let _ = write!(attrs, " stroke-dasharray=\"{}\"", dash.join(" "));
            }
            attrs
        }
    }
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

/// Render the scene to an SVG document.
///
/// `id` becomes the root element id when given. Planet labels carry a
/// `<title>` with the tooltip text so static viewers still get the detail.
pub fn scene_to_svg(scene: &ChartScene, id: Option<&str>) -> String {
    let mut out = String::new();
    let w = fmt_num(scene.width);
    let h = fmt_num(scene.height);

    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\""
    );
    if let Some(id) = id {
        let _ = write!(out, " id=\"{}\"", escape_xml(id));
    }
    out.push_str(" font-family=\"sans-serif\">\n");

    let _ = writeln!(
        out,
        "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{}\"/>",
        paint(&scene.background_color)
    );

    for shape in &scene.shapes {
        write_shape(&mut out, scene, shape);
    }

    out.push_str("</svg>\n");
    out
}

fn write_shape(out: &mut String, scene: &ChartScene, shape: &Shape) {
    match shape {
        Shape::Line { from, to, stroke } => {
            let _ = writeln!(
                out,
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y),
                stroke_attrs(Some(stroke))
            );
        }
        Shape::Polygon {
            points,
            fill,
            stroke,
        } => {
            let fill = fill.as_ref().map(paint).unwrap_or_else(|| "none".to_string());
            let _ = writeln!(
                out,
                "  <polygon points=\"{}\" fill=\"{}\"{}/>",
                points_attr(points),
                fill,
                stroke_attrs(stroke.as_ref())
            );
        }
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
            bold,
        } => {
            let weight = if *bold { " font-weight=\"bold\"" } else { "" };
            let _ = writeln!(
                out,
                "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\" dominant-baseline=\"middle\"{}>{}</text>",
                fmt_num(position.x),
                fmt_num(position.y),
                fmt_num(*size),
                paint(color),
                anchor_attr(*anchor),
                weight,
                escape_xml(content)
            );
        }
        Shape::PlanetLabel {
            position,
            planet,
            label,
            size,
            color,
            region,
        } => {
            let title = scene
                .hit_regions
                .get(*region)
                .map(|r| format!("<title>{}</title>", escape_xml(&r.tooltip.to_text())))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  <text class=\"{PLANET_CLASS}\" data-planet=\"{}\" x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-weight=\"bold\">{}{}</text>",
                escape_xml(planet),
                fmt_num(position.x),
                fmt_num(position.y),
                fmt_num(*size),
                paint(color),
                title,
                escape_xml(label)
            );
        }
        Shape::RetrogradeMarker {
            position,
            size,
            color,
        } => {
            let _ = writeln!(
                out,
                "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"start\" dominant-baseline=\"middle\">R</text>",
                fmt_num(position.x),
                fmt_num(position.y),
                fmt_num(*size),
                paint(color)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_fmt_num_trims_integers() {
        assert_eq!(fmt_num(40.0), "40");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.33");
    }

    #[test]
    fn test_blank_scene_has_only_background() {
        let scene = ChartScene::new(600.0, 600.0);
        let svg = scene_to_svg(&scene, Some("chart-1"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox=\"0 0 600 600\""));
        assert!(svg.contains("id=\"chart-1\""));
        assert!(!svg.contains("<polygon"));
        assert!(!svg.contains("<text"));
    }
}
