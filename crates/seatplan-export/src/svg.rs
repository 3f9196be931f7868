//! SVG export, one `<svg>` document per page.

use std::fmt::Write as _;

use seatplan_core::RenderError;
use seatplan_layout::Document;
use seatplan_render::{
    checked_scenes, DocumentRenderer, DrawCommand, FontWeight, LinePrimitive, PageScene,
    RectPrimitive, RowBand, SceneStyle, TextAnchor, TextRun,
};

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Renders each page to a standalone SVG string.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    style: SceneStyle,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }
}

impl DocumentRenderer for SvgRenderer {
    type Output = Vec<String>;

    fn render(&mut self, document: &Document) -> Result<Vec<String>, RenderError> {
        let scenes = checked_scenes(document, &self.style)?;
        Ok(scenes.iter().map(page_to_svg).collect())
    }
}

/// Export every page of a document to SVG.
pub fn export(document: &Document) -> Result<Vec<String>, RenderError> {
    SvgRenderer::new().render(document)
}

fn page_to_svg(scene: &PageScene) -> String {
    let mut svg = String::new();
    let width = num(scene.width);
    let height = num(scene.height);

    // XML declaration and SVG root
    let _ = write!(
        svg,
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" data-page="{}">
  <rect x="0" y="0" width="{width}" height="{height}" fill="#FFFFFF" />
"##,
        scene.page_index
    );

    for command in &scene.commands {
        svg.push_str("  ");
        match command {
            DrawCommand::Rect(rect) => write_rect(&mut svg, rect),
            DrawCommand::RowBand(band) => write_row_band(&mut svg, band),
            DrawCommand::Line(line) => write_line(&mut svg, line),
            DrawCommand::Text(text) => write_text(&mut svg, text),
        }
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_rect(svg: &mut String, rect: &RectPrimitive) {
    let _ = write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        rect.fill.map_or_else(|| "none".to_string(), |c| c.to_hex()),
    );
    if let Some(stroke) = rect.stroke {
        let _ = write!(
            svg,
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color.to_hex(),
            num(stroke.width)
        );
    }
    svg.push_str(" />");
}

fn write_row_band(svg: &mut String, band: &RowBand) {
    let b = band.bounds;
    let _ = write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" data-row="{}" />"#,
        num(b.x),
        num(b.y),
        num(b.width),
        num(b.height),
        band.fill.map_or_else(|| "none".to_string(), |c| c.to_hex()),
        band.ordinal,
    );
}

fn write_line(svg: &mut String, line: &LinePrimitive) {
    let _ = write!(
        svg,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" />"#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        line.stroke.color.to_hex(),
        num(line.stroke.width),
    );
}

fn write_text(svg: &mut String, text: &TextRun) {
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}" text-anchor="{anchor}" fill="{}""#,
        num(text.x),
        num(text.y),
        num(text.size),
        text.color.to_hex(),
    );
    if text.weight == FontWeight::Bold {
        svg.push_str(r#" font-weight="bold""#);
    }
    let _ = write!(svg, ">{}</text>", escape_xml(&text.text));
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
