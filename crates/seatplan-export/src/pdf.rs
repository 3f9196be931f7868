//! PDF export.
//!
//! This module writes one PDF page per planned page using pdf-writer and the
//! base-14 Helvetica faces, so no font has to be embedded.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use seatplan_core::{Color, RenderError};
use seatplan_layout::{Bounds, Document};
use seatplan_render::{
    checked_scenes, DocumentRenderer, DrawCommand, FontWeight, PageScene, SceneStyle, TextAnchor,
    TextRun,
};
use tracing::debug;

use crate::metrics::text_width;

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

/// Renders a document to PDF bytes.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    style: SceneStyle,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }
}

impl DocumentRenderer for PdfRenderer {
    type Output = Vec<u8>;

    fn render(&mut self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let scenes = checked_scenes(document, &self.style)?;
        Ok(write_pdf(&scenes))
    }
}

/// Export a document to PDF.
pub fn export(document: &Document) -> Result<Vec<u8>, RenderError> {
    PdfRenderer::new().render(document)
}

fn write_pdf(scenes: &[PageScene]) -> Vec<u8> {
    let mut pdf = Pdf::new();

    // Allocate object references
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);
    let page_ids: Vec<(Ref, Ref)> = (0..scenes.len() as i32)
        .map(|i| (Ref::new(5 + 2 * i), Ref::new(6 + 2 * i)))
        .collect();

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(scenes.len() as i32);

    for (scene, (page_id, content_id)) in scenes.iter().zip(&page_ids) {
        let content_data = paint_page(scene);
        debug!(page = scene.page_index, bytes = content_data.len(), "wrote PDF page");

        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, scene.width as f32, scene.height as f32));
        page.parent(page_tree_id);
        page.contents(*content_id);

        let mut resources = page.resources();
        resources
            .fonts()
            .pair(REGULAR_FONT, regular_id)
            .pair(BOLD_FONT, bold_id);
        resources.finish();
        page.finish();

        pdf.stream(*content_id, &content_data);
    }

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    pdf.finish()
}

/// Paint one scene. PDF puts the origin at the bottom-left, so every y is
/// flipped against the page height.
fn paint_page(scene: &PageScene) -> Vec<u8> {
    let mut content = Content::new();
    let height = scene.height;
    let flip = |y: f64| (height - y) as f32;

    for command in &scene.commands {
        match command {
            DrawCommand::Rect(rect) => {
                if let Some(fill) = rect.fill {
                    set_fill(&mut content, fill);
                    pdf_rect(&mut content, rect.bounds(), &flip);
                    content.fill_nonzero();
                }
                if let Some(stroke) = rect.stroke {
                    set_stroke(&mut content, stroke.color);
                    content.set_line_width(stroke.width as f32);
                    pdf_rect(&mut content, rect.bounds(), &flip);
                    content.stroke();
                }
            }
            DrawCommand::RowBand(band) => {
                // Unshaded rows paint nothing
                if let Some(fill) = band.fill {
                    set_fill(&mut content, fill);
                    pdf_rect(&mut content, band.bounds, &flip);
                    content.fill_nonzero();
                }
            }
            DrawCommand::Line(line) => {
                set_stroke(&mut content, line.stroke.color);
                content.set_line_width(line.stroke.width as f32);
                content.move_to(line.x1 as f32, flip(line.y1));
                content.line_to(line.x2 as f32, flip(line.y2));
                content.stroke();
            }
            DrawCommand::Text(text) => paint_text(&mut content, text, &flip),
        }
    }

    content.finish()
}

fn paint_text(content: &mut Content, text: &TextRun, flip: &dyn Fn(f64) -> f32) {
    let width = text_width(&text.text, text.size, text.weight);
    let x = match text.anchor {
        TextAnchor::Start => text.x,
        TextAnchor::Middle => text.x - width / 2.0,
        TextAnchor::End => text.x - width,
    };
    let font = match text.weight {
        FontWeight::Regular => REGULAR_FONT,
        FontWeight::Bold => BOLD_FONT,
    };
    let encoded = encode_win_ansi(&text.text);

    set_fill(content, text.color);
    content.begin_text();
    content.set_font(font, text.size as f32);
    content.next_line(x as f32, flip(text.y));
    content.show(Str(&encoded));
    content.end_text();
}

fn pdf_rect(content: &mut Content, bounds: Bounds, flip: &dyn Fn(f64) -> f32) {
    content.rect(
        bounds.x as f32,
        flip(bounds.bottom()),
        bounds.width as f32,
        bounds.height as f32,
    );
}

fn set_fill(content: &mut Content, color: Color) {
    content.set_fill_rgb(color.r, color.g, color.b);
}

fn set_stroke(content: &mut Content, color: Color) {
    content.set_stroke_rgb(color.r, color.g, color.b);
}

/// Encode text for the WinAnsi base fonts. Latin-1 maps through unchanged;
/// anything else becomes `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            code @ 0x20..=0x7E | code @ 0xA0..=0xFF => code as u8,
            _ => b'?',
        })
        .collect()
}
