//! Scene building from planned documents.

use seatplan_core::Color;
use seatplan_layout::{Bounds, CellAlign, Document, FooterBlock, HeaderBlock, Page, PlacedRow};
use tracing::trace;

use crate::primitives::{
    DrawCommand, FontWeight, LinePrimitive, PageScene, RectPrimitive, RowBand, Stroke, TextAnchor,
    TextRun,
};

/// Identity details are laid out in this many columns.
const DETAILS_PER_LINE: usize = 3;

/// Fonts, colors and spacing used when turning a document into draw commands.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub title_size: f64,
    pub detail_size: f64,
    pub caption_size: f64,
    pub cell_size: f64,
    pub footer_size: f64,
    /// Space between a cell edge and its text
    pub cell_padding: f64,
    pub text_color: Color,
    pub muted_color: Color,
    pub caption_fill: Color,
    /// Fill of every other seat row
    pub shade_fill: Color,
    pub rule: Stroke,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            title_size: 16.0,
            detail_size: 9.0,
            caption_size: 10.0,
            cell_size: 10.0,
            footer_size: 8.0,
            cell_padding: 4.0,
            text_color: Color::BLACK,
            muted_color: Color::from_rgb8(0x55, 0x55, 0x55),
            caption_fill: Color::from_rgb8(0xD9, 0xE2, 0xEC),
            shade_fill: Color::from_rgb8(0xF2, 0xF4, 0xF7),
            rule: Stroke::new(Color::from_rgb8(0xC8, 0xCC, 0xD2), 0.5),
        }
    }
}

/// Build one scene per page with the default style.
pub fn build_scene(doc: &Document) -> Vec<PageScene> {
    build_scene_with_style(doc, &SceneStyle::default())
}

/// Build one scene per page.
pub fn build_scene_with_style(doc: &Document, style: &SceneStyle) -> Vec<PageScene> {
    doc.pages()
        .iter()
        .map(|page| {
            let geometry = doc.geometry();
            let mut scene = PageScene::new(page.index, geometry.page_width, geometry.page_height);
            let mut builder = SceneBuilder {
                scene: &mut scene,
                doc,
                style,
            };
            builder.build_page(page);
            scene
        })
        .collect()
}

struct SceneBuilder<'a> {
    scene: &'a mut PageScene,
    doc: &'a Document,
    style: &'a SceneStyle,
}

impl<'a> SceneBuilder<'a> {
    fn build_page(&mut self, page: &Page) {
        self.build_header(&page.header);
        for row in &page.rows {
            self.build_row(row);
        }
        self.build_footer(&page.footer);
    }

    fn build_header(&mut self, header: &HeaderBlock) {
        let bounds = header.bounds;
        let caption_height = self.doc.geometry().row_height.min(bounds.height);
        let caption_band = bounds.bottom_band(caption_height);

        // Title and details share whatever the caption row leaves free
        let mut cursor = bounds.y;
        let title_size = self.style.title_size;
        if cursor + title_size <= caption_band.y {
            cursor += title_size;
            self.scene.text(TextRun {
                x: bounds.x,
                y: cursor,
                text: header.title.clone(),
                size: title_size,
                weight: FontWeight::Bold,
                anchor: TextAnchor::Start,
                color: self.style.text_color,
            });
            cursor += title_size * 0.4;
        } else {
            trace!(title = %header.title, "title does not fit the header band");
        }

        let line_height = self.style.detail_size * 1.4;
        let column_width = bounds.width / DETAILS_PER_LINE as f64;
        let mut dropped = 0;
        for line in header.details.chunks(DETAILS_PER_LINE) {
            if cursor + line_height > caption_band.y {
                dropped += line.len();
                continue;
            }
            cursor += line_height;
            for (i, detail) in line.iter().enumerate() {
                self.scene.text(TextRun {
                    x: bounds.x + column_width * i as f64,
                    y: cursor,
                    text: format!("{}: {}", detail.label, detail.value),
                    size: self.style.detail_size,
                    weight: FontWeight::Regular,
                    anchor: TextAnchor::Start,
                    color: self.style.text_color,
                });
            }
        }
        if dropped > 0 {
            trace!(dropped, "header details do not fit the header band");
        }

        if caption_band.height <= 0.0 {
            return;
        }
        self.scene
            .rect(RectPrimitive::new(caption_band).with_fill(self.style.caption_fill));
        let spans = self.doc.columns().spans(caption_band.x, caption_band.width);
        for (column, (x, width)) in self.doc.columns().columns().iter().zip(spans) {
            let cell = Bounds::new(x, caption_band.y, width, caption_band.height);
            let size = self.style.caption_size;
            let (x, anchor) = self.align_in(cell, column.align);
            self.scene.text(TextRun {
                x,
                y: baseline(cell, size),
                text: column.kind.caption().to_string(),
                size,
                weight: FontWeight::Bold,
                anchor,
                color: self.style.text_color,
            });
        }
    }

    fn build_row(&mut self, row: &PlacedRow) {
        let bounds = row.bounds;
        self.scene.push(DrawCommand::RowBand(RowBand {
            ordinal: row.ordinal,
            bounds,
            fill: row.is_shaded().then_some(self.style.shade_fill),
        }));

        let spans = self.doc.columns().spans(bounds.x, bounds.width);
        for (column, (x, width)) in self.doc.columns().columns().iter().zip(spans) {
            let cell = Bounds::new(x, bounds.y, width, bounds.height);
            let size = self.style.cell_size;
            let (x, anchor) = self.align_in(cell, column.align);
            self.scene.text(TextRun {
                x,
                y: baseline(cell, size),
                text: column.kind.value(&row.record),
                size,
                weight: FontWeight::Regular,
                anchor,
                color: self.style.text_color,
            });
        }

        self.scene.line(LinePrimitive {
            x1: bounds.x,
            y1: bounds.bottom(),
            x2: bounds.right(),
            y2: bounds.bottom(),
            stroke: self.style.rule,
        });
    }

    fn build_footer(&mut self, footer: &FooterBlock) {
        let bounds = footer.bounds;
        let size = self.style.footer_size;
        let y = baseline(bounds, size);

        self.scene.text(TextRun {
            x: bounds.x,
            y,
            text: footer.generated_label(),
            size,
            weight: FontWeight::Regular,
            anchor: TextAnchor::Start,
            color: self.style.muted_color,
        });
        self.scene.text(TextRun {
            x: bounds.right(),
            y,
            text: footer.page_label(),
            size,
            weight: FontWeight::Regular,
            anchor: TextAnchor::End,
            color: self.style.muted_color,
        });
    }

    fn align_in(&self, cell: Bounds, align: CellAlign) -> (f64, TextAnchor) {
        let padding = self.style.cell_padding.min(cell.width / 2.0);
        match align {
            CellAlign::Start => (cell.x + padding, TextAnchor::Start),
            CellAlign::Middle => (cell.x + cell.width / 2.0, TextAnchor::Middle),
            CellAlign::End => (cell.right() - padding, TextAnchor::End),
        }
    }
}

/// Baseline that visually centers text of `size` in `band`, never below it.
fn baseline(band: Bounds, size: f64) -> f64 {
    (band.y + band.height / 2.0 + size * 0.35).min(band.bottom())
}
