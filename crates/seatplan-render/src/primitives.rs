//! Draw instructions.
//!
//! These are the only thing a renderer backend consumes. Coordinates are in
//! the page geometry's unit with the origin at the top-left corner and y
//! growing downwards. Instructions are listed in paint order.

use seatplan_core::Color;
use seatplan_layout::Bounds;

/// A single draw instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill and/or outline a rectangle
    Rect(RectPrimitive),
    /// Background band of one seat row
    RowBand(RowBand),
    /// Draw a straight line
    Line(LinePrimitive),
    /// Draw a run of text
    Text(TextRun),
}

impl DrawCommand {
    /// Area the instruction may paint. Text runs report their anchor point.
    pub fn extent(&self) -> Bounds {
        match self {
            DrawCommand::Rect(rect) => rect.bounds(),
            DrawCommand::RowBand(band) => band.bounds,
            DrawCommand::Line(line) => Bounds::new(
                line.x1.min(line.x2),
                line.y1.min(line.y2),
                (line.x2 - line.x1).abs(),
                (line.y2 - line.y1).abs(),
            ),
            DrawCommand::Text(text) => Bounds::new(text.x, text.y, 0.0, 0.0),
        }
    }
}

/// Outline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// A rectangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl RectPrimitive {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

/// Background of one seat row.
///
/// `ordinal` is the row's position in the whole document, so shading stays
/// continuous when a page break falls between two rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBand {
    pub ordinal: usize,
    pub bounds: Bounds,
    /// Set for shaded rows only
    pub fill: Option<Color>,
}

/// A straight line.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
}

/// Font weight of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Which point of the text `x` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// A run of text positioned by its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f64,
    /// Baseline
    pub y: f64,
    pub text: String,
    pub size: f64,
    pub weight: FontWeight,
    pub anchor: TextAnchor,
    pub color: Color,
}

/// Everything to paint on one page, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageScene {
    /// 1-based page index
    pub page_index: usize,
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

impl PageScene {
    /// Create an empty scene.
    pub fn new(page_index: usize, width: f64, height: f64) -> Self {
        Self {
            page_index,
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Add a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn rect(&mut self, rect: RectPrimitive) {
        self.push(DrawCommand::Rect(rect));
    }

    pub fn line(&mut self, line: LinePrimitive) {
        self.push(DrawCommand::Line(line));
    }

    pub fn text(&mut self, text: TextRun) {
        self.push(DrawCommand::Text(text));
    }

    /// Page rectangle.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }

    /// Text runs in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Row bands in paint order.
    pub fn row_bands(&self) -> impl Iterator<Item = &RowBand> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::RowBand(band) => Some(band),
            _ => None,
        })
    }
}
