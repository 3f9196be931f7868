//! Planned document structures.
//!
//! A [`Document`] owns its pages. Each page carries its own header block, a
//! contiguous slice of the global seat order, and a footer block.

use chrono::{DateTime, Utc};
use seatplan_core::{PageGeometry, SeatRecord};

use crate::table::TableColumns;

/// Axis-aligned rectangle in page coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the bounds.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Check if `other` lies entirely inside these bounds.
    pub fn encloses(&self, other: &Bounds) -> bool {
        self.contains(other.x, other.y) && self.contains(other.right(), other.bottom())
    }

    /// Split off a band of `height` from the bottom.
    pub fn bottom_band(&self, height: f64) -> Bounds {
        let height = height.min(self.height);
        Bounds::new(self.x, self.bottom() - height, self.width, height)
    }
}

/// One labelled identity line in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDetail {
    pub label: String,
    pub value: String,
}

/// The header drawn at the top of every page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBlock {
    pub title: String,
    pub details: Vec<HeaderDetail>,
    /// The header band on the page
    pub bounds: Bounds,
}

/// The running footer drawn at the bottom of every page.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterBlock {
    /// 1-based page index
    pub page_index: usize,
    /// Total pages in the document; zero until stamped
    pub page_count: usize,
    pub generated_at: DateTime<Utc>,
    /// The footer band on the page
    pub bounds: Bounds,
}

impl FooterBlock {
    /// `Page {pageIndex} / {N}`
    pub fn page_label(&self) -> String {
        format!("Page {} / {}", self.page_index, self.page_count)
    }

    /// Generation timestamp shown next to the page label.
    pub fn generated_label(&self) -> String {
        format!("Generated {}", self.generated_at.format("%Y-%m-%d %H:%M UTC"))
    }
}

/// A seat placed on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedRow {
    pub record: SeatRecord,
    /// Zero-based position in the whole document, not reset per page
    pub ordinal: usize,
    pub bounds: Bounds,
}

impl PlacedRow {
    /// Alternate rows are shaded by document position so stripes continue
    /// across page breaks.
    pub fn is_shaded(&self) -> bool {
        self.ordinal % 2 == 1
    }
}

/// One page of a planned document.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page index
    pub index: usize,
    pub header: HeaderBlock,
    pub rows: Vec<PlacedRow>,
    pub footer: FooterBlock,
}

impl Page {
    /// Seats on this page, in order.
    pub fn records(&self) -> impl Iterator<Item = &SeatRecord> + '_ {
        self.rows.iter().map(|row| &row.record)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A planned, renderer-agnostic seat report.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) geometry: PageGeometry,
    pub(crate) columns: TableColumns,
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) pages: Vec<Page>,
}

impl Document {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Total page count, as stamped on every footer.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn columns(&self) -> &TableColumns {
        &self.columns
    }

    /// Timestamp captured once when planning started.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Whole page rectangle.
    pub fn page_bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.geometry.page_width, self.geometry.page_height)
    }

    /// All placed rows across pages, in document order.
    pub fn rows(&self) -> impl Iterator<Item = &PlacedRow> + '_ {
        self.pages.iter().flat_map(|page| page.rows.iter())
    }

    /// Total number of seat rows.
    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|page| page.rows.len()).sum()
    }
}
