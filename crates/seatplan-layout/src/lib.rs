//! Seat enumeration and page planning for seat-arrangement reports.
//!
//! This crate turns an arrangement into an ordered list of seats and packs
//! those seats into fixed-size pages.
//!
//! # Architecture
//!
//! 1. **Enumeration**: [`enumerate`] walks rows front to back, columns left to
//!    right and bench positions in order, numbering seats from 1
//! 2. **Packing**: [`LayoutPlanner`] fills each page's body with whole rows and
//!    starts a new page when the next row would overflow
//! 3. **Footer stamping**: once the page count is known, every footer is
//!    stamped with `Page {i} / {N}` and one shared timestamp
//!
//! # Example
//!
//! ```ignore
//! use seatplan_core::{PageGeometry, SeatArrangementConfig};
//! use seatplan_layout::plan_report;
//!
//! let config = SeatArrangementConfig::new(6, 4, 2);
//! let report = plan_report(&config, &PageGeometry::a4())?;
//!
//! for page in report.document.pages() {
//!     println!("{}: {} seats", page.footer.page_label(), page.rows.len());
//! }
//! ```

mod document;
mod enumerate;
mod planner;
mod table;

pub use document::{Bounds, Document, FooterBlock, HeaderBlock, HeaderDetail, Page, PlacedRow};
pub use enumerate::{enumerate, seats, Seats};
pub use planner::{plan, plan_report, LayoutPlanner, Report, DEFAULT_TITLE};
pub use table::{CellAlign, ColumnKind, TableColumn, TableColumns};
