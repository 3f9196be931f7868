//! Error types for the seatplan engine.

use std::fmt;

use thiserror::Error;

/// A page geometry that cannot host a report.
///
/// Raised before enumeration or packing starts; no document is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("No usable height left for seat rows ({usable})")]
    NoUsableHeight { usable: f64 },

    #[error("Row height {row_height} runs past the page bottom ({available} left below the body top)")]
    RowExceedsPage { row_height: f64, available: f64 },

    /// The header band would start above the top edge of the page.
    #[error("Header height {header_height} exceeds top margin {top_margin}")]
    HeaderExceedsTopMargin { header_height: f64, top_margin: f64 },

    #[error("No usable width left for the seat table ({usable})")]
    NoUsableWidth { usable: f64 },
}

/// Declared seat total disagrees with `rows * columns * studentsPerBench`.
///
/// Not fatal: the derived total wins and the report is still produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataInconsistencyWarning {
    pub declared: i64,
    pub derived: u64,
}

impl fmt::Display for DataInconsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "declared total seats {} does not match derived total {}; using {}",
            self.declared, self.derived, self.derived
        )
    }
}

/// Errors raised by a document renderer backend.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Draw instruction on page {page} lies outside the page: {instruction}")]
    OffPage { page: usize, instruction: String },
}

/// Errors while writing rendered output.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export format not supported: {format}")]
    UnsupportedFormat { format: String },

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}
