//! Seat enumeration.
//!
//! Seats are visited row-major: rows front to back, then columns left to
//! right, then bench positions. Seat numbers follow that visiting order
//! starting at 1, which is what printed `S-{n}` labels are matched against.

use std::iter::FusedIterator;

use seatplan_core::{SeatArrangementConfig, SeatDimensions, SeatRecord};
use tracing::debug;

/// Enumerate every seat of an arrangement in classroom reading order.
///
/// A zero or negative dimension yields an empty list.
pub fn enumerate(config: &SeatArrangementConfig) -> Vec<SeatRecord> {
    let records: Vec<SeatRecord> = seats(config).collect();
    debug!(
        rows = config.row_count,
        columns = config.column_count,
        per_bench = config.students_per_bench,
        seats = records.len(),
        "enumerated seats"
    );
    records
}

/// Lazily enumerate the seats of an arrangement.
pub fn seats(config: &SeatArrangementConfig) -> Seats {
    Seats::new(config.dimensions())
}

/// Iterator over the seats of an arrangement. See [`seats`].
#[derive(Debug, Clone)]
pub struct Seats {
    dimensions: Option<SeatDimensions>,
    row: u32,
    column: u32,
    bench: u32,
    next_number: u64,
    remaining: u64,
}

impl Seats {
    fn new(dimensions: Option<SeatDimensions>) -> Self {
        Self {
            dimensions,
            row: 1,
            column: 1,
            bench: 1,
            next_number: 1,
            remaining: dimensions.map_or(0, |d| d.total()),
        }
    }

    fn advance(&mut self, dims: SeatDimensions) {
        if self.bench < dims.per_bench {
            self.bench += 1;
            return;
        }
        self.bench = 1;
        if self.column < dims.columns {
            self.column += 1;
            return;
        }
        self.column = 1;
        self.row += 1;
    }
}

impl Iterator for Seats {
    type Item = SeatRecord;

    fn next(&mut self) -> Option<SeatRecord> {
        if self.remaining == 0 {
            return None;
        }
        let dims = self.dimensions?;

        let record = SeatRecord {
            row: self.row,
            column: self.column,
            bench_position: self.bench,
            seat_number: self.next_number,
            students_at_bench: dims.per_bench,
        };

        self.remaining -= 1;
        self.next_number += 1;
        self.advance(dims);

        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Seats {}

impl FusedIterator for Seats {}
