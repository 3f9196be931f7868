//! Seat table columns.

use seatplan_core::SeatRecord;

/// What a table column shows for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// The printed `S-{n}` label
    SeatLabel,
    Row,
    Column,
    BenchPosition,
    StudentsAtBench,
}

impl ColumnKind {
    /// Column caption shown in the header row.
    pub fn caption(&self) -> &'static str {
        match self {
            ColumnKind::SeatLabel => "Seat",
            ColumnKind::Row => "Row",
            ColumnKind::Column => "Column",
            ColumnKind::BenchPosition => "Bench",
            ColumnKind::StudentsAtBench => "Per Bench",
        }
    }

    /// Cell text for a seat.
    pub fn value(&self, record: &SeatRecord) -> String {
        match self {
            ColumnKind::SeatLabel => record.label().to_string(),
            ColumnKind::Row => record.row.to_string(),
            ColumnKind::Column => record.column.to_string(),
            ColumnKind::BenchPosition => record.bench_position.to_string(),
            ColumnKind::StudentsAtBench => record.students_at_bench.to_string(),
        }
    }
}

/// Horizontal alignment of cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    #[default]
    Start,
    Middle,
    End,
}

/// A column with its share of the table width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColumn {
    pub kind: ColumnKind,
    /// Relative width; shares are normalized across all columns
    pub share: f64,
    pub align: CellAlign,
}

impl TableColumn {
    pub fn new(kind: ColumnKind, share: f64) -> Self {
        Self {
            kind,
            share,
            align: CellAlign::Start,
        }
    }

    pub fn with_align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }
}

/// The ordered columns of the seat table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumns {
    columns: Vec<TableColumn>,
}

impl Default for TableColumns {
    fn default() -> Self {
        Self::new(vec![
            TableColumn::new(ColumnKind::SeatLabel, 3.0),
            TableColumn::new(ColumnKind::Row, 2.0).with_align(CellAlign::Middle),
            TableColumn::new(ColumnKind::Column, 2.0).with_align(CellAlign::Middle),
            TableColumn::new(ColumnKind::BenchPosition, 2.0).with_align(CellAlign::Middle),
            TableColumn::new(ColumnKind::StudentsAtBench, 2.0).with_align(CellAlign::Middle),
        ])
    }
}

impl TableColumns {
    /// Build a column set. Non-positive or non-finite shares count as zero.
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// `(x, width)` of each column inside a table starting at `x` spanning `width`.
    ///
    /// Spans are contiguous and end exactly at `x + width`. With no positive
    /// share the width is split evenly.
    pub fn spans(&self, x: f64, width: f64) -> Vec<(f64, f64)> {
        let shares: Vec<f64> = self
            .columns
            .iter()
            .map(|c| if c.share.is_finite() && c.share > 0.0 { c.share } else { 0.0 })
            .collect();
        let total: f64 = shares.iter().sum();

        let mut spans = Vec::with_capacity(shares.len());
        let mut left = x;
        for (i, share) in shares.iter().enumerate() {
            let right = if i + 1 == shares.len() {
                x + width
            } else if total > 0.0 {
                left + width * share / total
            } else {
                left + width / shares.len() as f64
            };
            spans.push((left, right - left));
            left = right;
        }
        spans
    }
}
