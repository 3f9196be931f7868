//! Core value types for seat arrangements.

use std::fmt;

use crate::errors::DataInconsistencyWarning;

/// Descriptive labels for the class or exam a report is printed for.
///
/// These are display-only: nothing in enumeration or page planning reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ClassIdentity {
    pub class_name: String,
    pub batch: String,
    pub section: String,
    pub session: String,
    pub exam_name: String,
    pub exam_duration: String,
    pub hall_room: String,
    pub monthly_fee: String,
}

impl ClassIdentity {
    /// Labelled identity fields that carry a value, in display order.
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        [
            ("Class", self.class_name.as_str()),
            ("Batch", self.batch.as_str()),
            ("Section", self.section.as_str()),
            ("Session", self.session.as_str()),
            ("Exam", self.exam_name.as_str()),
            ("Duration", self.exam_duration.as_str()),
            ("Hall/Room", self.hall_room.as_str()),
            ("Monthly Fee", self.monthly_fee.as_str()),
        ]
        .into_iter()
        .map(|(label, value)| (label, value.trim()))
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

/// Seat counts and identity for one report request.
///
/// Counts are signed so that a zero or negative dimension coming from an
/// operator form can be represented; such a dimension yields no seats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SeatArrangementConfig {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub identity: ClassIdentity,
    pub row_count: i32,
    pub column_count: i32,
    pub students_per_bench: i32,
    /// Independently supplied seat total, if the source recorded one.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub total_seats: Option<i64>,
}

impl SeatArrangementConfig {
    /// Create a config with the given dimensions and an empty identity.
    pub fn new(row_count: i32, column_count: i32, students_per_bench: i32) -> Self {
        Self {
            identity: ClassIdentity::default(),
            row_count,
            column_count,
            students_per_bench,
            total_seats: None,
        }
    }

    /// Set the identity labels.
    pub fn with_identity(mut self, identity: ClassIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Set the independently declared seat total.
    pub fn with_declared_total(mut self, total: i64) -> Self {
        self.total_seats = Some(total);
        self
    }

    /// Rows, columns and bench size, or `None` when any of them is not positive.
    pub fn dimensions(&self) -> Option<SeatDimensions> {
        let rows = u32::try_from(self.row_count).ok().filter(|&n| n > 0)?;
        let columns = u32::try_from(self.column_count).ok().filter(|&n| n > 0)?;
        let per_bench = u32::try_from(self.students_per_bench).ok().filter(|&n| n > 0)?;
        Some(SeatDimensions { rows, columns, per_bench })
    }

    /// Derived seat total: `rowCount * columnCount * studentsPerBench`.
    pub fn total_seats(&self) -> u64 {
        self.dimensions().map_or(0, |d| d.total())
    }

    /// Compare the declared total (if any) against the derived one.
    ///
    /// The derived value is authoritative; a mismatch is only reported.
    pub fn check_consistency(&self) -> Option<DataInconsistencyWarning> {
        let declared = self.total_seats?;
        let derived = self.total_seats();
        if u64::try_from(declared).ok() == Some(derived) {
            None
        } else {
            Some(DataInconsistencyWarning { declared, derived })
        }
    }
}

/// Positive arrangement dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatDimensions {
    pub rows: u32,
    pub columns: u32,
    pub per_bench: u32,
}

impl SeatDimensions {
    /// Number of seats in the arrangement.
    pub fn total(&self) -> u64 {
        (self.rows as u64)
            .saturating_mul(self.columns as u64)
            .saturating_mul(self.per_bench as u64)
    }
}

/// One enumerated seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SeatRecord {
    /// 1-based row, front to back
    pub row: u32,
    /// 1-based column, left to right
    pub column: u32,
    /// 1-based position on the bench
    pub bench_position: u32,
    /// 1-based sequential seat number
    pub seat_number: u64,
    /// Students per bench, repeated on every record for display
    pub students_at_bench: u32,
}

impl SeatRecord {
    /// The printed seat label, `S-{seatNumber}`.
    pub fn label(&self) -> SeatLabel {
        SeatLabel(self.seat_number)
    }
}

/// Display adapter for a seat label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatLabel(pub u64);

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.0)
    }
}

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }

    /// Convert to hex string without alpha (e.g., "#FF5733").
    pub fn to_hex(&self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
