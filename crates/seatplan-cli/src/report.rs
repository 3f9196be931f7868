//! Report input files.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use seatplan_core::{PageGeometry, SeatArrangementConfig};
use serde::Deserialize;

/// A report request: the arrangement plus an optional page geometry.
///
/// ```json
/// {
///   "arrangement": { "className": "Grade 7", "rowCount": 6, "columnCount": 4, "studentsPerBench": 2 },
///   "geometry": { "rowHeight": 20 }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFile {
    pub arrangement: SeatArrangementConfig,
    #[serde(default)]
    pub geometry: PageGeometry,
}

impl ReportFile {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid report file")
    }

    /// Read from `path`, or from stdin when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let text = match path {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read report from stdin")?;
                text
            }
        };
        Self::from_json(&text)
    }
}
