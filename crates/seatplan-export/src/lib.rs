//! Export formats for seat-arrangement reports.
//!
//! Supported formats:
//! - SVG (one file per page)
//! - PDF (single multi-page file)

#[cfg(feature = "svg")]
pub mod svg;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "pdf")]
mod metrics;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use seatplan_core::ExportError;
use seatplan_layout::Document;
use tracing::info;

#[cfg(feature = "pdf")]
pub use pdf::PdfRenderer;
#[cfg(feature = "svg")]
pub use svg::SvgRenderer;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Pdf,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Export every page of a document to SVG.
#[cfg(feature = "svg")]
pub fn export_svg(document: &Document) -> Result<Vec<String>, ExportError> {
    Ok(svg::export(document)?)
}

/// Export a document to PDF.
#[cfg(feature = "pdf")]
pub fn export_pdf(document: &Document) -> Result<Vec<u8>, ExportError> {
    Ok(pdf::export(document)?)
}

/// Render a document and write it next to `path`.
///
/// PDF goes to `path` itself. SVG writes `path` for a single page and
/// `{stem}-{n}.{ext}` per page otherwise. Returns the files written.
pub fn write_document(
    document: &Document,
    format: ExportFormat,
    path: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    let written = match format {
        ExportFormat::Pdf => write_pdf(document, path)?,
        ExportFormat::Svg => write_svg(document, path)?,
    };
    info!(files = written.len(), pages = document.page_count(), "wrote report");
    Ok(written)
}

#[cfg(feature = "pdf")]
fn write_pdf(document: &Document, path: &Path) -> Result<Vec<PathBuf>, ExportError> {
    fs::write(path, export_pdf(document)?)?;
    Ok(vec![path.to_path_buf()])
}

#[cfg(not(feature = "pdf"))]
fn write_pdf(_document: &Document, _path: &Path) -> Result<Vec<PathBuf>, ExportError> {
    Err(ExportError::UnsupportedFormat {
        format: "pdf".to_string(),
    })
}

#[cfg(feature = "svg")]
fn write_svg(document: &Document, path: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let pages = export_svg(document)?;
    if let [single] = pages.as_slice() {
        fs::write(path, single)?;
        return Ok(vec![path.to_path_buf()]);
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "seatplan".to_string());
    let extension = path
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| ExportFormat::Svg.extension().to_string());

    let mut written = Vec::with_capacity(pages.len());
    for (i, page) in pages.iter().enumerate() {
        let target = path.with_file_name(format!("{stem}-{}.{extension}", i + 1));
        fs::write(&target, page)?;
        written.push(target);
    }
    Ok(written)
}

#[cfg(not(feature = "svg"))]
fn write_svg(_document: &Document, _path: &Path) -> Result<Vec<PathBuf>, ExportError> {
    Err(ExportError::UnsupportedFormat {
        format: "svg".to_string(),
    })
}
