//! Seat arrangement report generator.
//!
//! Reads a JSON report file (or stdin), plans the pages and writes the
//! result as PDF or SVG.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use seatplan_export::{write_document, ExportFormat};
use seatplan_layout::LayoutPlanner;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::report::ReportFile;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "seatplan")]
#[command(about = "Render paginated seat arrangement reports")]
struct Args {
    /// Report file (JSON); reads stdin when omitted
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output file; SVG output of several pages gets a page suffix per file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format: pdf or svg
    #[arg(short, long, default_value = "pdf")]
    format: ExportFormat,

    /// Report title printed in every page header
    #[arg(short, long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdin/stdout stay free for data
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let request = ReportFile::load(args.input.as_deref())?;

    let mut planner = LayoutPlanner::new(request.geometry);
    if let Some(title) = args.title {
        planner = planner.with_title(title);
    }
    let report = planner
        .plan_report(&request.arrangement)
        .context("cannot plan report")?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("seatplan.{}", args.format.extension())));
    let written = write_document(&report.document, args.format, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    for path in &written {
        info!(path = %path.display(), "written");
    }
    if !report.warnings.is_empty() {
        info!(warnings = report.warnings.len(), "report generated with warnings");
    }
    Ok(())
}
