//! Page planning.
//!
//! Planning runs in two passes. The packing pass walks the seats in order and
//! fills each page body with whole rows, starting a new page only when the
//! next row would overflow the usable height. The stamping pass runs once the
//! page count is known and writes `Page {i} / {N}` into every footer.

use chrono::{DateTime, Utc};
use seatplan_core::{
    ClassIdentity, ConfigurationError, DataInconsistencyWarning, PageGeometry,
    SeatArrangementConfig, SeatRecord,
};
use tracing::{debug, info, trace, warn};

use crate::document::{Bounds, Document, FooterBlock, HeaderBlock, HeaderDetail, Page, PlacedRow};
use crate::enumerate::enumerate;
use crate::table::TableColumns;

/// Title printed at the top of every page unless overridden.
pub const DEFAULT_TITLE: &str = "Seat Arrangement";

/// Plan seat records onto pages with the default header.
pub fn plan(records: &[SeatRecord], geometry: &PageGeometry) -> Result<Document, ConfigurationError> {
    LayoutPlanner::new(*geometry).plan(records)
}

/// Enumerate and plan a whole arrangement.
///
/// The geometry is validated before any seat is enumerated.
pub fn plan_report(
    config: &SeatArrangementConfig,
    geometry: &PageGeometry,
) -> Result<Report, ConfigurationError> {
    LayoutPlanner::new(*geometry).plan_report(config)
}

/// A planned report and the data-quality warnings raised while building it.
#[derive(Debug, Clone)]
pub struct Report {
    pub document: Document,
    pub warnings: Vec<DataInconsistencyWarning>,
}

/// Packs seat records into pages.
#[derive(Debug, Clone)]
pub struct LayoutPlanner {
    geometry: PageGeometry,
    columns: TableColumns,
    title: String,
    details: Vec<HeaderDetail>,
    generated_at: Option<DateTime<Utc>>,
}

impl LayoutPlanner {
    /// Create a planner for the given page geometry.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            columns: TableColumns::default(),
            title: DEFAULT_TITLE.to_string(),
            details: Vec::new(),
            generated_at: None,
        }
    }

    /// Set the header title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append a labelled line to the header.
    pub fn with_detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push(HeaderDetail {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Append every non-empty identity field to the header.
    pub fn with_identity(self, identity: &ClassIdentity) -> Self {
        identity
            .details()
            .into_iter()
            .fold(self, |planner, (label, value)| planner.with_detail(label, value))
    }

    /// Pin the generation timestamp instead of reading the clock.
    pub fn with_timestamp(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Enumerate and plan a whole arrangement, adding its identity and seat
    /// total to the header.
    pub fn plan_report(&self, config: &SeatArrangementConfig) -> Result<Report, ConfigurationError> {
        self.geometry.validate()?;

        let warnings: Vec<DataInconsistencyWarning> = config.check_consistency().into_iter().collect();
        for warning in &warnings {
            warn!(
                declared = warning.declared,
                derived = warning.derived,
                "seat total mismatch; using derived total"
            );
        }

        let records = enumerate(config);
        let document = self
            .clone()
            .with_identity(&config.identity)
            .with_detail("Total Seats", config.total_seats().to_string())
            .plan(&records)?;

        Ok(Report { document, warnings })
    }

    /// Pack records into pages.
    ///
    /// An empty record list still yields one page carrying header and footer.
    #[tracing::instrument(skip_all, fields(records = records.len()))]
    pub fn plan(&self, records: &[SeatRecord]) -> Result<Document, ConfigurationError> {
        let geometry = self.geometry;
        geometry.validate()?;

        let generated_at = self.generated_at.unwrap_or_else(Utc::now);
        let usable = geometry.usable_height();
        let row_height = geometry.row_height;
        let capacity = geometry.rows_per_page();
        debug!(usable, row_height, capacity, "packing seat rows");

        // First pass: greedy packing
        let mut pages: Vec<Page> = Vec::new();
        let mut current = self.start_page(1, generated_at);

        for (ordinal, record) in records.iter().enumerate() {
            // Break when the next row would cross the usable height. Counting
            // whole rows keeps float drift out of the decision. A page never
            // breaks while empty, so a row taller than the body sits alone.
            let overflows = current.rows.len() >= capacity;
            if overflows && !current.rows.is_empty() {
                trace!(page = current.index, rows = current.rows.len(), "page full");
                let next_index = current.index + 1;
                pages.push(std::mem::replace(
                    &mut current,
                    self.start_page(next_index, generated_at),
                ));
            }

            let cursor_y = current.rows.len() as f64 * row_height;
            current.rows.push(PlacedRow {
                record: *record,
                ordinal,
                bounds: Bounds::new(
                    geometry.left_margin,
                    geometry.body_top() + cursor_y,
                    geometry.content_width(),
                    row_height,
                ),
            });
        }

        if !current.rows.is_empty() || pages.is_empty() {
            pages.push(current);
        }

        // Second pass: stamp footers now that the page count is known
        let page_count = pages.len();
        for page in &mut pages {
            page.footer.page_count = page_count;
        }

        info!(pages = page_count, rows = records.len(), "planned seat document");

        Ok(Document {
            geometry,
            columns: self.columns.clone(),
            generated_at,
            pages,
        })
    }

    fn start_page(&self, index: usize, generated_at: DateTime<Utc>) -> Page {
        let g = &self.geometry;
        Page {
            index,
            header: HeaderBlock {
                title: self.title.clone(),
                details: self.details.clone(),
                bounds: Bounds::new(g.left_margin, g.header_top(), g.content_width(), g.header_height),
            },
            rows: Vec::new(),
            footer: FooterBlock {
                page_index: index,
                page_count: 0,
                generated_at,
                bounds: Bounds::new(g.left_margin, g.footer_top(), g.content_width(), g.footer_reserve),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).unwrap()
    }

    /// A geometry whose body holds exactly `rows` rows of height 10.
    fn geometry_for(rows: usize) -> PageGeometry {
        PageGeometry {
            page_width: 200.0,
            page_height: 45.0 + rows as f64 * 10.0,
            top_margin: 30.0,
            bottom_margin: 10.0,
            left_margin: 10.0,
            right_margin: 10.0,
            header_height: 25.0,
            row_height: 10.0,
            footer_reserve: 5.0,
        }
    }

    fn planner(rows: usize) -> LayoutPlanner {
        LayoutPlanner::new(geometry_for(rows)).with_timestamp(fixed_time())
    }

    #[test]
    fn test_four_seats_three_per_page() {
        let records = enumerate(&SeatArrangementConfig::new(2, 2, 1));
        let doc = planner(3).plan(&records).unwrap();

        assert_eq!(doc.page_count(), 2);
        let first: Vec<u64> = doc.pages()[0].records().map(|r| r.seat_number).collect();
        let second: Vec<u64> = doc.pages()[1].records().map(|r| r.seat_number).collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, vec![4]);
        assert_eq!(doc.pages()[0].footer.page_label(), "Page 1 / 2");
        assert_eq!(doc.pages()[1].footer.page_label(), "Page 2 / 2");
    }

    #[test]
    fn test_empty_arrangement_has_one_page() {
        let records = enumerate(&SeatArrangementConfig::new(0, 4, 2));
        let doc = planner(3).plan(&records).unwrap();

        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages()[0].is_empty());
        assert_eq!(doc.pages()[0].footer.page_label(), "Page 1 / 1");
        assert_eq!(doc.pages()[0].header.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_exact_fill_does_not_add_blank_page() {
        let records = enumerate(&SeatArrangementConfig::new(3, 2, 1));
        let doc = planner(3).plan(&records).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert!(doc.pages().iter().all(|p| p.rows.len() == 3));
    }

    #[test]
    fn test_ordinals_continue_across_pages() {
        let records = enumerate(&SeatArrangementConfig::new(2, 2, 1));
        let doc = planner(3).plan(&records).unwrap();
        let ordinals: Vec<usize> = doc.rows().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
        // Seat 4 opens page 2 but stays shaded like the fourth row overall
        assert!(doc.pages()[1].rows[0].is_shaded());
    }

    #[test]
    fn test_row_positions_restart_on_each_page() {
        let records = enumerate(&SeatArrangementConfig::new(5, 1, 1));
        let doc = planner(3).plan(&records).unwrap();
        let ys: Vec<f64> = doc.pages()[1].rows.iter().map(|r| r.bounds.y).collect();
        assert_eq!(ys, vec![30.0, 40.0]);
        assert!((doc.pages()[0].rows[2].bounds.bottom() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_every_block_inside_page() {
        let records = enumerate(&SeatArrangementConfig::new(7, 3, 2));
        let doc = planner(4).plan(&records).unwrap();
        let page = doc.page_bounds();
        for p in doc.pages() {
            assert!(page.encloses(&p.header.bounds));
            assert!(page.encloses(&p.footer.bounds));
            for row in &p.rows {
                assert!(page.encloses(&row.bounds));
                assert!(row.bounds.y >= p.header.bounds.bottom() - 1e-9);
                assert!(row.bounds.bottom() <= p.footer.bounds.y + 1e-9);
            }
        }
    }

    #[test]
    fn test_row_taller_than_body_sits_alone() {
        // 10pt body, 20pt rows: each row overlaps the footer band but stays on the page
        let geometry = PageGeometry {
            row_height: 20.0,
            ..geometry_for(1)
        };
        let records = enumerate(&SeatArrangementConfig::new(3, 1, 1));
        let doc = LayoutPlanner::new(geometry)
            .with_timestamp(fixed_time())
            .plan(&records)
            .unwrap();

        assert_eq!(doc.page_count(), 3);
        let page = doc.page_bounds();
        for (i, p) in doc.pages().iter().enumerate() {
            assert_eq!(p.rows.len(), 1);
            assert_eq!(p.rows[0].record.seat_number, i as u64 + 1);
            assert!(page.encloses(&p.rows[0].bounds));
            assert_eq!(p.footer.page_label(), format!("Page {} / 3", i + 1));
        }
    }

    #[test]
    fn test_row_past_page_bottom_is_rejected() {
        let geometry = PageGeometry {
            row_height: 30.0,
            ..geometry_for(1)
        };
        let records = enumerate(&SeatArrangementConfig::new(1, 1, 1));
        assert!(matches!(
            plan(&records, &geometry).unwrap_err(),
            ConfigurationError::RowExceedsPage { .. }
        ));
    }

    #[test]
    fn test_timestamp_shared_by_all_pages() {
        let records = enumerate(&SeatArrangementConfig::new(10, 1, 1));
        let doc = LayoutPlanner::new(geometry_for(3)).plan(&records).unwrap();
        let stamp = doc.generated_at();
        assert!(doc.pages().iter().all(|p| p.footer.generated_at == stamp));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let records = enumerate(&SeatArrangementConfig::new(4, 3, 2));
        let a = planner(5).plan(&records).unwrap();
        let b = planner(5).plan(&records).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_geometry_fails_before_packing() {
        let geometry = PageGeometry {
            row_height: 0.0,
            ..geometry_for(3)
        };
        let records = enumerate(&SeatArrangementConfig::new(2, 2, 1));
        let err = plan(&records, &geometry).unwrap_err();
        assert!(matches!(err, ConfigurationError::NonPositive { field: "rowHeight", .. }));
    }

    #[test]
    fn test_report_collects_warning() {
        let config = SeatArrangementConfig::new(2, 2, 1).with_declared_total(5);
        let report = planner(3).plan_report(&config).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].derived, 4);
        assert_eq!(report.document.row_count(), 4);
    }

    #[test]
    fn test_report_header_lists_identity_and_total() {
        let identity = ClassIdentity {
            class_name: "Grade 8".into(),
            exam_name: "Finals".into(),
            ..Default::default()
        };
        let config = SeatArrangementConfig::new(2, 3, 2).with_identity(identity);
        let report = planner(3).plan_report(&config).unwrap();
        assert!(report.warnings.is_empty());

        let header = &report.document.pages()[0].header;
        let lines: Vec<(&str, &str)> = header
            .details
            .iter()
            .map(|d| (d.label.as_str(), d.value.as_str()))
            .collect();
        assert_eq!(
            lines,
            vec![("Class", "Grade 8"), ("Exam", "Finals"), ("Total Seats", "12")]
        );
        assert!(report.document.pages().iter().all(|p| p.header == *header));
    }

    #[test]
    fn test_report_rejects_geometry_even_with_no_seats() {
        let geometry = PageGeometry {
            page_height: 20.0,
            ..geometry_for(3)
        };
        let config = SeatArrangementConfig::new(0, 0, 0);
        assert!(matches!(
            plan_report(&config, &geometry).unwrap_err(),
            ConfigurationError::NoUsableHeight { .. }
        ));
    }
}
