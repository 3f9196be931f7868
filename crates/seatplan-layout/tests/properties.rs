//! Property tests for enumeration and page planning.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use seatplan_core::{PageGeometry, SeatArrangementConfig};
use seatplan_layout::{enumerate, LayoutPlanner};

fn arb_config() -> impl Strategy<Value = SeatArrangementConfig> {
    (-2i32..12, -2i32..12, -1i32..5).prop_map(|(r, c, b)| SeatArrangementConfig::new(r, c, b))
}

fn arb_geometry() -> impl Strategy<Value = PageGeometry> {
    (1usize..40, 4.0f64..30.0, 0.01f64..0.99).prop_map(|(rows, row_height, slack)| {
        // Body holds `rows` whole rows plus a fraction of a row, kept away
        // from whole multiples so float noise cannot move a page break
        let usable = row_height * (rows as f64 + slack);
        PageGeometry {
            page_width: 595.0,
            page_height: 120.0 + usable + 20.0 + 30.0,
            top_margin: 120.0,
            bottom_margin: 30.0,
            left_margin: 36.0,
            right_margin: 36.0,
            header_height: 90.0,
            row_height,
            footer_reserve: 20.0,
        }
    })
}

fn planner(geometry: PageGeometry) -> LayoutPlanner {
    LayoutPlanner::new(geometry).with_timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

proptest! {
    #[test]
    fn seat_numbers_are_a_bijection(config in arb_config()) {
        let records = enumerate(&config);
        let total = config.total_seats();
        prop_assert_eq!(records.len() as u64, total);

        let numbers: HashSet<u64> = records.iter().map(|r| r.seat_number).collect();
        prop_assert_eq!(numbers.len() as u64, total);
        prop_assert!(records.iter().enumerate().all(|(i, r)| r.seat_number == i as u64 + 1));
    }

    #[test]
    fn enumeration_is_row_major(config in arb_config()) {
        let records = enumerate(&config);
        for pair in records.windows(2) {
            let a = (pair[0].row, pair[0].column, pair[0].bench_position);
            let b = (pair[1].row, pair[1].column, pair[1].bench_position);
            prop_assert!(a < b);
        }
    }

    #[test]
    fn planning_preserves_order(config in arb_config(), geometry in arb_geometry()) {
        let records = enumerate(&config);
        let doc = planner(geometry).plan(&records).unwrap();
        let replayed: Vec<_> = doc.pages().iter().flat_map(|p| p.records().copied()).collect();
        prop_assert_eq!(replayed, records);
    }

    #[test]
    fn pages_are_packed_full(config in arb_config(), geometry in arb_geometry()) {
        let records = enumerate(&config);
        let doc = planner(geometry).plan(&records).unwrap();
        let usable = geometry.usable_height();
        let pages = doc.pages();
        for page in &pages[..pages.len() - 1] {
            let n = page.rows.len() as f64;
            prop_assert!(n * geometry.row_height <= usable + 1e-6);
            prop_assert!(usable < (n + 1.0) * geometry.row_height);
        }
        prop_assert!(pages.iter().skip(1).all(|p| !p.rows.is_empty()));
    }

    #[test]
    fn footers_agree_on_page_count(config in arb_config(), geometry in arb_geometry()) {
        let records = enumerate(&config);
        let doc = planner(geometry).plan(&records).unwrap();
        let n = doc.page_count();

        let per_page = (geometry.usable_height() / geometry.row_height).floor() as usize;
        let expected = if records.is_empty() { 1 } else { records.len().div_ceil(per_page) };
        prop_assert_eq!(n, expected);

        for (i, page) in doc.pages().iter().enumerate() {
            prop_assert_eq!(page.index, i + 1);
            prop_assert_eq!(page.footer.page_count, n);
            prop_assert_eq!(page.footer.page_label(), format!("Page {} / {}", i + 1, n));
        }
    }

    #[test]
    fn ordinals_are_global(config in arb_config(), geometry in arb_geometry()) {
        let records = enumerate(&config);
        let doc = planner(geometry).plan(&records).unwrap();
        prop_assert!(doc.rows().enumerate().all(|(i, row)| row.ordinal == i));
    }

    #[test]
    fn planning_is_deterministic(config in arb_config(), geometry in arb_geometry()) {
        let records = enumerate(&config);
        let a = planner(geometry).plan(&records).unwrap();
        let b = planner(geometry).plan(&records).unwrap();
        prop_assert_eq!(a, b);
    }
}
