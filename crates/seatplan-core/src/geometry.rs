//! Page geometry: the numeric layout budget for one report page.
//!
//! All lengths share one unit (points for the bundled renderers). Vertically a
//! page is split into bands, top to bottom:
//!
//! ```text
//! 0 ─────────────────────────────── whitespace
//!   topMargin - headerHeight ────── header band
//!   topMargin ───────────────────── body (usableHeight)
//!   topMargin + usableHeight ────── footer band (footerReserve)
//!   pageHeight - bottomMargin ───── bottom margin
//! pageHeight
//! ```

use crate::errors::ConfigurationError;

/// Layout budget for a page.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,
    pub top_margin: f64,
    pub bottom_margin: f64,
    pub left_margin: f64,
    pub right_margin: f64,
    /// Height of the header block, drawn at the bottom of the top margin
    pub header_height: f64,
    /// Height of one seat row
    pub row_height: f64,
    /// Space kept free below the body for the running footer
    pub footer_reserve: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    /// A4 portrait in points (595 x 842).
    pub fn a4() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            top_margin: 132.0,
            bottom_margin: 36.0,
            left_margin: 36.0,
            right_margin: 36.0,
            header_height: 96.0,
            row_height: 18.0,
            footer_reserve: 24.0,
        }
    }

    /// `pageHeight - topMargin - bottomMargin - footerReserve`.
    pub fn usable_height(&self) -> f64 {
        self.page_height - self.top_margin - self.bottom_margin - self.footer_reserve
    }

    /// Horizontal space between the side margins.
    pub fn content_width(&self) -> f64 {
        self.page_width - self.left_margin - self.right_margin
    }

    /// Top edge of the header band.
    pub fn header_top(&self) -> f64 {
        self.top_margin - self.header_height
    }

    /// Top edge of the body, where the first seat row of every page starts.
    pub fn body_top(&self) -> f64 {
        self.top_margin
    }

    /// Top edge of the footer band.
    pub fn footer_top(&self) -> f64 {
        self.top_margin + self.usable_height()
    }

    /// Number of rows placed on one page.
    ///
    /// This is `floor(usableHeight / rowHeight)` with two deviations:
    ///
    /// - the quotient gets `1e-9` added before flooring, so a body of `0.3`
    ///   holds three rows of `0.1` even though `3.0 * 0.1 > 0.3` in floating
    ///   point (the strict formula gives two);
    /// - a row taller than the body still gets a page of its own, so the
    ///   result is never below one.
    ///
    /// Only meaningful for a geometry that passed [`PageGeometry::validate`].
    pub fn rows_per_page(&self) -> usize {
        let fit = self.usable_height() / self.row_height;
        ((fit + 1e-9).floor() as usize).max(1)
    }

    /// Check the geometry before any planning happens.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let fields = [
            ("pageWidth", self.page_width),
            ("pageHeight", self.page_height),
            ("topMargin", self.top_margin),
            ("bottomMargin", self.bottom_margin),
            ("leftMargin", self.left_margin),
            ("rightMargin", self.right_margin),
            ("headerHeight", self.header_height),
            ("rowHeight", self.row_height),
            ("footerReserve", self.footer_reserve),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFinite { field });
            }
        }

        for (field, value) in [
            ("pageWidth", self.page_width),
            ("pageHeight", self.page_height),
            ("rowHeight", self.row_height),
        ] {
            if value <= 0.0 {
                return Err(ConfigurationError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("topMargin", self.top_margin),
            ("bottomMargin", self.bottom_margin),
            ("leftMargin", self.left_margin),
            ("rightMargin", self.right_margin),
            ("headerHeight", self.header_height),
            ("footerReserve", self.footer_reserve),
        ] {
            if value < 0.0 {
                return Err(ConfigurationError::Negative { field, value });
            }
        }

        let usable = self.usable_height();
        if usable <= 0.0 {
            return Err(ConfigurationError::NoUsableHeight { usable });
        }
        // A row taller than the body is fine as long as it stays on the page
        let below_body_top = self.page_height - self.body_top();
        if self.row_height > below_body_top {
            return Err(ConfigurationError::RowExceedsPage {
                row_height: self.row_height,
                available: below_body_top,
            });
        }
        // The header band ends at the top margin, so it would start above the page
        if self.header_height > self.top_margin {
            return Err(ConfigurationError::HeaderExceedsTopMargin {
                header_height: self.header_height,
                top_margin: self.top_margin,
            });
        }
        let width = self.content_width();
        if width <= 0.0 {
            return Err(ConfigurationError::NoUsableWidth { usable: width });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(page_height: f64, row_height: f64) -> PageGeometry {
        PageGeometry {
            page_height,
            row_height,
            ..PageGeometry::a4()
        }
    }

    #[test]
    fn test_a4_is_valid() {
        let g = PageGeometry::a4();
        assert!(g.validate().is_ok());
        assert!((g.usable_height() - 650.0).abs() < 1e-9);
        assert_eq!(g.rows_per_page(), 36);
    }

    #[test]
    fn test_bands_are_contiguous() {
        let g = PageGeometry::a4();
        assert!((g.header_top() - 36.0).abs() < 1e-9);
        assert!((g.body_top() - g.top_margin).abs() < 1e-9);
        assert!(
            (g.footer_top() + g.footer_reserve + g.bottom_margin - g.page_height).abs() < 1e-9
        );
    }

    #[test]
    fn test_non_positive_row_height() {
        let err = geometry(842.0, 0.0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::NonPositive { field: "rowHeight", .. }
        ));
        let err = geometry(842.0, -4.0).validate().unwrap_err();
        assert!(matches!(err, ConfigurationError::NonPositive { .. }));
    }

    #[test]
    fn test_non_positive_page_height() {
        let err = geometry(0.0, 18.0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::NonPositive { field: "pageHeight", .. }
        ));
    }

    #[test]
    fn test_no_usable_height() {
        // 132 + 36 + 24 = 192 consumed by margins and footer
        let err = geometry(192.0, 18.0).validate().unwrap_err();
        assert!(matches!(err, ConfigurationError::NoUsableHeight { .. }));
    }

    #[test]
    fn test_row_taller_than_body_gets_own_page() {
        // Body is 10pt, the 18pt row spills into the footer band but not off the page
        let g = geometry(202.0, 18.0);
        assert!(g.validate().is_ok());
        assert_eq!(g.rows_per_page(), 1);
    }

    #[test]
    fn test_row_below_page_bottom() {
        // 132pt top margin leaves 68pt below the body top
        let err = geometry(200.0, 80.0).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::RowExceedsPage {
                row_height: 80.0,
                available: 68.0,
            }
        );
    }

    #[test]
    fn test_header_must_fit_top_margin() {
        let g = PageGeometry {
            header_height: 140.0,
            ..PageGeometry::a4()
        };
        assert!(matches!(
            g.validate().unwrap_err(),
            ConfigurationError::HeaderExceedsTopMargin { .. }
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let g = PageGeometry {
            left_margin: f64::NAN,
            ..PageGeometry::a4()
        };
        assert!(matches!(
            g.validate().unwrap_err(),
            ConfigurationError::NonFinite { field: "leftMargin" }
        ));
    }

    #[test]
    fn test_rows_per_page_tolerates_float_noise() {
        let g = PageGeometry {
            page_height: 0.3,
            top_margin: 0.0,
            bottom_margin: 0.0,
            header_height: 0.0,
            footer_reserve: 0.0,
            row_height: 0.1,
            ..PageGeometry::a4()
        };
        assert_eq!(g.rows_per_page(), 3);
        assert_eq!((g.usable_height() / g.row_height).floor() as usize, 2);
    }
}
