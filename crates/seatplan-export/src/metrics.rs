//! Static advance widths for the PDF base-14 Helvetica faces.
//!
//! Widths are in 1/1000 em and cover ASCII 0x20..=0x7E. Index = byte - 32.
//! Anything outside that range is measured as a digit.

use seatplan_render::FontWeight;

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width of `text` at `size` in the given weight.
pub fn text_width(text: &str, size: f64, weight: FontWeight) -> f64 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as usize;
            if (32..127).contains(&code) {
                table[code - 32] as u32
            } else {
                FALLBACK_WIDTH as u32
            }
        })
        .sum();
    units as f64 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_width() {
        assert!((text_width("12", 10.0, FontWeight::Regular) - 11.12).abs() < 1e-9);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = text_width("Per Bench", 10.0, FontWeight::Regular);
        let bold = text_width("Per Bench", 10.0, FontWeight::Bold);
        assert!(bold > regular);
    }

    #[test]
    fn test_seat_label_width() {
        // S = 667, '-' = 333, '7' = 556
        assert!((text_width("S-7", 1000.0, FontWeight::Regular) - 1556.0).abs() < 1e-9);
    }
}
