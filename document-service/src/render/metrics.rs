//! Advance widths of the built-in Helvetica faces.
//!
//! Built-in PDF fonts carry no embedded metrics, so right- and
//! center-aligned text is positioned from the standard AFM widths
//! (units per 1000 em) for printable ASCII.

use super::commands::FontWeight;

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Width used for characters outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

fn char_width(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };

    match c {
        ' '..='~' => table[c as usize - 32],
        _ => FALLBACK_WIDTH,
    }
}

/// Rendered width of `text` in millimetres at `size_pt`.
pub fn text_width_mm(text: &str, size_pt: f32, weight: FontWeight) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, weight))).sum();
    units as f32 / 1000.0 * size_pt * MM_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(text_width_mm("", 10.0, FontWeight::Normal), 0.0);
    }

    #[test]
    fn digits_are_monospaced() {
        let a = text_width_mm("111.11", 10.0, FontWeight::Normal);
        let b = text_width_mm("888.88", 10.0, FontWeight::Normal);
        assert!((a - b).abs() < f32::EPSILON);
    }

    #[test]
    fn bold_is_wider_for_lowercase() {
        let normal = text_width_mm("payable", 11.0, FontWeight::Normal);
        let bold = text_width_mm("payable", 11.0, FontWeight::Bold);
        assert!(bold > normal);
    }

    #[test]
    fn width_scales_with_size() {
        // "EUR" = 667 + 722 + 722 units
        let w = text_width_mm("EUR", 10.0, FontWeight::Normal);
        let expected = 2.111 * 10.0 * MM_PER_PT;
        assert!((w - expected).abs() < 1e-4);
        assert!((text_width_mm("EUR", 20.0, FontWeight::Normal) - 2.0 * w).abs() < 1e-4);
    }

    #[test]
    fn non_ascii_uses_fallback_width() {
        let w = text_width_mm("€", 10.0, FontWeight::Normal);
        assert!((w - 0.556 * 10.0 * MM_PER_PT).abs() < 1e-4);
    }
}
