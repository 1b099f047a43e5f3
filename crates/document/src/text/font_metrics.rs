//! Advance widths for the two standard fonts used by reports.
//!
//! Widths are in thousandths of the font size, taken from the Adobe core
//! font metrics for Helvetica and Helvetica-Bold.

use serde::{Deserialize, Serialize};

/// Font face of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontKind {
    Regular,
    Bold,
}

impl FontKind {
    /// PostScript base font name.
    pub const fn base_font(&self) -> &'static str {
        match self {
            FontKind::Regular => "Helvetica",
            FontKind::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name used in page content streams.
    pub const fn resource_name(&self) -> &'static str {
        match self {
            FontKind::Regular => "F1",
            FontKind::Bold => "F2",
        }
    }
}

/// ASCII 32..=126
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// ASCII 32..=126
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

const DEFAULT_WIDTH: u16 = 556;

/// Advance width of `ch` in thousandths of the font size.
pub fn char_width(font: FontKind, ch: char) -> u16 {
    let table = match font {
        FontKind::Regular => &HELVETICA_WIDTHS,
        FontKind::Bold => &HELVETICA_BOLD_WIDTHS,
    };

    let ascii_width = |c: char| -> Option<u16> {
        let code = c as usize;
        (32..=126).contains(&code).then(|| table[code - 32])
    };

    if let Some(width) = ascii_width(ch) {
        return width;
    }

    match ch {
        '\t' | '\u{a0}' => table[0],
        '—' => 1000,
        '–' | '€' => 556,
        '·' | '•' => 278,
        '…' => 1000,
        '°' => 400,
        '²' | '³' | '¹' => 333,
        '‘' | '’' | '‚' => 222,
        '“' | '”' | '„' => 333,
        _ => base_letter(ch)
            .and_then(ascii_width)
            .unwrap_or(DEFAULT_WIDTH),
    }
}

/// Width of `text` in points at `size`.
pub fn text_width(font: FontKind, size: f64, text: &str) -> f64 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(font, ch))).sum();
    f64::from(units) * size / 1000.0
}

/// Unaccented letter sharing the glyph width of a Latin-1 letter.
fn base_letter(ch: char) -> Option<char> {
    let base = match ch {
        'À'..='Å' => 'A',
        'Æ' => 'W',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ð' => 'D',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'ß' => 'b',
        'à'..='å' => 'a',
        'æ' => 'm',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        '¿' => '?',
        '¡' => '!',
        _ => return None,
    };
    Some(base)
}
