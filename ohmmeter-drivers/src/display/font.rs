//! Built-in 8x8 bitmap font
//!
//! Each glyph is 8 column bytes, least significant bit at the top, which is
//! the same bit order the SSD1306 uses inside a page. Glyphs are
//! left-aligned so the last lit column gives the proportional advance.
//!
//! Covered: digits, `A-Z`, `a-z`, `.`, `-` and `#`. Space is handled by the
//! renderer without a table entry. Anything else maps to the blank glyph at
//! index 0.

/// Number of glyphs in [`FONT_8X8`]
pub const GLYPH_COUNT: usize = 66;

/// Glyph cell edge in pixels
pub const GLYPH_SIZE: u8 = 8;

const DIGITS: usize = 1;
const UPPER: usize = 11;
const LOWER: usize = 37;
const PERIOD: usize = 63;
const HYPHEN: usize = 64;
const HASH: usize = 65;

/// Glyph columns, indexed by [`glyph_index`]
#[rustfmt::skip]
pub const FONT_8X8: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // unsupported
    [0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00, 0x00, 0x00], // '0'
    [0x42, 0x7F, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46, 0x00, 0x00, 0x00], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31, 0x00, 0x00, 0x00], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10, 0x00, 0x00, 0x00], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39, 0x00, 0x00, 0x00], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00, 0x00, 0x00], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03, 0x00, 0x00, 0x00], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00, 0x00], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E, 0x00, 0x00, 0x00], // '9'
    [0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00, 0x00, 0x00], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36, 0x00, 0x00, 0x00], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22, 0x00, 0x00, 0x00], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C, 0x00, 0x00, 0x00], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41, 0x00, 0x00, 0x00], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01, 0x00, 0x00, 0x00], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A, 0x00, 0x00, 0x00], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00, 0x00, 0x00], // 'H'
    [0x41, 0x7F, 0x41, 0x00, 0x00, 0x00, 0x00, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01, 0x00, 0x00, 0x00], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41, 0x00, 0x00, 0x00], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F, 0x00, 0x00, 0x00], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F, 0x00, 0x00, 0x00], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00, 0x00, 0x00], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06, 0x00, 0x00, 0x00], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E, 0x00, 0x00, 0x00], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46, 0x00, 0x00, 0x00], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31, 0x00, 0x00, 0x00], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01, 0x00, 0x00, 0x00], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F, 0x00, 0x00, 0x00], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F, 0x00, 0x00, 0x00], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F, 0x00, 0x00, 0x00], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63, 0x00, 0x00, 0x00], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07, 0x00, 0x00, 0x00], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43, 0x00, 0x00, 0x00], // 'Z'
    [0x20, 0x54, 0x54, 0x54, 0x78, 0x00, 0x00, 0x00], // 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20, 0x00, 0x00, 0x00], // 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F, 0x00, 0x00, 0x00], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18, 0x00, 0x00, 0x00], // 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02, 0x00, 0x00, 0x00], // 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E, 0x00, 0x00, 0x00], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78, 0x00, 0x00, 0x00], // 'h'
    [0x44, 0x7D, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00], // 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00, 0x00, 0x00, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x00], // 'k'
    [0x41, 0x7F, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00], // 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78, 0x00, 0x00, 0x00], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78, 0x00, 0x00, 0x00], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08, 0x00, 0x00, 0x00], // 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C, 0x00, 0x00, 0x00], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08, 0x00, 0x00, 0x00], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20, 0x00, 0x00, 0x00], // 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20, 0x00, 0x00, 0x00], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C, 0x00, 0x00, 0x00], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C, 0x00, 0x00, 0x00], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C, 0x00, 0x00, 0x00], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C, 0x00, 0x00, 0x00], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44, 0x00, 0x00, 0x00], // 'z'
    [0x60, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '.'
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00], // '-'
    [0x14, 0x7F, 0x14, 0x7F, 0x14, 0x00, 0x00, 0x00], // '#'
];

/// Table index for a character
///
/// Unsupported characters (including space) return 0, the blank glyph.
pub const fn glyph_index(c: char) -> usize {
    match c {
        '0'..='9' => DIGITS + (c as usize - '0' as usize),
        'A'..='Z' => UPPER + (c as usize - 'A' as usize),
        'a'..='z' => LOWER + (c as usize - 'a' as usize),
        '.' => PERIOD,
        '-' => HYPHEN,
        '#' => HASH,
        _ => 0,
    }
}

/// Column bytes for a character
pub fn glyph(c: char) -> &'static [u8; 8] {
    &FONT_8X8[glyph_index(c)]
}

/// Index of the last lit column, 0 for an empty glyph
pub fn trimmed_width(columns: &[u8; 8]) -> u8 {
    columns
        .iter()
        .rposition(|&column| column != 0)
        .unwrap_or(0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_ranges() {
        assert_eq!(glyph_index('0'), 1);
        assert_eq!(glyph_index('9'), 10);
        assert_eq!(glyph_index('A'), 11);
        assert_eq!(glyph_index('Z'), 36);
        assert_eq!(glyph_index('a'), 37);
        assert_eq!(glyph_index('z'), 62);
        assert_eq!(glyph_index('.'), 63);
        assert_eq!(glyph_index('-'), 64);
        assert_eq!(glyph_index('#'), 65);
    }

    #[test]
    fn test_unsupported_is_blank() {
        for c in [' ', '!', '~', 'é', '\0'] {
            assert_eq!(glyph_index(c), 0);
        }
        assert_eq!(glyph('?'), &[0u8; 8]);
    }

    #[test]
    fn test_every_supported_glyph_is_lit() {
        for glyph in FONT_8X8.iter().skip(1) {
            assert!(glyph.iter().any(|&c| c != 0));
        }
    }

    #[test]
    fn test_glyphs_are_left_aligned() {
        for glyph in FONT_8X8.iter().skip(1) {
            assert_ne!(glyph[0], 0);
        }
    }

    #[test]
    fn test_trimmed_width() {
        assert_eq!(trimmed_width(glyph('A')), 4);
        assert_eq!(trimmed_width(glyph('1')), 2);
        assert_eq!(trimmed_width(glyph('i')), 2);
        assert_eq!(trimmed_width(glyph('.')), 1);
        assert_eq!(trimmed_width(&[0; 8]), 0);
        assert_eq!(trimmed_width(&[0, 0, 0, 0, 0, 0, 0, 1]), 7);
    }
}
