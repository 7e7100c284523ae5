//! Built-in font tables.
//!
//! Each glyph entry lists its width followed by its column bytes (bit 0 is
//! the top row). The tall digits store two bytes per column, top half first.

use crate::font::{BitmapFont, Glyph};

/// Proportional 7-row font covering ASCII space through `Z`.
///
/// Used for status messages, the sensor row, dates and small seconds.
pub static FONT_3X7: BitmapFont = BitmapFont {
    cell_width: 5,
    cell_height: 7,
    first_char: b' ',
    last_char: b'Z',
    glyphs: &[
        // ' '
        Glyph::new(0, &[]),
        // '!'
        Glyph::new(1, &[0x5f]),
        // '"'
        Glyph::new(3, &[0x03, 0x00, 0x03]),
        // '#'
        Glyph::new(5, &[0x12, 0x3f, 0x12, 0x3f, 0x12]),
        // '$'
        Glyph::new(3, &[0x2e, 0x6b, 0x3a]),
        // '%'
        Glyph::new(3, &[0x71, 0x08, 0x47]),
        // '&'
        Glyph::new(3, &[0x36, 0x49, 0x76]),
        // "'"
        Glyph::new(1, &[0x03]),
        // '('
        Glyph::new(2, &[0x3e, 0x41]),
        // ')'
        Glyph::new(2, &[0x41, 0x3e]),
        // '*'
        Glyph::new(3, &[0x2a, 0x1c, 0x2a]),
        // '+'
        Glyph::new(3, &[0x08, 0x3e, 0x08]),
        // ','
        Glyph::new(1, &[0x60]),
        // '-'
        Glyph::new(3, &[0x08, 0x08, 0x08]),
        // '.'
        Glyph::new(1, &[0x40]),
        // '/'
        Glyph::new(2, &[0x78, 0x07]),
        // '0'
        Glyph::new(3, &[0x7f, 0x41, 0x7f]),
        // '1'
        Glyph::new(3, &[0x42, 0x7f, 0x40]),
        // '2'
        Glyph::new(3, &[0x79, 0x49, 0x4f]),
        // '3'
        Glyph::new(3, &[0x49, 0x49, 0x7f]),
        // '4'
        Glyph::new(3, &[0x0f, 0x08, 0x7f]),
        // '5'
        Glyph::new(3, &[0x4f, 0x49, 0x79]),
        // '6'
        Glyph::new(3, &[0x7f, 0x49, 0x79]),
        // '7'
        Glyph::new(3, &[0x01, 0x01, 0x7f]),
        // '8'
        Glyph::new(3, &[0x7f, 0x49, 0x7f]),
        // '9'
        Glyph::new(3, &[0x4f, 0x49, 0x7f]),
        // ':'
        Glyph::new(1, &[0x14]),
        // ';'
        Glyph::new(1, &[0x34]),
        // '<'
        Glyph::new(3, &[0x08, 0x14, 0x22]),
        // '='
        Glyph::new(3, &[0x14, 0x14, 0x14]),
        // '>'
        Glyph::new(3, &[0x22, 0x14, 0x08]),
        // '?'
        Glyph::new(3, &[0x01, 0x59, 0x0f]),
        // '@'
        Glyph::new(3, &[0x7d, 0x55, 0x5f]),
        // 'A'
        Glyph::new(3, &[0x7e, 0x09, 0x7e]),
        // 'B'
        Glyph::new(3, &[0x7f, 0x49, 0x36]),
        // 'C'
        Glyph::new(3, &[0x7f, 0x41, 0x41]),
        // 'D'
        Glyph::new(3, &[0x7f, 0x41, 0x3e]),
        // 'E'
        Glyph::new(3, &[0x7f, 0x49, 0x41]),
        // 'F'
        Glyph::new(3, &[0x7f, 0x09, 0x01]),
        // 'G'
        Glyph::new(3, &[0x7f, 0x41, 0x79]),
        // 'H'
        Glyph::new(3, &[0x7f, 0x08, 0x7f]),
        // 'I'
        Glyph::new(3, &[0x41, 0x7f, 0x41]),
        // 'J'
        Glyph::new(3, &[0x60, 0x40, 0x7f]),
        // 'K'
        Glyph::new(3, &[0x7f, 0x14, 0x63]),
        // 'L'
        Glyph::new(3, &[0x7f, 0x40, 0x40]),
        // 'M'
        Glyph::new(5, &[0x7f, 0x02, 0x0c, 0x02, 0x7f]),
        // 'N'
        Glyph::new(4, &[0x7f, 0x06, 0x18, 0x7f]),
        // 'O'
        Glyph::new(3, &[0x7f, 0x41, 0x7f]),
        // 'P'
        Glyph::new(3, &[0x7f, 0x09, 0x0f]),
        // 'Q'
        Glyph::new(3, &[0x3f, 0x61, 0x5f]),
        // 'R'
        Glyph::new(3, &[0x7f, 0x09, 0x77]),
        // 'S'
        Glyph::new(3, &[0x4f, 0x49, 0x79]),
        // 'T'
        Glyph::new(3, &[0x01, 0x7f, 0x01]),
        // 'U'
        Glyph::new(3, &[0x7f, 0x40, 0x7f]),
        // 'V'
        Glyph::new(3, &[0x3f, 0x40, 0x3f]),
        // 'W'
        Glyph::new(5, &[0x7f, 0x20, 0x18, 0x20, 0x7f]),
        // 'X'
        Glyph::new(3, &[0x77, 0x08, 0x77]),
        // 'Y'
        Glyph::new(3, &[0x07, 0x78, 0x07]),
        // 'Z'
        Glyph::new(3, &[0x71, 0x49, 0x47]),
    ],
};

/// Tall digits spanning both module rows.
pub static DIGITS_5X16: BitmapFont = BitmapFont {
    cell_width: 5,
    cell_height: 16,
    first_char: b'0',
    last_char: b':',
    glyphs: &[
        // '0'
        Glyph::new(5, &[0xfc, 0x3f, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0xfc, 0x3f]),
        // '1'
        Glyph::new(5, &[0x00, 0x00, 0x0c, 0xc0, 0xff, 0xff, 0x00, 0xc0, 0x00, 0x00]),
        // '2'
        Glyph::new(5, &[0x0c, 0xf0, 0x03, 0xcc, 0x03, 0xc3, 0xc3, 0xc0, 0x3c, 0xc0]),
        // '3'
        Glyph::new(5, &[0x0c, 0x30, 0x03, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0x3c, 0x3f]),
        // '4'
        Glyph::new(5, &[0xc0, 0x03, 0x30, 0x03, 0x0c, 0x03, 0xff, 0xff, 0x00, 0x03]),
        // '5'
        Glyph::new(5, &[0xff, 0x30, 0xc3, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0x03, 0x3f]),
        // '6'
        Glyph::new(5, &[0xfc, 0x3f, 0xc3, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0x00, 0x3f]),
        // '7'
        Glyph::new(5, &[0x03, 0x00, 0x03, 0xfc, 0xc3, 0x03, 0x33, 0x00, 0x0f, 0x00]),
        // '8'
        Glyph::new(5, &[0x3c, 0x3f, 0xc3, 0xc0, 0xc3, 0xc0, 0xc3, 0xc0, 0x3c, 0x3f]),
        // '9'
        Glyph::new(5, &[0xfc, 0x00, 0x03, 0xc3, 0x03, 0xc3, 0x03, 0xc3, 0xfc, 0x3f]),
        // ':'
        Glyph::new(1, &[0x30, 0x0c]),
    ],
};

/// Full-height digits for one module row.
pub static DIGITS_5X8: BitmapFont = BitmapFont {
    cell_width: 5,
    cell_height: 8,
    first_char: b'0',
    last_char: b':',
    glyphs: &[
        // '0'
        Glyph::new(5, &[0x7e, 0x81, 0x81, 0x81, 0x7e]),
        // '1'
        Glyph::new(5, &[0x00, 0x82, 0xff, 0x80, 0x00]),
        // '2'
        Glyph::new(5, &[0xc2, 0xa1, 0x91, 0x89, 0x86]),
        // '3'
        Glyph::new(5, &[0x42, 0x81, 0x89, 0x89, 0x76]),
        // '4'
        Glyph::new(5, &[0x18, 0x14, 0x12, 0xff, 0x10]),
        // '5'
        Glyph::new(5, &[0x4f, 0x89, 0x89, 0x89, 0x71]),
        // '6'
        Glyph::new(5, &[0x7e, 0x89, 0x89, 0x89, 0x70]),
        // '7'
        Glyph::new(5, &[0x01, 0xe1, 0x19, 0x05, 0x03]),
        // '8'
        Glyph::new(5, &[0x76, 0x89, 0x89, 0x89, 0x76]),
        // '9'
        Glyph::new(5, &[0x0e, 0x91, 0x91, 0x91, 0x7e]),
        // ':'
        Glyph::new(1, &[0x24]),
    ],
};

/// Small digits, bottom-aligned within the module row.
pub static DIGITS_3X5: BitmapFont = BitmapFont {
    cell_width: 3,
    cell_height: 8,
    first_char: b'0',
    last_char: b'9',
    glyphs: &[
        // '0'
        Glyph::new(3, &[0xf8, 0x88, 0xf8]),
        // '1'
        Glyph::new(3, &[0x90, 0xf8, 0x80]),
        // '2'
        Glyph::new(3, &[0xe8, 0xa8, 0xb8]),
        // '3'
        Glyph::new(3, &[0xa8, 0xa8, 0xf8]),
        // '4'
        Glyph::new(3, &[0x38, 0x20, 0xf8]),
        // '5'
        Glyph::new(3, &[0xb8, 0xa8, 0xe8]),
        // '6'
        Glyph::new(3, &[0xf8, 0xa8, 0xe8]),
        // '7'
        Glyph::new(3, &[0x08, 0x08, 0xf8]),
        // '8'
        Glyph::new(3, &[0xf8, 0xa8, 0xf8]),
        // '9'
        Glyph::new(3, &[0xb8, 0xa8, 0xf8]),
    ],
};
