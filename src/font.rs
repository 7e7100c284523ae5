//! Column-encoded bitmap fonts.
//!
//! Glyphs are stored the way MAX7219 boards consume them: one byte per
//! column, bit 0 at the top. Fonts taller than eight rows store several
//! bytes per column ("byte rows"); byte row `j` of column `i` lives at
//! `columns[i * byte_rows + j]`.
//!
//! Fonts are plain `static` data shared by reference. See [`crate::fonts`]
//! for the built-in tables.

/// A single glyph of a [`BitmapFont`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    width: u8,
    columns: &'static [u8],
}

impl Glyph {
    /// Creates a glyph of `width` columns from its column bytes.
    #[must_use]
    pub const fn new(width: u8, columns: &'static [u8]) -> Self {
        Self { width, columns }
    }

    /// Visible width in columns
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Returns byte row `byte_row` of column `column`, or 0 if out of range.
    #[must_use]
    pub fn column_byte(&self, column: usize, byte_row: usize, byte_rows: usize) -> u8 {
        if byte_row >= byte_rows {
            return 0;
        }
        self.columns
            .get(column * byte_rows + byte_row)
            .copied()
            .unwrap_or(0)
    }
}

/// Immutable bitmap font covering the characters `first_char..=last_char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    /// Widest glyph in columns
    pub cell_width: u8,
    /// Glyph height in rows
    pub cell_height: u8,
    /// First supported character
    pub first_char: u8,
    /// Last supported character
    pub last_char: u8,
    /// One entry per character in `first_char..=last_char`
    pub glyphs: &'static [Glyph],
}

impl BitmapFont {
    /// Number of bytes stored per glyph column: `ceil(cell_height / 8)`.
    #[must_use]
    pub const fn byte_rows(&self) -> usize {
        (self.cell_height as usize).div_ceil(8)
    }

    /// Looks up the glyph for `c`.
    ///
    /// Characters outside the supported range have no glyph.
    #[must_use]
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        let code = u32::from(c);
        if code < u32::from(self.first_char) || code > u32::from(self.last_char) {
            return None;
        }
        self.glyphs.get((code - u32::from(self.first_char)) as usize)
    }

    /// Advance width of `c`; zero for unsupported characters.
    #[must_use]
    pub fn char_width(&self, c: char) -> u8 {
        self.glyph(c).map_or(0, Glyph::width)
    }

    /// Width of `text` with one blank column between glyphs.
    ///
    /// There is no trailing blank after the last glyph. An empty string is
    /// zero wide.
    #[must_use]
    pub fn string_width(&self, text: &str) -> i32 {
        let total: i32 = text.chars().map(|c| i32::from(self.char_width(c)) + 1).sum();
        (total - 1).max(0)
    }
}
