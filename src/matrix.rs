//! Bit-packed monochrome framebuffer for the simulated 32×16 matrix.
//!
//! # Memory Layout
//! The matrix is made of two module rows, each eight LEDs tall. Every
//! `(column, module_row)` pair owns one byte; bit *b* of that byte is the
//! LED at logical row `module_row * 8 + b`. Bytes are ordered column first,
//! so index `i` is column `i % 32` of module row `i / 32`. This is exactly
//! what a MAX7219 chain consumes and what remote viewers receive.
//!
//! # Example
//! ```rust
//! use led_matrix_clock::fonts::FONT_3X7;
//! use led_matrix_clock::matrix::MatrixBuffer;
//!
//! let mut buffer = MatrixBuffer::new();
//! let end = buffer.draw_text(0, 0, "12", &FONT_3X7);
//! assert_eq!(end, 7);
//! assert!(buffer.pixel(0, 0));
//! ```

use core::convert::Infallible;

#[cfg(feature = "defmt")]
use defmt::Format;
use embedded_dma::ReadBuffer;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{OriginDimensions, Point, Size};
use embedded_graphics::Pixel;

use crate::font::BitmapFont;
use crate::{byte_index, MATRIX_BYTES, MATRIX_COLS, MATRIX_ROWS, MODULE_HEIGHT, MODULE_ROWS};

/// The 64-byte logical framebuffer.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct MatrixBuffer {
    bytes: [u8; MATRIX_BYTES],
}

impl Default for MatrixBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixBuffer {
    /// Create a blank framebuffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; MATRIX_BYTES],
        }
    }

    /// Create a framebuffer from a raw snapshot.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; MATRIX_BYTES]) -> Self {
        Self { bytes }
    }

    /// Turn every LED off.
    pub fn clear(&mut self) {
        self.bytes = [0; MATRIX_BYTES];
    }

    /// Set one LED. Coordinates outside the 32×16 matrix are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 {
            return;
        }
        self.set_pixel_internal(x as usize, y as usize, on);
    }

    fn set_pixel_internal(&mut self, x: usize, y: usize, on: bool) {
        if x >= MATRIX_COLS || y >= MATRIX_ROWS {
            return;
        }
        let index = byte_index(x, y / MODULE_HEIGHT);
        let mask = 1 << (y % MODULE_HEIGHT);
        if on {
            self.bytes[index] |= mask;
        } else {
            self.bytes[index] &= !mask;
        }
    }

    /// Read one LED back. Out-of-range coordinates read as off.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= MATRIX_COLS || y as usize >= MATRIX_ROWS {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        self.bytes[byte_index(x, y / MODULE_HEIGHT)] & (1 << (y % MODULE_HEIGHT)) != 0
    }

    /// The byte for `column` in `module_row`, or 0 if out of range.
    #[must_use]
    pub fn column(&self, column: usize, module_row: usize) -> u8 {
        if column >= MATRIX_COLS || module_row >= MODULE_ROWS {
            return 0;
        }
        self.bytes[byte_index(column, module_row)]
    }

    /// Overwrite the byte for `column` in `module_row`. Out of range is ignored.
    pub fn set_column(&mut self, column: i32, module_row: usize, bits: u8) {
        if column < 0 || column as usize >= MATRIX_COLS || module_row >= MODULE_ROWS {
            return;
        }
        self.bytes[byte_index(column as usize, module_row)] = bits;
    }

    /// Raw bytes in snapshot order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; MATRIX_BYTES] {
        &self.bytes
    }

    /// Copy of the raw bytes for mirroring.
    #[must_use]
    pub const fn snapshot(&self) -> [u8; MATRIX_BYTES] {
        self.bytes
    }

    /// Flip every LED.
    pub fn invert(&mut self) {
        for byte in &mut self.bytes {
            *byte = !*byte;
        }
    }

    /// Shift every byte one index towards the start. The last byte becomes blank.
    ///
    /// Because the bytes are contiguous, column 0 of module row 1 moves into
    /// column 31 of module row 0, just like a single long MAX7219 chain.
    pub fn scroll_left(&mut self) {
        self.bytes.copy_within(1.., 0);
        self.bytes[MATRIX_BYTES - 1] = 0;
    }

    /// Blit one glyph with its left edge at column `x`, starting at `module_row`.
    ///
    /// Tall fonts continue into the following module rows. The column right
    /// after the glyph is cleared so a narrower glyph never leaves stale
    /// LEDs behind. Columns outside the matrix are skipped.
    ///
    /// Returns the glyph's advance width; unsupported characters draw nothing
    /// and return 0.
    pub fn blit_glyph(&mut self, x: i32, module_row: usize, c: char, font: &BitmapFont) -> u8 {
        let Some(glyph) = font.glyph(c) else {
            return 0;
        };
        let byte_rows = font.byte_rows();
        let width = glyph.width();
        if x >= MATRIX_COLS as i32 || x.saturating_add(i32::from(width)) < 0 {
            return width;
        }

        for j in 0..byte_rows {
            let row = module_row + j;
            for i in 0..width {
                self.set_column(x + i32::from(i), row, glyph.column_byte(usize::from(i), j, byte_rows));
            }
            self.set_column(x + i32::from(width), row, 0);
        }

        width
    }

    /// Draw `text` from column `x`, leaving one blank column between glyphs.
    ///
    /// Drawing stops as soon as the cursor reaches the right edge, so long
    /// text is cut off rather than wrapped. Returns the cursor after the
    /// last drawn glyph (without a trailing gap).
    pub fn draw_text(&mut self, x: i32, module_row: usize, text: &str, font: &BitmapFont) -> i32 {
        let mut x = x;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if x >= MATRIX_COLS as i32 {
                break;
            }
            x += i32::from(self.blit_glyph(x, module_row, c, font));
            if chars.peek().is_some() {
                x += 1;
            }
        }
        x
    }

    /// Number of lit LEDs
    #[must_use]
    pub fn lit_count(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }
}

impl OriginDimensions for MatrixBuffer {
    fn size(&self) -> Size {
        Size::new(MATRIX_COLS as u32, MATRIX_ROWS as u32)
    }
}

impl embedded_graphics::draw_target::DrawTarget for MatrixBuffer {
    type Color = BinaryColor;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.is_on());
        }
        Ok(())
    }
}

unsafe impl ReadBuffer for MatrixBuffer {
    type Word = u8;

    unsafe fn read_buffer(&self) -> (*const u8, usize) {
        (self.bytes.as_ptr(), self.bytes.len())
    }
}

unsafe impl ReadBuffer for &mut MatrixBuffer {
    type Word = u8;

    unsafe fn read_buffer(&self) -> (*const u8, usize) {
        (self.bytes.as_ptr(), self.bytes.len())
    }
}

impl core::fmt::Debug for MatrixBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MatrixBuffer")
            .field("size", &core::mem::size_of_val(&self.bytes))
            .field("lit", &self.lit_count())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl Format for MatrixBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "MatrixBuffer<{}x{}>", MATRIX_COLS, MATRIX_ROWS);
        defmt::write!(f, " lit: {}", self.lit_count());
    }
}
