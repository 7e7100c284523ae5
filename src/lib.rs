//! Retro LED matrix clock engine for pixel-addressable color panels.
//!
//! ## The simulated hardware
//!
//! Classic "dot matrix" clocks chain MAX7219 driver boards, each driving an
//! 8×8 block of LEDs. Every board is fed one byte per column where bit *b*
//! lights row *b* of that column. This crate emulates eight such boards laid
//! out four wide and two high, giving a 32×16 logical matrix, and paints that
//! matrix onto an ordinary color panel (a 320×240 ILI9341, for example) so it
//! looks like the real thing, including the small seam between the two rows
//! of boards.
//!
//! ## Pipeline
//!
//! 1. [`mode`] decides which of three clock faces to show and composes it.
//! 2. Composition writes glyphs from a [`font::BitmapFont`] into the
//!    bit-packed [`matrix::MatrixBuffer`] (64 bytes).
//! 3. [`refresh::RefreshEngine`] compares the buffer with a shadow copy and
//!    only repaints columns whose byte changed.
//! 4. [`render::PixelRenderer`] draws each logical LED either as a flat block
//!    or as a shaded round LED with a surround ring, positioned by
//!    [`layout::Layout`].
//!
//! [`engine::DisplayEngine`] owns all of the above and exposes a single
//! `tick()` entry point for the host loop.
//!
//! The physical panel is any `embedded-graphics` [`DrawTarget`] using
//! [`Color`] (RGB565). Solid fills go through `fill_solid`, shaded LEDs
//! through `draw_iter`.
//!
//! ## Available Feature Flags
//!
//! ### `defmt` Feature
//! Implements `defmt::Format` for the public types and routes the crate's
//! internal diagnostics (forced redraws, mode switches, rejected settings)
//! to `defmt`. Without it, logging compiles away entirely.
//!
//! ```toml
//! [dependencies]
//! led-matrix-clock = { version = "0.1.0", features = ["defmt"] }
//! ```
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

#[macro_use]
mod fmt;

pub mod clock;
pub mod color;
pub mod config;
pub mod engine;
pub mod font;
pub mod fonts;
pub mod layout;
pub mod matrix;
pub mod mode;
pub mod refresh;
pub mod render;
pub mod rotation;
pub mod sensor;

use embedded_graphics::pixelcolor::Rgb565;

/// Color type used on the physical panel
pub type Color = Rgb565;

/// Monotonic millisecond timestamp handed to [`engine::DisplayEngine::tick`]
pub type Instant = fugit::Instant<u64, 1, 1_000>;

/// Millisecond duration matching [`Instant`]
pub type Duration = fugit::Duration<u64, 1, 1_000>;

/// Height of one simulated driver board in LEDs
pub const MODULE_HEIGHT: usize = 8;

/// Width of one simulated driver board in LEDs
pub const MODULE_WIDTH: usize = 8;

/// Number of boards chained horizontally
pub const MODULES_WIDE: usize = 4;

/// Number of board rows stacked vertically
pub const MODULE_ROWS: usize = 2;

/// Logical matrix width in LEDs
pub const MATRIX_COLS: usize = MODULE_WIDTH * MODULES_WIDE;

/// Logical matrix height in LEDs
pub const MATRIX_ROWS: usize = MODULE_HEIGHT * MODULE_ROWS;

/// Bytes needed to hold the whole matrix, one per column per module row
pub const MATRIX_BYTES: usize = MATRIX_COLS * MODULE_ROWS;

/// Computes the byte index of a column within a module row.
///
/// The layout matches the viewer snapshot: all 32 columns of module row 0
/// first, then module row 1.
#[must_use]
pub const fn byte_index(column: usize, module_row: usize) -> usize {
    column + module_row * MATRIX_COLS
}

pub use color::ColorScheme;
pub use config::Config;
pub use engine::DisplayEngine;
pub use font::BitmapFont;
pub use layout::Layout;
pub use matrix::MatrixBuffer;
pub use render::DisplayStyle;

#[cfg(test)]
pub(crate) mod test_canvas;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_dimensions() {
        assert_eq!(MATRIX_COLS, 32);
        assert_eq!(MATRIX_ROWS, 16);
        assert_eq!(MATRIX_BYTES, 64);
    }

    #[test]
    fn test_byte_index_layout() {
        assert_eq!(byte_index(0, 0), 0);
        assert_eq!(byte_index(31, 0), 31);
        assert_eq!(byte_index(0, 1), 32);
        assert_eq!(byte_index(31, 1), 63);

        // Every cell maps to a distinct byte
        for row in 0..MODULE_ROWS {
            for col in 0..MATRIX_COLS {
                let i = byte_index(col, row);
                assert_eq!(i % MATRIX_COLS, col);
                assert_eq!(i / MATRIX_COLS, row);
            }
        }
    }

    #[test]
    fn test_helper_functions_const() {
        const LAST: usize = byte_index(MATRIX_COLS - 1, MODULE_ROWS - 1);
        assert_eq!(LAST, MATRIX_BYTES - 1);
    }

    #[test]
    fn test_instant_arithmetic() {
        let start = Instant::from_ticks(1_000);
        let later = Instant::from_ticks(6_000);
        assert_eq!(later - start, Duration::secs(5));
    }
}
