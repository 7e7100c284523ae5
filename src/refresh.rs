//! Dirty tracking between the [`MatrixBuffer`] and the panel.
//!
//! Drawing a realistic LED costs one pixel write per panel pixel, so
//! repainting all 512 cells every second is far too slow on small parts.
//! [`RefreshEngine`] keeps a shadow copy of every column byte it has painted
//! and only repaints the columns whose byte changed since the last pass.
//! A typical clock update touches a handful of columns.
//!
//! A forced redraw (after a color, style or geometry change) invalidates the
//! shadow copy and clears the panel at the start of the next pass, so stale
//! pixels from the old layout never survive.

#[cfg(feature = "defmt")]
use defmt::Format;
use embedded_graphics::prelude::DrawTarget;

use crate::color::BACKGROUND;
use crate::matrix::MatrixBuffer;
use crate::render::PixelRenderer;
use crate::{byte_index, Color, MATRIX_BYTES, MATRIX_COLS, MODULE_HEIGHT, MODULE_ROWS};

/// What one refresh pass drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct RefreshStats {
    /// Column bytes repainted
    pub columns: usize,
    /// Logical LEDs handed to the renderer
    pub cells: usize,
    /// Whether the panel was cleared first
    pub cleared: bool,
}

impl RefreshStats {
    /// True if nothing was drawn
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.cells == 0 && !self.cleared
    }
}

/// Shadow copy of the last painted matrix plus the redraw flags.
///
/// A shadow entry of `None` can never equal a real byte, so it marks the
/// column as dirty.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshEngine {
    shadow: [Option<u8>; MATRIX_BYTES],
    force_full_redraw: bool,
    first_run: bool,
    clear_pending: bool,
}

impl Default for RefreshEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshEngine {
    /// Creates an engine whose first pass clears the panel and paints
    /// everything.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shadow: [None; MATRIX_BYTES],
            force_full_redraw: false,
            first_run: true,
            clear_pending: true,
        }
    }

    /// Invalidates the shadow copy so the next pass clears the panel and
    /// repaints every cell.
    pub fn request_full_redraw(&mut self) {
        self.shadow = [None; MATRIX_BYTES];
        self.force_full_redraw = true;
        self.clear_pending = true;
        debug!("refresh cache cleared, full redraw pending");
    }

    /// Whether the next pass repaints everything
    #[must_use]
    pub const fn full_redraw_pending(&self) -> bool {
        self.force_full_redraw || self.first_run
    }

    /// Last painted byte of a column, `None` if it is dirty
    #[must_use]
    pub fn shadow(&self, column: usize, module_row: usize) -> Option<u8> {
        if column >= MATRIX_COLS || module_row >= MODULE_ROWS {
            return None;
        }
        self.shadow[byte_index(column, module_row)]
    }

    /// Paints every changed column of `buffer` through `renderer`.
    ///
    /// With `fast_refresh` off every column is repainted on every pass, which
    /// matches a build without dirty tracking.
    ///
    /// # Errors
    ///
    /// Returns the canvas' error. Columns painted before the failure keep
    /// their updated shadow; the failing column stays dirty.
    pub fn refresh_all<D>(
        &mut self,
        buffer: &MatrixBuffer,
        renderer: &PixelRenderer,
        canvas: &mut D,
        fast_refresh: bool,
    ) -> Result<RefreshStats, D::Error>
    where
        D: DrawTarget<Color = Color>,
    {
        let mut stats = RefreshStats::default();

        if self.clear_pending {
            canvas.clear(BACKGROUND)?;
            self.clear_pending = false;
            stats.cleared = true;
        }

        let repaint_all = self.force_full_redraw || self.first_run || !fast_refresh;

        for module_row in 0..MODULE_ROWS {
            for column in 0..MATRIX_COLS {
                let index = byte_index(column, module_row);
                let bits = buffer.column(column, module_row);
                if !repaint_all && self.shadow[index] == Some(bits) {
                    continue;
                }

                self.shadow[index] = None;
                for bit in 0..MODULE_HEIGHT {
                    let y = module_row * MODULE_HEIGHT + bit;
                    renderer.draw_cell(canvas, column, y, bits & (1 << bit) != 0)?;
                }
                self.shadow[index] = Some(bits);

                stats.columns += 1;
                stats.cells += MODULE_HEIGHT;
            }
        }

        self.first_run = false;
        self.force_full_redraw = false;

        trace!(
            "refresh: {=usize} columns, {=usize} cells",
            stats.columns,
            stats.cells
        );
        Ok(stats)
    }
}

impl core::fmt::Debug for RefreshEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let dirty = self.shadow.iter().filter(|b| b.is_none()).count();
        f.debug_struct("RefreshEngine")
            .field("dirty_columns", &dirty)
            .field("force_full_redraw", &self.force_full_redraw)
            .field("first_run", &self.first_run)
            .field("clear_pending", &self.clear_pending)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl Format for RefreshEngine {
    fn format(&self, f: defmt::Formatter) {
        let dirty = self.shadow.iter().filter(|b| b.is_none()).count();
        defmt::write!(
            f,
            "RefreshEngine<dirty: {=usize}, forced: {=bool}, first_run: {=bool}>",
            dirty,
            self.force_full_redraw,
            self.first_run
        );
    }
}
