//! Placement of the logical matrix on the physical panel.
//!
//! The matrix is centered on the panel. Each logical LED occupies a
//! `cell_size × cell_size` square, and a fixed seam of [`MODULE_GAP_PX`]
//! pixels separates the upper and lower rows of driver boards.

#[cfg(feature = "defmt")]
use defmt::Format;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::rotation::Rotation;
use crate::{MATRIX_COLS, MATRIX_ROWS, MODULE_HEIGHT};

/// Vertical seam between the two module rows, in panel pixels.
pub const MODULE_GAP_PX: u32 = 4;

/// Smallest supported cell size
pub const MIN_CELL_SIZE: u8 = 4;
/// Largest supported cell size
pub const MAX_CELL_SIZE: u8 = 12;
/// Largest supported cell spacing
pub const MAX_CELL_SPACING: u8 = 3;

/// User-adjustable geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct LayoutParameters {
    /// Edge length of one logical LED in panel pixels, `4..=12`
    pub cell_size: u8,
    /// Spacing between LEDs reported to viewers, `0..=3`
    pub cell_spacing: u8,
    /// Panel orientation
    pub rotation: Rotation,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            cell_size: 9,
            cell_spacing: 1,
            rotation: Rotation::Landscape,
        }
    }
}

impl LayoutParameters {
    /// Whether both values are inside their supported ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&self.cell_size)
            && self.cell_spacing <= MAX_CELL_SPACING
    }
}

/// Geometry derived from [`LayoutParameters`] and the panel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct Layout {
    params: LayoutParameters,
    canvas_width: u32,
    canvas_height: u32,
    offset_x: i32,
    offset_y: i32,
}

impl Layout {
    /// Compute the layout for a panel of `canvas` size.
    #[must_use]
    pub fn new(params: LayoutParameters, canvas: Size) -> Self {
        let offset_x = centering_offset(canvas.width, matrix_width_px(params.cell_size));
        let offset_y = centering_offset(canvas.height, matrix_height_px(params.cell_size));
        Self {
            params,
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            offset_x,
            offset_y,
        }
    }

    /// Parameters this layout was computed from
    #[must_use]
    pub const fn params(&self) -> LayoutParameters {
        self.params
    }

    /// Panel size this layout was computed for
    #[must_use]
    pub const fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// Edge length of one cell in pixels
    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.params.cell_size as u32
    }

    /// Width of the whole matrix in pixels
    #[must_use]
    pub fn matrix_width(&self) -> u32 {
        matrix_width_px(self.params.cell_size)
    }

    /// Height of the whole matrix in pixels, seam included
    #[must_use]
    pub fn matrix_height(&self) -> u32 {
        matrix_height_px(self.params.cell_size)
    }

    /// Top-left corner of the matrix on the panel
    #[must_use]
    pub const fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    /// Top-left panel pixel of logical cell `(x, y)`.
    ///
    /// Rows in the lower module row are pushed down by the seam.
    #[must_use]
    pub fn cell_origin(&self, x: usize, y: usize) -> Point {
        let cell = self.cell_size() as i32;
        let gap = if y >= MODULE_HEIGHT { MODULE_GAP_PX as i32 } else { 0 };
        Point::new(
            self.offset_x + x as i32 * cell,
            self.offset_y + y as i32 * cell + gap,
        )
    }

    /// Square covered by logical cell `(x, y)`
    #[must_use]
    pub fn cell_rect(&self, x: usize, y: usize) -> Rectangle {
        let cell = self.cell_size();
        Rectangle::new(self.cell_origin(x, y), Size::new(cell, cell))
    }

    /// Whether the layout must be recomputed for new parameters or panel size.
    #[must_use]
    pub fn is_stale(&self, params: &LayoutParameters, canvas: Size) -> bool {
        self.params != *params || self.canvas_size() != canvas
    }
}

/// `cell_size * 32`
#[must_use]
pub fn matrix_width_px(cell_size: u8) -> u32 {
    u32::from(cell_size) * MATRIX_COLS as u32
}

/// `cell_size * 16 + MODULE_GAP_PX`
#[must_use]
pub fn matrix_height_px(cell_size: u8) -> u32 {
    u32::from(cell_size) * MATRIX_ROWS as u32 + MODULE_GAP_PX
}

/// `max(0, (canvas - matrix) / 2)`
fn centering_offset(canvas: u32, matrix: u32) -> i32 {
    (canvas.saturating_sub(matrix) / 2) as i32
}
