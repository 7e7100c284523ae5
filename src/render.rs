//! Painting logical LEDs onto the panel.
//!
//! [`PixelRenderer`] turns one logical cell and its on/off state into panel
//! draw calls. Two looks are available, selected by [`DisplayStyle`]:
//!
//! - **Block**: a flat `cell_size × cell_size` square, one `fill_solid` per
//!   cell.
//! - **Realistic LED**: a round LED inside a colored surround ring. The cell
//!   is split into concentric zones by squared distance from its center,
//!   measured in half pixels so even and odd cell sizes stay symmetric.
//!
//! Both styles cover exactly the same square, switching style never moves a
//! pixel.

#[cfg(feature = "defmt")]
use defmt::Format;
use embedded_graphics::prelude::{DrawTarget, Point};
use embedded_graphics::Pixel;

use crate::color::{ColorScheme, BACKGROUND};
use crate::layout::Layout;
use crate::{Color, MATRIX_COLS, MATRIX_ROWS};

/// How each logical LED is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum DisplayStyle {
    /// Flat squares
    Block,
    /// Shaded round LEDs with a surround ring
    #[default]
    RealisticLed,
}

impl DisplayStyle {
    /// Style index as used by control surfaces (0 = block, 1 = realistic)
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Block => 0,
            Self::RealisticLed => 1,
        }
    }

    /// Parses a style index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Block),
            1 => Some(Self::RealisticLed),
            _ => None,
        }
    }
}

/// Zone of a sub-pixel inside a realistic LED cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum LedZone {
    /// Center of the LED
    Core,
    /// Rest of the LED body
    Body,
    /// Ring around the LED
    Surround,
    /// Corners of the cell
    Outside,
}

/// Squared distance of sub-pixel `(px, py)` from the cell center, in half
/// pixels.
#[inline]
#[must_use]
pub const fn distance_sq(cell_size: i32, px: i32, py: i32) -> i32 {
    let dx = px * 2 - cell_size + 1;
    let dy = py * 2 - cell_size + 1;
    dx * dx + dy * dy
}

/// Zone of `(px, py)` in a lit LED.
#[must_use]
pub const fn lit_zone(cell_size: i32, px: i32, py: i32) -> LedZone {
    let dist = distance_sq(cell_size, px, py);
    let core = (cell_size - 6) * (cell_size - 6);
    let body = (cell_size - 2) * (cell_size - 2);
    let surround = cell_size * cell_size;
    if dist <= core {
        LedZone::Core
    } else if dist <= body {
        LedZone::Body
    } else if dist <= surround {
        LedZone::Surround
    } else {
        LedZone::Outside
    }
}

/// Zone of `(px, py)` in an unlit LED.
///
/// The outermost ring of the cell is always [`LedZone::Outside`].
#[must_use]
pub const fn unlit_zone(cell_size: i32, px: i32, py: i32) -> LedZone {
    if px < 1 || py < 1 || px >= cell_size - 1 || py >= cell_size - 1 {
        return LedZone::Outside;
    }
    let dist = distance_sq(cell_size, px, py);
    let core = (cell_size - 4) * (cell_size - 4);
    let ring = (cell_size - 2) * (cell_size - 2);
    if dist <= core {
        LedZone::Core
    } else if dist <= ring {
        LedZone::Surround
    } else {
        LedZone::Outside
    }
}

/// Draws logical LEDs for a given layout, color scheme and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct PixelRenderer {
    layout: Layout,
    colors: ColorScheme,
    style: DisplayStyle,
}

impl PixelRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new(layout: Layout, colors: ColorScheme, style: DisplayStyle) -> Self {
        Self {
            layout,
            colors,
            style,
        }
    }

    /// Layout in use
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Colors in use
    #[must_use]
    pub const fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Style in use
    #[must_use]
    pub const fn style(&self) -> DisplayStyle {
        self.style
    }

    /// Replaces the layout
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Replaces the colors
    pub fn set_colors(&mut self, colors: ColorScheme) {
        self.colors = colors;
    }

    /// Replaces the style
    pub fn set_style(&mut self, style: DisplayStyle) {
        self.style = style;
    }

    /// Color of a sub-pixel at `(px, py)` of a realistic cell.
    #[must_use]
    pub fn realistic_color(&self, px: i32, py: i32, lit: bool) -> Color {
        let cell = self.layout.cell_size() as i32;
        if lit {
            match lit_zone(cell, px, py) {
                LedZone::Core | LedZone::Body => self.colors.on_color(),
                LedZone::Surround => self.colors.surround_color(),
                LedZone::Outside => BACKGROUND,
            }
        } else {
            match unlit_zone(cell, px, py) {
                LedZone::Core | LedZone::Body => self.colors.off_color(),
                LedZone::Surround => self.colors.off_surround_color(),
                LedZone::Outside => BACKGROUND,
            }
        }
    }

    /// Draws logical cell `(x, y)` as lit or unlit.
    ///
    /// Cells outside the 32×16 matrix are ignored.
    ///
    /// # Errors
    ///
    /// Returns the canvas' error if a draw call fails.
    pub fn draw_cell<D>(&self, canvas: &mut D, x: usize, y: usize, lit: bool) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Color>,
    {
        if x >= MATRIX_COLS || y >= MATRIX_ROWS {
            return Ok(());
        }
        match self.style {
            DisplayStyle::Block => {
                let color = if lit { self.colors.on_color() } else { BACKGROUND };
                canvas.fill_solid(&self.layout.cell_rect(x, y), color)
            }
            DisplayStyle::RealisticLed if lit => self.draw_lit_led(canvas, x, y),
            DisplayStyle::RealisticLed => self.draw_unlit_led(canvas, x, y),
        }
    }

    fn draw_lit_led<D>(&self, canvas: &mut D, x: usize, y: usize) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Color>,
    {
        let origin = self.layout.cell_origin(x, y);
        let cell = self.layout.cell_size() as i32;
        let pixels = (0..cell).flat_map(move |py| {
            (0..cell).map(move |px| {
                Pixel(origin + Point::new(px, py), self.realistic_color(px, py, true))
            })
        });
        canvas.draw_iter(pixels)
    }

    fn draw_unlit_led<D>(&self, canvas: &mut D, x: usize, y: usize) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Color>,
    {
        canvas.fill_solid(&self.layout.cell_rect(x, y), BACKGROUND)?;

        let origin = self.layout.cell_origin(x, y);
        let cell = self.layout.cell_size() as i32;
        let pixels = (1..cell - 1).flat_map(move |py| {
            (1..cell - 1).filter_map(move |px| match unlit_zone(cell, px, py) {
                LedZone::Outside => None,
                _ => Some(Pixel(
                    origin + Point::new(px, py),
                    self.realistic_color(px, py, false),
                )),
            })
        });
        canvas.draw_iter(pixels)
    }
}
