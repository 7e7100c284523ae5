//! Panel orientation.
//!
//! The clock is always drawn in landscape. Mounting the panel upside down is
//! handled by wrapping the real [`DrawTarget`] in [`Rotated`], which remaps
//! every pixel and solid fill by 180 degrees before it reaches the panel.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut panel = Rotated::new(ili9341, Rotation::LandscapeFlipped);
//! // (0, 0) now lands in the bottom-right corner of the glass
//! Pixel(Point::zero(), Rgb565::RED).draw(&mut panel)?;
//! ```

#[cfg(feature = "defmt")]
use defmt::Format;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, PixelColor, Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel;

/// Supported panel orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum Rotation {
    /// Normal landscape
    #[default]
    Landscape,
    /// Landscape turned by 180 degrees
    LandscapeFlipped,
}

impl Rotation {
    /// The other landscape orientation
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Landscape => Self::LandscapeFlipped,
            Self::LandscapeFlipped => Self::Landscape,
        }
    }

    /// Quarter-turn count as used by common panel drivers (1 or 3).
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Landscape => 1,
            Self::LandscapeFlipped => 3,
        }
    }

    /// Parses a quarter-turn count; only the two landscape values are accepted.
    #[must_use]
    pub const fn from_quarter_turns(turns: u8) -> Option<Self> {
        match turns {
            1 => Some(Self::Landscape),
            3 => Some(Self::LandscapeFlipped),
            _ => None,
        }
    }

    /// Maps a point in a `size` canvas to its position under this rotation.
    #[inline]
    #[must_use]
    pub fn remap_point(self, point: Point, size: Size) -> Point {
        match self {
            Self::Landscape => point,
            Self::LandscapeFlipped => Point::new(
                size.width as i32 - 1 - point.x,
                size.height as i32 - 1 - point.y,
            ),
        }
    }

    /// Maps a rectangle in a `size` canvas to the rectangle it covers under
    /// this rotation.
    #[must_use]
    pub fn remap_rect(self, area: &Rectangle, size: Size) -> Rectangle {
        match self {
            Self::Landscape => *area,
            Self::LandscapeFlipped => Rectangle::new(
                Point::new(
                    size.width as i32 - area.top_left.x - area.size.width as i32,
                    size.height as i32 - area.top_left.y - area.size.height as i32,
                ),
                area.size,
            ),
        }
    }

    #[inline]
    fn remap<C: PixelColor>(self, mut pixel: Pixel<C>, size: Size) -> Pixel<C> {
        pixel.0 = self.remap_point(pixel.0, size);
        pixel
    }
}

/// Wrapper around a real panel that applies a [`Rotation`].
///
/// The wrapper reports the same size as the wrapped panel. Only the error
/// type of the wrapped panel is propagated.
#[derive(Debug)]
pub struct Rotated<D> {
    target: D,
    rotation: Rotation,
}

impl<D> Rotated<D> {
    /// Wraps `target`
    #[must_use]
    pub const fn new(target: D, rotation: Rotation) -> Self {
        Self { target, rotation }
    }

    /// Current rotation
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Changes the rotation for subsequent drawing
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Borrow the wrapped panel
    #[must_use]
    pub const fn inner(&self) -> &D {
        &self.target
    }

    /// Mutably borrow the wrapped panel
    pub fn inner_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Unwraps the panel
    #[must_use]
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D: DrawTarget + OriginDimensions> DrawTarget for Rotated<D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let size = self.target.size();
        let rotation = self.rotation;
        self.target
            .draw_iter(pixels.into_iter().map(|p| rotation.remap(p, size)))
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let size = self.target.size();
        let area = self.rotation.remap_rect(area, size);
        self.target.fill_solid(&area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.target.clear(color)
    }
}

impl<D: OriginDimensions> OriginDimensions for Rotated<D> {
    fn size(&self) -> Size {
        self.target.size()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::test_canvas::RecordingCanvas;
    use crate::Color;
    use embedded_graphics::prelude::RgbColor;
    use embedded_graphics::primitives::ContainsPoint;

    const SIZE: Size = Size::new(320, 240);

    #[test]
    fn test_landscape_is_identity() {
        let p = Point::new(12, 34);
        assert_eq!(Rotation::Landscape.remap_point(p, SIZE), p);
        let r = Rectangle::new(p, Size::new(5, 6));
        assert_eq!(Rotation::Landscape.remap_rect(&r, SIZE), r);
    }

    #[test]
    fn test_flipped_corners() {
        let flip = Rotation::LandscapeFlipped;
        assert_eq!(flip.remap_point(Point::zero(), SIZE), Point::new(319, 239));
        assert_eq!(flip.remap_point(Point::new(319, 239), SIZE), Point::zero());
        assert_eq!(flip.remap_point(Point::new(319, 0), SIZE), Point::new(0, 239));
    }

    #[test]
    fn test_flipped_twice_is_identity() {
        let flip = Rotation::LandscapeFlipped;
        let p = Point::new(100, 7);
        assert_eq!(flip.remap_point(flip.remap_point(p, SIZE), SIZE), p);
    }

    #[test]
    fn test_flipped_rect_covers_remapped_corners() {
        let flip = Rotation::LandscapeFlipped;
        let r = Rectangle::new(Point::new(10, 20), Size::new(9, 9));
        let remapped = flip.remap_rect(&r, SIZE);
        assert_eq!(remapped.size, r.size);
        assert_eq!(remapped.top_left, Point::new(320 - 10 - 9, 240 - 20 - 9));
        // Both corners of the source rect land inside the remapped rect
        assert!(remapped.contains(flip.remap_point(r.top_left, SIZE)));
        assert!(remapped.contains(flip.remap_point(r.bottom_right().unwrap(), SIZE)));
    }

    #[test]
    fn test_quarter_turns() {
        assert_eq!(Rotation::from_quarter_turns(1), Some(Rotation::Landscape));
        assert_eq!(Rotation::from_quarter_turns(3), Some(Rotation::LandscapeFlipped));
        assert_eq!(Rotation::from_quarter_turns(0), None);
        assert_eq!(Rotation::from_quarter_turns(2), None);
        assert_eq!(Rotation::Landscape.flipped().quarter_turns(), 3);
        assert_eq!(Rotation::LandscapeFlipped.flipped(), Rotation::Landscape);
    }

    #[test]
    fn test_rotated_draw_target() {
        let mut panel = Rotated::new(RecordingCanvas::new(), Rotation::LandscapeFlipped);
        assert_eq!(panel.size(), SIZE);

        panel
            .draw_iter([Pixel(Point::new(0, 0), Color::RED)])
            .unwrap();
        assert_eq!(panel.inner().pixel(Point::new(319, 239)), Some(Color::RED));
        assert_eq!(panel.inner().pixel(Point::new(0, 0)), Some(Color::BLACK));

        panel
            .fill_solid(&Rectangle::new(Point::zero(), Size::new(2, 2)), Color::GREEN)
            .unwrap();
        for p in [Point::new(318, 238), Point::new(319, 238), Point::new(318, 239)] {
            assert_eq!(panel.inner().pixel(p), Some(Color::GREEN));
        }
        assert_eq!(panel.inner().fill_calls(), 1);
    }

    #[test]
    fn test_rotation_can_change_at_runtime() {
        let mut panel = Rotated::new(RecordingCanvas::new(), Rotation::Landscape);
        panel.set_rotation(Rotation::LandscapeFlipped);
        assert_eq!(panel.rotation(), Rotation::LandscapeFlipped);
        panel.draw_iter([Pixel(Point::new(1, 0), Color::BLUE)]).unwrap();
        assert_eq!(panel.into_inner().pixel(Point::new(318, 239)), Some(Color::BLUE));
    }
}
