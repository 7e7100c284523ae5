//! In-memory panel used by the unit tests.

extern crate std;

use core::convert::Infallible;
use std::vec;
use std::vec::Vec;

use embedded_graphics::pixelcolor::RgbColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Point, Size};
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::Pixel;

use crate::Color;

/// A 320×240 RGB565 panel that remembers every pixel and counts calls.
pub(crate) struct RecordingCanvas {
    size: Size,
    pixels: Vec<Color>,
    fill_calls: usize,
    clear_calls: usize,
    pixel_writes: usize,
}

impl RecordingCanvas {
    pub(crate) fn new() -> Self {
        Self::with_size(Size::new(320, 240))
    }

    pub(crate) fn with_size(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Color::BLACK; (size.width * size.height) as usize],
            fill_calls: 0,
            clear_calls: 0,
            pixel_writes: 0,
        }
    }

    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.size.width as i32 || p.y >= self.size.height as i32 {
            return None;
        }
        Some(p.y as usize * self.size.width as usize + p.x as usize)
    }

    pub(crate) fn pixel(&self, p: Point) -> Option<Color> {
        self.index(p).map(|i| self.pixels[i])
    }

    pub(crate) fn fill_calls(&self) -> usize {
        self.fill_calls
    }

    pub(crate) fn clear_calls(&self) -> usize {
        self.clear_calls
    }

    pub(crate) fn pixel_writes(&self) -> usize {
        self.pixel_writes
    }

    /// Total draw operations since the last reset
    pub(crate) fn operations(&self) -> usize {
        self.fill_calls + self.clear_calls + self.pixel_writes
    }

    pub(crate) fn reset_counters(&mut self) {
        self.fill_calls = 0;
        self.clear_calls = 0;
        self.pixel_writes = 0;
    }

    /// Number of pixels that are not black
    pub(crate) fn count_non_black(&self) -> usize {
        self.pixels.iter().filter(|c| **c != Color::BLACK).count()
    }

    /// Paints every pixel with `color` without touching the counters
    pub(crate) fn paint(&mut self, color: Color) {
        self.pixels.fill(color);
    }
}

impl DrawTarget for RecordingCanvas {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            self.pixel_writes += 1;
            if let Some(i) = self.index(p) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_calls += 1;
        for p in area.points() {
            if let Some(i) = self.index(p) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.clear_calls += 1;
        self.pixels.fill(color);
        Ok(())
    }
}

impl OriginDimensions for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }
}
