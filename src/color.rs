//! LED colors, presets and the color scheme used by the renderer.

use bitfield::bitfield;
#[cfg(feature = "defmt")]
use defmt::Format;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{IntoStorage, RgbColor};

use crate::Color;

bitfield! {
    /// 16-bit RGB565 word as sent to the panel.
    ///
    /// The bit layout is as follows:
    /// - Bits 15-11: Red channel (5 bits)
    /// - Bits 10-5: Green channel (6 bits)
    /// - Bits 4-0: Blue channel (5 bits)
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct PackedColor(u16);
    impl Debug;
    pub red, set_red: 15, 11;
    pub green, set_green: 10, 5;
    pub blue, set_blue: 4, 0;
}

impl PackedColor {
    /// Wrap a raw RGB565 word.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw RGB565 word
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<Color> for PackedColor {
    fn from(color: Color) -> Self {
        Self(color.into_storage())
    }
}

impl From<PackedColor> for Color {
    fn from(packed: PackedColor) -> Self {
        Color::from(RawU16::new(packed.0))
    }
}

/// Panel background
pub const BACKGROUND: Color = Color::BLACK;

/// Core color of an unlit LED in the realistic style (very dark red).
pub const DEFAULT_OFF_COLOR: Color = Color::new(3, 0, 0);

/// Dim factor applied to the surround ring of an unlit LED.
pub const OFF_SURROUND_DIM: u16 = 7;

/// Dim `color` by dividing each channel by `factor + 1`.
///
/// Channels are scaled independently so the hue is kept; no channel bits
/// leak into a neighbour the way a plain shift of the packed word would.
#[must_use]
pub fn dim_color(color: Color, factor: u16) -> Color {
    let divisor = factor.saturating_add(1);
    let mut packed = PackedColor::from(color);
    packed.set_red(packed.red() / divisor);
    packed.set_green(packed.green() / divisor);
    packed.set_blue(packed.blue() / divisor);
    packed.into()
}

/// Colors offered for lit LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum LedColor {
    /// Classic red
    #[default]
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Yellow
    Yellow,
    /// Cyan
    Cyan,
    /// Magenta
    Magenta,
    /// White
    White,
    /// Orange
    Orange,
}

impl LedColor {
    /// Every preset in menu order
    pub const ALL: [LedColor; 8] = [
        LedColor::Red,
        LedColor::Green,
        LedColor::Blue,
        LedColor::Yellow,
        LedColor::Cyan,
        LedColor::Magenta,
        LedColor::White,
        LedColor::Orange,
    ];

    /// The panel color of this preset.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            LedColor::Red => Color::RED,
            LedColor::Green => Color::GREEN,
            LedColor::Blue => Color::BLUE,
            LedColor::Yellow => Color::YELLOW,
            LedColor::Cyan => Color::CYAN,
            LedColor::Magenta => Color::MAGENTA,
            LedColor::White => Color::WHITE,
            LedColor::Orange => PackedColor::new(0xFD20).into(),
        }
    }

    /// Look a preset up by menu index; unknown indices fall back to red.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

/// Colors offered for the ring around each LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum SurroundColor {
    /// White
    #[default]
    White,
    /// Light gray
    LightGray,
    /// Dark gray
    DarkGray,
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Yellow
    Yellow,
    /// Follow the lit LED color
    MatchLed,
}

impl SurroundColor {
    /// Every preset in menu order
    pub const ALL: [SurroundColor; 8] = [
        SurroundColor::White,
        SurroundColor::LightGray,
        SurroundColor::DarkGray,
        SurroundColor::Red,
        SurroundColor::Green,
        SurroundColor::Blue,
        SurroundColor::Yellow,
        SurroundColor::MatchLed,
    ];

    /// Fixed panel color of this preset; `None` for [`SurroundColor::MatchLed`].
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            SurroundColor::White => Some(Color::WHITE),
            SurroundColor::LightGray => Some(PackedColor::new(0xC618).into()),
            SurroundColor::DarkGray => Some(PackedColor::new(0x7BEF).into()),
            SurroundColor::Red => Some(Color::RED),
            SurroundColor::Green => Some(Color::GREEN),
            SurroundColor::Blue => Some(Color::BLUE),
            SurroundColor::Yellow => Some(Color::YELLOW),
            SurroundColor::MatchLed => None,
        }
    }

    /// Look a preset up by menu index; unknown indices fall back to white.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

/// Colors used to paint the matrix.
///
/// When `surround_matches_on` is set, every change of the on color is
/// copied into the surround color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    on_color: Color,
    surround_color: Color,
    off_color: Color,
    surround_matches_on: bool,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new(Color::RED, Color::RED)
    }
}

impl ColorScheme {
    /// Create a scheme with independent on and surround colors.
    #[must_use]
    pub const fn new(on_color: Color, surround_color: Color) -> Self {
        Self {
            on_color,
            surround_color,
            off_color: DEFAULT_OFF_COLOR,
            surround_matches_on: false,
        }
    }

    /// Color of a lit LED
    #[must_use]
    pub const fn on_color(&self) -> Color {
        self.on_color
    }

    /// Color of the ring around an LED
    #[must_use]
    pub const fn surround_color(&self) -> Color {
        self.surround_color
    }

    /// Core color of an unlit LED
    #[must_use]
    pub const fn off_color(&self) -> Color {
        self.off_color
    }

    /// Whether the surround follows the on color
    #[must_use]
    pub const fn surround_matches_on(&self) -> bool {
        self.surround_matches_on
    }

    /// Change the lit color, dragging the surround along if it is linked.
    pub fn set_on_color(&mut self, color: Color) {
        self.on_color = color;
        if self.surround_matches_on {
            self.surround_color = color;
        }
    }

    /// Set an explicit surround color. This unlinks it from the on color.
    pub fn set_surround_color(&mut self, color: Color) {
        self.surround_color = color;
        self.surround_matches_on = false;
    }

    /// Link the surround to the on color and copy it immediately.
    pub fn match_surround_to_on(&mut self) {
        self.surround_matches_on = true;
        self.surround_color = self.on_color;
    }

    /// Apply a surround preset.
    pub fn set_surround(&mut self, surround: SurroundColor) {
        match surround.color() {
            Some(color) => self.set_surround_color(color),
            None => self.match_surround_to_on(),
        }
    }

    /// Surround ring color for an unlit LED.
    #[must_use]
    pub fn off_surround_color(&self) -> Color {
        dim_color(self.surround_color, OFF_SURROUND_DIM)
    }
}

#[cfg(feature = "defmt")]
impl Format for ColorScheme {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ColorScheme on={=u16:#x} surround={=u16:#x} linked={=bool}",
            self.on_color.into_storage(),
            self.surround_color.into_storage(),
            self.surround_matches_on
        );
    }
}
