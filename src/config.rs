//! User settings.
//!
//! [`Config`] holds everything a control surface may change at runtime.
//! Numeric settings have declared ranges; setters reject values outside
//! them, leave the field untouched and return `false`.

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::clock::{DateFormat, TemperatureUnit};
use crate::color::ColorScheme;
use crate::layout::{LayoutParameters, MAX_CELL_SIZE, MAX_CELL_SPACING, MIN_CELL_SIZE};
use crate::render::DisplayStyle;
use crate::rotation::Rotation;
use crate::sensor::SensorKind;
use crate::Duration;

/// Shortest mode rotation interval in seconds
pub const MIN_MODE_INTERVAL_SECS: u32 = 1;
/// Longest mode rotation interval in seconds
pub const MAX_MODE_INTERVAL_SECS: u32 = 60;

/// Runtime settings of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct Config {
    layout: LayoutParameters,
    style: DisplayStyle,
    colors: ColorScheme,
    use_24_hour: bool,
    leading_zero: bool,
    date_format: DateFormat,
    mode_interval_secs: u32,
    temperature_unit: TemperatureUnit,
    fast_refresh: bool,
    sensor: SensorKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutParameters::default(),
            style: DisplayStyle::RealisticLed,
            colors: ColorScheme::default(),
            use_24_hour: false,
            leading_zero: false,
            date_format: DateFormat::DayMonthYear,
            mode_interval_secs: 5,
            temperature_unit: TemperatureUnit::Celsius,
            fast_refresh: true,
            sensor: SensorKind::Htu21d,
        }
    }
}

impl Config {
    /// Geometry settings
    #[must_use]
    pub const fn layout(&self) -> LayoutParameters {
        self.layout
    }

    /// Cell size in panel pixels
    #[must_use]
    pub const fn cell_size(&self) -> u8 {
        self.layout.cell_size
    }

    /// Cell spacing in panel pixels
    #[must_use]
    pub const fn cell_spacing(&self) -> u8 {
        self.layout.cell_spacing
    }

    /// Panel orientation
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.layout.rotation
    }

    /// LED look
    #[must_use]
    pub const fn style(&self) -> DisplayStyle {
        self.style
    }

    /// LED colors
    #[must_use]
    pub const fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Mutable access to the LED colors
    pub fn colors_mut(&mut self) -> &mut ColorScheme {
        &mut self.colors
    }

    /// 24-hour clock
    #[must_use]
    pub const fn use_24_hour(&self) -> bool {
        self.use_24_hour
    }

    /// Zero-pad single-digit hours
    #[must_use]
    pub const fn leading_zero(&self) -> bool {
        self.leading_zero
    }

    /// Date layout for the time-and-date face
    #[must_use]
    pub const fn date_format(&self) -> DateFormat {
        self.date_format
    }

    /// Time each face stays on screen, in seconds
    #[must_use]
    pub const fn mode_interval_secs(&self) -> u32 {
        self.mode_interval_secs
    }

    /// Time each face stays on screen
    #[must_use]
    pub const fn mode_interval(&self) -> Duration {
        Duration::secs(self.mode_interval_secs as u64)
    }

    /// Temperature unit on the sensor line
    #[must_use]
    pub const fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    /// Repaint only changed columns
    #[must_use]
    pub const fn fast_refresh(&self) -> bool {
        self.fast_refresh
    }

    /// Fitted sensor chip
    #[must_use]
    pub const fn sensor(&self) -> SensorKind {
        self.sensor
    }

    /// Sets the cell size, `4..=12` pixels.
    pub fn set_cell_size(&mut self, cell_size: u8) -> bool {
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cell_size) {
            warn!("rejected cell size {=u8}", cell_size);
            return false;
        }
        self.layout.cell_size = cell_size;
        true
    }

    /// Sets the cell spacing, `0..=3` pixels.
    pub fn set_cell_spacing(&mut self, cell_spacing: u8) -> bool {
        if cell_spacing > MAX_CELL_SPACING {
            warn!("rejected cell spacing {=u8}", cell_spacing);
            return false;
        }
        self.layout.cell_spacing = cell_spacing;
        true
    }

    /// Sets the mode rotation interval, `1..=60` seconds.
    pub fn set_mode_interval_secs(&mut self, secs: u32) -> bool {
        if !(MIN_MODE_INTERVAL_SECS..=MAX_MODE_INTERVAL_SECS).contains(&secs) {
            warn!("rejected mode interval {=u32}", secs);
            return false;
        }
        self.mode_interval_secs = secs;
        true
    }

    /// Sets the date format from its index, `0..=4`.
    pub fn set_date_format_index(&mut self, index: u8) -> bool {
        match DateFormat::from_index(index) {
            Some(format) => {
                self.date_format = format;
                true
            }
            None => {
                warn!("rejected date format {=u8}", index);
                false
            }
        }
    }

    /// Sets the display style from its index, `0..=1`.
    pub fn set_style_index(&mut self, index: u8) -> bool {
        match DisplayStyle::from_index(index) {
            Some(style) => {
                self.style = style;
                true
            }
            None => {
                warn!("rejected display style {=u8}", index);
                false
            }
        }
    }

    /// Sets the rotation from a quarter-turn count, 1 or 3.
    pub fn set_rotation_turns(&mut self, turns: u8) -> bool {
        match Rotation::from_quarter_turns(turns) {
            Some(rotation) => {
                self.layout.rotation = rotation;
                true
            }
            None => {
                warn!("rejected rotation {=u8}", turns);
                false
            }
        }
    }

    /// Sets the date format
    pub fn set_date_format(&mut self, format: DateFormat) {
        self.date_format = format;
    }

    /// Sets the display style
    pub fn set_style(&mut self, style: DisplayStyle) {
        self.style = style;
    }

    /// Sets the panel orientation
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.layout.rotation = rotation;
    }

    /// Selects the 24-hour clock
    pub fn set_use_24_hour(&mut self, use_24_hour: bool) {
        self.use_24_hour = use_24_hour;
    }

    /// Zero-pads single-digit hours
    pub fn set_leading_zero(&mut self, leading_zero: bool) {
        self.leading_zero = leading_zero;
    }

    /// Selects the temperature unit
    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        self.temperature_unit = unit;
    }

    /// Enables or disables dirty tracking
    pub fn set_fast_refresh(&mut self, fast_refresh: bool) {
        self.fast_refresh = fast_refresh;
    }

    /// Declares the fitted sensor chip
    pub fn set_sensor(&mut self, sensor: SensorKind) {
        self.sensor = sensor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use embedded_graphics::prelude::RgbColor;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cell_size(), 9);
        assert_eq!(config.cell_spacing(), 1);
        assert_eq!(config.rotation(), Rotation::Landscape);
        assert_eq!(config.style(), DisplayStyle::RealisticLed);
        assert_eq!(config.colors().on_color(), Color::RED);
        assert_eq!(config.colors().surround_color(), Color::RED);
        assert!(!config.use_24_hour());
        assert!(!config.leading_zero());
        assert_eq!(config.date_format(), DateFormat::DayMonthYear);
        assert_eq!(config.mode_interval(), Duration::secs(5));
        assert_eq!(config.temperature_unit(), TemperatureUnit::Celsius);
        assert!(config.fast_refresh());
        assert_eq!(config.sensor(), SensorKind::Htu21d);
    }

    #[test]
    fn test_cell_size_range() {
        let mut config = Config::default();
        assert!(config.set_cell_size(4));
        assert!(config.set_cell_size(12));
        assert!(!config.set_cell_size(13));
        assert!(!config.set_cell_size(3));
        assert_eq!(config.cell_size(), 12);
    }

    #[test]
    fn test_cell_spacing_range() {
        let mut config = Config::default();
        assert!(config.set_cell_spacing(0));
        assert!(config.set_cell_spacing(3));
        assert!(!config.set_cell_spacing(4));
        assert_eq!(config.cell_spacing(), 3);
    }

    #[test]
    fn test_mode_interval_range() {
        let mut config = Config::default();
        assert!(!config.set_mode_interval_secs(0));
        assert!(!config.set_mode_interval_secs(61));
        assert_eq!(config.mode_interval_secs(), 5);
        assert!(config.set_mode_interval_secs(60));
        assert_eq!(config.mode_interval(), Duration::secs(60));
    }

    #[test]
    fn test_indexed_setters() {
        let mut config = Config::default();
        assert!(config.set_date_format_index(2));
        assert_eq!(config.date_format(), DateFormat::Iso);
        assert!(!config.set_date_format_index(5));
        assert_eq!(config.date_format(), DateFormat::Iso);

        assert!(config.set_style_index(0));
        assert_eq!(config.style(), DisplayStyle::Block);
        assert!(!config.set_style_index(7));

        assert!(config.set_rotation_turns(3));
        assert_eq!(config.rotation(), Rotation::LandscapeFlipped);
        assert!(!config.set_rotation_turns(2));
        assert_eq!(config.rotation(), Rotation::LandscapeFlipped);
    }

    #[test]
    fn test_layout_stays_valid() {
        let mut config = Config::default();
        for value in 0..=20 {
            config.set_cell_size(value);
            config.set_cell_spacing(value);
            assert!(config.layout().is_valid());
        }
    }
}
