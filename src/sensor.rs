//! Environment sensor readings.
//!
//! Raw samples come from whatever driver the host uses. They are rounded to
//! whole units and only accepted inside a plausible range, so a single bad
//! I2C read never reaches the display.

use core::fmt::Write;

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::clock::{TemperatureUnit, Text};

/// Accepted temperature range in °C
pub const TEMPERATURE_RANGE: core::ops::RangeInclusive<f32> = -50.0..=100.0;
/// Accepted relative humidity range in %
pub const HUMIDITY_RANGE: core::ops::RangeInclusive<f32> = 0.0..=100.0;
/// Accepted pressure range in hPa
pub const PRESSURE_RANGE: core::ops::RangeInclusive<f32> = 800.0..=1200.0;

/// Text shown on the sensor line when no sensor is present
pub const NO_SENSOR_TEXT: &str = "NO SENSOR";

/// Sensor chip fitted to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum SensorKind {
    /// No sensor
    None,
    /// Bosch BME280, temperature, humidity and pressure
    Bme280,
    /// Sensirion SHT3x, temperature and humidity
    Sht3x,
    /// TE HTU21D, temperature and humidity
    #[default]
    Htu21d,
}

impl SensorKind {
    /// Chip name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Bme280 => "BME280",
            Self::Sht3x => "SHT3X",
            Self::Htu21d => "HTU21D",
        }
    }

    /// Whether the chip measures pressure
    #[must_use]
    pub const fn has_pressure(self) -> bool {
        matches!(self, Self::Bme280)
    }
}

/// One raw reading. `NaN` marks a failed measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct SensorSample {
    /// Temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
    /// Pressure in hPa, if the chip has one
    pub pressure: Option<f32>,
}

impl SensorSample {
    /// Temperature and humidity only
    #[must_use]
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure: None,
        }
    }

    /// Adds a pressure value
    #[must_use]
    pub const fn with_pressure(mut self, pressure: f32) -> Self {
        self.pressure = Some(pressure);
        self
    }
}

/// Rounds `value` if it is a number inside `range`.
fn accept(value: f32, range: &core::ops::RangeInclusive<f32>) -> Option<i32> {
    if value.is_nan() || !range.contains(&value) {
        return None;
    }
    Some(libm::roundf(value) as i32)
}

/// Last accepted sensor values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct SensorState {
    kind: SensorKind,
    available: bool,
    temperature: i32,
    humidity: i32,
    pressure: Option<i32>,
}

impl SensorState {
    /// State for a fitted chip that has not reported yet.
    #[must_use]
    pub const fn new(kind: SensorKind) -> Self {
        Self {
            kind,
            available: false,
            temperature: 0,
            humidity: 0,
            pressure: None,
        }
    }

    /// Fitted chip
    #[must_use]
    pub const fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Whether a sensor is present and delivered at least one valid sample
    #[must_use]
    pub const fn available(&self) -> bool {
        self.available
    }

    /// Last accepted temperature in whole °C
    #[must_use]
    pub const fn temperature(&self) -> i32 {
        self.temperature
    }

    /// Last accepted humidity in whole %
    #[must_use]
    pub const fn humidity(&self) -> i32 {
        self.humidity
    }

    /// Last accepted pressure in whole hPa
    #[must_use]
    pub const fn pressure(&self) -> Option<i32> {
        self.pressure
    }

    /// Marks the sensor as missing; the display falls back to
    /// [`NO_SENSOR_TEXT`].
    pub fn set_unavailable(&mut self) {
        self.available = false;
    }

    /// Applies a raw sample.
    ///
    /// Each value is checked on its own: an implausible humidity does not
    /// discard a good temperature. The sensor becomes available once both
    /// temperature and humidity have been accepted at least once. Returns
    /// `true` if a shown value changed.
    pub fn update(&mut self, sample: &SensorSample) -> bool {
        if self.kind == SensorKind::None {
            return false;
        }
        let before = *self;

        let temperature = accept(sample.temperature, &TEMPERATURE_RANGE);
        let humidity = accept(sample.humidity, &HUMIDITY_RANGE);
        if let Some(t) = temperature {
            self.temperature = t;
        }
        if let Some(h) = humidity {
            self.humidity = h;
        }
        if temperature.is_none() || humidity.is_none() {
            warn!("sensor sample out of range, keeping previous values");
        }
        if temperature.is_some() && humidity.is_some() {
            self.available = true;
        }

        if self.kind.has_pressure() {
            if let Some(p) = sample.pressure.and_then(|p| accept(p, &PRESSURE_RANGE)) {
                self.pressure = Some(p);
            }
        }

        before != *self
    }

    /// Text for the sensor line, e.g. `"T23C H45%"` or `"NO SENSOR"`.
    #[must_use]
    pub fn line(&self, unit: TemperatureUnit) -> Text {
        let mut text = Text::new();
        if self.available {
            // At most "T-58F H100%"
            let _ = write!(
                text,
                "T{}{} H{}%",
                unit.convert(self.temperature),
                unit.symbol(),
                self.humidity
            );
        } else {
            let _ = text.push_str(NO_SENSOR_TEXT);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_kinds() {
        assert_eq!(SensorKind::default(), SensorKind::Htu21d);
        assert!(SensorKind::Bme280.has_pressure());
        assert!(!SensorKind::Sht3x.has_pressure());
        assert_eq!(SensorKind::Sht3x.label(), "SHT3X");
    }

    #[test]
    fn test_rounding() {
        let mut state = SensorState::new(SensorKind::Htu21d);
        assert!(!state.available());
        assert!(state.update(&SensorSample::new(22.6, 44.5)));
        assert!(state.available());
        assert_eq!(state.temperature(), 23);
        assert_eq!(state.humidity(), 45);

        state.update(&SensorSample::new(-3.5, 0.2));
        assert_eq!(state.temperature(), -4);
        assert_eq!(state.humidity(), 0);
    }

    #[test]
    fn test_implausible_values_keep_previous() {
        let mut state = SensorState::new(SensorKind::Sht3x);
        state.update(&SensorSample::new(21.0, 40.0));

        assert!(!state.update(&SensorSample::new(f32::NAN, 140.0)));
        assert_eq!(state.temperature(), 21);
        assert_eq!(state.humidity(), 40);

        // Each value is judged on its own
        assert!(state.update(&SensorSample::new(25.0, -1.0)));
        assert_eq!(state.temperature(), 25);
        assert_eq!(state.humidity(), 40);

        // Range ends are inclusive
        state.update(&SensorSample::new(-50.0, 100.0));
        assert_eq!(state.temperature(), -50);
        assert_eq!(state.humidity(), 100);
        state.update(&SensorSample::new(100.1, 50.0));
        assert_eq!(state.temperature(), -50);
    }

    #[test]
    fn test_first_sample_must_be_complete() {
        let mut state = SensorState::new(SensorKind::Htu21d);
        state.update(&SensorSample::new(20.0, f32::NAN));
        assert!(!state.available());
        assert_eq!(state.line(TemperatureUnit::Celsius), NO_SENSOR_TEXT);
    }

    #[test]
    fn test_pressure() {
        let mut bme = SensorState::new(SensorKind::Bme280);
        bme.update(&SensorSample::new(20.0, 50.0).with_pressure(1013.4));
        assert_eq!(bme.pressure(), Some(1013));
        bme.update(&SensorSample::new(20.0, 50.0).with_pressure(500.0));
        assert_eq!(bme.pressure(), Some(1013));

        // Chips without a barometer ignore the value
        let mut htu = SensorState::new(SensorKind::Htu21d);
        htu.update(&SensorSample::new(20.0, 50.0).with_pressure(1000.0));
        assert_eq!(htu.pressure(), None);
    }

    #[test]
    fn test_no_sensor_ignores_samples() {
        let mut state = SensorState::new(SensorKind::None);
        assert!(!state.update(&SensorSample::new(20.0, 50.0)));
        assert!(!state.available());
    }

    #[test]
    fn test_sensor_line() {
        let mut state = SensorState::new(SensorKind::Htu21d);
        state.update(&SensorSample::new(23.0, 45.0));
        assert_eq!(state.line(TemperatureUnit::Celsius), "T23C H45%");
        assert_eq!(state.line(TemperatureUnit::Fahrenheit), "T73F H45%");

        state.set_unavailable();
        assert_eq!(state.line(TemperatureUnit::Celsius), "NO SENSOR");
    }
}
