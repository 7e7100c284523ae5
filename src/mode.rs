//! Clock faces and the schedule that rotates between them.
//!
//! Three faces share the matrix:
//!
//! | Face | Module row 0 | Module row 1 |
//! |---|---|---|
//! | [`DisplayMode::TimeAndSensor`] | `H:MM` and `AM`/`PM` in 12-hour mode | `T23C H45%` or `NO SENSOR` |
//! | [`DisplayMode::LargeTime`] | `H:MM` in 16-row digits, small seconds | (digits continue) |
//! | [`DisplayMode::TimeAndDate`] | `H:MM` with small seconds | date |
//!
//! Every face starts from a cleared buffer. The colon blinks at 1 Hz and
//! keeps its column reserved while hidden, so the minutes never shift.
//! Anything past column 31 is cut off.

#[cfg(feature = "defmt")]
use defmt::Format;

use core::fmt::Write;

use crate::clock::{format_hour, format_two_digits, ClockTime, Text};
use crate::config::Config;
use crate::font::BitmapFont;
use crate::fonts::{DIGITS_3X5, DIGITS_5X16, DIGITS_5X8, FONT_3X7};
use crate::matrix::MatrixBuffer;
use crate::sensor::SensorState;
use crate::{Duration, Instant};

/// First column of the date on the time-and-date face
pub const DATE_X: i32 = 2;

/// The clock faces, in rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum DisplayMode {
    /// Small time with the sensor line below
    #[default]
    TimeAndSensor,
    /// Large two-row time with small seconds
    LargeTime,
    /// Time with seconds and the date below
    TimeAndDate,
}

impl DisplayMode {
    /// Face shown after this one
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::TimeAndSensor => Self::LargeTime,
            Self::LargeTime => Self::TimeAndDate,
            Self::TimeAndDate => Self::TimeAndSensor,
        }
    }

    /// Face number, `0..=2`
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Parses a face number
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::TimeAndSensor),
            1 => Some(Self::LargeTime),
            2 => Some(Self::TimeAndDate),
            _ => None,
        }
    }
}

/// Which face is showing and when it was switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeState {
    current: DisplayMode,
    last_switch: Option<Instant>,
    interval: Duration,
}

impl ModeState {
    /// Starts on the first face; the interval begins at the first tick.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            current: DisplayMode::TimeAndSensor,
            last_switch: None,
            interval,
        }
    }

    /// Face currently showing
    #[must_use]
    pub const fn current(&self) -> DisplayMode {
        self.current
    }

    /// Time each face stays on screen
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the interval; the running period is not restarted.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Jumps to `mode` and restarts its period at `now`.
    pub fn select(&mut self, mode: DisplayMode, now: Instant) {
        self.current = mode;
        self.last_switch = Some(now);
    }

    /// Advances to the next face once the interval has elapsed.
    ///
    /// Returns `true` if the face changed. A timestamp earlier than the last
    /// switch restarts the period instead of switching.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_switch else {
            self.last_switch = Some(now);
            return false;
        };
        match now.checked_duration_since(last) {
            Some(elapsed) if elapsed >= self.interval => {
                self.current = self.current.next();
                self.last_switch = Some(now);
                info!("switched to mode {=u8}", self.current.index());
                true
            }
            Some(_) => false,
            None => {
                self.last_switch = Some(now);
                false
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl Format for ModeState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ModeState<{}, interval: {=u64} ms>",
            self.current,
            self.interval.to_millis()
        );
    }
}

/// Text of one composed face, one string per module row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModeText {
    /// Module row 0
    pub top: Text,
    /// Module row 1
    pub bottom: Text,
}

/// Draws the hour/minute colon, or reserves its columns when hidden.
///
/// One blank column precedes and follows the colon.
fn draw_colon(buffer: &mut MatrixBuffer, x: i32, module_row: usize, font: &BitmapFont, visible: bool) -> i32 {
    let x = x + 1;
    let width = if visible {
        buffer.blit_glyph(x, module_row, ':', font)
    } else {
        font.char_width(':')
    };
    x + i32::from(width) + 1
}

/// Draws `H:MM` starting at `x`; returns the cursor after the minutes.
fn draw_hours_minutes(
    buffer: &mut MatrixBuffer,
    x: i32,
    time: &ClockTime,
    config: &Config,
    font: &BitmapFont,
) -> i32 {
    let hour = format_hour(time.display_hour(config.use_24_hour()), config.leading_zero());
    let x = buffer.draw_text(x, 0, &hour, font);
    let x = draw_colon(buffer, x, 0, font, time.colon_visible());
    buffer.draw_text(x, 0, &format_two_digits(time.minute), font)
}

/// Time on module row 0, sensor line on module row 1.
pub fn compose_time_and_sensor(buffer: &mut MatrixBuffer, time: &ClockTime, config: &Config, sensor: &SensorState) {
    buffer.clear();

    let x = draw_hours_minutes(buffer, 0, time, config, &FONT_3X7);
    if !config.use_24_hour() {
        buffer.draw_text(x + 1, 0, time.meridiem(), &FONT_3X7);
    }

    buffer.draw_text(0, 1, &sensor.line(config.temperature_unit()), &FONT_3X7);
}

/// Sixteen-row digits across both module rows, small seconds on row 0.
pub fn compose_large_time(buffer: &mut MatrixBuffer, time: &ClockTime, config: &Config) {
    buffer.clear();

    let hour = time.display_hour(config.use_24_hour());
    let start = if hour > 9 || config.leading_zero() { 0 } else { 3 };
    let x = draw_hours_minutes(buffer, start, time, config, &DIGITS_5X16);
    buffer.draw_text(x + 1, 0, &format_two_digits(time.second), &FONT_3X7);
}

/// Time with seconds on module row 0, date on module row 1.
pub fn compose_time_and_date(buffer: &mut MatrixBuffer, time: &ClockTime, config: &Config) {
    buffer.clear();

    let x = draw_hours_minutes(buffer, 0, time, config, &DIGITS_5X8);
    buffer.draw_text(x + 1, 0, &format_two_digits(time.second), &DIGITS_3X5);

    buffer.draw_text(DATE_X, 1, &config.date_format().format(time), &FONT_3X7);
}

/// Composes `mode` into `buffer`.
pub fn compose(mode: DisplayMode, buffer: &mut MatrixBuffer, time: &ClockTime, config: &Config, sensor: &SensorState) {
    match mode {
        DisplayMode::TimeAndSensor => compose_time_and_sensor(buffer, time, config, sensor),
        DisplayMode::LargeTime => compose_large_time(buffer, time, config),
        DisplayMode::TimeAndDate => compose_time_and_date(buffer, time, config),
    }
}

/// Plain-text version of what [`compose`] draws, with the colon always
/// shown.
#[must_use]
pub fn mode_text(mode: DisplayMode, time: &ClockTime, config: &Config, sensor: &SensorState) -> ModeText {
    let hour = format_hour(time.display_hour(config.use_24_hour()), config.leading_zero());
    let minute = format_two_digits(time.minute);
    let second = format_two_digits(time.second);

    let mut text = ModeText::default();
    // Every line fits the text capacity
    let _ = match mode {
        DisplayMode::TimeAndSensor => {
            text.bottom = sensor.line(config.temperature_unit());
            if config.use_24_hour() {
                write!(text.top, "{hour}:{minute}")
            } else {
                write!(text.top, "{hour}:{minute} {}", time.meridiem())
            }
        }
        DisplayMode::LargeTime => write!(text.top, "{hour}:{minute} {second}"),
        DisplayMode::TimeAndDate => {
            text.bottom = config.date_format().format(time);
            write!(text.top, "{hour}:{minute}:{second}")
        }
    };
    text
}
