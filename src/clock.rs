//! Wall-clock values and their text forms.
//!
//! The engine never reads a clock itself. The host passes a [`ClockTime`]
//! to every tick, typically from an RTC or an NTP-synchronized counter.

use core::fmt::Write;

#[cfg(feature = "defmt")]
use defmt::Format;
use heapless::String;

/// Capacity of the short text buffers used for composition
pub const TEXT_CAPACITY: usize = 16;

/// Short text as composed onto the matrix
pub type Text = String<TEXT_CAPACITY>;

/// Broken-down local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct ClockTime {
    /// Hour, `0..=23`
    pub hour24: u8,
    /// Minute, `0..=59`
    pub minute: u8,
    /// Second, `0..=59`
    pub second: u8,
    /// Day of month, `1..=31`
    pub day: u8,
    /// Month, `1..=12`
    pub month: u8,
    /// Full year, e.g. 2024
    pub year: u16,
}

impl ClockTime {
    /// Time of day on an unspecified date.
    #[must_use]
    pub const fn hms(hour24: u8, minute: u8, second: u8) -> Self {
        Self {
            hour24,
            minute,
            second,
            day: 1,
            month: 1,
            year: 2000,
        }
    }

    /// Replaces the date part.
    #[must_use]
    pub const fn with_date(mut self, day: u8, month: u8, year: u16) -> Self {
        self.day = day;
        self.month = month;
        self.year = year;
        self
    }

    /// Hour on a 12-hour dial, `1..=12`
    #[must_use]
    pub const fn hour12(&self) -> u8 {
        match self.hour24 % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Hour as shown, depending on the 24-hour setting
    #[must_use]
    pub const fn display_hour(&self, use_24_hour: bool) -> u8 {
        if use_24_hour {
            self.hour24
        } else {
            self.hour12()
        }
    }

    /// Afternoon on a 12-hour dial
    #[must_use]
    pub const fn is_pm(&self) -> bool {
        self.hour24 >= 12
    }

    /// `"AM"` or `"PM"`
    #[must_use]
    pub const fn meridiem(&self) -> &'static str {
        if self.is_pm() {
            "PM"
        } else {
            "AM"
        }
    }

    /// The hour/minute colon blinks at 1 Hz and is shown on even seconds.
    #[must_use]
    pub const fn colon_visible(&self) -> bool {
        self.second % 2 == 0
    }
}

/// Formats an hour, zero-padded to two digits only if `leading_zero` is set.
#[must_use]
pub fn format_hour(hour: u8, leading_zero: bool) -> Text {
    let mut text = Text::new();
    // Two digits always fit
    let _ = if leading_zero {
        write!(text, "{hour:02}")
    } else {
        write!(text, "{hour}")
    };
    text
}

/// Formats a value as two zero-padded digits.
#[must_use]
pub fn format_two_digits(value: u8) -> Text {
    let mut text = Text::new();
    let _ = write!(text, "{value:02}");
    text
}

/// Calendar date layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum DateFormat {
    /// `DD/MM/YY`
    #[default]
    DayMonthYear,
    /// `MM/DD/YY`
    MonthDayYear,
    /// `YYYY-MM-DD`
    Iso,
    /// `DD.MM.YYYY`
    DottedDayMonthYear,
    /// `MM.DD.YYYY`
    DottedMonthDayYear,
}

impl DateFormat {
    /// All formats in index order
    pub const ALL: [DateFormat; 5] = [
        DateFormat::DayMonthYear,
        DateFormat::MonthDayYear,
        DateFormat::Iso,
        DateFormat::DottedDayMonthYear,
        DateFormat::DottedMonthDayYear,
    ];

    /// Index as used by control surfaces
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Parses a format index, `0..=4`.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Pattern shown in settings menus
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::DayMonthYear => "DD/MM/YY",
            Self::MonthDayYear => "MM/DD/YY",
            Self::Iso => "YYYY-MM-DD",
            Self::DottedDayMonthYear => "DD.MM.YYYY",
            Self::DottedMonthDayYear => "MM.DD.YYYY",
        }
    }

    /// Formats the date part of `time`.
    #[must_use]
    pub fn format(self, time: &ClockTime) -> Text {
        let (d, m, y) = (time.day, time.month, time.year);
        let mut text = Text::new();
        // Longest result is ten characters
        let _ = match self {
            Self::DayMonthYear => write!(text, "{d:02}/{m:02}/{:02}", y % 100),
            Self::MonthDayYear => write!(text, "{m:02}/{d:02}/{:02}", y % 100),
            Self::Iso => write!(text, "{y:04}-{m:02}-{d:02}"),
            Self::DottedDayMonthYear => write!(text, "{d:02}.{m:02}.{y:04}"),
            Self::DottedMonthDayYear => write!(text, "{m:02}.{d:02}.{y:04}"),
        };
        text
    }
}

/// Temperature unit for the sensor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Converts a whole-degree Celsius reading, using integer math.
    #[must_use]
    pub const fn convert(self, celsius: i32) -> i32 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9 / 5 + 32,
        }
    }

    /// Unit letter
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
        }
    }
}
