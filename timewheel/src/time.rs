//! Wall-clock time-of-day values and clockwise spans between them.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors produced when constructing or parsing a [`TimeOfDay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The input string is not of the form `HH:MM`.
    #[error("malformed time {0:?}, expected HH:MM")]
    Malformed(String),
    /// The hour component is outside `0..=23`.
    #[error("hour {0} out of range 0..=23")]
    HourOutOfRange(u8),
    /// The minute component is outside `0..=59`.
    #[error("minute {0} out of range 0..=59")]
    MinuteOutOfRange(u8),
}

/// A wall-clock time on a 24-hour day.
///
/// Values constructed from ring angles are snapped to 5-minute ticks by the
/// conversion itself; `TimeOfDay` stores any valid minute so configured times
/// do not lose precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Minutes in a full day; spans wrap at this value.
    pub const MINUTES_PER_DAY: u32 = 24 * 60;

    /// Midnight, the top of the ring.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Creates a time-of-day, validating both components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Builds a time from minutes past midnight, wrapping at 24 hours.
    pub fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % Self::MINUTES_PER_DAY;
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    /// The hour component, `0..=23`.
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// The minute component, `0..=59`.
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes past midnight, `0..1440`.
    pub const fn total_minutes(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Clockwise minutes from `self` to `end`, wrapping through midnight.
    ///
    /// Always in `[0, 1440)`; a span from a time to itself is zero.
    pub fn span_to(self, end: TimeOfDay) -> u32 {
        let span = end.total_minutes() as i32 - self.total_minutes() as i32;
        span.rem_euclid(Self::MINUTES_PER_DAY as i32) as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Parses the strict `HH:MM` form, both components zero-padded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::Malformed(s.to_owned());
        let (hour, minute) = s.split_once(':').ok_or_else(malformed)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(malformed());
        }
        // u8::parse accepts a sign prefix, the HH:MM contract does not.
        if !s.bytes().all(|b| b.is_ascii_digit() || b == b':') {
            return Err(malformed());
        }
        let hour: u8 = hour.parse().map_err(|_| malformed())?;
        let minute: u8 = minute.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}
