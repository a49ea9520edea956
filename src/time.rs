use crate::consts::{
    MILLIS_PER_CENTISECONDS_STEP, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A millisecond duration split into clock fields.
///
/// `centiseconds` counts whole 100 ms steps, so it ranges over 0..=9.
/// `hours` is a `u8` and wraps past 255 hours.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display(fmt = "{hours}:{minutes:02}:{seconds:02}.{centiseconds}")]
pub struct TimeInfo {
    pub hours:        u8,
    pub minutes:      u8,
    pub seconds:      u8,
    pub centiseconds: u8,
}

impl TimeInfo {
    /// Splits `milliseconds` into clock fields, truncating anything below 100 ms
    pub const fn from_milliseconds(milliseconds: u32) -> Self {
        milliseconds_to_time(milliseconds)
    }

    /// Total milliseconds represented by the fields
    pub const fn to_milliseconds(self) -> u32 {
        time_to_milliseconds(self.hours, self.minutes, self.seconds, self.centiseconds)
    }
}

impl From<u32> for TimeInfo {
    fn from(milliseconds: u32) -> Self {
        milliseconds_to_time(milliseconds)
    }
}

impl From<TimeInfo> for u32 {
    fn from(time: TimeInfo) -> Self {
        time.to_milliseconds()
    }
}

/// Splits a millisecond count into hours, minutes, seconds and 100 ms steps.
///
/// Each field is truncated, never rounded. Durations of 256 hours or more
/// wrap the `hours` field modulo 256.
#[allow(clippy::cast_possible_truncation)]
pub const fn milliseconds_to_time(milliseconds: u32) -> TimeInfo {
    let hours = milliseconds / MILLIS_PER_HOUR;
    let milliseconds = milliseconds % MILLIS_PER_HOUR;
    let minutes = milliseconds / MILLIS_PER_MINUTE;
    let milliseconds = milliseconds % MILLIS_PER_MINUTE;
    let seconds = milliseconds / MILLIS_PER_SECOND;
    let centiseconds = (milliseconds % MILLIS_PER_SECOND) / MILLIS_PER_CENTISECONDS_STEP;

    TimeInfo {
        hours: hours as u8,
        minutes: minutes as u8,
        seconds: seconds as u8,
        centiseconds: centiseconds as u8,
    }
}

/// Inverse of [`milliseconds_to_time`]: total milliseconds of the given fields.
///
/// Fields are not range checked, `minutes = 90` simply adds 90 minutes. The
/// largest possible result is well inside `u32`.
#[allow(clippy::cast_lossless)]
pub const fn time_to_milliseconds(hours: u8, minutes: u8, seconds: u8, centiseconds: u8) -> u32 {
    let seconds = hours as u32 * 3600 + minutes as u32 * 60 + seconds as u32;
    seconds * MILLIS_PER_SECOND + centiseconds as u32 * MILLIS_PER_CENTISECONDS_STEP
}
