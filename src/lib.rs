//! Gregorian calendar and clock arithmetic.
//!
//! Day of week via Zeller's congruence, ISO-8601 week numbers with their
//! week-numbering year, the leap-year rule, and splitting millisecond
//! durations into clock fields. Everything here is a pure function over small
//! integers or a read-only table; nothing reads the system clock.
//!
//! ```
//! use calendar_math::{date_to_weekday, iso_week_number, milliseconds_to_time, WEEKDAY_NAMES};
//!
//! assert_eq!(WEEKDAY_NAMES[date_to_weekday(1, 1, 2000) as usize], "Sat");
//!
//! let iso = iso_week_number(1, 1, 2021);
//! assert_eq!((iso.year(), iso.week()), (2020, 53));
//!
//! assert_eq!(milliseconds_to_time(5_025_300).to_string(), "1:23:45.3");
//! ```

mod civil;
mod consts;
mod date;
mod iso_week;
mod prelude;
mod time;
mod types;
mod weekday;

pub use civil::{day_of_year, normalize};
pub use consts::*;
pub use date::CalendarDate;
pub use iso_week::{IsoWeek, iso_week_number, iso_weeks_in_year};
pub use time::{TimeInfo, milliseconds_to_time, time_to_milliseconds};
pub use types::{Day, Month, days_in_month, days_in_year, is_leap_year};
pub use weekday::{Weekday, date_to_weekday, weekday};

/// Error type for the validating constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day that does not exist in the given month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: i32 },
}
