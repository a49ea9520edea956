//! Day-count arithmetic on the proleptic Gregorian calendar.
//!
//! Dates are mapped to a running day number (0 is 1970-01-01) so that
//! adding or subtracting days never has to reason about month lengths.
//! Out-of-range days roll over into neighbouring months and years.

use crate::consts::{JANUARY, MIN_DAY};

/// Days in one 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;
/// Day number of 0000-03-01, the start of era 0 when years begin in March.
const ERA_EPOCH_OFFSET: i64 = 719_468;
/// 1970-01-01 was a Thursday (Sunday = 0).
const EPOCH_WEEKDAY: i64 = 4;

/// Returns the day number of `day` in `month` of `year`.
///
/// `day` may be zero, negative or past the end of the month; the excess is
/// carried into the neighbouring months. A month outside `1..=12` yields an
/// arbitrary day number rather than a panic.
#[allow(clippy::cast_lossless)]
pub const fn days_from_civil(year: i32, month: u8, day: i32) -> i64 {
    // Shift the year to start in March so the leap day is the last day.
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if month > 2 { month as i64 - 3 } else { month as i64 + 9 };
    let doy = (153 * mp + 2) / 5;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

    era * DAYS_PER_ERA + doe - ERA_EPOCH_OFFSET + (day as i64 - 1)
}

/// Converts a day number back into `(year, month, day)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + ERA_EPOCH_OFFSET;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / (DAYS_PER_ERA - 1)) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    // Both values are small and positive by construction.
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };

    (year as i32, month, day)
}

/// Weekday of a day number, Sunday = 0 .. Saturday = 6.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn weekday_from_days(days: i64) -> u8 {
    (days + EPOCH_WEEKDAY).rem_euclid(7) as u8
}

/// Rolls an out-of-range `day` over into the correct month and year.
///
/// Returns `(year, month, day)` with `day` valid for the resulting month.
/// `normalize(4, 31, 2024)` is `(2024, 5, 1)` and `normalize(1, 0, 2024)` is
/// `(2023, 12, 31)`.
pub const fn normalize(month: u8, day: i32, year: i32) -> (i32, u8, u8) {
    civil_from_days(days_from_civil(year, month, day))
}

/// 0-based ordinal day of the date within its calendar year (January 1 is 0).
///
/// The date is normalized first; the ordinal is counted in the year the
/// normalized date lands in.
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub const fn day_of_year(month: u8, day: u8, year: i32) -> u16 {
    let days = days_from_civil(year, month, day as i32);
    let (year, _, _) = civil_from_days(days);
    (days - days_from_civil(year, JANUARY, MIN_DAY as i32)) as u16
}
