use crate::civil::{civil_from_days, days_from_civil, weekday_from_days};
use crate::consts::{DAYS_PER_WEEK, DECEMBER, ISO_THURSDAY, ISO_WEEK_ONE_ANCHOR_DAY, JANUARY};
use crate::prelude::*;
use crate::weekday::weekday;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// An ISO-8601 week: the week-numbering year and the week within it (1..=53).
///
/// Near year boundaries the ISO year differs from the calendar year: January
/// 1st 2021 is in week 53 of 2020, December 31st 2018 in week 1 of 2019.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Into,
)]
pub struct IsoWeek {
    year: i32,
    week: u8,
}

impl IsoWeek {
    /// The ISO week-numbering year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The week number, 1..=53
    #[inline]
    pub const fn week(&self) -> u8 {
        self.week
    }
}

/// Day number of the Thursday in the ISO week containing the given day number.
fn thursday_of_week(days: i64) -> i64 {
    // Sunday = 0 becomes 7, Monday stays 1.
    let iso_weekday = (i64::from(weekday_from_days(days)) + 6) % 7 + 1;
    days + i64::from(ISO_THURSDAY) - iso_weekday
}

/// Day number of the Thursday of ISO week 1 of `iso_year`.
fn week_one_thursday(iso_year: i32) -> i64 {
    thursday_of_week(days_from_civil(
        iso_year,
        JANUARY,
        i32::from(ISO_WEEK_ONE_ANCHOR_DAY),
    ))
}

/// ISO-8601 week number and week-numbering year of a Gregorian date.
///
/// Days past the end of the month are rolled over before the week is
/// computed, so `iso_week_number(4, 31, 2023)` is the week of May 1st.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn iso_week_number(month: u8, day: u8, year: i32) -> IsoWeek {
    let iso_weekday = weekday(month, day, year).iso_number();
    let thursday = days_from_civil(
        year,
        month,
        i32::from(day) + i32::from(ISO_THURSDAY) - i32::from(iso_weekday),
    );

    // The Thursday's calendar year is the ISO year, and that Thursday is never
    // before its year's week-1 Thursday, so no boundary correction is needed.
    let (iso_year, _, _) = civil_from_days(thursday);
    let week = (thursday - week_one_thursday(iso_year)).div_euclid(i64::from(DAYS_PER_WEEK)) + 1;

    if iso_year != year {
        trace!(month, day, year, iso_year, week, "date falls in adjacent ISO year");
    }

    // `week` is in 1..=53 here.
    IsoWeek {
        year: iso_year,
        week: week as u8,
    }
}

/// Number of ISO weeks in `iso_year`: 52, or 53 for long years.
///
/// December 28th always falls in the last ISO week of its year.
pub fn iso_weeks_in_year(iso_year: i32) -> u8 {
    iso_week_number(DECEMBER, 28, iso_year).week
}
