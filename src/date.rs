use crate::civil::day_of_year;
use crate::iso_week::{IsoWeek, iso_week_number};
use crate::types::{self, Day, Month};
use crate::weekday::{Weekday, weekday};
use crate::DateError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A Gregorian calendar date whose day is known to exist in its month.
///
/// The free functions of this crate accept any `(month, day, year)` and roll
/// overflowing days over; `CalendarDate` is the checked entry point for
/// callers that want bad input rejected instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDate")]
pub struct CalendarDate {
    year:  i32,
    month: Month,
    day:   Day,
}

/// Unvalidated shape used while deserializing.
#[derive(Deserialize)]
struct RawDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl TryFrom<RawDate> for CalendarDate {
    type Error = DateError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::new(raw.month, raw.day, raw.year)
    }
}

impl CalendarDate {
    /// Creates a date, checking the month and that the day exists in it.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a month outside `1..=12` and
    /// `DateError::InvalidDay` for a day that does not exist in that month.
    pub fn new(month: u8, day: u8, year: i32) -> Result<Self, DateError> {
        let validated = Month::new(month).and_then(|m| Day::new(day, year, month).map(|d| (m, d)));

        match validated {
            Ok((month, day)) => Ok(Self { year, month, day }),
            Err(err) => {
                debug!(month, day, year, %err, "rejected calendar date");
                Err(err)
            }
        }
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Short English name of the month
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub const fn is_leap_year(&self) -> bool {
        types::is_leap_year(self.year)
    }

    pub const fn weekday(&self) -> Weekday {
        weekday(self.month.get(), self.day.get(), self.year)
    }

    /// ISO-8601 week and week-numbering year
    pub fn iso_week(&self) -> IsoWeek {
        iso_week_number(self.month.get(), self.day.get(), self.year)
    }

    /// 0-based ordinal day within the year
    pub const fn day_of_year(&self) -> u16 {
        day_of_year(self.month.get(), self.day.get(), self.year)
    }

    /// Converts to `(year, month, day)`
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(month, day, year)
    }
}

impl From<CalendarDate> for (i32, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        date.to_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let date = CalendarDate::new(2, 29, 2024).unwrap();
        assert_eq!(date.to_tuple(), (2024, 2, 29));
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
        assert_eq!(date.month_name(), "Feb");
        assert!(date.is_leap_year());
    }

    #[test]
    fn test_new_invalid_month() {
        assert_eq!(CalendarDate::new(0, 1, 2024), Err(DateError::InvalidMonth(0)));
        assert_eq!(CalendarDate::new(13, 1, 2024), Err(DateError::InvalidMonth(13)));
    }

    #[test]
    fn test_new_invalid_day() {
        assert_eq!(
            CalendarDate::new(4, 31, 2024),
            Err(DateError::InvalidDay {
                month: 4,
                day: 31,
                year: 2024
            })
        );
        assert!(CalendarDate::new(2, 29, 2023).is_err());
        assert!(CalendarDate::new(2, 29, 1900).is_err());
        assert!(CalendarDate::new(1, 0, 2024).is_err());
    }

    #[test]
    fn test_weekday_and_iso_week() {
        let date = CalendarDate::new(1, 1, 2021).unwrap();
        assert_eq!(date.weekday(), Weekday::Friday);
        let iso = date.iso_week();
        assert_eq!((iso.year(), iso.week()), (2020, 53));

        let date = CalendarDate::new(7, 4, 1776).unwrap();
        assert_eq!(date.weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(CalendarDate::new(1, 1, 2023).unwrap().day_of_year(), 0);
        assert_eq!(CalendarDate::new(12, 31, 2024).unwrap().day_of_year(), 365);
    }

    #[test]
    fn test_ordering() {
        let a = CalendarDate::new(12, 31, 2023).unwrap();
        let b = CalendarDate::new(1, 1, 2024).unwrap();
        let c = CalendarDate::new(2, 1, 2024).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_tuple_conversions() {
        let date: CalendarDate = (2024, 12, 25).try_into().unwrap();
        assert_eq!(date.weekday(), Weekday::Wednesday);
        let tuple: (i32, u8, u8) = date.into();
        assert_eq!(tuple, (2024, 12, 25));

        let result: Result<CalendarDate, _> = (2023, 2, 29).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_serde() {
        let date = CalendarDate::new(6, 15, 2023).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":2023,"month":6,"day":15}"#);

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_serde_rejects_invalid_date() {
        let result = serde_json::from_str::<CalendarDate>(r#"{"year":2023,"month":2,"day":29}"#);
        assert!(result.is_err());
        let result = serde_json::from_str::<CalendarDate>(r#"{"year":2023,"month":13,"day":1}"#);
        assert!(result.is_err());
    }
}
