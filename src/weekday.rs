use crate::consts::{DAYS_PER_WEEK, MARCH, WEEKDAY_NAMES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, numbered from Sunday = 0 to Saturday = 6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday for a Sunday-based index, `None` if `index > 6`
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < DAYS_PER_WEEK {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Sunday-based index (Sunday = 0 .. Saturday = 6)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// ISO-8601 weekday number (Monday = 1 .. Sunday = 7)
    pub const fn iso_number(self) -> u8 {
        match self {
            Self::Sunday => DAYS_PER_WEEK,
            other => other as u8,
        }
    }

    /// Short English name, taken from `WEEKDAY_NAMES`
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Day of the week of a Gregorian date using Zeller's congruence.
///
/// Returns Sunday = 0 .. Saturday = 6. Days past the end of the month give
/// the weekday of the rolled-over date. A month outside `1..=12` gives a
/// meaningless weekday, still in range.
pub const fn date_to_weekday(month: u8, day: u8, year: i32) -> u8 {
    // January and February count as months 13 and 14 of the previous year.
    let (month, year) = if month < MARCH {
        (month as i32 + 12, year - 1)
    } else {
        (month as i32, year)
    };

    let k = year.rem_euclid(100);
    let j = year.div_euclid(100);
    // Zeller numbers Saturday as 0.
    let h = (day as i32 + (13 * (month + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j)
        .rem_euclid(7);

    ((h + 6) % 7) as u8
}

/// Typed form of [`date_to_weekday`].
pub const fn weekday(month: u8, day: u8, year: i32) -> Weekday {
    Weekday::ALL[date_to_weekday(month, day, year) as usize]
}
