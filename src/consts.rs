/// Length of every label in `WEEKDAY_NAMES` and `MONTH_NAMES`
pub const NAMES_LENGTH: usize = 3;

/// Short weekday names, index 0 is Sunday
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Short month names, index 0 is January
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Days in each month of a common year (index 0 is January)
/// February shows 28 days, leap years are handled by `days_in_month`
pub const MONTH_DAYS: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Last day of the longest months
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;
/// Month number for March, the first month Zeller's congruence keeps in place
pub const MARCH: u8 = 3;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_PER_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_PER_LEAP_YEAR: u16 = 366;
/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// ISO-8601 weekday number of Thursday, the day that decides week membership
pub const ISO_THURSDAY: u8 = 4;
/// January 4th always falls in ISO week 1
pub const ISO_WEEK_ONE_ANCHOR_DAY: u8 = 4;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Milliseconds in one hour
pub const MILLIS_PER_HOUR: u32 = 60 * 60 * 1000;
/// Milliseconds in one minute
pub const MILLIS_PER_MINUTE: u32 = 60 * 1000;
/// Milliseconds in one second
pub const MILLIS_PER_SECOND: u32 = 1000;
/// Milliseconds counted by one step of `TimeInfo::centiseconds`
pub const MILLIS_PER_CENTISECONDS_STEP: u32 = 100;
