/// Smallest supported astronomical year (inclusive)
pub const MIN_YEAR: i64 = -999_999_999;
/// Largest supported astronomical year (inclusive)
pub const MAX_YEAR: i64 = 999_999_999;
/// Largest Julian Day magnitude accepted for conversion, a little past the year range
pub const MAX_JDN_DAYS: u64 = 400_000_000_000;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for June
pub const JUNE: u8 = 6;
/// Month number for September
pub const SEPTEMBER: u8 = 9;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Length of a common year in days
pub const DAYS_IN_STANDARD_YEAR: u16 = 365;
/// Length of a leap year in days
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
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

/// Days elapsed before the first of each month in a common year (January is 0)
pub const CUMULATIVE_DAYS: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const MINUTES_PER_HOUR: u64 = 60;
pub const HOURS_PER_DAY: u64 = 24;
pub const NANOS_PER_MINUTE: u64 = NANOS_PER_SECOND * SECONDS_PER_MINUTE;
pub const NANOS_PER_HOUR: u64 = NANOS_PER_MINUTE * MINUTES_PER_HOUR;
/// Length of an ordinary day
pub const NANOS_PER_DAY: u64 = NANOS_PER_HOUR * HOURS_PER_DAY;
/// Length of a day carrying an inserted leap second
pub const NANOS_PER_LEAP_SECOND_DAY: u64 = NANOS_PER_DAY + NANOS_PER_SECOND;
/// Julian days start at noon
pub const NANOS_PER_HALF_DAY: u64 = NANOS_PER_HOUR * 12;
/// Denominator for the afternoon of a leap-second day. Its 43 201 seconds fill exactly the
/// first half of the Julian day, ahead of the next civil date's midnight.
pub const NANOS_PER_LEAP_SECOND_AFTERNOON_SCALE: u64 = 2 * (NANOS_PER_HALF_DAY + NANOS_PER_SECOND);

pub const MAX_HOUR: u8 = 23;
pub const MAX_MINUTE: u8 = 59;
pub const MAX_SECOND: u8 = 59;
/// The only second value reserved for an inserted leap second
pub const LEAP_SECOND: u8 = 60;
pub const MAX_NANOSECOND: u32 = 999_999_999;

/// (month, day) pairs whose final minute may carry a leap second
pub const LEAP_SECOND_DATES: [(u8, u8); 4] = [(MARCH, 31), (JUNE, 30), (SEPTEMBER, 30), (DECEMBER, 31)];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;
/// Revised Julian century years are leap only at these remainders of this cycle
pub(crate) const REVISED_JULIAN_CYCLE: i64 = 900;
pub(crate) const REVISED_JULIAN_LEAP_CENTURIES: [i64; 2] = [200, 600];
/// Goucher-Parker drops the leap day every 128 years...
pub(crate) const GOUCHER_PARKER_OMISSION_CYCLE: i64 = 128;
/// ...and restores one every 454545 years
pub(crate) const GOUCHER_PARKER_RESTORATION_CYCLE: i64 = 454_545;

/// Upper bound on whole-year steps when folding the intercalary correction back into a date
pub(crate) const MAX_NORMALIZATION_STEPS: u32 = 64;
