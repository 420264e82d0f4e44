//! Time of day and its conversion to and from a noon-anchored day fraction.
//!
//! Julian days begin at noon, so a civil time before noon belongs to the Julian day that started
//! on the previous civil date. [`to_fraction`] reports that as a boundary adjustment of -1 and
//! [`from_fraction`] undoes it with +1.
//!
//! Fractions are exact: a [`DayFraction`] is a nanosecond count over the length of the day, so
//! any nanosecond time survives a round trip unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    LEAP_SECOND, MAX_HOUR, MAX_MINUTE, MAX_NANOSECOND, MAX_SECOND, NANOS_PER_DAY, NANOS_PER_HALF_DAY,
    NANOS_PER_HOUR, NANOS_PER_LEAP_SECOND_AFTERNOON_SCALE, NANOS_PER_LEAP_SECOND_DAY, NANOS_PER_MINUTE,
    NANOS_PER_SECOND,
};
use crate::DateError;

/// Wall-clock time within a civil day, with nanosecond resolution.
///
/// `has_leap_second` marks the whole day as 86 401 seconds long; only then may `second` be 60.
/// Whether the day is actually allowed a leap second is checked together with the date by
/// [`is_valid_date_time_components`](crate::is_valid_date_time_components).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeOfDay", into = "RawTimeOfDay")]
pub struct TimeOfDay {
    hour:            u8,
    minute:          u8,
    second:          u8,
    nanosecond:      u32,
    has_leap_second: bool,
}

impl TimeOfDay {
    /// Midnight on an ordinary day
    pub const MIDNIGHT: Self = Self {
        hour:            0,
        minute:          0,
        second:          0,
        nanosecond:      0,
        has_leap_second: false,
    };

    /// Noon on an ordinary day, the start of a Julian day
    pub const NOON: Self = Self {
        hour:            12,
        minute:          0,
        second:          0,
        nanosecond:      0,
        has_leap_second: false,
    };

    /// Creates a time on an ordinary (86 400 second) day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` if any component is out of range, including second 60.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<Self, DateError> {
        Self::with_leap_second(hour, minute, second, nanosecond, false)
    }

    /// Creates a time, optionally on a day lengthened by a leap second.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` for out-of-range components, including second 60 outside
    /// 23:59 or on an ordinary day. The date is not known here; see
    /// [`is_valid_date_time_components`](crate::is_valid_date_time_components) for the check that
    /// reports `DateError::InvalidLeapSecond` with the month and day.
    pub fn with_leap_second(
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        has_leap_second: bool,
    ) -> Result<Self, DateError> {
        let invalid = DateError::InvalidTime {
            hour,
            minute,
            second,
            nanosecond,
        };
        if hour > MAX_HOUR
            || minute > MAX_MINUTE
            || nanosecond > MAX_NANOSECOND
            || (second > MAX_SECOND && second != LEAP_SECOND)
        {
            return Err(invalid);
        }
        if second == LEAP_SECOND && !(has_leap_second && hour == MAX_HOUR && minute == MAX_MINUTE) {
            return Err(invalid);
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
            has_leap_second,
        })
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(self) -> u8 {
        self.second
    }

    #[inline]
    pub const fn nanosecond(self) -> u32 {
        self.nanosecond
    }

    #[inline]
    pub const fn has_leap_second(self) -> bool {
        self.has_leap_second
    }

    /// Whether this is the inserted second itself (23:59:60)
    #[inline]
    pub const fn is_leap_second(self) -> bool {
        self.second == LEAP_SECOND
    }

    /// Nanoseconds elapsed since midnight
    pub const fn nanos_since_midnight(self) -> u64 {
        self.hour as u64 * NANOS_PER_HOUR
            + self.minute as u64 * NANOS_PER_MINUTE
            + self.second as u64 * NANOS_PER_SECOND
            + self.nanosecond as u64
    }

    /// Length of the civil day this time belongs to
    pub const fn day_length(self) -> u64 {
        day_length(self.has_leap_second)
    }

    /// Splits nanoseconds since midnight back into clock components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidFraction` if `nanos` does not fit in the day.
    pub fn from_nanos_since_midnight(nanos: u64, has_leap_second: bool) -> Result<Self, DateError> {
        let length = day_length(has_leap_second);
        if nanos >= length {
            return Err(DateError::InvalidFraction {
                nanos,
                day_length: length,
            });
        }

        // Everything past 86 400 s is the inserted 23:59:60
        if nanos >= NANOS_PER_DAY {
            return Self::with_leap_second(
                MAX_HOUR,
                MAX_MINUTE,
                LEAP_SECOND,
                nanos_component(nanos - NANOS_PER_DAY),
                true,
            );
        }

        let hour = clock_component(nanos / NANOS_PER_HOUR);
        let minute = clock_component(nanos % NANOS_PER_HOUR / NANOS_PER_MINUTE);
        let second = clock_component(nanos % NANOS_PER_MINUTE / NANOS_PER_SECOND);
        let nanosecond = nanos_component(nanos % NANOS_PER_SECOND);
        Self::with_leap_second(hour, minute, second, nanosecond, has_leap_second)
    }
}

// Callers have already reduced the value below 60, 24 or 10^9
#[allow(clippy::cast_possible_truncation)]
const fn clock_component(value: u64) -> u8 {
    value as u8
}

#[allow(clippy::cast_possible_truncation)]
const fn nanos_component(value: u64) -> u32 {
    value as u32
}

const fn day_length(has_leap_second: bool) -> u64 {
    if has_leap_second {
        NANOS_PER_LEAP_SECOND_DAY
    } else {
        NANOS_PER_DAY
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct RawTimeOfDay {
    hour:       u8,
    minute:     u8,
    second:     u8,
    nanosecond: u32,
    #[serde(default)]
    has_leap_second: bool,
}

impl TryFrom<RawTimeOfDay> for TimeOfDay {
    type Error = DateError;

    fn try_from(raw: RawTimeOfDay) -> Result<Self, Self::Error> {
        Self::with_leap_second(raw.hour, raw.minute, raw.second, raw.nanosecond, raw.has_leap_second)
    }
}

impl From<TimeOfDay> for RawTimeOfDay {
    fn from(time: TimeOfDay) -> Self {
        Self {
            hour:            time.hour,
            minute:          time.minute,
            second:          time.second,
            nanosecond:      time.nanosecond,
            has_leap_second: time.has_leap_second,
        }
    }
}

/// Elapsed part of a Julian day, as an exact ratio `nanos / day_length`.
///
/// `day_length` is 86 400 or 86 401 seconds in nanoseconds, or
/// [`NANOS_PER_LEAP_SECOND_AFTERNOON_SCALE`] for the afternoon of a leap-second day. `nanos` is
/// below `day_length`, so the value always lies in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDayFraction", into = "RawDayFraction")]
pub struct DayFraction {
    nanos:      u64,
    day_length: u64,
}

impl DayFraction {
    /// The empty fraction on an ordinary day
    pub const ZERO: Self = Self {
        nanos:      0,
        day_length: NANOS_PER_DAY,
    };

    /// # Errors
    /// Returns `DateError::InvalidFraction` if `nanos` is not below the day length.
    pub fn new(nanos: u64, has_leap_second: bool) -> Result<Self, DateError> {
        let day_length = day_length(has_leap_second);
        if nanos >= day_length {
            return Err(DateError::InvalidFraction { nanos, day_length });
        }
        Ok(Self { nanos, day_length })
    }

    /// Creates a fraction over an explicit denominator.
    ///
    /// # Errors
    /// Returns `DateError::InvalidFraction` if `day_length` is not one of the three day scales, or
    /// `nanos` is not below it.
    pub fn with_day_length(nanos: u64, day_length: u64) -> Result<Self, DateError> {
        let known = matches!(
            day_length,
            NANOS_PER_DAY | NANOS_PER_LEAP_SECOND_DAY | NANOS_PER_LEAP_SECOND_AFTERNOON_SCALE
        );
        if !known || nanos >= day_length {
            return Err(DateError::InvalidFraction { nanos, day_length });
        }
        Ok(Self { nanos, day_length })
    }

    #[inline]
    pub const fn nanos(self) -> u64 {
        self.nanos
    }

    #[inline]
    pub const fn day_length(self) -> u64 {
        self.day_length
    }

    #[inline]
    pub const fn has_leap_second(self) -> bool {
        self.day_length != NANOS_PER_DAY
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.nanos == 0
    }

    /// `1 - self`, defined for non-zero fractions only.
    pub(crate) const fn complement(self) -> Option<Self> {
        if self.nanos == 0 {
            return None;
        }
        Some(Self {
            nanos:      self.day_length - self.nanos,
            day_length: self.day_length,
        })
    }

    /// Lossy view of the fraction
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.nanos as f64 / self.day_length as f64
    }

    /// Writes `digits` decimal places of the fraction, truncated toward zero.
    pub(crate) fn write_digits(self, f: &mut fmt::Formatter<'_>, digits: usize) -> fmt::Result {
        let mut remainder = u128::from(self.nanos);
        let denominator = u128::from(self.day_length);
        for _ in 0..digits {
            remainder *= 10;
            write!(f, "{}", remainder / denominator)?;
            remainder %= denominator;
        }
        Ok(())
    }
}

impl Default for DayFraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for DayFraction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayFraction {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Cross-multiply, the day lengths may differ
        let lhs = u128::from(self.nanos) * u128::from(other.day_length);
        let rhs = u128::from(other.nanos) * u128::from(self.day_length);
        lhs.cmp(&rhs).then(self.day_length.cmp(&other.day_length))
    }
}

#[derive(Serialize, Deserialize)]
struct RawDayFraction {
    nanos:      u64,
    #[serde(default = "ordinary_day_length")]
    day_length: u64,
}

const fn ordinary_day_length() -> u64 {
    NANOS_PER_DAY
}

impl TryFrom<RawDayFraction> for DayFraction {
    type Error = DateError;

    fn try_from(raw: RawDayFraction) -> Result<Self, Self::Error> {
        Self::with_day_length(raw.nanos, raw.day_length)
    }
}

impl From<DayFraction> for RawDayFraction {
    fn from(fraction: DayFraction) -> Self {
        Self {
            nanos:      fraction.nanos,
            day_length: fraction.day_length,
        }
    }
}

/// Converts a time of day to the fraction of its Julian day.
///
/// Afternoon times map to `[0, 1/2)` with no adjustment. On a leap-second day the afternoon runs
/// 43 201 seconds and is measured over [`NANOS_PER_LEAP_SECOND_AFTERNOON_SCALE`], so 23:59:60.x
/// still ends before the next civil midnight. Morning times belong to the Julian day that began
/// the previous noon: they map to `[day_length - 12h, day_length)` with a boundary adjustment of
/// -1 day.
pub fn to_fraction(time: TimeOfDay) -> (DayFraction, i64) {
    let since_midnight = time.nanos_since_midnight();
    let length = time.day_length();
    if since_midnight >= NANOS_PER_HALF_DAY {
        let afternoon_scale = if time.has_leap_second() {
            NANOS_PER_LEAP_SECOND_AFTERNOON_SCALE
        } else {
            NANOS_PER_DAY
        };
        (
            DayFraction {
                nanos:      since_midnight - NANOS_PER_HALF_DAY,
                day_length: afternoon_scale,
            },
            0,
        )
    } else {
        (
            DayFraction {
                nanos:      since_midnight + (length - NANOS_PER_HALF_DAY),
                day_length: length,
            },
            -1,
        )
    }
}

/// Exact inverse of [`to_fraction`]: returns the time and a boundary adjustment of +1 day when
/// the fraction falls in the morning of the following civil date.
///
/// # Errors
/// Returns `DateError::InvalidFraction` if the fraction does not describe a time of day.
pub fn from_fraction(fraction: DayFraction) -> Result<(TimeOfDay, i64), DateError> {
    let length = fraction.day_length;
    let afternoon = length - NANOS_PER_HALF_DAY;
    let has_leap_second = fraction.has_leap_second();
    if fraction.nanos >= afternoon {
        let time = TimeOfDay::from_nanos_since_midnight(fraction.nanos - afternoon, has_leap_second)?;
        Ok((time, 1))
    } else {
        let time = TimeOfDay::from_nanos_since_midnight(fraction.nanos + NANOS_PER_HALF_DAY, has_leap_second)?;
        Ok((time, 0))
    }
}
