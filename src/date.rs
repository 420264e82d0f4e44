//! Calendar dates and their validation.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, CalendarBaseData};
use crate::consts::{LEAP_SECOND_DATES, MAX_YEAR, MIN_YEAR};
use crate::engine::ConversionEngine;
use crate::jdn::JulianDayNumber;
use crate::prelude::*;
use crate::time_fraction::TimeOfDay;
use crate::{ConversionError, DateError};

/// Checks that the components form a real instant in `calendar`.
///
/// The day must exist in that year's month table, and a leap-second day may only be one of the
/// four days whose last minute can carry a leap second (03-31, 06-30, 09-30, 12-31).
///
/// # Errors
/// Returns the `DateError` describing the first invalid component.
pub fn is_valid_date_time_components(
    calendar: Calendar,
    year: i64,
    month: u8,
    day: u8,
    time: TimeOfDay,
) -> Result<(), DateError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateError::InvalidYear(year));
    }
    let max_day = calendar.days_in_month(year, month)?;
    if day == 0 || day > max_day {
        return Err(DateError::InvalidDay { year, month, day });
    }
    if time.has_leap_second() && !LEAP_SECOND_DATES.contains(&(month, day)) {
        return Err(DateError::InvalidLeapSecond {
            month,
            day,
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        });
    }
    Ok(())
}

/// A validated date and time of day in one of the supported calendars.
///
/// Years use astronomical numbering: year 0 is 1 BCE and year -4712 is 4713 BCE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarDate", into = "RawCalendarDate")]
pub struct CalendarDate {
    calendar: Calendar,
    year:     i64,
    month:    u8,
    day:      u8,
    time:     TimeOfDay,
}

impl CalendarDate {
    /// Creates a date at midnight
    ///
    /// # Errors
    /// Returns `DateError` if the date does not exist in `calendar`.
    pub fn new(calendar: Calendar, year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        Self::with_time(calendar, year, month, day, TimeOfDay::MIDNIGHT)
    }

    /// Creates a date at the given time of day
    ///
    /// # Errors
    /// Returns `DateError` if the components fail [`is_valid_date_time_components`].
    pub fn with_time(calendar: Calendar, year: i64, month: u8, day: u8, time: TimeOfDay) -> Result<Self, DateError> {
        is_valid_date_time_components(calendar, year, month, day, time)?;
        Ok(Self {
            calendar,
            year,
            month,
            day,
            time,
        })
    }

    /// Same day at a different time
    ///
    /// # Errors
    /// Returns `DateError::InvalidLeapSecond` if `time` is on a leap-second day and this date
    /// cannot carry one.
    pub fn at(self, time: TimeOfDay) -> Result<Self, DateError> {
        Self::with_time(self.calendar, self.year, self.month, self.day, time)
    }

    #[inline]
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Astronomical year
    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    #[inline]
    pub const fn has_leap_second(&self) -> bool {
        self.time.has_leap_second()
    }

    pub fn is_leap_year(&self) -> bool {
        self.calendar.is_leap_year(self.year)
    }

    /// 1-based day of the year
    ///
    /// # Errors
    /// Never fails for a constructed date; kept fallible to match the month-table arithmetic.
    pub fn ordinal_day(&self) -> Result<u16, DateError> {
        self.calendar
            .ordinal_day_number(self.is_leap_year(), self.month, self.day)
    }

    /// Orders two dates of the same calendar.
    ///
    /// # Errors
    /// Returns `DateError::CalendarMismatch` when the calendars differ, since their fields are
    /// not comparable.
    pub fn compare(&self, other: &Self) -> Result<Ordering, DateError> {
        if self.calendar != other.calendar {
            return Err(DateError::CalendarMismatch {
                expected: self.calendar,
                found:    other.calendar,
            });
        }
        Ok((self.year, self.month, self.day, self.time).cmp(&(other.year, other.month, other.day, other.time)))
    }

    /// Converts this date to its Julian Day Number.
    ///
    /// # Errors
    /// Returns `ConversionError` if the calendar's configuration or the conversion fails.
    pub fn to_julian_day_number(&self) -> Result<JulianDayNumber, ConversionError> {
        let config = self.calendar.configuration()?;
        ConversionEngine::new(&config).to_julian_day_number(self)
    }

    /// Converts a Julian Day Number to a date in `calendar`.
    ///
    /// # Errors
    /// Returns `ConversionError` if the value is out of range or the conversion fails.
    pub fn from_julian_day_number(jdn: JulianDayNumber, calendar: Calendar) -> Result<Self, ConversionError> {
        let config = calendar.configuration()?;
        ConversionEngine::new(&config).to_date(jdn)
    }

    /// The same instant expressed in another calendar.
    ///
    /// A time on a leap-second day keeps its 86 401 second day length, so the target civil date
    /// must also be one that may carry a leap second.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` wrapping `DateError::InvalidLeapSecond` when a
    /// leap-second time lands on a target date that cannot carry one, and `ConversionError` if
    /// either conversion fails otherwise.
    pub fn convert_to(&self, calendar: Calendar) -> Result<Self, ConversionError> {
        if calendar == self.calendar {
            return Ok(*self);
        }
        Self::from_julian_day_number(self.to_julian_day_number()?, calendar)
    }

    /// Day of the week of this civil date.
    ///
    /// # Errors
    /// Returns `ConversionError` if the date cannot be converted.
    pub fn weekday(&self) -> Result<Weekday, ConversionError> {
        let noon = Self {
            time: TimeOfDay::NOON,
            ..*self
        };
        Ok(Weekday::from_julian_day(noon.to_julian_day_number()?.day()))
    }
}

impl PartialOrd for CalendarDate {
    /// Dates of different calendars are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{} ({})",
            self.year, self.month, self.day, self.time, self.calendar
        )
    }
}

#[derive(Serialize, Deserialize)]
struct RawCalendarDate {
    calendar: Calendar,
    year:     i64,
    month:    u8,
    day:      u8,
    #[serde(default)]
    time:     TimeOfDay,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = DateError;

    fn try_from(raw: RawCalendarDate) -> Result<Self, Self::Error> {
        Self::with_time(raw.calendar, raw.year, raw.month, raw.day, raw.time)
    }
}

impl From<CalendarDate> for RawCalendarDate {
    fn from(date: CalendarDate) -> Self {
        Self {
            calendar: date.calendar,
            year:     date.year,
            month:    date.month,
            day:      date.day,
            time:     date.time,
        }
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
    #[display(fmt = "Sunday")]
    Sunday,
}

impl Weekday {
    /// Weekday of the civil date whose noon is Julian day `day` (JDN 0 was a Monday).
    pub const fn from_julian_day(day: i64) -> Self {
        match day.rem_euclid(7) {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }
}
