//! Julian Day Number conversion for the Gregorian, Julian, Revised Julian and Revised
//! Goucher-Parker calendars.
//!
//! Every calendar is described by a [`CycleConfiguration`]: the date whose Julian Day Number is
//! 0, two anchor years and the calendar's leap pattern as a hierarchy of year cycles. A
//! [`ConversionEngine`] walks that hierarchy to turn a [`CalendarDate`] into a
//! [`JulianDayNumber`] and back. Days start at noon, so a date's time of day becomes the exact
//! fraction of its Julian day.
//!
//! ```
//! use julian_day::{Calendar, CalendarDate, JulianDayNumber, TimeOfDay};
//!
//! let date = CalendarDate::with_time(Calendar::Gregorian, 2000, 1, 1, TimeOfDay::NOON)?;
//! let jdn = date.to_julian_day_number()?;
//! assert_eq!(jdn, JulianDayNumber::from_day(2_451_545));
//!
//! let julian = date.convert_to(Calendar::Julian)?;
//! assert_eq!((julian.year(), julian.month(), julian.day()), (1999, 12, 19));
//! # Ok::<(), julian_day::ConversionError>(())
//! ```

mod calendar;
mod consts;
mod cycle;
mod date;
mod engine;
mod error;
mod jdn;
mod prelude;
mod time_fraction;

#[cfg(test)]
mod test_utils;

pub use calendar::{Calendar, CalendarBaseData, Gregorian, Julian, RevisedGoucherParker, RevisedJulian};
pub use consts::*;
pub use cycle::{CycleAnchor, CycleConfiguration, CycleLevel, CycleWalk};
pub use date::{CalendarDate, Weekday, is_valid_date_time_components};
pub use engine::ConversionEngine;
pub use error::{ConfigurationError, ConversionError, DateError};
pub use jdn::{JulianDayNumber, Sign};
pub use time_fraction::{DayFraction, TimeOfDay, from_fraction, to_fraction};

/// The Julian Day Number of `date`, using its calendar's standard configuration.
///
/// # Errors
/// Returns `ConversionError` if the date cannot be converted.
pub fn to_julian_day_number(date: &CalendarDate) -> Result<JulianDayNumber, ConversionError> {
    date.to_julian_day_number()
}

/// The date in `calendar` at `jdn`, using that calendar's standard configuration.
///
/// # Errors
/// Returns `ConversionError` if `jdn` is outside the supported range.
pub fn to_date(jdn: JulianDayNumber, calendar: Calendar) -> Result<CalendarDate, ConversionError> {
    CalendarDate::from_julian_day_number(jdn, calendar)
}
