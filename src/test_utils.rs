//! Shared constructors for unit tests.

use crate::{Calendar, CalendarDate, TimeOfDay};

/// Midnight on a date of any calendar
pub fn date(calendar: Calendar, year: i64, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(calendar, year, month, day).unwrap()
}

/// Noon on a date of any calendar, where Julian days begin
pub fn noon(calendar: Calendar, year: i64, month: u8, day: u8) -> CalendarDate {
    CalendarDate::with_time(calendar, year, month, day, TimeOfDay::NOON).unwrap()
}

/// Midnight on a Gregorian date
pub fn gregorian(year: i64, month: u8, day: u8) -> CalendarDate {
    date(Calendar::Gregorian, year, month, day)
}

pub fn date_time(
    year: i64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
) -> CalendarDate {
    let time = TimeOfDay::new(hour, minute, second, nanosecond).unwrap();
    CalendarDate::with_time(Calendar::Gregorian, year, month, day, time).unwrap()
}
