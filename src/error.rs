//! Error types for the julian_day crate.

use crate::prelude::*;
use crate::{Calendar, MAX_YEAR, MIN_YEAR, TimeOfDay};

/// A date, time or Julian Day Number that cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be {}..={})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-12)", "_0")]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: u8 },
    #[display(fmt = "Invalid time {hour:02}:{minute:02}:{second:02}.{nanosecond:09}")]
    InvalidTime {
        hour:       u8,
        minute:     u8,
        second:     u8,
        nanosecond: u32,
    },
    #[display(fmt = "Leap second not allowed on {month:02}-{day:02} at {hour:02}:{minute:02}:{second:02}")]
    InvalidLeapSecond {
        month:  u8,
        day:    u8,
        hour:   u8,
        minute: u8,
        second: u8,
    },
    #[display(fmt = "Invalid ordinal day {ordinal} (year has {days_in_year} days)")]
    InvalidOrdinal { ordinal: i64, days_in_year: u16 },
    #[display(fmt = "Invalid day fraction {nanos}/{day_length}")]
    InvalidFraction { nanos: u64, day_length: u64 },
    #[display(fmt = "Julian Day Number sign {sign} does not match magnitude")]
    InconsistentSign { sign: crate::Sign },
    #[display(fmt = "Date belongs to the {found} calendar, expected {expected}")]
    CalendarMismatch { expected: Calendar, found: Calendar },
    #[display(fmt = "Julian Day Number is not finite")]
    NonFiniteJdn,
    #[display(fmt = "Julian Day Number {days} days from the epoch is out of range")]
    JdnOutOfRange { days: u64 },
}

impl std::error::Error for DateError {}

/// A cycle configuration that cannot drive a conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Cycle configuration has no cycle levels")]
    EmptyCycleList,

    #[error("Cycle level {index} must have positive length, found {years} years / {days} days")]
    NonPositiveLevel { index: usize, years: i64, days: i64 },

    #[error("Cycle levels must shrink: level {index} has {finer} years after {coarser}")]
    NonMonotonicLevels { index: usize, coarser: i64, finer: i64 },

    #[error("Cycle level {index} ({finer} years) does not divide its parent ({coarser} years)")]
    IndivisibleLevels { index: usize, coarser: i64, finer: i64 },

    #[error("Finest cycle level must be one standard year, found {years} years / {days} days")]
    InvalidFinestLevel { years: i64, days: i64 },

    #[error("Main cycle after year {anchor_year} has {expected} days, level says {found}")]
    MainCycleMismatch { anchor_year: i64, expected: i64, found: i64 },

    #[error("Anchor year {anchor_year} is on the wrong side of epoch year {epoch_year}")]
    AnchorOrder { anchor_year: i64, epoch_year: i64 },

    #[error("Anchor {anchor_month:02}-{anchor_day:02} does not share the epoch day {epoch_month:02}-{epoch_day:02}")]
    AnchorDayMismatch {
        anchor_month: u8,
        anchor_day:   u8,
        epoch_month:  u8,
        epoch_day:    u8,
    },

    #[error("Anchor year {anchor_year} adjustment should be {expected_years} years / {expected_days} days, found {years} / {days}")]
    AdjustmentMismatch {
        anchor_year:    i64,
        expected_years: i64,
        expected_days:  i64,
        years:          i64,
        days:           i64,
    },

    #[error("Anchor date belongs to the {found} calendar, configuration is {expected}")]
    CalendarMismatch { expected: Calendar, found: Calendar },

    #[error("Julian Day epoch must be at noon, found {time}")]
    EpochNotAtNoon { time: TimeOfDay },

    #[error(transparent)]
    InvalidDate(#[from] DateError),
}

/// Error type for Julian Day Number conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The cycle configuration is unusable.
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigurationError),

    /// The date or Julian Day Number being converted is malformed.
    #[error(transparent)]
    InvalidDate(#[from] DateError),

    /// The cycle walk produced an impossible ordinal day. Never caused by input.
    #[error("Arithmetic inconsistency: ordinal day {ordinal} in year {year} with {days_in_year} days")]
    ArithmeticInconsistency { year: i64, ordinal: i64, days_in_year: u16 },
}
