//! Date <-> Julian Day Number conversion driven by a [`CycleConfiguration`].
//!
//! Dates after the epoch are counted forward from the positive anchor, dates before it backward
//! from the negative anchor. Whole years are decomposed through the cycle levels, then an
//! intercalary correction brings the hierarchy's day count in line with the exact leap rule. The
//! correction is zero for calendars whose rule the hierarchy expresses exactly.

use std::cmp::Ordering;

use crate::calendar::CalendarBaseData;
use crate::consts::{MAX_JDN_DAYS, MAX_NORMALIZATION_STEPS, MAX_YEAR, MIN_YEAR};
use crate::cycle::CycleConfiguration;
use crate::date::{CalendarDate, is_valid_date_time_components};
use crate::jdn::{JulianDayNumber, Sign};
use crate::time_fraction::{DayFraction, from_fraction, to_fraction};
use crate::{ConversionError, DateError};

/// Converts between one calendar's dates and Julian Day Numbers.
///
/// The engine only borrows its configuration and keeps no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine<'a> {
    config: &'a CycleConfiguration,
}

impl<'a> ConversionEngine<'a> {
    pub const fn new(config: &'a CycleConfiguration) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> &'a CycleConfiguration {
        self.config
    }

    /// The Julian Day Number of `date`.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if `date` belongs to another calendar or is
    /// malformed, and `ConversionError::ArithmeticInconsistency` if the cycle walk goes wrong.
    pub fn to_julian_day_number(&self, date: &CalendarDate) -> Result<JulianDayNumber, ConversionError> {
        let calendar = self.config.calendar();
        if date.calendar() != calendar {
            return Err(DateError::CalendarMismatch {
                expected: calendar,
                found:    date.calendar(),
            }
            .into());
        }
        is_valid_date_time_components(calendar, date.year(), date.month(), date.day(), date.time())?;

        let (fraction, boundary) = to_fraction(date.time());
        match date.compare(&self.config.jdn_base_date())? {
            Ordering::Equal => Ok(JulianDayNumber::ZERO),
            Ordering::Greater => {
                let days = self.days_after_epoch(date)? + boundary;
                signed_jdn(Sign::Positive, days, fraction, date)
            },
            Ordering::Less => {
                let days = self.days_before_epoch(date)?;
                // Mirror the fraction so the magnitude stays `days + 1 - f`
                match fraction.complement() {
                    None => signed_jdn(Sign::Negative, days - boundary, fraction, date),
                    Some(reflected) => signed_jdn(Sign::Negative, days - boundary - 1, reflected, date),
                }
            },
        }
    }

    /// The calendar date (with time of day) of `jdn`.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if `jdn` lies outside the supported year range or
    /// its leap-second flag lands on a date without one, and
    /// `ConversionError::ArithmeticInconsistency` if the cycle walk goes wrong.
    pub fn to_date(&self, jdn: JulianDayNumber) -> Result<CalendarDate, ConversionError> {
        let base = self.config.jdn_base_date();
        if jdn.days() > MAX_JDN_DAYS {
            return Err(DateError::JdnOutOfRange { days: jdn.days() }.into());
        }
        let days = i64::try_from(jdn.days()).map_err(|_| DateError::JdnOutOfRange { days: jdn.days() })?;

        let (offset, time) = match jdn.sign() {
            Sign::Zero => return Ok(base),
            Sign::Positive => {
                let (time, boundary) = from_fraction(jdn.fraction())?;
                (days + boundary, time)
            },
            Sign::Negative => {
                let (reflected, carry) = jdn
                    .fraction()
                    .complement()
                    .map_or((jdn.fraction(), 0), |reflected| (reflected, 1));
                let (time, boundary) = from_fraction(reflected)?;
                (-(days + carry - boundary), time)
            },
        };
        log::trace!("{jdn} is {offset} civil days from {base}");

        let calendar = self.config.calendar();
        let (year, ordinal) = match offset.cmp(&0) {
            Ordering::Equal => (base.year(), base.ordinal_day()?),
            Ordering::Greater => self.date_after_epoch(offset)?,
            Ordering::Less => self.date_before_epoch(-offset)?,
        };

        let (month, day) = calendar.month_day_from_ordinal(ordinal, calendar.is_leap_year(year))?;
        Ok(CalendarDate::with_time(calendar, year, month, day, time)?)
    }

    /// Whole civil days from the epoch's date forward to `date`'s.
    fn days_after_epoch(&self, date: &CalendarDate) -> Result<i64, ConversionError> {
        let calendar = self.config.calendar();
        let anchor = self.config.start_for_positive_jdn();
        let walk = self.config.walk_years(date.year() - anchor.year() - 1);
        let correction = calendar.days_in_years(anchor.year() + 1, date.year() - 1) - walk.days();
        log::trace!(
            "{date}: {} cycle years after {}, {} cycle days, correction {correction}",
            walk.years(),
            anchor.year(),
            walk.days()
        );

        Ok(walk.days()
            + correction
            + anchor.adjustment_days()
            + i64::from(self.config.main_cycle_remaining_days_in_year())
            + i64::from(date.ordinal_day()?))
    }

    /// Whole civil days from `date`'s date forward to the epoch's.
    fn days_before_epoch(&self, date: &CalendarDate) -> Result<i64, ConversionError> {
        let calendar = self.config.calendar();
        let anchor = self.config.start_for_negative_jdn();
        let walk = self.config.walk_years(anchor.year() - date.year() - 1);
        let correction = calendar.days_in_years(date.year() + 1, anchor.year() - 1) - walk.days();
        log::trace!(
            "{date}: {} cycle years before {}, {} cycle days, correction {correction}",
            walk.years(),
            anchor.year(),
            walk.days()
        );

        Ok(walk.days()
            + correction
            + anchor.adjustment_days()
            + i64::from(self.config.main_cycle_ordinal_day_number())
            + i64::from(calendar.remaining_days_in_year(date.year(), date.month(), date.day())?))
    }

    /// Year and ordinal day `days` (> 0) civil days after the epoch's date.
    fn date_after_epoch(&self, days: i64) -> Result<(i64, u16), ConversionError> {
        let calendar = self.config.calendar();
        let anchor = self.config.start_for_positive_jdn();

        // Zero-based day counted from 1 January of the year after the anchor
        let cycle_days = days - anchor.adjustment_days() - i64::from(self.config.main_cycle_remaining_days_in_year()) - 1;
        let walk = self.config.walk_days(cycle_days);
        let year = anchor.year() + 1 + walk.years();
        let correction = calendar.days_in_years(anchor.year() + 1, year - 1) - walk.days();
        let remainder = walk.remainder() - correction;
        log::trace!(
            "{days} days after epoch: {} cycle years after {}, remainder {}, correction {correction}",
            walk.years(),
            anchor.year(),
            walk.remainder()
        );

        let (year, remainder) = self.normalize(year, remainder, 1)?;
        self.checked_ordinal(days, year, remainder + 1)
    }

    /// Year and ordinal day `days` (> 0) civil days before the epoch's date.
    fn date_before_epoch(&self, days: i64) -> Result<(i64, u16), ConversionError> {
        let calendar = self.config.calendar();
        let anchor = self.config.start_for_negative_jdn();

        // Zero-based day counted backward from 31 December of the year before the anchor
        let cycle_days = days - anchor.adjustment_days() - i64::from(self.config.main_cycle_ordinal_day_number());
        let walk = self.config.walk_days(cycle_days);
        let year = anchor.year() - 1 - walk.years();
        let correction = calendar.days_in_years(year + 1, anchor.year() - 1) - walk.days();
        let remainder = walk.remainder() - correction;
        log::trace!(
            "{days} days before epoch: {} cycle years before {}, remainder {}, correction {correction}",
            walk.years(),
            anchor.year(),
            walk.remainder()
        );

        let (year, remainder) = self.normalize(year, remainder, -1)?;
        self.checked_ordinal(days, year, i64::from(calendar.days_in_year(year)) - remainder)
    }

    /// Moves whole years until `remainder` is a zero-based day inside `year`.
    ///
    /// `step` is +1 when the remainder counts forward from 1 January and -1 when it counts
    /// backward from 31 December. The walk may overshoot the supported year range before the
    /// correction pulls it back, so range checks wait for [`Self::checked_ordinal`].
    fn normalize(&self, mut year: i64, mut remainder: i64, step: i64) -> Result<(i64, i64), ConversionError> {
        let calendar = self.config.calendar();
        for _ in 0..=MAX_NORMALIZATION_STEPS {
            let length = i64::from(calendar.days_in_year(year));
            if remainder < 0 {
                year -= step;
                remainder += i64::from(calendar.days_in_year(year));
            } else if remainder >= length {
                remainder -= length;
                year += step;
            } else {
                return Ok((year, remainder));
            }
        }

        log::error!("{calendar} year normalisation did not settle: {remainder} days left around year {year}");
        Err(ConversionError::ArithmeticInconsistency {
            year,
            ordinal: remainder,
            days_in_year: calendar.days_in_year(year),
        })
    }

    /// Accepts the walk's result for a date `days` civil days from the epoch.
    fn checked_ordinal(&self, days: i64, year: i64, ordinal: i64) -> Result<(i64, u16), ConversionError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::JdnOutOfRange {
                days: days.unsigned_abs(),
            }
            .into());
        }
        let days_in_year = self.config.calendar().days_in_year(year);
        match u16::try_from(ordinal) {
            Ok(valid) if (1..=days_in_year).contains(&valid) => Ok((year, valid)),
            _ => {
                log::error!(
                    "{} cycle walk produced ordinal day {ordinal} in year {year}",
                    self.config.calendar()
                );
                Err(ConversionError::ArithmeticInconsistency {
                    year,
                    ordinal,
                    days_in_year,
                })
            },
        }
    }
}

fn signed_jdn(
    sign: Sign,
    days: i64,
    fraction: DayFraction,
    date: &CalendarDate,
) -> Result<JulianDayNumber, ConversionError> {
    let Ok(magnitude) = u64::try_from(days) else {
        log::error!("{date} produced a negative day magnitude {days}");
        return Err(ConversionError::ArithmeticInconsistency {
            year:         date.year(),
            ordinal:      days,
            days_in_year: date.calendar().days_in_year(date.year()),
        });
    };
    let sign = if magnitude == 0 && fraction.is_zero() {
        Sign::Zero
    } else {
        sign
    };
    Ok(JulianDayNumber::new(sign, magnitude, fraction)?)
}
