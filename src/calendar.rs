//! Leap-year and ordinal-day arithmetic for each supported calendar.
//!
//! Every calendar here shares the Julian month table and differs only in which years receive
//! February 29. A calendar is a stateless [`CalendarBaseData`] strategy; [`Calendar`] is the
//! closed set of strategies and dispatches to them.

use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, CUMULATIVE_DAYS, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_STANDARD_YEAR, DECEMBER,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GOUCHER_PARKER_OMISSION_CYCLE, GOUCHER_PARKER_RESTORATION_CYCLE,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY, REVISED_JULIAN_CYCLE, REVISED_JULIAN_LEAP_CENTURIES,
};
use crate::cycle::CycleConfiguration;
use crate::prelude::*;
use crate::{ConfigurationError, DateError};

/// Number of integers `y` in `0..year` with `y ≡ residue (mod modulus)`.
///
/// Negative for `year < 0`, where it counts `year..0` instead, so that
/// `multiples_before(b) - multiples_before(a)` counts `a..b` for any `a <= b`.
#[inline]
pub(crate) const fn multiples_before(year: i64, modulus: i64, residue: i64) -> i64 {
    (year - residue + modulus - 1).div_euclid(modulus)
}

/// Per-calendar leap rule and month arithmetic.
///
/// Implementors only decide [`is_leap_year`](Self::is_leap_year) and the matching closed-form
/// [`leap_years_before`](Self::leap_years_before); the month table is shared.
pub trait CalendarBaseData {
    fn is_leap_year(&self, year: i64) -> bool;

    /// Signed count of leap years in `0..year` (see [`multiples_before`] for the sign convention).
    fn leap_years_before(&self, year: i64) -> i64;

    fn days_in_standard_year(&self) -> u16 {
        DAYS_IN_STANDARD_YEAR
    }

    fn days_in_leap_year(&self) -> u16 {
        DAYS_IN_LEAP_YEAR
    }

    fn days_in_year(&self, year: i64) -> u16 {
        if self.is_leap_year(year) {
            self.days_in_leap_year()
        } else {
            self.days_in_standard_year()
        }
    }

    /// Exact number of days in the years `first..=last`; zero for an empty span.
    fn days_in_years(&self, first: i64, last: i64) -> i64 {
        if last < first {
            return 0;
        }
        let years = last - first + 1;
        years * i64::from(self.days_in_standard_year()) + self.leap_years_before(last + 1)
            - self.leap_years_before(first)
    }

    /// # Errors
    /// Returns `DateError::InvalidMonth` if `month` is outside 1-12.
    fn days_in_month(&self, year: i64, month: u8) -> Result<u8, DateError> {
        month_length(self.is_leap_year(year), month)
    }

    /// 1-based day of the year for `month`/`day`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` for components outside the
    /// month table. The reported year is 0 since only the leap flag is known here.
    fn ordinal_day_number(&self, is_leap_year: bool, month: u8, day: u8) -> Result<u16, DateError> {
        let max_day = month_length(is_leap_year, month)?;
        if day < MIN_DAY || day > max_day {
            return Err(DateError::InvalidDay { year: 0, month, day });
        }
        let leap_day = u16::from(is_leap_year && month > FEBRUARY);
        Ok(CUMULATIVE_DAYS[usize::from(month - 1)] + leap_day + u16::from(day))
    }

    /// Inverse of [`ordinal_day_number`](Self::ordinal_day_number).
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` if `ordinal` is 0 or past the end of the year.
    fn month_day_from_ordinal(&self, ordinal: u16, is_leap_year: bool) -> Result<(u8, u8), DateError> {
        let days_in_year = if is_leap_year {
            self.days_in_leap_year()
        } else {
            self.days_in_standard_year()
        };
        if ordinal == 0 || ordinal > days_in_year {
            return Err(DateError::InvalidOrdinal {
                ordinal: i64::from(ordinal),
                days_in_year,
            });
        }

        // Scan down from December for the first month starting before the ordinal
        for month in (1..=DECEMBER).rev() {
            let start = CUMULATIVE_DAYS[usize::from(month - 1)] + u16::from(is_leap_year && month > FEBRUARY);
            if start < ordinal {
                let day = u8::try_from(ordinal - start).map_err(|_| DateError::InvalidOrdinal {
                    ordinal: i64::from(ordinal),
                    days_in_year,
                })?;
                return Ok((month, day));
            }
        }

        Err(DateError::InvalidOrdinal {
            ordinal: i64::from(ordinal),
            days_in_year,
        })
    }

    /// Days left in the year after `month`/`day`; 0 on December 31.
    ///
    /// # Errors
    /// Propagates component errors from [`ordinal_day_number`](Self::ordinal_day_number).
    fn remaining_days_in_year(&self, year: i64, month: u8, day: u8) -> Result<u16, DateError> {
        let is_leap = self.is_leap_year(year);
        let ordinal = self
            .ordinal_day_number(is_leap, month, day)
            .map_err(|_| DateError::InvalidDay { year, month, day })?;
        Ok(self.days_in_year(year) - ordinal)
    }
}

fn month_length(is_leap_year: bool, month: u8) -> Result<u8, DateError> {
    if month == 0 || month > MAX_MONTH {
        return Err(DateError::InvalidMonth(month));
    }
    if month == FEBRUARY && is_leap_year {
        Ok(FEBRUARY_DAYS_LEAP)
    } else {
        Ok(DAYS_IN_MONTH[usize::from(month)])
    }
}

/// Proleptic Gregorian calendar: every 4th year, except centuries not divisible by 400.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl CalendarBaseData for Gregorian {
    fn is_leap_year(&self, year: i64) -> bool {
        (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
            || year.rem_euclid(GREGORIAN_CYCLE) == 0
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        multiples_before(year, LEAP_YEAR_CYCLE, 0) - multiples_before(year, CENTURY_CYCLE, 0)
            + multiples_before(year, GREGORIAN_CYCLE, 0)
    }
}

/// Proleptic Julian calendar: every 4th year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Julian;

impl CalendarBaseData for Julian {
    fn is_leap_year(&self, year: i64) -> bool {
        year.rem_euclid(LEAP_YEAR_CYCLE) == 0
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        multiples_before(year, LEAP_YEAR_CYCLE, 0)
    }
}

/// Revised Julian (Milanković) calendar: century years are leap only at 200 or 600 mod 900.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevisedJulian;

impl CalendarBaseData for RevisedJulian {
    fn is_leap_year(&self, year: i64) -> bool {
        if year.rem_euclid(LEAP_YEAR_CYCLE) != 0 {
            return false;
        }
        if year.rem_euclid(CENTURY_CYCLE) != 0 {
            return true;
        }
        REVISED_JULIAN_LEAP_CENTURIES.contains(&year.rem_euclid(REVISED_JULIAN_CYCLE))
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        multiples_before(year, LEAP_YEAR_CYCLE, 0) - multiples_before(year, CENTURY_CYCLE, 0)
            + REVISED_JULIAN_LEAP_CENTURIES
                .iter()
                .map(|&residue| multiples_before(year, REVISED_JULIAN_CYCLE, residue))
                .sum::<i64>()
    }
}

/// Revised Goucher-Parker calendar: every 4th year, except multiples of 128, except multiples
/// of 454545 which are always leap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevisedGoucherParker;

impl CalendarBaseData for RevisedGoucherParker {
    fn is_leap_year(&self, year: i64) -> bool {
        if year.rem_euclid(GOUCHER_PARKER_RESTORATION_CYCLE) == 0 {
            return true;
        }
        if year.rem_euclid(GOUCHER_PARKER_OMISSION_CYCLE) == 0 {
            return false;
        }
        year.rem_euclid(LEAP_YEAR_CYCLE) == 0
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        let regular = multiples_before(year, LEAP_YEAR_CYCLE, 0)
            - multiples_before(year, GOUCHER_PARKER_OMISSION_CYCLE, 0);

        // The restoration cycle is odd, so its k-th multiple was already regular-leap exactly
        // when k is a multiple of 4 but not of 128.
        let restorations = multiples_before(year, GOUCHER_PARKER_RESTORATION_CYCLE, 0);
        let already_leap = multiples_before(restorations, LEAP_YEAR_CYCLE, 0)
            - multiples_before(restorations, GOUCHER_PARKER_OMISSION_CYCLE, 0);

        regular + restorations - already_leap
    }
}

/// The supported calendar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub enum Calendar {
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Julian")]
    Julian,
    #[display(fmt = "Revised Julian")]
    RevisedJulian,
    #[display(fmt = "Revised Goucher-Parker")]
    RevisedGoucherParker,
}

impl Calendar {
    /// All calendars, in declaration order
    pub const ALL: [Self; 4] = [
        Self::Gregorian,
        Self::Julian,
        Self::RevisedJulian,
        Self::RevisedGoucherParker,
    ];

    /// Returns the stateless strategy backing this calendar
    pub const fn base_data(self) -> &'static dyn CalendarBaseData {
        match self {
            Self::Gregorian => &Gregorian,
            Self::Julian => &Julian,
            Self::RevisedJulian => &RevisedJulian,
            Self::RevisedGoucherParker => &RevisedGoucherParker,
        }
    }

    /// Builds and validates this calendar's cycle configuration.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the built-in constants fail validation.
    pub fn configuration(self) -> Result<CycleConfiguration, ConfigurationError> {
        match self {
            Self::Gregorian => CycleConfiguration::gregorian(),
            Self::Julian => CycleConfiguration::julian(),
            Self::RevisedJulian => CycleConfiguration::revised_julian(),
            Self::RevisedGoucherParker => CycleConfiguration::revised_goucher_parker(),
        }
    }
}

impl CalendarBaseData for Calendar {
    fn is_leap_year(&self, year: i64) -> bool {
        self.base_data().is_leap_year(year)
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        self.base_data().leap_years_before(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i64,
            gregorian:   bool,
            julian:      bool,
            revised:     bool,
            goucher:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                gregorian:   true,
                julian:      true,
                revised:     true,
                goucher:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                gregorian:   false,
                julian:      false,
                revised:     false,
                goucher:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                gregorian:   false,
                julian:      true,
                revised:     false,
                goucher:     true,
                description: "century, 1900 mod 900 = 100",
            },
            TestCase {
                year:        2000,
                gregorian:   true,
                julian:      true,
                revised:     true,
                goucher:     true,
                description: "2000 mod 900 = 200, 2000 mod 128 = 80",
            },
            TestCase {
                year:        2400,
                gregorian:   true,
                julian:      true,
                revised:     true,
                goucher:     true,
                description: "2400 mod 900 = 600",
            },
            TestCase {
                year:        2800,
                gregorian:   true,
                julian:      true,
                revised:     false,
                goucher:     true,
                description: "2800 mod 900 = 100",
            },
            TestCase {
                year:        2900,
                gregorian:   false,
                julian:      true,
                revised:     true,
                goucher:     true,
                description: "2900 mod 900 = 200",
            },
            TestCase {
                year:        1920,
                gregorian:   true,
                julian:      true,
                revised:     true,
                goucher:     false,
                description: "multiple of 128",
            },
            TestCase {
                year:        0,
                gregorian:   true,
                julian:      true,
                revised:     false,
                goucher:     true,
                description: "year zero: 0 mod 900 is not a leap century",
            },
            TestCase {
                year:        454_545,
                gregorian:   false,
                julian:      false,
                revised:     false,
                goucher:     true,
                description: "restoration cycle, odd year",
            },
            TestCase {
                year:        -4,
                gregorian:   true,
                julian:      true,
                revised:     true,
                goucher:     true,
                description: "negative multiple of 4",
            },
            TestCase {
                year:        -100,
                gregorian:   false,
                julian:      true,
                revised:     false,
                goucher:     true,
                description: "negative century, -100 mod 900 = 800",
            },
            TestCase {
                year:        -300,
                gregorian:   false,
                julian:      true,
                revised:     true,
                goucher:     true,
                description: "-300 mod 900 = 600",
            },
        ];

        for case in &cases {
            assert_eq!(
                Gregorian.is_leap_year(case.year),
                case.gregorian,
                "Gregorian {} ({})",
                case.year,
                case.description
            );
            assert_eq!(
                Julian.is_leap_year(case.year),
                case.julian,
                "Julian {} ({})",
                case.year,
                case.description
            );
            assert_eq!(
                RevisedJulian.is_leap_year(case.year),
                case.revised,
                "Revised Julian {} ({})",
                case.year,
                case.description
            );
            assert_eq!(
                RevisedGoucherParker.is_leap_year(case.year),
                case.goucher,
                "Revised Goucher-Parker {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_leap_years_before_matches_rule() {
        let spans = [
            (-3_000, 3_000),
            (-454_560, -454_530),
            (454_530, 454_560),
            (909_085, 909_095),
            (-1_000_100, -999_900),
        ];
        for calendar in Calendar::ALL {
            for (first, last) in spans {
                let counted = (first..last).filter(|&y| calendar.is_leap_year(y)).count();
                let closed = calendar.leap_years_before(last) - calendar.leap_years_before(first);
                assert_eq!(
                    closed,
                    i64::try_from(counted).unwrap(),
                    "{calendar} leap count over {first}..{last}"
                );
            }
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(Gregorian.days_in_year(1900), 365);
        assert_eq!(Julian.days_in_year(1900), 366);
        assert_eq!(Gregorian.days_in_year(2000), 366);
        assert_eq!(RevisedJulian.days_in_year(2000), 366);
        assert_eq!(RevisedGoucherParker.days_in_year(2000), 366);
        assert_eq!(RevisedGoucherParker.days_in_year(2048), 365);
    }

    #[test]
    fn test_days_in_years_span() {
        assert_eq!(Gregorian.days_in_years(1, 400), 146_097);
        assert_eq!(Julian.days_in_years(-3, 0), 1_461);
        assert_eq!(RevisedJulian.days_in_years(1, 900), 328_718);
        assert_eq!(RevisedGoucherParker.days_in_years(1, 128), 46_751);
        assert_eq!(Gregorian.days_in_years(5, 4), 0);
    }

    #[test]
    fn test_ordinal_day_number() {
        assert_eq!(Gregorian.ordinal_day_number(false, 1, 1).unwrap(), 1);
        assert_eq!(Gregorian.ordinal_day_number(false, 3, 1).unwrap(), 60);
        assert_eq!(Gregorian.ordinal_day_number(true, 3, 1).unwrap(), 61);
        assert_eq!(Gregorian.ordinal_day_number(true, 2, 29).unwrap(), 60);
        assert_eq!(Gregorian.ordinal_day_number(false, 11, 24).unwrap(), 328);
        assert_eq!(Gregorian.ordinal_day_number(false, 12, 31).unwrap(), 365);
        assert_eq!(Gregorian.ordinal_day_number(true, 12, 31).unwrap(), 366);
    }

    #[test]
    fn test_ordinal_day_number_invalid() {
        assert!(matches!(
            Gregorian.ordinal_day_number(false, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            Gregorian.ordinal_day_number(false, 0, 1),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            Gregorian.ordinal_day_number(false, 2, 29),
            Err(DateError::InvalidDay { month: 2, day: 29, .. })
        ));
        assert!(matches!(
            Gregorian.ordinal_day_number(true, 4, 31),
            Err(DateError::InvalidDay { month: 4, day: 31, .. })
        ));
        assert!(Gregorian.ordinal_day_number(true, 1, 0).is_err());
    }

    #[test]
    fn test_month_day_from_ordinal_inverts_ordinal() {
        for is_leap in [false, true] {
            let days = if is_leap { 366 } else { 365 };
            for ordinal in 1..=days {
                let (month, day) = Gregorian.month_day_from_ordinal(ordinal, is_leap).unwrap();
                assert_eq!(
                    Gregorian.ordinal_day_number(is_leap, month, day).unwrap(),
                    ordinal,
                    "ordinal {ordinal} (leap: {is_leap}) -> {month}-{day}"
                );
            }
        }
        assert_eq!(Julian.month_day_from_ordinal(60, true).unwrap(), (2, 29));
        assert_eq!(Julian.month_day_from_ordinal(60, false).unwrap(), (3, 1));
    }

    #[test]
    fn test_month_day_from_ordinal_invalid() {
        assert!(Gregorian.month_day_from_ordinal(0, false).is_err());
        assert!(Gregorian.month_day_from_ordinal(366, false).is_err());
        assert!(Gregorian.month_day_from_ordinal(367, true).is_err());
    }

    #[test]
    fn test_remaining_days_in_year() {
        assert_eq!(Gregorian.remaining_days_in_year(2023, 12, 31).unwrap(), 0);
        assert_eq!(Gregorian.remaining_days_in_year(2024, 1, 1).unwrap(), 365);
        assert_eq!(Gregorian.remaining_days_in_year(-4713, 11, 24).unwrap(), 37);
        assert!(matches!(
            Gregorian.remaining_days_in_year(2023, 2, 29),
            Err(DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn test_days_in_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(Gregorian.days_in_month(2023, month).unwrap(), 31, "Month {month}");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(Gregorian.days_in_month(2023, month).unwrap(), 30, "Month {month}");
        }
        assert_eq!(Gregorian.days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(Julian.days_in_month(1900, 2).unwrap(), 29);
        assert!(Gregorian.days_in_month(2023, 13).is_err());
    }

    #[test]
    fn test_calendar_dispatch_and_display() {
        assert_eq!(Calendar::Gregorian.to_string(), "Gregorian");
        assert_eq!(Calendar::RevisedGoucherParker.to_string(), "Revised Goucher-Parker");
        assert!(!Calendar::Gregorian.is_leap_year(1900));
        assert!(Calendar::Julian.is_leap_year(1900));
    }

    #[test]
    fn test_calendar_serde() {
        let json = serde_json::to_string(&Calendar::RevisedJulian).unwrap();
        assert_eq!(json, r#""RevisedJulian""#);
        let parsed: Calendar = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Calendar::RevisedJulian);
    }
}
