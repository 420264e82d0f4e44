//! The Julian Day Number value type.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::NANOS_PER_DAY;
use crate::prelude::*;
use crate::time_fraction::DayFraction;
use crate::DateError;

/// Sign of a Julian Day Number relative to the epoch.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub enum Sign {
    #[display(fmt = "-")]
    Negative = -1,
    #[default]
    #[display(fmt = "0")]
    Zero = 0,
    #[display(fmt = "+")]
    Positive = 1,
}

impl Sign {
    #[inline]
    pub const fn as_i64(self) -> i64 {
        self as i64
    }
}

impl From<i64> for Sign {
    fn from(value: i64) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

/// A point in time as days since noon of the Julian Day epoch.
///
/// Stored in sign-magnitude form: the value is `sign × (days + fraction)`. This keeps the
/// fraction non-negative on both sides of the epoch, so `-0.25` is `Negative`, 0 days and a
/// quarter-day fraction. `sign` is `Zero` exactly when both parts are zero, and `days` never
/// exceeds [`MAX_MAGNITUDE_DAYS`](Self::MAX_MAGNITUDE_DAYS).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawJulianDayNumber", into = "RawJulianDayNumber")]
pub struct JulianDayNumber {
    sign:     Sign,
    days:     u64,
    fraction: DayFraction,
}

impl JulianDayNumber {
    /// The epoch itself
    pub const ZERO: Self = Self {
        sign:     Sign::Zero,
        days:     0,
        fraction: DayFraction::ZERO,
    };

    /// Largest whole-day magnitude, so that [`day`](Self::day) always fits in an `i64`
    #[allow(clippy::cast_sign_loss)]
    pub const MAX_MAGNITUDE_DAYS: u64 = i64::MAX as u64;

    /// Creates a value from its sign-magnitude parts.
    ///
    /// # Errors
    /// Returns `DateError::JdnOutOfRange` if `days` exceeds
    /// [`MAX_MAGNITUDE_DAYS`](Self::MAX_MAGNITUDE_DAYS), and `DateError::InconsistentSign` if
    /// `sign` is `Zero` for a non-zero magnitude or non-zero for a zero magnitude.
    pub fn new(sign: Sign, days: u64, fraction: DayFraction) -> Result<Self, DateError> {
        if days > Self::MAX_MAGNITUDE_DAYS {
            return Err(DateError::JdnOutOfRange { days });
        }
        let is_zero = days == 0 && fraction.is_zero();
        if is_zero != (sign == Sign::Zero) {
            return Err(DateError::InconsistentSign { sign });
        }
        // A zero value never carries a leap-second day length
        let fraction = if is_zero { DayFraction::ZERO } else { fraction };
        Ok(Self { sign, days, fraction })
    }

    /// A whole-day value, i.e. noon of that Julian day. `i64::MIN` saturates to `-i64::MAX`.
    pub const fn from_day(day: i64) -> Self {
        let sign = if day > 0 {
            Sign::Positive
        } else if day == 0 {
            Sign::Zero
        } else {
            Sign::Negative
        };
        let days = day.unsigned_abs();
        Self {
            sign,
            days: if days > Self::MAX_MAGNITUDE_DAYS {
                Self::MAX_MAGNITUDE_DAYS
            } else {
                days
            },
            fraction: DayFraction::ZERO,
        }
    }

    /// Converts a floating-point day count, rounding the fraction to the nearest nanosecond of
    /// an ordinary day.
    ///
    /// # Errors
    /// Returns `DateError::NonFiniteJdn` for NaN or infinities, and `DateError::JdnOutOfRange`
    /// if the magnitude does not fit in an `i64` day count.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn from_f64(value: f64) -> Result<Self, DateError> {
        if !value.is_finite() {
            return Err(DateError::NonFiniteJdn);
        }
        let magnitude = value.abs();
        if magnitude >= Self::MAX_MAGNITUDE_DAYS as f64 {
            return Err(DateError::JdnOutOfRange {
                days: magnitude as u64,
            });
        }
        let mut days = magnitude.trunc() as u64;
        let mut nanos = ((magnitude - magnitude.trunc()) * NANOS_PER_DAY as f64).round() as u64;
        if nanos >= NANOS_PER_DAY {
            days += 1;
            nanos -= NANOS_PER_DAY;
        }
        let fraction = DayFraction::new(nanos, false)?;
        let sign = if days == 0 && nanos == 0 {
            Sign::Zero
        } else if value.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::new(sign, days, fraction)
    }

    /// Lossy floating-point view of the value
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.sign.as_i64() as f64 * (self.days as f64 + self.fraction.to_f64())
    }

    #[inline]
    pub const fn sign(self) -> Sign {
        self.sign
    }

    /// Whole days of the magnitude
    #[inline]
    pub const fn days(self) -> u64 {
        self.days
    }

    /// Signed integer part, truncated toward zero. Zero also for values in `(-1, 1)`; use
    /// [`sign`](Self::sign) to tell those apart.
    // `days` is capped at `i64::MAX`
    #[allow(clippy::cast_possible_wrap)]
    pub const fn day(self) -> i64 {
        self.sign.as_i64() * self.days as i64
    }

    /// Non-negative fractional part of the magnitude
    #[inline]
    pub const fn fraction(self) -> DayFraction {
        self.fraction
    }

    /// Whether the fraction was measured on a day lengthened by a leap second
    #[inline]
    pub const fn has_leap_second(self) -> bool {
        self.fraction.has_leap_second()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self.sign, Sign::Zero)
    }

    /// The day count floored toward negative infinity, the usual civil "Julian day" integer.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn floor_day(self) -> i64 {
        match self.sign {
            Sign::Negative if !self.fraction.is_zero() => -(self.days as i64) - 1,
            _ => self.day(),
        }
    }
}

impl PartialOrd for JulianDayNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JulianDayNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let magnitude = |jdn: &Self| (jdn.days, jdn.fraction);
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Positive => magnitude(self).cmp(&magnitude(other)),
                Sign::Negative => magnitude(other).cmp(&magnitude(self)),
                Sign::Zero => Ordering::Equal,
            },
            ord => ord,
        }
    }
}

impl fmt::Display for JulianDayNumber {
    /// Exact decimal expansion, truncated to the formatter's precision (default 9 digits).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.days)?;
        let digits = f.precision().unwrap_or(9);
        if digits > 0 {
            write!(f, ".")?;
            self.fraction.write_digits(f, digits)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct RawJulianDayNumber {
    sign:     Sign,
    days:     u64,
    fraction: DayFraction,
}

impl TryFrom<RawJulianDayNumber> for JulianDayNumber {
    type Error = DateError;

    fn try_from(raw: RawJulianDayNumber) -> Result<Self, Self::Error> {
        Self::new(raw.sign, raw.days, raw.fraction)
    }
}

impl From<JulianDayNumber> for RawJulianDayNumber {
    fn from(jdn: JulianDayNumber) -> Self {
        Self {
            sign:     jdn.sign,
            days:     jdn.days,
            fraction: jdn.fraction,
        }
    }
}
