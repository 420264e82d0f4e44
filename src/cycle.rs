//! Cycle configurations: each calendar's leap pattern as a mixed-radix hierarchy of year cycles.
//!
//! A configuration pins the Julian Day epoch to a calendar date and names two anchor years, one
//! before and one after the epoch, from which whole cycles are counted outward. Decomposing a
//! span of years (or days) through the levels works like writing a number in mixed radix: the
//! coarsest level takes as many whole cycles as fit, the next level takes what remains, and so
//! on down to single years.
//!
//! Levels are descriptors. Every decomposition works on its own copy of the level list and
//! returns it in a [`CycleWalk`], so a configuration can be shared freely between threads.

use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, CalendarBaseData};
use crate::date::CalendarDate;
use crate::time_fraction::TimeOfDay;
use crate::ConfigurationError;

/// One digit of the cycle hierarchy: a block of `years_in_cycle` years lasting `days_in_cycle`
/// days, plus the count and remainder recorded by the last decomposition of this copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleLevel {
    years_in_cycle:  i64,
    days_in_cycle:   i64,
    #[serde(skip)]
    cycle_count:     i64,
    #[serde(skip)]
    remainder_years: i64,
    #[serde(skip)]
    remainder_days:  i64,
}

impl CycleLevel {
    pub const fn new(years_in_cycle: i64, days_in_cycle: i64) -> Self {
        Self {
            years_in_cycle,
            days_in_cycle,
            cycle_count: 0,
            remainder_years: 0,
            remainder_days: 0,
        }
    }

    #[inline]
    pub const fn years_in_cycle(&self) -> i64 {
        self.years_in_cycle
    }

    #[inline]
    pub const fn days_in_cycle(&self) -> i64 {
        self.days_in_cycle
    }

    /// Whole cycles taken by the last decomposition
    #[inline]
    pub const fn cycle_count(&self) -> i64 {
        self.cycle_count
    }

    #[inline]
    pub const fn remainder_years(&self) -> i64 {
        self.remainder_years
    }

    #[inline]
    pub const fn remainder_days(&self) -> i64 {
        self.remainder_days
    }

    #[inline]
    pub const fn total_years(&self) -> i64 {
        self.cycle_count * self.years_in_cycle
    }

    #[inline]
    pub const fn total_days(&self) -> i64 {
        self.cycle_count * self.days_in_cycle
    }

    /// Takes whole cycles out of `years`, returning the years left for finer levels.
    fn take_years(&mut self, years: i64) -> i64 {
        self.cycle_count = years / self.years_in_cycle;
        self.remainder_years = years - self.total_years();
        self.remainder_days = 0;
        self.remainder_years
    }

    /// Takes at most `max_count` whole cycles out of `days`, returning the days left.
    ///
    /// The cap keeps the last, possibly longer, block of the parent cycle from being read as
    /// one more whole cycle of this level.
    fn take_days(&mut self, days: i64, max_count: i64) -> i64 {
        self.cycle_count = (days / self.days_in_cycle).min(max_count);
        self.remainder_days = days - self.total_days();
        self.remainder_years = 0;
        self.remainder_days
    }
}

/// Result of decomposing a span through a configuration's levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleWalk {
    levels:    Vec<CycleLevel>,
    years:     i64,
    days:      i64,
    remainder: i64,
}

impl CycleWalk {
    /// Per-level counts, coarsest first
    pub fn levels(&self) -> &[CycleLevel] {
        &self.levels
    }

    /// Whole years covered by the counted cycles
    #[inline]
    pub const fn years(&self) -> i64 {
        self.years
    }

    /// Days in the counted cycles according to the hierarchy
    #[inline]
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Days (for a day walk) or years (for a year walk) that fit no whole cycle
    #[inline]
    pub const fn remainder(&self) -> i64 {
        self.remainder
    }
}

/// Where cycle counting starts on one side of the epoch.
///
/// `adjustment_years` and `adjustment_days` are the (negative) distance from the anchor year to
/// the epoch year that the cycle count overshoots by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleAnchor {
    date:             CalendarDate,
    adjustment_years: i64,
    adjustment_days:  i64,
}

impl CycleAnchor {
    pub const fn new(date: CalendarDate, adjustment_years: i64, adjustment_days: i64) -> Self {
        Self {
            date,
            adjustment_years,
            adjustment_days,
        }
    }

    #[inline]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    #[inline]
    pub const fn year(&self) -> i64 {
        self.date.year()
    }

    #[inline]
    pub const fn adjustment_years(&self) -> i64 {
        self.adjustment_years
    }

    #[inline]
    pub const fn adjustment_days(&self) -> i64 {
        self.adjustment_days
    }
}

/// The validated cycle recipe for one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCycleConfiguration", into = "RawCycleConfiguration")]
pub struct CycleConfiguration {
    calendar:                         Calendar,
    jdn_base_date:                    CalendarDate,
    start_for_positive_jdn:           CycleAnchor,
    start_for_negative_jdn:           CycleAnchor,
    levels:                           Vec<CycleLevel>,
    main_cycle_remaining_days_in_year: u16,
    main_cycle_ordinal_day_number:    u16,
}

impl CycleConfiguration {
    /// Validates and assembles a configuration.
    ///
    /// `jdn_base_date` is the instant whose Julian Day Number is exactly 0 and must be at noon.
    /// `start_for_positive_jdn` must fall in an earlier year, `start_for_negative_jdn` in a later
    /// one, both on the same month and day as the epoch. Levels run from coarsest to finest and
    /// end with a single standard year.
    ///
    /// # Errors
    /// Returns the first `ConfigurationError` found.
    pub fn new(
        jdn_base_date: CalendarDate,
        start_for_positive_jdn: CycleAnchor,
        start_for_negative_jdn: CycleAnchor,
        levels: Vec<CycleLevel>,
    ) -> Result<Self, ConfigurationError> {
        let calendar = jdn_base_date.calendar();
        validate_levels(calendar, &levels)?;
        if jdn_base_date.time() != TimeOfDay::NOON {
            return Err(ConfigurationError::EpochNotAtNoon {
                time: jdn_base_date.time(),
            });
        }

        let epoch_year = jdn_base_date.year();
        let positive = &start_for_positive_jdn;
        let negative = &start_for_negative_jdn;
        validate_anchor(&jdn_base_date, positive, positive.year() < epoch_year)?;
        validate_anchor(&jdn_base_date, negative, negative.year() > epoch_year)?;

        validate_adjustment(
            positive,
            positive.year() - epoch_year,
            -calendar.days_in_years(positive.year() + 1, epoch_year),
        )?;
        validate_adjustment(
            negative,
            epoch_year - negative.year(),
            -calendar.days_in_years(epoch_year, negative.year() - 1),
        )?;

        // The coarsest level must be a true period of the leap rule on both sides
        let main = levels[0];
        validate_main_cycle(
            positive.year(),
            main,
            calendar.days_in_years(positive.year() + 1, positive.year() + main.years_in_cycle),
        )?;
        validate_main_cycle(
            negative.year(),
            main,
            calendar.days_in_years(negative.year() - main.years_in_cycle, negative.year() - 1),
        )?;

        let epoch_is_leap = calendar.is_leap_year(epoch_year);
        let positive_ordinal =
            calendar.ordinal_day_number(epoch_is_leap, positive.date.month(), positive.date.day())?;
        let main_cycle_remaining_days_in_year = calendar.days_in_year(epoch_year) - positive_ordinal;
        let main_cycle_ordinal_day_number =
            calendar.ordinal_day_number(epoch_is_leap, negative.date.month(), negative.date.day())?;

        log::debug!(
            "validated {calendar} cycle configuration: epoch {jdn_base_date}, anchors {} and {}, {} levels",
            positive.year(),
            negative.year(),
            levels.len()
        );

        Ok(Self {
            calendar,
            jdn_base_date,
            start_for_positive_jdn,
            start_for_negative_jdn,
            levels,
            main_cycle_remaining_days_in_year,
            main_cycle_ordinal_day_number,
        })
    }

    /// Proleptic Gregorian: 400/100/4/1-year cycles around 24 November 4714 BCE.
    ///
    /// # Errors
    /// Returns `ConfigurationError` only if the constants are inconsistent.
    pub fn gregorian() -> Result<Self, ConfigurationError> {
        Self::from_constants(
            Calendar::Gregorian,
            (-4713, 11, 24),
            (-5200, -487, -177_873),
            (-4000, -713, -260_417),
            &[(400, 146_097), (100, 36_524), (4, 1_461), (1, 365)],
        )
    }

    /// Proleptic Julian: 4/1-year cycles around 1 January 4713 BCE.
    ///
    /// # Errors
    /// Returns `ConfigurationError` only if the constants are inconsistent.
    pub fn julian() -> Result<Self, ConfigurationError> {
        Self::from_constants(
            Calendar::Julian,
            (-4712, 1, 1),
            (-5200, -488, -178_242),
            (-4000, -712, -260_058),
            &[(4, 1_461), (1, 365)],
        )
    }

    /// Revised Julian: 900/100/4/1-year cycles, synchronised with the Gregorian calendar in 2000.
    ///
    /// # Errors
    /// Returns `ConfigurationError` only if the constants are inconsistent.
    pub fn revised_julian() -> Result<Self, ConfigurationError> {
        Self::from_constants(
            Calendar::RevisedJulian,
            (-4713, 11, 22),
            (-5400, -687, -250_922),
            (-4500, -213, -77_796),
            &[(900, 328_718), (100, 36_524), (4, 1_461), (1, 365)],
        )
    }

    /// Revised Goucher-Parker: 128/4/1-year cycles, synchronised with the Gregorian calendar
    /// in 2000.
    ///
    /// # Errors
    /// Returns `ConfigurationError` only if the constants are inconsistent.
    pub fn revised_goucher_parker() -> Result<Self, ConfigurationError> {
        Self::from_constants(
            Calendar::RevisedGoucherParker,
            (-4713, 11, 24),
            (-4736, -23, -8_400),
            (-4608, -105, -38_351),
            &[(128, 46_751), (4, 1_461), (1, 365)],
        )
    }

    fn from_constants(
        calendar: Calendar,
        (year, month, day): (i64, u8, u8),
        (positive_year, positive_years, positive_days): (i64, i64, i64),
        (negative_year, negative_years, negative_days): (i64, i64, i64),
        levels: &[(i64, i64)],
    ) -> Result<Self, ConfigurationError> {
        let noon = |year| CalendarDate::with_time(calendar, year, month, day, TimeOfDay::NOON);
        Self::new(
            noon(year)?,
            CycleAnchor::new(noon(positive_year)?, positive_years, positive_days),
            CycleAnchor::new(noon(negative_year)?, negative_years, negative_days),
            levels
                .iter()
                .map(|&(years, days)| CycleLevel::new(years, days))
                .collect(),
        )
    }

    #[inline]
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// The instant whose Julian Day Number is 0
    #[inline]
    pub const fn jdn_base_date(&self) -> CalendarDate {
        self.jdn_base_date
    }

    #[inline]
    pub const fn start_for_positive_jdn(&self) -> &CycleAnchor {
        &self.start_for_positive_jdn
    }

    #[inline]
    pub const fn start_for_negative_jdn(&self) -> &CycleAnchor {
        &self.start_for_negative_jdn
    }

    pub fn levels(&self) -> &[CycleLevel] {
        &self.levels
    }

    /// Days after the positive anchor's month/day in the epoch year
    #[inline]
    pub const fn main_cycle_remaining_days_in_year(&self) -> u16 {
        self.main_cycle_remaining_days_in_year
    }

    /// Ordinal of the negative anchor's month/day in the epoch year
    #[inline]
    pub const fn main_cycle_ordinal_day_number(&self) -> u16 {
        self.main_cycle_ordinal_day_number
    }

    /// Decomposes `years` (non-negative) into whole cycles, coarsest first.
    pub fn walk_years(&self, years: i64) -> CycleWalk {
        let mut levels = self.levels.clone();
        let mut remaining = years;
        for level in &mut levels {
            remaining = level.take_years(remaining);
        }
        let (years, days) = totals(&levels);
        CycleWalk {
            levels,
            years,
            days,
            remainder: remaining,
        }
    }

    /// Decomposes `days` (non-negative) into whole cycles, coarsest first.
    ///
    /// Below the coarsest level no more cycles are taken than fit in the parent, so the
    /// remainder may reach one day past `days_in_cycle` of the finest level (the leap day of a
    /// 4-year block, for instance).
    pub fn walk_days(&self, days: i64) -> CycleWalk {
        let mut levels = self.levels.clone();
        let mut remaining = days;
        let mut parent_years: Option<i64> = None;
        for level in &mut levels {
            let max_count = parent_years.map_or(i64::MAX, |parent| parent / level.years_in_cycle - 1);
            remaining = level.take_days(remaining, max_count);
            parent_years = Some(level.years_in_cycle);
        }
        let (years, days) = totals(&levels);
        CycleWalk {
            levels,
            years,
            days,
            remainder: remaining,
        }
    }
}

fn totals(levels: &[CycleLevel]) -> (i64, i64) {
    levels.iter().fold((0, 0), |(years, days), level| {
        (years + level.total_years(), days + level.total_days())
    })
}

fn validate_levels(calendar: Calendar, levels: &[CycleLevel]) -> Result<(), ConfigurationError> {
    let Some(finest) = levels.last() else {
        return Err(ConfigurationError::EmptyCycleList);
    };

    for (index, level) in levels.iter().enumerate() {
        if level.years_in_cycle <= 0 || level.days_in_cycle <= 0 {
            return Err(ConfigurationError::NonPositiveLevel {
                index,
                years: level.years_in_cycle,
                days: level.days_in_cycle,
            });
        }
    }

    for (index, pair) in levels.windows(2).enumerate() {
        let (coarser, finer) = (pair[0].years_in_cycle, pair[1].years_in_cycle);
        if finer >= coarser {
            return Err(ConfigurationError::NonMonotonicLevels {
                index: index + 1,
                coarser,
                finer,
            });
        }
        if coarser % finer != 0 {
            return Err(ConfigurationError::IndivisibleLevels {
                index: index + 1,
                coarser,
                finer,
            });
        }
    }

    if finest.years_in_cycle != 1 || finest.days_in_cycle != i64::from(calendar.days_in_standard_year()) {
        return Err(ConfigurationError::InvalidFinestLevel {
            years: finest.years_in_cycle,
            days:  finest.days_in_cycle,
        });
    }
    Ok(())
}

fn validate_anchor(epoch: &CalendarDate, anchor: &CycleAnchor, on_correct_side: bool) -> Result<(), ConfigurationError> {
    if anchor.date.calendar() != epoch.calendar() {
        return Err(ConfigurationError::CalendarMismatch {
            expected: epoch.calendar(),
            found:    anchor.date.calendar(),
        });
    }
    if !on_correct_side {
        return Err(ConfigurationError::AnchorOrder {
            anchor_year: anchor.year(),
            epoch_year:  epoch.year(),
        });
    }
    if (anchor.date.month(), anchor.date.day()) != (epoch.month(), epoch.day()) {
        return Err(ConfigurationError::AnchorDayMismatch {
            anchor_month: anchor.date.month(),
            anchor_day:   anchor.date.day(),
            epoch_month:  epoch.month(),
            epoch_day:    epoch.day(),
        });
    }
    Ok(())
}

fn validate_adjustment(anchor: &CycleAnchor, expected_years: i64, expected_days: i64) -> Result<(), ConfigurationError> {
    if anchor.adjustment_years != expected_years || anchor.adjustment_days != expected_days {
        return Err(ConfigurationError::AdjustmentMismatch {
            anchor_year: anchor.year(),
            expected_years,
            expected_days,
            years: anchor.adjustment_years,
            days: anchor.adjustment_days,
        });
    }
    Ok(())
}

fn validate_main_cycle(anchor_year: i64, main: CycleLevel, expected: i64) -> Result<(), ConfigurationError> {
    if main.days_in_cycle != expected {
        return Err(ConfigurationError::MainCycleMismatch {
            anchor_year,
            expected,
            found: main.days_in_cycle,
        });
    }
    Ok(())
}

#[derive(Serialize, Deserialize)]
struct RawCycleConfiguration {
    jdn_base_date:          CalendarDate,
    start_for_positive_jdn: CycleAnchor,
    start_for_negative_jdn: CycleAnchor,
    levels:                 Vec<CycleLevel>,
}

impl TryFrom<RawCycleConfiguration> for CycleConfiguration {
    type Error = ConfigurationError;

    fn try_from(raw: RawCycleConfiguration) -> Result<Self, Self::Error> {
        Self::new(
            raw.jdn_base_date,
            raw.start_for_positive_jdn,
            raw.start_for_negative_jdn,
            raw.levels,
        )
    }
}

impl From<CycleConfiguration> for RawCycleConfiguration {
    fn from(config: CycleConfiguration) -> Self {
        Self {
            jdn_base_date:          config.jdn_base_date,
            start_for_positive_jdn: config.start_for_positive_jdn,
            start_for_negative_jdn: config.start_for_negative_jdn,
            levels:                 config.levels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::noon;

    fn gregorian_levels() -> Vec<CycleLevel> {
        [(400, 146_097), (100, 36_524), (4, 1_461), (1, 365)]
            .iter()
            .map(|&(years, days)| CycleLevel::new(years, days))
            .collect()
    }

    fn gregorian_with(levels: Vec<CycleLevel>) -> Result<CycleConfiguration, ConfigurationError> {
        CycleConfiguration::new(
            noon(Calendar::Gregorian, -4713, 11, 24),
            CycleAnchor::new(noon(Calendar::Gregorian, -5200, 11, 24), -487, -177_873),
            CycleAnchor::new(noon(Calendar::Gregorian, -4000, 11, 24), -713, -260_417),
            levels,
        )
    }

    #[test]
    fn test_builtin_configurations_validate() {
        for calendar in Calendar::ALL {
            let config = calendar.configuration();
            assert!(config.is_ok(), "{calendar}: {config:?}");
            let config = config.unwrap();
            assert_eq!(config.calendar(), calendar);
            assert_eq!(config.jdn_base_date().time(), TimeOfDay::NOON);
        }
    }

    #[test]
    fn test_gregorian_anchor_positions() {
        let config = CycleConfiguration::gregorian().unwrap();
        assert_eq!(config.main_cycle_remaining_days_in_year(), 37);
        assert_eq!(config.main_cycle_ordinal_day_number(), 328);
        assert_eq!(config.start_for_positive_jdn().year(), -5200);
        assert_eq!(config.start_for_negative_jdn().adjustment_days(), -260_417);
    }

    #[test]
    fn test_empty_levels_rejected() {
        assert_eq!(gregorian_with(Vec::new()), Err(ConfigurationError::EmptyCycleList));
    }

    #[test]
    fn test_invalid_levels_rejected() {
        struct TestCase {
            levels:      Vec<(i64, i64)>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                levels:      vec![(100, 36_524), (400, 146_097), (4, 1_461), (1, 365)],
                description: "levels out of order",
            },
            TestCase {
                levels:      vec![(400, 146_097), (400, 146_097), (1, 365)],
                description: "repeated level",
            },
            TestCase {
                levels:      vec![(400, 146_097), (3, 1_096), (1, 365)],
                description: "3 does not divide 400",
            },
            TestCase {
                levels:      vec![(400, 146_097), (100, 36_524), (4, 1_461)],
                description: "finest level is not a single year",
            },
            TestCase {
                levels:      vec![(400, 146_097), (0, 0), (1, 365)],
                description: "zero-length level",
            },
            TestCase {
                levels:      vec![(400, 146_096), (100, 36_524), (4, 1_461), (1, 365)],
                description: "main cycle one day short",
            },
            TestCase {
                levels:      vec![(400, 146_097), (1, 366)],
                description: "finest level is a leap year",
            },
        ];

        for case in &cases {
            let levels = case
                .levels
                .iter()
                .map(|&(years, days)| CycleLevel::new(years, days))
                .collect();
            assert!(gregorian_with(levels).is_err(), "Expected failure for: {}", case.description);
        }
    }

    #[test]
    fn test_anchor_validation() {
        let on_wrong_side = CycleConfiguration::new(
            noon(Calendar::Gregorian, -4713, 11, 24),
            CycleAnchor::new(noon(Calendar::Gregorian, -4000, 11, 24), 713, 260_417),
            CycleAnchor::new(noon(Calendar::Gregorian, -4000, 11, 24), -713, -260_417),
            gregorian_levels(),
        );
        assert!(matches!(on_wrong_side, Err(ConfigurationError::AnchorOrder { .. })));

        let wrong_adjustment = CycleConfiguration::new(
            noon(Calendar::Gregorian, -4713, 11, 24),
            CycleAnchor::new(noon(Calendar::Gregorian, -5200, 11, 24), -487, -177_872),
            CycleAnchor::new(noon(Calendar::Gregorian, -4000, 11, 24), -713, -260_417),
            gregorian_levels(),
        );
        assert!(matches!(
            wrong_adjustment,
            Err(ConfigurationError::AdjustmentMismatch {
                expected_days: -177_873,
                ..
            })
        ));

        let wrong_day = CycleConfiguration::new(
            noon(Calendar::Gregorian, -4713, 11, 24),
            CycleAnchor::new(noon(Calendar::Gregorian, -5200, 11, 25), -487, -177_873),
            CycleAnchor::new(noon(Calendar::Gregorian, -4000, 11, 24), -713, -260_417),
            gregorian_levels(),
        );
        assert!(matches!(wrong_day, Err(ConfigurationError::AnchorDayMismatch { .. })));

        let mixed = CycleConfiguration::new(
            noon(Calendar::Gregorian, -4713, 11, 24),
            CycleAnchor::new(noon(Calendar::Julian, -5200, 11, 24), -487, -177_873),
            CycleAnchor::new(noon(Calendar::Gregorian, -4000, 11, 24), -713, -260_417),
            gregorian_levels(),
        );
        assert!(matches!(mixed, Err(ConfigurationError::CalendarMismatch { .. })));
    }

    #[test]
    fn test_epoch_must_be_noon() {
        let midnight = CalendarDate::new(Calendar::Gregorian, -4713, 11, 24).unwrap();
        let result = CycleConfiguration::new(
            midnight,
            CycleAnchor::new(noon(Calendar::Gregorian, -5200, 11, 24), -487, -177_873),
            CycleAnchor::new(noon(Calendar::Gregorian, -4000, 11, 24), -713, -260_417),
            gregorian_levels(),
        );
        assert!(matches!(result, Err(ConfigurationError::EpochNotAtNoon { .. })));
    }

    #[test]
    fn test_walk_years_is_mixed_radix() {
        let config = CycleConfiguration::gregorian().unwrap();
        let walk = config.walk_years(1_234);
        let counts: Vec<i64> = walk.levels().iter().map(CycleLevel::cycle_count).collect();
        assert_eq!(counts, vec![3, 0, 8, 2]);
        assert_eq!(walk.years(), 1_234);
        assert_eq!(walk.remainder(), 0);
        assert_eq!(walk.days(), 3 * 146_097 + 8 * 1_461 + 2 * 365);
    }

    #[test]
    fn test_walk_days_caps_inner_levels() {
        let config = CycleConfiguration::gregorian().unwrap();

        // Last day of a 400-year cycle: three centuries, 24 quads, three years, 365 days left
        let walk = config.walk_days(146_096);
        let counts: Vec<i64> = walk.levels().iter().map(CycleLevel::cycle_count).collect();
        assert_eq!(counts, vec![0, 3, 24, 3]);
        assert_eq!(walk.remainder(), 365);
        assert_eq!(walk.years(), 399);

        // Last day of a 4-year block
        let walk = config.walk_days(1_460);
        assert_eq!(walk.years(), 3);
        assert_eq!(walk.remainder(), 365);
    }

    #[test]
    fn test_walks_do_not_touch_configuration() {
        let config = CycleConfiguration::julian().unwrap();
        let before = config.clone();
        let walk = config.walk_years(10_001);
        assert_eq!(walk.levels()[0].cycle_count(), 2_500);
        assert_eq!(config, before);
        assert!(config.levels().iter().all(|level| level.cycle_count() == 0));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = CycleConfiguration::revised_julian().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("cycle_count"));
        let parsed: CycleConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_serde_validates() {
        let config = CycleConfiguration::gregorian().unwrap();
        let mut value = serde_json::to_value(&config).unwrap();
        value["levels"] = serde_json::json!([]);
        let result: Result<CycleConfiguration, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }
}
