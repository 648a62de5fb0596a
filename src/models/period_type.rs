//! Billing period types.
//!
//! Every paid hour falls into exactly one [`PeriodType`], the product of two
//! independent axes: the [`DayPhase`] of the clock time and the
//! [`DayCategory`] of the calendar date.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Whether a clock time falls in day hours or night hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPhase {
    /// 09:00 up to (not including) 21:00.
    Day,
    /// 21:00 to midnight and midnight up to 09:00.
    Night,
}

/// Rate category of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday, Sunday, or any holiday in the calendar.
    WeekendOrHoliday,
}

impl fmt::Display for DayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayCategory::Weekday => write!(f, "Weekday"),
            DayCategory::WeekendOrHoliday => write!(f, "Weekend/Holiday"),
        }
    }
}

/// The unit of rate lookup.
///
/// Serialized using the persisted rate keys.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::models::{DayCategory, DayPhase, PeriodType};
///
/// let period = PeriodType::from_parts(DayCategory::WeekendOrHoliday, DayPhase::Night);
/// assert_eq!(period, PeriodType::WeekendHolidayNight);
/// assert_eq!(period.to_string(), "WEEKEND_HOLIDAY_NIGHT");
/// assert_eq!("WEEKDAY_DAY".parse::<PeriodType>().unwrap(), PeriodType::WeekdayDay);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodType {
    /// Day hours on a weekday.
    WeekdayDay,
    /// Night hours on a weekday.
    WeekdayNight,
    /// Day hours on a weekend or holiday.
    WeekendHolidayDay,
    /// Night hours on a weekend or holiday.
    WeekendHolidayNight,
}

impl PeriodType {
    /// All period types in breakdown order.
    pub const ALL: [PeriodType; 4] = [
        PeriodType::WeekdayDay,
        PeriodType::WeekdayNight,
        PeriodType::WeekendHolidayDay,
        PeriodType::WeekendHolidayNight,
    ];

    /// Combines a date category and a clock phase into a period type.
    pub fn from_parts(category: DayCategory, phase: DayPhase) -> Self {
        match (category, phase) {
            (DayCategory::Weekday, DayPhase::Day) => PeriodType::WeekdayDay,
            (DayCategory::Weekday, DayPhase::Night) => PeriodType::WeekdayNight,
            (DayCategory::WeekendOrHoliday, DayPhase::Day) => PeriodType::WeekendHolidayDay,
            (DayCategory::WeekendOrHoliday, DayPhase::Night) => PeriodType::WeekendHolidayNight,
        }
    }

    /// The persisted rate key for this period type.
    pub fn key(&self) -> &'static str {
        match self {
            PeriodType::WeekdayDay => "WEEKDAY_DAY",
            PeriodType::WeekdayNight => "WEEKDAY_NIGHT",
            PeriodType::WeekendHolidayDay => "WEEKEND_HOLIDAY_DAY",
            PeriodType::WeekendHolidayNight => "WEEKEND_HOLIDAY_NIGHT",
        }
    }

    /// Returns the date category half of this period type.
    pub fn day_category(&self) -> DayCategory {
        match self {
            PeriodType::WeekdayDay | PeriodType::WeekdayNight => DayCategory::Weekday,
            PeriodType::WeekendHolidayDay | PeriodType::WeekendHolidayNight => {
                DayCategory::WeekendOrHoliday
            }
        }
    }

    /// Returns the clock phase half of this period type.
    pub fn day_phase(&self) -> DayPhase {
        match self {
            PeriodType::WeekdayDay | PeriodType::WeekendHolidayDay => DayPhase::Day,
            PeriodType::WeekdayNight | PeriodType::WeekendHolidayNight => DayPhase::Night,
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PeriodType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PeriodType::ALL
            .into_iter()
            .find(|p| p.key() == s.trim())
            .ok_or_else(|| EngineError::UnknownPeriodType {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_covers_all_combinations() {
        assert_eq!(
            PeriodType::from_parts(DayCategory::Weekday, DayPhase::Day),
            PeriodType::WeekdayDay
        );
        assert_eq!(
            PeriodType::from_parts(DayCategory::Weekday, DayPhase::Night),
            PeriodType::WeekdayNight
        );
        assert_eq!(
            PeriodType::from_parts(DayCategory::WeekendOrHoliday, DayPhase::Day),
            PeriodType::WeekendHolidayDay
        );
        assert_eq!(
            PeriodType::from_parts(DayCategory::WeekendOrHoliday, DayPhase::Night),
            PeriodType::WeekendHolidayNight
        );
    }

    #[test]
    fn test_parts_round_trip_through_accessors() {
        for period in PeriodType::ALL {
            assert_eq!(
                PeriodType::from_parts(period.day_category(), period.day_phase()),
                period
            );
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            " WEEKEND_HOLIDAY_DAY ".parse::<PeriodType>().unwrap(),
            PeriodType::WeekendHolidayDay
        );
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = "HOLIDAY_EVENING".parse::<PeriodType>().unwrap_err();
        match err {
            EngineError::UnknownPeriodType { value } => assert_eq!(value, "HOLIDAY_EVENING"),
            other => panic!("Expected UnknownPeriodType, got {:?}", other),
        }
    }

    #[test]
    fn test_serializes_as_rate_key() {
        let json = serde_json::to_string(&PeriodType::WeekdayNight).unwrap();
        assert_eq!(json, "\"WEEKDAY_NIGHT\"");
        let parsed: PeriodType = serde_json::from_str("\"WEEKEND_HOLIDAY_NIGHT\"").unwrap();
        assert_eq!(parsed, PeriodType::WeekendHolidayNight);
    }
}
