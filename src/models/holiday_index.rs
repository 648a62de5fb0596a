//! Holiday calendar lookup.
//!
//! The clinic calendar holds two kinds of holiday: exact dates that apply to
//! one year only, and recurring month-days that apply every year. The
//! [`HolidayIndex`] keeps them in separate sets so the two checks stay
//! independent.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{DayCategory, DeclaredDayCategory};

/// A month and day that recur every year, written `MM-DD`.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::models::MonthDay;
/// use chrono::NaiveDate;
///
/// let new_year: MonthDay = "01-01".parse().unwrap();
/// assert!(new_year.matches(NaiveDate::from_ymd_opt(2031, 1, 1).unwrap()));
/// assert_eq!(new_year.to_string(), "01-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a month-day, or `None` if no year has that date.
    ///
    /// February 29 is accepted; it only matches in leap years.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year, so every month-day that exists in any year exists in it
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Self { month, day })
    }

    /// The month-day of a calendar date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// The month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day of month (1-31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns true if `date` falls on this month-day.
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| EngineError::InvalidHolidayDate {
            value: s.to_string(),
            message: message.to_string(),
        };

        let (month, day) = s.trim().split_once('-').ok_or_else(|| invalid("expected MM-DD"))?;
        let month = month.parse::<u32>().map_err(|_| invalid("month is not a number"))?;
        let day = day.parse::<u32>().map_err(|_| invalid("day is not a number"))?;

        MonthDay::new(month, day).ok_or_else(|| invalid("no such month-day"))
    }
}

impl TryFrom<String> for MonthDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

/// A holiday calendar entry as it comes out of the holiday store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Display name (e.g. "New Year's Day").
    pub name: String,
    /// `YYYY-MM-DD`, or `MM-DD` for recurring entries.
    pub date: String,
    /// Whether the holiday repeats on the same month-day every year.
    #[serde(default)]
    pub recurring: bool,
}

/// Exact and recurring holidays derived from the clinic calendar.
///
/// A date is a holiday if it is in the exact set or its month-day is in the
/// recurring set.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::models::{HolidayIndex, MonthDay};
/// use chrono::NaiveDate;
///
/// let index = HolidayIndex::new(
///     [NaiveDate::from_ymd_opt(2025, 1, 28).unwrap()],
///     [MonthDay::new(1, 1).unwrap()],
/// );
///
/// assert!(index.is_holiday(NaiveDate::from_ymd_opt(2025, 1, 28).unwrap()));
/// assert!(!index.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 28).unwrap()));
/// assert!(index.is_holiday(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayIndex {
    exact_dates: BTreeSet<NaiveDate>,
    recurring_dates: BTreeSet<MonthDay>,
}

impl HolidayIndex {
    /// Creates an index from exact dates and recurring month-days.
    pub fn new(
        exact_dates: impl IntoIterator<Item = NaiveDate>,
        recurring_dates: impl IntoIterator<Item = MonthDay>,
    ) -> Self {
        Self {
            exact_dates: exact_dates.into_iter().collect(),
            recurring_dates: recurring_dates.into_iter().collect(),
        }
    }

    /// An index with no holidays; only weekends count as non-weekdays.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the index from holiday calendar entries.
    ///
    /// Recurring entries contribute only their month-day and may be written
    /// either as `YYYY-MM-DD` or `MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHolidayDate`] if an entry's date cannot
    /// be parsed.
    pub fn from_holidays(holidays: &[Holiday]) -> EngineResult<Self> {
        let mut index = Self::empty();

        for holiday in holidays {
            let raw = holiday.date.trim();
            match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) if holiday.recurring => {
                    index.recurring_dates.insert(MonthDay::of(date));
                }
                Ok(date) => {
                    index.exact_dates.insert(date);
                }
                Err(_) if holiday.recurring => {
                    index.recurring_dates.insert(raw.parse()?);
                }
                Err(e) => {
                    return Err(EngineError::InvalidHolidayDate {
                        value: holiday.date.clone(),
                        message: format!("'{}': {}", holiday.name, e),
                    });
                }
            }
        }

        Ok(index)
    }

    /// One-off holiday dates.
    pub fn exact_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.exact_dates
    }

    /// Month-days that are holidays every year.
    pub fn recurring_dates(&self) -> &BTreeSet<MonthDay> {
        &self.recurring_dates
    }

    /// Returns true if there are no holidays at all.
    pub fn is_empty(&self) -> bool {
        self.exact_dates.is_empty() && self.recurring_dates.is_empty()
    }

    /// Returns true if `date` is listed as a one-off holiday.
    pub fn is_exact_holiday(&self, date: NaiveDate) -> bool {
        self.exact_dates.contains(&date)
    }

    /// Returns true if `date` falls on a recurring holiday.
    pub fn is_recurring_holiday(&self, date: NaiveDate) -> bool {
        self.recurring_dates.contains(&MonthDay::of(date))
    }

    /// Returns true if `date` is an exact or recurring holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.is_exact_holiday(date) || self.is_recurring_holiday(date)
    }

    /// Returns true if `date` is a Saturday, a Sunday or a holiday.
    pub fn is_weekend_or_holiday(&self, date: NaiveDate) -> bool {
        is_weekend(date) || self.is_holiday(date)
    }

    /// The rate category of `date`.
    pub fn day_category(&self, date: NaiveDate) -> DayCategory {
        if self.is_weekend_or_holiday(date) {
            DayCategory::WeekendOrHoliday
        } else {
            DayCategory::Weekday
        }
    }

    /// The display category of `date`. Holidays take precedence over weekends.
    pub fn declared_category(&self, date: NaiveDate) -> DeclaredDayCategory {
        if self.is_holiday(date) {
            DeclaredDayCategory::Holiday
        } else if is_weekend(date) {
            DeclaredDayCategory::Weekend
        } else {
            DeclaredDayCategory::Weekday
        }
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
