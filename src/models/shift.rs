//! Shift models.
//!
//! [`ShiftInterval`] is the engine's input: two local wall-clock timestamps.
//! [`Shift`] is the upstream shift record that wraps one.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const MILLIS_PER_HOUR: i64 = 3_600_000;
const NANOS_PER_HOUR: i64 = 3_600_000_000_000;

/// Converts a duration to fractional hours.
///
/// Exact to the nanosecond for spans up to roughly 292 years; longer spans
/// are measured in milliseconds.
pub(crate) fn duration_to_hours(duration: Duration) -> Decimal {
    match duration.num_nanoseconds() {
        Some(nanos) => Decimal::new(nanos, 0) / Decimal::new(NANOS_PER_HOUR, 0),
        None => Decimal::new(duration.num_milliseconds(), 0) / Decimal::new(MILLIS_PER_HOUR, 0),
    }
}

/// The day category the clinic declared for a shift when it was scheduled.
///
/// Used for display. The calculator recomputes classification per calendar
/// day and never reads this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredDayCategory {
    /// A regular working day.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
    /// A day in the holiday calendar.
    Holiday,
}

impl DeclaredDayCategory {
    /// The legacy "start day is a holiday" flag some callers still pass.
    pub fn is_holiday_hint(&self) -> bool {
        !matches!(self, DeclaredDayCategory::Weekday)
    }
}

/// A shift's start and end in the clinic's local wall-clock time.
///
/// The interval may be malformed (`end <= start`); the calculator normalizes
/// such intervals rather than rejecting them.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::models::ShiftInterval;
/// use rust_decimal::Decimal;
///
/// let interval = ShiftInterval::parse("2025-01-28T21:00", "2025-01-29 09:00:00").unwrap();
/// assert!(!interval.is_malformed());
/// assert_eq!(interval.duration_hours(), Decimal::new(12, 0));
///
/// assert!(ShiftInterval::parse("tomorrow", "2025-01-29T09:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    /// When the shift starts.
    pub start: NaiveDateTime,
    /// When the shift ends.
    pub end: NaiveDateTime,
}

impl ShiftInterval {
    /// Creates an interval without validating it.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parses an interval from two timestamp strings.
    ///
    /// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]`, the same with a space instead of
    /// `T`, and RFC 3339 timestamps (whose offset is dropped, keeping the wall
    /// clock as written).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimestamp`] for anything else.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        Ok(Self {
            start: parse_timestamp(start)?,
            end: parse_timestamp(end)?,
        })
    }

    /// Returns true if the end is not after the start.
    pub fn is_malformed(&self) -> bool {
        self.end <= self.start
    }

    /// The signed duration of the interval in hours, as stored.
    pub fn duration_hours(&self) -> Decimal {
        duration_to_hours(self.end - self.start)
    }
}

/// Parses a local wall-clock timestamp.
pub fn parse_timestamp(value: &str) -> EngineResult<NaiveDateTime> {
    let trimmed = value.trim();

    if let Some(parsed) = TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(parsed);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_local())
        .map_err(|e| EngineError::InvalidTimestamp {
            value: value.to_string(),
            message: format!("expected YYYY-MM-DDTHH:MM[:SS] ({})", e),
        })
}

/// A scheduled shift as delivered by the shift store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The doctor working the shift.
    pub doctor_id: String,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
    /// The category the clinic declared for the shift's start day.
    pub day_category: DeclaredDayCategory,
}

impl Shift {
    /// The shift's time interval.
    pub fn interval(&self) -> ShiftInterval {
        ShiftInterval::new(self.start_time, self.end_time)
    }

    /// The calendar date the shift starts on.
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }
}
