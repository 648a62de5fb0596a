//! Shift segmentation by calendar day and billing period.
//!
//! A shift is first cut at every midnight it crosses, so that each piece lies
//! on exactly one calendar date. Each piece is then cut at the 09:00 and 21:00
//! boundaries and labelled with the period type for that date.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayIndex, PeriodType, duration_to_hours};

use super::day_boundary::{MIDNIGHT, split_at_day_boundaries};
use super::normalization::NormalizedInterval;

/// The part of a shift that falls on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySegment {
    /// The calendar date of this segment.
    pub date: NaiveDate,
    /// Start of the segment (inclusive).
    pub start: NaiveDateTime,
    /// End of the segment (exclusive); at most the following midnight.
    pub end: NaiveDateTime,
}

/// A classified sub-window of a shift: one date, one phase, one period type.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::calculation::segment_shift;
/// use clinic_pay_engine::models::{HolidayIndex, PeriodType, ShiftInterval};
/// use clinic_pay_engine::calculation::normalize_interval;
/// use rust_decimal::Decimal;
///
/// // Tuesday 20:00 to Wednesday 01:00
/// let interval = ShiftInterval::parse("2025-01-28T20:00", "2025-01-29T01:00").unwrap();
/// let normalized = normalize_interval(&interval).unwrap();
/// let segments = segment_shift(&normalized, &HolidayIndex::empty()).unwrap();
///
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0].period_type, PeriodType::WeekdayDay);
/// assert_eq!(segments[1].period_type, PeriodType::WeekdayNight);
/// assert_eq!(segments[2].hours, Decimal::new(1, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSegment {
    /// The calendar date the window lies on.
    pub date: NaiveDate,
    /// Start of the window (inclusive).
    pub start: NaiveDateTime,
    /// End of the window (exclusive).
    pub end: NaiveDateTime,
    /// The billing period for this window.
    pub period_type: PeriodType,
    /// Duration of the window in hours.
    pub hours: Decimal,
}

/// Iterator over the per-date pieces of an interval, created by
/// [`day_segments`].
///
/// Yields one piece at a time, so memory use does not grow with the length
/// of the interval.
#[derive(Debug, Clone)]
pub struct DaySegments {
    next_start: NaiveDateTime,
    end: NaiveDateTime,
    failed: bool,
}

impl Iterator for DaySegments {
    type Item = EngineResult<DaySegment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_start >= self.end {
            return None;
        }

        let date = self.next_start.date();
        let Some(next_midnight) = date.succ_opt().map(|next| next.and_time(MIDNIGHT)) else {
            self.failed = true;
            return Some(Err(EngineError::CalculationError {
                message: format!("no midnight after {}: date out of range", date),
            }));
        };

        let segment_end = next_midnight.min(self.end);
        let segment = DaySegment {
            date,
            start: self.next_start,
            end: segment_end,
        };
        self.next_start = segment_end;

        Some(Ok(segment))
    }
}

/// Lazily splits `[start, end)` at every midnight it crosses.
///
/// An empty or backwards interval yields nothing. A midnight past the last
/// representable date yields one [`EngineError::CalculationError`] and ends
/// the iteration.
pub fn day_segments(start: NaiveDateTime, end: NaiveDateTime) -> DaySegments {
    DaySegments {
        next_start: start,
        end,
        failed: false,
    }
}

/// Splits `[start, end)` at every midnight it crosses.
///
/// Returns one segment per calendar date touched, in chronological order.
/// An empty or backwards interval yields no segments.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if a midnight past the last
/// representable date would be needed.
pub fn segment_by_day(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Vec<DaySegment>> {
    day_segments(start, end).collect()
}

/// Classifies a normalized shift into period-typed windows.
///
/// The weekday/weekend-or-holiday decision is made separately for every
/// calendar date the shift touches.
pub fn segment_shift(
    interval: &NormalizedInterval,
    holidays: &HolidayIndex,
) -> EngineResult<Vec<PeriodSegment>> {
    let mut segments = Vec::new();

    for day in day_segments(interval.start, interval.end) {
        let day = day?;
        let category = holidays.day_category(day.date);

        for window in split_at_day_boundaries(day.start, day.end) {
            segments.push(PeriodSegment {
                date: day.date,
                start: window.start,
                end: window.end,
                period_type: PeriodType::from_parts(category, window.phase),
                hours: duration_to_hours(window.end - window.start),
            });
        }
    }

    Ok(segments)
}
