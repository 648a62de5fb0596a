//! Malformed range normalization.
//!
//! Legacy shift rows sometimes store an overnight shift without rolling the
//! end date forward, e.g. `21:00 -> 09:00` on the same day. Such intervals are
//! reinterpreted as ending one or more whole days later.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftInterval;

/// A forward interval together with how far its end was moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedInterval {
    /// Start of the shift, unchanged.
    pub start: NaiveDateTime,
    /// End of the shift, strictly after `start`.
    pub end: NaiveDateTime,
    /// Whole days added to the stored end (0 for well-formed input).
    pub days_advanced: i64,
}

/// Returns a forward interval for `interval`.
///
/// When `end <= start` the end is advanced by the smallest number of whole
/// days that puts it after the start.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if advancing the end would leave
/// the supported date range.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::calculation::normalize_interval;
/// use clinic_pay_engine::models::ShiftInterval;
///
/// let stored = ShiftInterval::parse("2099-01-01T21:00", "2099-01-01T09:00").unwrap();
/// let normalized = normalize_interval(&stored).unwrap();
///
/// assert_eq!(normalized.days_advanced, 1);
/// assert_eq!(normalized.end.to_string(), "2099-01-02 09:00:00");
/// ```
pub fn normalize_interval(interval: &ShiftInterval) -> EngineResult<NormalizedInterval> {
    let ShiftInterval { start, end } = *interval;

    if end > start {
        return Ok(NormalizedInterval {
            start,
            end,
            days_advanced: 0,
        });
    }

    // num_days truncates, so one extra day is always needed to get strictly past start
    let days_advanced = (start - end).num_days() + 1;
    let normalized_end = end
        .checked_add_signed(Duration::days(days_advanced))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "cannot advance shift end {} by {} day(s): date out of range",
                end, days_advanced
            ),
        })?;

    debug!(
        start = %start,
        stored_end = %end,
        normalized_end = %normalized_end,
        days_advanced,
        "Normalized malformed shift range"
    );

    Ok(NormalizedInterval {
        start,
        end: normalized_end,
        days_advanced,
    })
}
