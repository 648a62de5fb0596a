//! Day/night boundary rule.
//!
//! Every civil day is split at two fixed clock times. Hours in
//! `[09:00, 21:00)` are day hours; everything else is night. The boundary
//! does not depend on the weekday or on holidays.

use chrono::{NaiveDateTime, NaiveTime};

use crate::models::DayPhase;

/// Start of a civil day.
pub const MIDNIGHT: NaiveTime = match NaiveTime::from_hms_opt(0, 0, 0) {
    Some(t) => t,
    None => panic!("invalid MIDNIGHT"),
};

/// Clock time at which day hours begin.
pub const DAY_START: NaiveTime = match NaiveTime::from_hms_opt(9, 0, 0) {
    Some(t) => t,
    None => panic!("invalid DAY_START"),
};

/// Clock time at which night hours begin.
pub const NIGHT_START: NaiveTime = match NaiveTime::from_hms_opt(21, 0, 0) {
    Some(t) => t,
    None => panic!("invalid NIGHT_START"),
};

/// Returns the phase a clock time falls in.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::calculation::day_phase;
/// use clinic_pay_engine::models::DayPhase;
/// use chrono::NaiveTime;
///
/// assert_eq!(day_phase(NaiveTime::from_hms_opt(8, 59, 59).unwrap()), DayPhase::Night);
/// assert_eq!(day_phase(NaiveTime::from_hms_opt(9, 0, 0).unwrap()), DayPhase::Day);
/// assert_eq!(day_phase(NaiveTime::from_hms_opt(21, 0, 0).unwrap()), DayPhase::Night);
/// ```
pub fn day_phase(time: NaiveTime) -> DayPhase {
    if time >= DAY_START && time < NIGHT_START {
        DayPhase::Day
    } else {
        DayPhase::Night
    }
}

/// A window within one calendar day that lies entirely in one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseWindow {
    /// Start of the window (inclusive).
    pub start: NaiveDateTime,
    /// End of the window (exclusive).
    pub end: NaiveDateTime,
    /// Day or night.
    pub phase: DayPhase,
}

/// Splits a window at the 09:00 and 21:00 boundaries of its start date.
///
/// `start` and `end` must lie on the same calendar day, with `end` allowed to
/// be the following midnight. Returns up to three windows in chronological
/// order; zero-length pieces are dropped.
pub fn split_at_day_boundaries(start: NaiveDateTime, end: NaiveDateTime) -> Vec<PhaseWindow> {
    let date = start.date();
    let day_start = date.and_time(DAY_START);
    let night_start = date.and_time(NIGHT_START);

    let cuts = [
        (start, end.min(day_start), DayPhase::Night),
        (start.max(day_start), end.min(night_start), DayPhase::Day),
        (start.max(night_start), end, DayPhase::Night),
    ];

    cuts.into_iter()
        .filter(|(from, to, _)| from < to)
        .map(|(start, end, phase)| PhaseWindow { start, end, phase })
        .collect()
}
