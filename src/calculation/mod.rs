//! Calculation logic for the clinic pay engine.
//!
//! This module contains the day/night boundary rule, per-calendar-day
//! segmentation with weekday vs weekend/holiday classification, the
//! normalization of malformed shift ranges, the shift payment calculator,
//! and payroll aggregation over a billing period.

mod day_boundary;
mod day_detection;
mod normalization;
mod payroll;
mod shift_payment;

pub use day_boundary::{
    DAY_START, MIDNIGHT, NIGHT_START, PhaseWindow, day_phase, split_at_day_boundaries,
};
pub use day_detection::{
    DaySegment, DaySegments, PeriodSegment, day_segments, segment_by_day, segment_shift,
};
pub use normalization::{NormalizedInterval, normalize_interval};
pub use payroll::calculate_payroll;
pub use shift_payment::{ShiftPaymentCalculator, calculate_shift_payment};
