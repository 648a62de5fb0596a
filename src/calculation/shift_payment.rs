//! Shift payment calculation.
//!
//! This module turns a shift interval into a [`PaymentResult`]: the hours
//! that fell into each billing period, the rate applied to each, and totals.
//! The calculation is a pure function of the interval, the [`RateTable`] and
//! the [`HolidayIndex`]; it keeps no state between calls.

use std::collections::BTreeMap;

use chrono::Duration;
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{
    HolidayIndex, PaymentBreakdownEntry, PaymentResult, PaymentWarning, PeriodType, RateTable,
    ShiftInterval, WarningCode, checked_total, duration_to_hours,
};

use super::day_boundary::split_at_day_boundaries;
use super::day_detection::day_segments;
use super::normalization::normalize_interval;

/// Computes shift payments against one rate table and one holiday calendar.
///
/// The calculator only borrows its inputs, so a single rate table and
/// holiday index can back any number of calculators across threads.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::calculation::ShiftPaymentCalculator;
/// use clinic_pay_engine::models::{HolidayIndex, PeriodType, RateTable, ShiftInterval};
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::new([
///     (PeriodType::WeekdayDay, Decimal::new(100, 0)),
///     (PeriodType::WeekdayNight, Decimal::new(150, 0)),
/// ]);
/// let holidays = HolidayIndex::empty();
/// let calculator = ShiftPaymentCalculator::new(&rates, &holidays);
///
/// // Tuesday 08:00 to 10:00: one night hour, one day hour
/// let interval = ShiftInterval::parse("2025-01-28T08:00", "2025-01-28T10:00").unwrap();
/// let result = calculator.calculate(&interval).unwrap();
///
/// assert_eq!(result.hours_for(PeriodType::WeekdayNight), Decimal::ONE);
/// assert_eq!(result.hours_for(PeriodType::WeekdayDay), Decimal::ONE);
/// assert_eq!(result.total_amount, Decimal::new(250, 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShiftPaymentCalculator<'a> {
    rates: &'a RateTable,
    holidays: &'a HolidayIndex,
}

impl<'a> ShiftPaymentCalculator<'a> {
    /// Creates a calculator over the given rates and holidays.
    pub fn new(rates: &'a RateTable, holidays: &'a HolidayIndex) -> Self {
        Self { rates, holidays }
    }

    /// The rate table in use.
    pub fn rates(&self) -> &'a RateTable {
        self.rates
    }

    /// The holiday calendar in use.
    pub fn holidays(&self) -> &'a HolidayIndex {
        self.holidays
    }

    /// Calculates the payment for one shift.
    ///
    /// A malformed interval (`end <= start`) is normalized by moving the end
    /// forward whole days; a missing rate counts as zero. Both are reported
    /// as warnings on the result.
    ///
    /// # Errors
    ///
    /// Returns an error only if the interval cannot be normalized or
    /// segmented within the supported date range, or if an amount or total
    /// does not fit in a `Decimal`.
    pub fn calculate(&self, interval: &ShiftInterval) -> EngineResult<PaymentResult> {
        self.calculate_inner(interval, None)
    }

    /// Calculates the payment for one shift, accepting the legacy
    /// "start day is a holiday" flag.
    ///
    /// The flag never changes the result: classification always comes from
    /// the holiday calendar, per calendar day. When the flag disagrees with
    /// the calendar's view of the start date a
    /// [`WarningCode::HolidayHintMismatch`] warning is attached.
    pub fn calculate_with_hint(
        &self,
        interval: &ShiftInterval,
        start_day_is_holiday: bool,
    ) -> EngineResult<PaymentResult> {
        self.calculate_inner(interval, Some(start_day_is_holiday))
    }

    fn calculate_inner(
        &self,
        interval: &ShiftInterval,
        hint: Option<bool>,
    ) -> EngineResult<PaymentResult> {
        let mut warnings = Vec::new();

        // Step 1: Normalize malformed ranges
        let normalized = normalize_interval(interval)?;
        if normalized.days_advanced > 0 {
            warnings.push(PaymentWarning {
                code: WarningCode::RangeNormalized,
                message: format!(
                    "Shift end {} was not after start {}; treated as {}",
                    interval.end, interval.start, normalized.end
                ),
            });
        }

        // Step 2: Compare the legacy hint against the calendar
        if let Some(hinted) = hint {
            let start_date = normalized.start.date();
            let computed = self.holidays.is_weekend_or_holiday(start_date);
            if hinted != computed {
                warn!(
                    date = %start_date,
                    hinted,
                    computed,
                    "Start-day holiday flag disagrees with holiday calendar"
                );
                warnings.push(PaymentWarning {
                    code: WarningCode::HolidayHintMismatch,
                    message: format!(
                        "Caller flagged {} as {}, calendar says {}",
                        start_date,
                        if hinted { "weekend/holiday" } else { "weekday" },
                        self.holidays.day_category(start_date)
                    ),
                });
            }
        }

        // Step 3: Classify each calendar day and accumulate per period
        let mut durations: BTreeMap<PeriodType, Duration> = BTreeMap::new();
        let mut day_count = 0usize;
        for day in day_segments(normalized.start, normalized.end) {
            let day = day?;
            let category = self.holidays.day_category(day.date);
            for window in split_at_day_boundaries(day.start, day.end) {
                let period = PeriodType::from_parts(category, window.phase);
                let accumulated = durations.entry(period).or_insert_with(Duration::zero);
                *accumulated = *accumulated + (window.end - window.start);
            }
            day_count += 1;
        }

        // Step 4: Apply rates
        let mut breakdown = Vec::new();
        for period in PeriodType::ALL {
            let Some(duration) = durations.get(&period) else {
                continue;
            };

            if !self.rates.contains(period) {
                warn!(period_type = %period, "No rate configured, using 0");
                warnings.push(PaymentWarning {
                    code: WarningCode::MissingRate,
                    message: format!("No rate configured for {}; its hours are paid at 0", period),
                });
            }

            breakdown.push(PaymentBreakdownEntry::new(
                period,
                duration_to_hours(*duration),
                self.rates.rate(period),
            )?);
        }

        let total_hours = checked_total(breakdown.iter().map(|e| e.hours), "total hours")?;
        let total_amount = checked_total(breakdown.iter().map(|e| e.amount), "total amount")?;

        debug!(
            start = %normalized.start,
            end = %normalized.end,
            day_count,
            total_hours = %total_hours,
            total_amount = %total_amount,
            "Calculated shift payment"
        );

        Ok(PaymentResult {
            total_hours,
            total_amount,
            breakdown,
            warnings,
        })
    }
}

/// Calculates the payment for one shift.
///
/// Shorthand for `ShiftPaymentCalculator::new(rates, holidays).calculate(interval)`.
pub fn calculate_shift_payment(
    interval: &ShiftInterval,
    rates: &RateTable,
    holidays: &HolidayIndex,
) -> EngineResult<PaymentResult> {
    ShiftPaymentCalculator::new(rates, holidays).calculate(interval)
}
