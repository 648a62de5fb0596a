//! Payroll aggregation over a billing period.
//!
//! Each shift is calculated independently; the summary only adds results up.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::EngineResult;
use crate::models::{
    BillingPeriod, PaymentBreakdownEntry, PayrollSummary, PeriodType, Shift, ShiftPayment,
    checked_add, checked_total,
};

use super::shift_payment::ShiftPaymentCalculator;

/// Sums a doctor's shift payments over a billing period.
///
/// Only shifts belonging to `doctor_id` whose start date lies in `period` are
/// included. Per-period hours are merged across shifts; the merged amount for
/// a period is the sum of the per-shift amounts.
///
/// # Errors
///
/// Fails as a whole if any included shift fails to calculate; no partial
/// summary is returned.
pub fn calculate_payroll(
    doctor_id: &str,
    period: &BillingPeriod,
    shifts: &[Shift],
    calculator: &ShiftPaymentCalculator<'_>,
) -> EngineResult<PayrollSummary> {
    let mut selected: Vec<&Shift> = shifts
        .iter()
        .filter(|s| s.doctor_id == doctor_id && period.contains_date(s.date()))
        .collect();
    selected.sort_by_key(|s| s.start_time);

    let mut payments = Vec::with_capacity(selected.len());
    let mut merged: BTreeMap<PeriodType, (Decimal, Decimal)> = BTreeMap::new();

    for shift in selected {
        let result =
            calculator.calculate_with_hint(&shift.interval(), shift.day_category.is_holiday_hint())?;

        for entry in &result.breakdown {
            let (hours, amount) = merged
                .entry(entry.period_type)
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            *hours = checked_add(*hours, entry.hours, "payroll hours")?;
            *amount = checked_add(*amount, entry.amount, "payroll amount")?;
        }

        debug!(
            shift_id = %shift.id,
            total_amount = %result.total_amount,
            "Added shift to payroll"
        );

        payments.push(ShiftPayment {
            shift_id: shift.id.clone(),
            date: shift.date(),
            result,
        });
    }

    let breakdown: Vec<PaymentBreakdownEntry> = merged
        .into_iter()
        .map(|(period_type, (hours, amount))| PaymentBreakdownEntry {
            period_type,
            hours,
            rate: calculator.rates().rate(period_type),
            amount,
        })
        .collect();

    let total_hours = checked_total(
        payments.iter().map(|p| p.result.total_hours),
        "payroll total hours",
    )?;
    let total_amount = checked_total(
        payments.iter().map(|p| p.result.total_amount),
        "payroll total amount",
    )?;

    info!(
        doctor_id,
        start_date = %period.start_date,
        end_date = %period.end_date,
        shift_count = payments.len(),
        total_amount = %total_amount,
        "Payroll calculated"
    );

    Ok(PayrollSummary {
        doctor_id: doctor_id.to_string(),
        period: *period,
        shifts: payments,
        breakdown,
        total_hours,
        total_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{DeclaredDayCategory, HolidayIndex, RateTable};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn shift(id: &str, doctor_id: &str, start: (&str, &str), end: (&str, &str)) -> Shift {
        Shift {
            id: id.to_string(),
            doctor_id: doctor_id.to_string(),
            start_time: make_datetime(start.0, start.1),
            end_time: make_datetime(end.0, end.1),
            day_category: DeclaredDayCategory::Weekday,
        }
    }

    fn january() -> BillingPeriod {
        BillingPeriod {
            start_date: make_date("2025-01-01"),
            end_date: make_date("2025-01-31"),
        }
    }

    fn full_rates() -> RateTable {
        RateTable::new([
            (PeriodType::WeekdayDay, dec("100")),
            (PeriodType::WeekdayNight, dec("150")),
            (PeriodType::WeekendHolidayDay, dec("200")),
            (PeriodType::WeekendHolidayNight, dec("250")),
        ])
    }

    #[test]
    fn test_sums_only_the_doctors_shifts_in_period() {
        let rates = full_rates();
        let holidays = HolidayIndex::empty();
        let calculator = ShiftPaymentCalculator::new(&rates, &holidays);

        let shifts = vec![
            // Tuesday day shift: 8h × $100
            shift("s1", "dr_lin", ("2025-01-28", "09:00:00"), ("2025-01-28", "17:00:00")),
            // Tuesday overnight: 3h + 9h weekday night × $150
            shift("s2", "dr_lin", ("2025-01-28", "21:00:00"), ("2025-01-29", "09:00:00")),
            // Other doctor
            shift("s3", "dr_wu", ("2025-01-28", "09:00:00"), ("2025-01-28", "17:00:00")),
            // Outside the period
            shift("s4", "dr_lin", ("2025-02-03", "09:00:00"), ("2025-02-03", "17:00:00")),
        ];

        let summary = calculate_payroll("dr_lin", &january(), &shifts, &calculator).unwrap();

        assert_eq!(summary.shifts.len(), 2);
        assert_eq!(summary.total_hours, dec("20"));
        assert_eq!(summary.total_amount, dec("2600"));
        assert_eq!(summary.breakdown.len(), 2);
        assert_eq!(summary.breakdown[0].period_type, PeriodType::WeekdayDay);
        assert_eq!(summary.breakdown[1].hours, dec("12"));
        assert_eq!(summary.breakdown[1].amount, dec("1800"));
    }

    #[test]
    fn test_overflowing_payroll_total_is_an_error() {
        let rates = RateTable::new([(PeriodType::WeekdayDay, Decimal::MAX)]);
        let holidays = HolidayIndex::empty();
        let calculator = ShiftPaymentCalculator::new(&rates, &holidays);

        // Each 1h shift pays exactly Decimal::MAX on its own
        let shifts = vec![
            shift("s1", "dr_lin", ("2025-01-28", "09:00:00"), ("2025-01-28", "10:00:00")),
            shift("s2", "dr_lin", ("2025-01-29", "09:00:00"), ("2025-01-29", "10:00:00")),
        ];

        let result = calculate_payroll("dr_lin", &january(), &shifts, &calculator);

        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_shift_starting_on_last_day_is_included() {
        let rates = full_rates();
        let holidays = HolidayIndex::empty();
        let calculator = ShiftPaymentCalculator::new(&rates, &holidays);

        // Friday 2025-01-31 21:00 into Saturday
        let shifts = vec![shift(
            "s1",
            "dr_lin",
            ("2025-01-31", "21:00:00"),
            ("2025-02-01", "09:00:00"),
        )];

        let summary = calculate_payroll("dr_lin", &january(), &shifts, &calculator).unwrap();

        assert_eq!(summary.shifts.len(), 1);
        // 3h weekday night + 9h weekend night
        assert_eq!(summary.total_amount, dec("2700"));
    }

    #[test]
    fn test_shifts_are_ordered_by_start() {
        let rates = full_rates();
        let holidays = HolidayIndex::empty();
        let calculator = ShiftPaymentCalculator::new(&rates, &holidays);

        let shifts = vec![
            shift("late", "dr_lin", ("2025-01-29", "09:00:00"), ("2025-01-29", "10:00:00")),
            shift("early", "dr_lin", ("2025-01-27", "09:00:00"), ("2025-01-27", "10:00:00")),
        ];

        let summary = calculate_payroll("dr_lin", &january(), &shifts, &calculator).unwrap();

        let ids: Vec<&str> = summary.shifts.iter().map(|s| s.shift_id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late"]);
    }

    #[test]
    fn test_no_shifts_gives_empty_summary() {
        let rates = full_rates();
        let holidays = HolidayIndex::empty();
        let calculator = ShiftPaymentCalculator::new(&rates, &holidays);

        let summary = calculate_payroll("dr_lin", &january(), &[], &calculator).unwrap();

        assert!(summary.shifts.is_empty());
        assert!(summary.breakdown.is_empty());
        assert_eq!(summary.total_amount, Decimal::ZERO);
    }
}
