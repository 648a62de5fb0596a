//! Payment result models.
//!
//! [`PaymentResult`] is what the calculator returns for one shift;
//! [`PayrollSummary`] aggregates many of them for one doctor.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{BillingPeriod, PeriodType};

/// Sums decimal values, failing instead of overflowing.
pub(crate) fn checked_total(
    values: impl IntoIterator<Item = Decimal>,
    what: &str,
) -> EngineResult<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| checked_add(acc, value, what))
}

/// Adds two decimal values, failing instead of overflowing.
pub(crate) fn checked_add(lhs: Decimal, rhs: Decimal, what: &str) -> EngineResult<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| EngineError::CalculationError {
        message: format!("{} overflowed adding {} to {}", what, rhs, lhs),
    })
}

/// Hours and pay that fell into one period type.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::models::{PaymentBreakdownEntry, PeriodType};
/// use rust_decimal::Decimal;
///
/// let entry = PaymentBreakdownEntry::new(PeriodType::WeekdayNight, Decimal::new(9, 0), Decimal::new(150, 0))?;
/// assert_eq!(entry.amount, Decimal::new(1350, 0));
/// # Ok::<(), clinic_pay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdownEntry {
    /// The period type.
    #[serde(rename = "type")]
    pub period_type: PeriodType,
    /// Hours accumulated in this period across the whole shift.
    pub hours: Decimal,
    /// The hourly rate applied.
    pub rate: Decimal,
    /// `hours * rate`.
    pub amount: Decimal,
}

impl PaymentBreakdownEntry {
    /// Creates an entry, deriving the amount from hours and rate.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] if `hours * rate` does not
    /// fit in a `Decimal`.
    pub fn new(period_type: PeriodType, hours: Decimal, rate: Decimal) -> EngineResult<Self> {
        let amount = hours
            .checked_mul(rate)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "{} amount overflowed: {} hours at rate {}",
                    period_type, hours, rate
                ),
            })?;

        Ok(Self {
            period_type,
            hours,
            rate,
            amount,
        })
    }
}

/// Kinds of non-fatal condition noticed during a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    /// The end was not after the start and was moved forward by whole days.
    RangeNormalized,
    /// Hours fell into a period type with no configured rate.
    MissingRate,
    /// The caller's start-day holiday flag disagreed with the calendar.
    HolidayHintMismatch,
}

/// A non-fatal condition a caller may want to surface.
///
/// Warnings never affect hours or amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentWarning {
    /// What kind of condition this is.
    pub code: WarningCode,
    /// A human-readable description.
    pub message: String,
}

/// The payment breakdown for a single shift.
///
/// Serialized in camelCase: `{ totalHours, totalAmount, breakdown, warnings }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    /// Sum of all breakdown hours; equals the normalized shift duration.
    pub total_hours: Decimal,
    /// Sum of all breakdown amounts.
    pub total_amount: Decimal,
    /// Entries with non-zero hours, in [`PeriodType::ALL`] order.
    pub breakdown: Vec<PaymentBreakdownEntry>,
    /// Non-fatal conditions noticed along the way.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PaymentWarning>,
}

impl PaymentResult {
    /// The breakdown entry for a period type, if any hours fell into it.
    pub fn entry(&self, period: PeriodType) -> Option<&PaymentBreakdownEntry> {
        self.breakdown.iter().find(|e| e.period_type == period)
    }

    /// Hours in a period type, zero when absent.
    pub fn hours_for(&self, period: PeriodType) -> Decimal {
        self.entry(period).map_or(Decimal::ZERO, |e| e.hours)
    }

    /// Amount for a period type, zero when absent.
    pub fn amount_for(&self, period: PeriodType) -> Decimal {
        self.entry(period).map_or(Decimal::ZERO, |e| e.amount)
    }

    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// One shift's contribution to a payroll summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPayment {
    /// The shift's identifier.
    pub shift_id: String,
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// The shift's payment breakdown.
    pub result: PaymentResult,
}

/// Pay owed to one doctor over a billing period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The doctor the summary is for.
    pub doctor_id: String,
    /// The period summed over.
    pub period: BillingPeriod,
    /// Per-shift results, in start-time order.
    pub shifts: Vec<ShiftPayment>,
    /// Per-period totals merged across all shifts.
    pub breakdown: Vec<PaymentBreakdownEntry>,
    /// Sum of all shift hours.
    pub total_hours: Decimal,
    /// Sum of all shift amounts.
    pub total_amount: Decimal,
}
