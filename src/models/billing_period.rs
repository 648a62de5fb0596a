//! Billing period model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range that payroll is summed over.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::models::BillingPeriod;
/// use chrono::NaiveDate;
///
/// let period = BillingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())); // start date
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())); // end date
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl BillingPeriod {
    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_date_before_start() {
        let period = BillingPeriod {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        };
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
    }

    #[test]
    fn test_single_day_period() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap();
        let period = BillingPeriod {
            start_date: day,
            end_date: day,
        };
        assert!(period.contains_date(day));
        assert!(!period.contains_date(day.succ_opt().unwrap()));
    }

    #[test]
    fn test_billing_period_deserialization() {
        let period: BillingPeriod =
            serde_json::from_str(r#"{"start_date":"2025-01-01","end_date":"2025-01-15"}"#).unwrap();
        assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }
}
