//! Hourly rate table.
//!
//! A [`RateTable`] maps each [`PeriodType`] to an hourly rate. It is built once
//! from persisted rate rows and then shared read-only by every calculation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::PeriodType;

/// A persisted rate row as it comes out of the rate store.
///
/// The key is kept as a string so rows written by older versions of the
/// scheduling app with unknown keys can be skipped instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRow {
    /// The period type key (e.g. `WEEKDAY_DAY`).
    pub period_type: String,
    /// Currency units per hour.
    pub hourly_rate: Decimal,
}

/// Immutable mapping from period type to hourly rate.
///
/// A missing period type is treated as a rate of zero.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::models::{PeriodType, RateTable};
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::new([(PeriodType::WeekdayDay, Decimal::new(12000, 2))]);
/// assert_eq!(rates.rate(PeriodType::WeekdayDay), Decimal::new(12000, 2));
/// assert_eq!(rates.rate(PeriodType::WeekdayNight), Decimal::ZERO);
/// assert!(!rates.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    rates: BTreeMap<PeriodType, Decimal>,
}

impl RateTable {
    /// Creates a rate table from `(period, rate)` pairs.
    pub fn new(rates: impl IntoIterator<Item = (PeriodType, Decimal)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
        }
    }

    /// Builds a rate table from persisted rate rows.
    ///
    /// Rows with an unknown key are skipped. When a key appears more than
    /// once the last row wins.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] if any recognised row has a
    /// negative rate.
    pub fn from_rows(rows: &[RateRow]) -> EngineResult<Self> {
        let mut rates = BTreeMap::new();

        for row in rows {
            let period = match row.period_type.parse::<PeriodType>() {
                Ok(period) => period,
                Err(error) => {
                    warn!(period_type = %row.period_type, %error, "Skipping rate row");
                    continue;
                }
            };

            if row.hourly_rate < Decimal::ZERO {
                return Err(EngineError::InvalidRate {
                    period_type: row.period_type.clone(),
                    message: format!("rate must not be negative, got {}", row.hourly_rate),
                });
            }

            if let Some(previous) = rates.insert(period, row.hourly_rate) {
                warn!(
                    period_type = %period,
                    previous = %previous,
                    replacement = %row.hourly_rate,
                    "Duplicate rate row, keeping the last one"
                );
            }
        }

        Ok(Self { rates })
    }

    /// Returns the hourly rate for a period type, or zero when not configured.
    pub fn rate(&self, period: PeriodType) -> Decimal {
        self.rates.get(&period).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns true if the period type has a configured rate.
    pub fn contains(&self, period: PeriodType) -> bool {
        self.rates.contains_key(&period)
    }

    /// Period types without a configured rate, in breakdown order.
    pub fn missing_periods(&self) -> Vec<PeriodType> {
        PeriodType::ALL
            .into_iter()
            .filter(|p| !self.contains(*p))
            .collect()
    }

    /// Returns true if all four period types have a rate.
    pub fn is_complete(&self) -> bool {
        self.missing_periods().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn row(key: &str, rate: &str) -> RateRow {
        RateRow {
            period_type: key.to_string(),
            hourly_rate: dec(rate),
        }
    }

    #[test]
    fn test_from_rows_full_table() {
        let rates = RateTable::from_rows(&[
            row("WEEKDAY_DAY", "100"),
            row("WEEKDAY_NIGHT", "150"),
            row("WEEKEND_HOLIDAY_DAY", "200"),
            row("WEEKEND_HOLIDAY_NIGHT", "250"),
        ])
        .unwrap();

        assert!(rates.is_complete());
        assert_eq!(rates.rate(PeriodType::WeekdayNight), dec("150"));
        assert_eq!(rates.rate(PeriodType::WeekendHolidayNight), dec("250"));
    }

    #[test]
    fn test_missing_key_defaults_to_zero() {
        let rates = RateTable::from_rows(&[row("WEEKDAY_DAY", "100")]).unwrap();

        assert_eq!(rates.rate(PeriodType::WeekendHolidayDay), Decimal::ZERO);
        assert_eq!(
            rates.missing_periods(),
            vec![
                PeriodType::WeekdayNight,
                PeriodType::WeekendHolidayDay,
                PeriodType::WeekendHolidayNight,
            ]
        );
    }

    #[test]
    fn test_unknown_key_is_skipped() {
        let rates =
            RateTable::from_rows(&[row("OVERTIME", "999"), row("WEEKDAY_DAY", "100")]).unwrap();

        assert_eq!(rates.rate(PeriodType::WeekdayDay), dec("100"));
        assert_eq!(rates.missing_periods().len(), 3);
    }

    #[test]
    fn test_duplicate_key_keeps_last_row() {
        let rates =
            RateTable::from_rows(&[row("WEEKDAY_DAY", "100"), row("WEEKDAY_DAY", "110")]).unwrap();

        assert_eq!(rates.rate(PeriodType::WeekdayDay), dec("110"));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let err = RateTable::from_rows(&[row("WEEKDAY_NIGHT", "-5")]).unwrap_err();

        match err {
            EngineError::InvalidRate { period_type, .. } => {
                assert_eq!(period_type, "WEEKDAY_NIGHT")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_rate_is_configured() {
        let rates = RateTable::from_rows(&[row("WEEKDAY_DAY", "0")]).unwrap();

        assert!(rates.contains(PeriodType::WeekdayDay));
        assert_eq!(rates.rate(PeriodType::WeekdayDay), Decimal::ZERO);
    }

    #[test]
    fn test_rate_row_deserializes_numeric_and_string_rates() {
        let yaml = "- period_type: WEEKDAY_DAY\n  hourly_rate: \"120.50\"\n- period_type: WEEKDAY_NIGHT\n  hourly_rate: 150\n";
        let rows: Vec<RateRow> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(rows[0].hourly_rate, dec("120.50"));
        assert_eq!(rows[1].hourly_rate, dec("150"));
    }
}
