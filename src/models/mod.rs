//! Core data models for the clinic pay engine.
//!
//! This module contains the value types passed into and returned from the
//! calculator: period types, rate tables, the holiday index, shift intervals
//! and payment results.

mod billing_period;
mod holiday_index;
mod payment_result;
mod period_type;
mod rate_table;
mod shift;

pub use billing_period::BillingPeriod;
pub use holiday_index::{Holiday, HolidayIndex, MonthDay};
pub use payment_result::{
    PaymentBreakdownEntry, PaymentResult, PaymentWarning, PayrollSummary, ShiftPayment,
    WarningCode,
};
pub use period_type::{DayCategory, DayPhase, PeriodType};
pub use rate_table::{RateRow, RateTable};
pub use shift::{DeclaredDayCategory, Shift, ShiftInterval, parse_timestamp};

pub(crate) use payment_result::{checked_add, checked_total};
pub(crate) use shift::duration_to_hours;
