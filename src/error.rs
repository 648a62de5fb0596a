//! Error types for the clinic pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only unrecoverable input problems surface here: malformed shift ranges and
//! missing rates are absorbed by the calculator and never become errors.

use thiserror::Error;

/// The main error type for the clinic pay engine.
///
/// # Example
///
/// ```
/// use clinic_pay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift timestamp could not be parsed.
    #[error("Invalid timestamp '{value}': {message}")]
    InvalidTimestamp {
        /// The raw value that was rejected.
        value: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// A holiday calendar entry did not hold a usable date.
    #[error("Invalid holiday date '{value}': {message}")]
    InvalidHolidayDate {
        /// The raw date value.
        value: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// A period type key did not name one of the four billing periods.
    #[error("Unknown period type '{value}'")]
    UnknownPeriodType {
        /// The raw key that was rejected.
        value: String,
    },

    /// A rate row held a value the engine cannot use.
    #[error("Invalid rate for '{period_type}': {message}")]
    InvalidRate {
        /// The period type key of the offending row.
        period_type: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_timestamp_displays_value_and_message() {
        let error = EngineError::InvalidTimestamp {
            value: "yesterday".to_string(),
            message: "expected YYYY-MM-DDTHH:MM".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid timestamp 'yesterday': expected YYYY-MM-DDTHH:MM"
        );
    }

    #[test]
    fn test_invalid_holiday_date_displays_value() {
        let error = EngineError::InvalidHolidayDate {
            value: "2025-13-01".to_string(),
            message: "month out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid holiday date '2025-13-01': month out of range"
        );
    }

    #[test]
    fn test_invalid_rate_displays_period_type() {
        let error = EngineError::InvalidRate {
            period_type: "WEEKDAY_DAY".to_string(),
            message: "rate must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rate for 'WEEKDAY_DAY': rate must not be negative"
        );
    }

    #[test]
    fn test_unknown_period_type_displays_value() {
        let error = EngineError::UnknownPeriodType {
            value: "HOLIDAY_EVENING".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown period type 'HOLIDAY_EVENING'");
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "date out of range".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: date out of range");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_timestamp() -> EngineResult<()> {
            Err(EngineError::InvalidTimestamp {
                value: "x".to_string(),
                message: "bad".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_timestamp()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
