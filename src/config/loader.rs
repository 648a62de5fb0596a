//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading clinic
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::calculation::ShiftPaymentCalculator;
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayIndex, RateTable};

use super::types::{ClinicConfig, ClinicMetadata, HolidaysConfig, RatesConfig};

/// Loads and provides access to clinic configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/clinic/
/// ├── clinic.yaml    # Clinic metadata
/// ├── rates.yaml     # Hourly rate per period type
/// └── holidays.yaml  # Exact and recurring holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use clinic_pay_engine::config::ConfigLoader;
/// use clinic_pay_engine::models::ShiftInterval;
///
/// let loader = ConfigLoader::load("./config/clinic")?;
/// let interval = ShiftInterval::parse("2025-01-28T21:00", "2025-01-29T09:00")?;
/// let result = loader.calculator().calculate(&interval)?;
/// println!("{} owes {}", loader.clinic().name, result.total_amount);
/// # Ok::<(), clinic_pay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ClinicConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a required file is missing
    /// - [`EngineError::ConfigParseError`] if a file is not valid YAML or is
    ///   missing a field
    /// - [`EngineError::InvalidRate`] / [`EngineError::InvalidHolidayDate`]
    ///   if a row holds an unusable value
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ClinicMetadata>(&path.join("clinic.yaml"))?;
        let rates_config = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;
        let holidays_config = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;

        let rates = RateTable::from_rows(&rates_config.rates)?;
        let holidays = HolidayIndex::from_holidays(&holidays_config.holidays)?;

        let missing = rates.missing_periods();
        if !missing.is_empty() {
            warn!(
                path = %path.display(),
                missing = ?missing,
                "Rate table is incomplete; missing periods will pay 0"
            );
        }

        info!(
            clinic = %metadata.name,
            exact_holidays = holidays.exact_dates().len(),
            recurring_holidays = holidays.recurring_dates().len(),
            "Loaded clinic configuration"
        );

        Ok(Self {
            config: ClinicConfig::new(metadata, rates, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying clinic configuration.
    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    /// Returns the clinic metadata.
    pub fn clinic(&self) -> &ClinicMetadata {
        self.config.clinic()
    }

    /// Returns the loaded rate table.
    pub fn rate_table(&self) -> &RateTable {
        self.config.rates()
    }

    /// Returns the loaded holiday index.
    pub fn holiday_index(&self) -> &HolidayIndex {
        self.config.holidays()
    }

    /// Returns a calculator borrowing this configuration.
    pub fn calculator(&self) -> ShiftPaymentCalculator<'_> {
        ShiftPaymentCalculator::new(self.config.rates(), self.config.holidays())
    }
}
