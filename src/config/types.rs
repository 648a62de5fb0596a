//! Configuration types for the clinic pay engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{Holiday, HolidayIndex, RateRow, RateTable};

/// Metadata about the clinic.
#[derive(Debug, Clone, Deserialize)]
pub struct ClinicMetadata {
    /// The clinic's display name.
    pub name: String,
    /// ISO 4217 code of the currency rates are expressed in.
    pub currency: String,
}

/// Rates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// One row per period type.
    pub rates: Vec<RateRow>,
}

/// Holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The clinic's holiday calendar.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The complete clinic configuration loaded from YAML files.
///
/// Rates and holidays are held in their lookup forms, ready to be borrowed
/// by a calculator.
#[derive(Debug, Clone)]
pub struct ClinicConfig {
    metadata: ClinicMetadata,
    rates: RateTable,
    holidays: HolidayIndex,
}

impl ClinicConfig {
    /// Creates a ClinicConfig from its component parts.
    pub fn new(metadata: ClinicMetadata, rates: RateTable, holidays: HolidayIndex) -> Self {
        Self {
            metadata,
            rates,
            holidays,
        }
    }

    /// Returns the clinic metadata.
    pub fn clinic(&self) -> &ClinicMetadata {
        &self.metadata
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the holiday index.
    pub fn holidays(&self) -> &HolidayIndex {
        &self.holidays
    }
}
