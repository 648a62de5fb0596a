//! Configuration loading and management for the clinic pay engine.
//!
//! This module provides functionality to load a clinic configuration from
//! YAML files: clinic metadata, the hourly rate rows, and the holiday
//! calendar.
//!
//! # Example
//!
//! ```no_run
//! use clinic_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clinic").unwrap();
//! println!("Loaded clinic: {}", config.clinic().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ClinicConfig, ClinicMetadata, HolidaysConfig, RatesConfig};
