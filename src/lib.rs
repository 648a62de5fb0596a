//! Shift payment engine for clinic doctor scheduling.
//!
//! This crate computes how many hours of a shift fall into each billing
//! period (weekday or weekend/holiday, day or night) and what the shift pays,
//! given an hourly rate table and the clinic's holiday calendar.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
