//! Command-line front end for the clinic pay engine.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::Subscriber};
use uuid::Uuid;

use clinic_pay_engine::calculation::calculate_payroll;
use clinic_pay_engine::config::ConfigLoader;
use clinic_pay_engine::models::{BillingPeriod, Shift, ShiftInterval};

/// Calculate doctor shift payments from a clinic configuration
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Enable logging (filtered by RUST_LOG)
    #[arg(long, global = true)]
    log: bool,

    /// Clinic configuration directory
    #[arg(long, global = true, default_value = "config/clinic")]
    config: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate the payment for one shift
    Calculate {
        /// Shift start, local time (YYYY-MM-DDTHH:MM[:SS])
        #[arg(long)]
        start: String,
        /// Shift end, local time (YYYY-MM-DDTHH:MM[:SS])
        #[arg(long)]
        end: String,
        /// Legacy flag: the caller believes the start day is a holiday
        #[arg(long)]
        holiday_hint: Option<bool>,
    },

    /// Sum one doctor's shift payments over a billing period
    Payroll {
        /// JSON file holding an array of shifts
        #[arg(long)]
        shifts: String,
        /// Doctor identifier
        #[arg(long)]
        doctor: String,
        /// First day of the period (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Last day of the period (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    info!(correlation_id = %correlation_id, config = %cli.config, "Starting run");

    let loader = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config))?;
    let calculator = loader.calculator();

    let output = match cli.cmd {
        Commands::Calculate {
            start,
            end,
            holiday_hint,
        } => {
            let interval = ShiftInterval::parse(&start, &end)?;
            let result = match holiday_hint {
                Some(hint) => calculator.calculate_with_hint(&interval, hint)?,
                None => calculator.calculate(&interval)?,
            };
            serde_json::to_string_pretty(&result)?
        }
        Commands::Payroll {
            shifts,
            doctor,
            from,
            to,
        } => {
            anyhow::ensure!(from <= to, "--from {} is after --to {}", from, to);

            let raw = fs::read_to_string(&shifts).with_context(|| format!("reading {}", shifts))?;
            let records: Vec<Shift> =
                serde_json::from_str(&raw).with_context(|| format!("parsing {}", shifts))?;
            let period = BillingPeriod {
                start_date: from,
                end_date: to,
            };

            let summary = calculate_payroll(&doctor, &period, &records, &calculator)?;
            serde_json::to_string_pretty(&summary)?
        }
    };

    println!("{}", output);

    info!(
        correlation_id = %correlation_id,
        duration_us = started.elapsed().as_micros() as u64,
        "Run completed"
    );

    Ok(())
}
