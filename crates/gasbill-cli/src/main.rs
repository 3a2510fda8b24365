//! Interactive terminal bill calculator
//!
//! Any input not supplied as a flag is prompted for, re-asking on
//! malformed values. The breakdown is rendered with two decimals and the
//! configured currency symbol.

#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use gasbill_core::{AppConfig, BillingPeriod};
use rust_decimal::Decimal;
use tracing::debug;

/// Natural gas bill calculator.
#[derive(Parser)]
#[command(
    name = "gasbill-cli",
    version,
    about = "Compute a natural-gas bill from two meter readings"
)]
struct Cli {
    /// Initial meter reading in cubic meters.
    #[arg(long)]
    first_index: Option<Decimal>,

    /// Final meter reading in cubic meters.
    #[arg(long)]
    last_index: Option<Decimal>,

    /// First day of the billing period (YYYY-MM-DD).
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Last day of the billing period (YYYY-MM-DD).
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .init();
}

/// Prompt until a well-formed date is entered.
fn prompt_date(label: &str) -> anyhow::Result<NaiveDate> {
    let stdin = io::stdin();
    loop {
        print!("{} (YYYY-MM-DD): ", label);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed while waiting for {}", label);
        }

        match NaiveDate::parse_from_str(line.trim(), "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => println!("Invalid date format. Please use YYYY-MM-DD."),
        }
    }
}

/// Prompt until a non-negative decimal is entered.
fn prompt_reading(label: &str) -> anyhow::Result<Decimal> {
    let stdin = io::stdin();
    loop {
        print!("{}: ", label);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed while waiting for {}", label);
        }

        match line.trim().parse::<Decimal>() {
            Ok(value) if value < Decimal::ZERO => println!("Value cannot be negative."),
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load().context("failed to load configuration")?;
    debug!(tariff = ?config.tariff, "Loaded tariff");

    println!("\nNatural Gas Bill Calculator");
    println!("{}", "-".repeat(30));

    let start_date = match cli.start_date {
        Some(date) => date,
        None => prompt_date("Start date")?,
    };
    let end_date = match cli.end_date {
        Some(date) => date,
        None => prompt_date("End date")?,
    };

    let first_index = match cli.first_index {
        Some(value) => value,
        None => prompt_reading("Initial meter reading (m³)")?,
    };
    let last_index = match cli.last_index {
        Some(value) => value,
        None => prompt_reading("Final meter reading (m³)")?,
    };

    let period = BillingPeriod::new(start_date, end_date);
    let bill = config
        .tariff
        .calculate_bill(first_index, last_index, &period)?;

    let display = &config.display;
    println!("\nNatural Gas Bill Calculation");
    println!("{}", "-".repeat(30));
    println!("Period: {} to {}", start_date, end_date);
    println!("Consumption: {:.2} m³", bill.consumption_m3.round_dp(2));
    println!(
        "Daily consumption: {:.2} m³",
        bill.daily_consumption_m3.round_dp(2)
    );
    println!(
        "Projected monthly consumption: {:.2} m³",
        bill.monthly_projected_consumption_m3.round_dp(2)
    );
    println!(
        "Energy consumed: {:.2} kWh",
        bill.energy_consumed_kwh.round_dp(2)
    );
    println!("Daily cost: {}", display.format_amount(bill.daily_cost));
    println!(
        "Projected monthly bill: {}",
        display.format_amount(bill.projected_monthly_cost)
    );
    println!(
        "Total cost for period: {}",
        display.format_amount(bill.total_cost_for_period)
    );

    Ok(())
}
