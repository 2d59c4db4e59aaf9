//! `promise`: expected delivery date calculator.
//!
//! Thin wrapper over [`promise_engine`]. The `calc` subcommand mirrors the
//! library's text boundary (any invalid input prints `Invalid Data` with a
//! zero exit); with `--json` it switches to the typed estimate and fails
//! loudly instead.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use promise_engine::{
    bank_holidays_for, calculate_delivery_date, estimate_delivery, parse_order,
    DELIVERY_DATE_FORMAT,
};

#[derive(Parser)]
#[command(name = "promise", version, about = "Expected delivery date calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the expected delivery date for one order
    Calc {
        /// Order date and time, "D/MM/YYYY HH:mm:ss"
        order_date: String,
        /// Lead time in days
        #[arg(allow_hyphen_values = true)]
        lead_time: String,
        /// Daily dispatch cut-off, "HH:mm:ss"
        cut_off: String,
        /// "true" to restrict delivery to working days
        working_day_only: String,
        /// Print the full estimate as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in sample orders
    Demo,
    /// Show the observed bank holidays for the window around a date
    Holidays {
        /// Anchor date, "D/MM/YYYY"
        date: String,
        /// Print the dates as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Calc {
            order_date,
            lead_time,
            cut_off,
            working_day_only,
            json,
        } => calc(&order_date, &lead_time, &cut_off, &working_day_only, json),
        Command::Demo => {
            demo();
            Ok(())
        }
        Command::Holidays { date, json } => holidays(&date, json),
    }
}

fn calc(
    order_date: &str,
    lead_time: &str,
    cut_off: &str,
    working_day_only: &str,
    json: bool,
) -> Result<()> {
    if json {
        let request = parse_order(order_date, lead_time, cut_off, working_day_only)?;
        let estimate = estimate_delivery(&request)?;
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!(
            "{}",
            calculate_delivery_date(order_date, lead_time, cut_off, working_day_only)
        );
    }
    Ok(())
}

fn demo() {
    let samples = [
        ("07/09/2022 13:00:00", "17", "12:00:00", "True"),
        ("28/12/2020 11:00:00", "4", "12:00:00", "True"),
        ("23/12/2021 11:00:00", "2", "12:00:00", "False"),
        ("23/12/2021 11:00:00", "2", "12:00:00", "True"),
    ];

    for (n, (order_date, lead_time, cut_off, working_day_only)) in
        samples.into_iter().enumerate()
    {
        let due = calculate_delivery_date(order_date, lead_time, cut_off, working_day_only);
        println!("-------");
        println!("Order {}", n + 1);
        println!("   Order date: {order_date}");
        println!("   Lead time: {lead_time}");
        println!("   Dispatch cut off: {cut_off}");
        println!("   Working day delivery only: {working_day_only}");
        println!("   Delivery date: {due}");
    }
}

fn holidays(date: &str, json: bool) -> Result<()> {
    let anchor = NaiveDate::parse_from_str(date, DELIVERY_DATE_FORMAT)
        .with_context(|| format!("invalid anchor date '{date}', expected D/MM/YYYY"))?;

    let observed: Vec<String> = bank_holidays_for(anchor)
        .iter()
        .map(|day| day.format(DELIVERY_DATE_FORMAT).to_string())
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&observed)?);
    } else {
        for day in observed {
            println!("{day}");
        }
    }
    Ok(())
}
