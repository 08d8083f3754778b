//! # Tax Subcommand
//!
//! Prices a vehicle's annual road tax from its registration attributes
//! and prints the quote, breakdown included, as pretty JSON.

use anyhow::{Context, Result};
use clap::Args;

use civis_core::{CivilDateTime, EmissionClass};
use civis_tariff::{annual_tax, VehicleProfile};

/// Arguments for the `civis tax` subcommand.
#[derive(Args, Debug)]
pub struct TaxArgs {
    /// Engine power in kW.
    #[arg(long)]
    pub power_kw: f64,

    /// Year of manufacture.
    #[arg(long)]
    pub manufacture_year: i32,

    /// Emission class (EURO_2 through EURO_6). Omit if unknown.
    #[arg(long)]
    pub emission_class: Option<EmissionClass>,
}

/// Compute and print an annual road-tax quote.
pub fn run_tax(args: &TaxArgs, as_of: &CivilDateTime) -> Result<u8> {
    let vehicle = VehicleProfile {
        power_kw: args.power_kw,
        manufacture_year: args.manufacture_year,
        emission_class: args.emission_class,
    };

    tracing::debug!(?vehicle, "pricing annual tax");
    let quote = annual_tax(&vehicle, as_of);

    println!(
        "{}",
        serde_json::to_string_pretty(&quote).context("failed to render tax quote")?
    );
    Ok(0)
}
