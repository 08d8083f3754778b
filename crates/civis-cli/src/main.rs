//! # civis CLI entry point
//!
//! Parses command-line arguments, resolves the as-of instant shared by
//! every time-sensitive subcommand, and dispatches to handler modules.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use civis_cli::catalog::{run_catalog, CatalogArgs};
use civis_cli::fine::{run_fine, FineArgs};
use civis_cli::inspection::{run_inspection, InspectionArgs};
use civis_cli::interest::{run_interest, InterestArgs};
use civis_cli::tax::{run_tax, TaxArgs};
use civis_cli::vignette::{run_vignette, VignetteArgs};
use civis_core::CivilDateTime;

/// Civis tariff engine CLI.
///
/// Reproduces the portal's vehicle-tax, fine, vignette, and inspection
/// quotes from the command line, against an explicit as-of instant.
#[derive(Parser, Debug)]
#[command(name = "civis", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// As-of instant for time-sensitive quotes (ISO date or timestamp).
    /// Defaults to the current local time.
    #[arg(long, global = true)]
    as_of: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Annual road-tax quote for a vehicle.
    Tax(TaxArgs),

    /// Late-payment interest on an unpaid tax principal.
    Interest(InterestArgs),

    /// Early-payment pricing of a traffic fine.
    Fine(FineArgs),

    /// Vignette validity window and price.
    Vignette(VignetteArgs),

    /// Technical-inspection expiry.
    Inspection(InspectionArgs),

    /// Print the fixed tariff catalog (codes, labels, amounts).
    Catalog(CatalogArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let as_of = match cli.as_of.as_deref() {
        Some(raw) => match CivilDateTime::parse(raw) {
            Some(stamp) => stamp,
            None => {
                tracing::error!("--as-of is not an ISO date or timestamp: {raw:?}");
                return ExitCode::from(2);
            }
        },
        None => CivilDateTime::from_naive(chrono::Local::now().naive_local()),
    };

    tracing::debug!(as_of = %as_of, "resolved as-of instant");

    let result = match cli.command {
        Commands::Tax(args) => run_tax(&args, &as_of),
        Commands::Interest(args) => run_interest(&args, &as_of),
        Commands::Fine(args) => run_fine(&args, &as_of),
        Commands::Vignette(args) => run_vignette(&args, &as_of),
        Commands::Inspection(args) => run_inspection(&args, &as_of),
        Commands::Catalog(args) => run_catalog(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
