//! # Inspection Subcommand
//!
//! Derives a technical-inspection certificate's expiry (one year after
//! the inspection date) and reports whether it is still valid at the
//! as-of instant.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::json;

use civis_core::{temporal, CivilDateTime, CivisError};
use civis_tariff::{inspection_valid, inspection_valid_until};

/// Arguments for the `civis inspection` subcommand.
#[derive(Args, Debug)]
pub struct InspectionArgs {
    /// Date the inspection was passed (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
}

/// Compute and print an inspection validity report.
pub fn run_inspection(args: &InspectionArgs, as_of: &CivilDateTime) -> Result<u8> {
    let inspected_on = temporal::parse_date(&args.date)
        .ok_or_else(|| CivisError::InvalidDate(args.date.clone()))
        .context("--date must be a YYYY-MM-DD date")?;

    let Some(valid_until) = inspection_valid_until(inspected_on) else {
        bail!("inspection expiry overflows the calendar from {inspected_on}");
    };

    let rendered = json!({
        "inspected_on": inspected_on,
        "valid_until": valid_until,
        "is_valid": inspection_valid(valid_until, as_of),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&rendered).context("failed to render inspection report")?
    );
    Ok(0)
}
