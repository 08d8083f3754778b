//! # Interest Subcommand
//!
//! Computes late-payment interest on an unpaid tax principal. The grace
//! months and daily rate default to the portal's policy and can be
//! overridden for what-if checks.

use anyhow::{Context, Result};
use clap::Args;

use civis_core::{temporal, CivilDateTime, CivisError};
use civis_tariff::{late_interest, LateInterestPolicy};

/// Arguments for the `civis interest` subcommand.
#[derive(Args, Debug)]
pub struct InterestArgs {
    /// Unpaid principal amount.
    #[arg(long)]
    pub principal: f64,

    /// Due date of the payment (YYYY-MM-DD).
    #[arg(long)]
    pub due: String,

    /// Calendar months of grace after the due date.
    #[arg(long)]
    pub grace_months: Option<i32>,

    /// Interest per overdue day as a fraction of the principal.
    #[arg(long)]
    pub daily_rate: Option<f64>,
}

/// Compute and print a late-interest quote.
pub fn run_interest(args: &InterestArgs, as_of: &CivilDateTime) -> Result<u8> {
    let due = temporal::parse_date(&args.due)
        .ok_or_else(|| CivisError::InvalidDate(args.due.clone()))
        .context("--due must be a YYYY-MM-DD date")?;

    let defaults = LateInterestPolicy::default();
    let policy = LateInterestPolicy {
        grace_months: args.grace_months.unwrap_or(defaults.grace_months),
        daily_rate: args.daily_rate.unwrap_or(defaults.daily_rate),
    };

    tracing::debug!(principal = args.principal, due = %due, "computing late interest");
    let quote = late_interest(args.principal, Some(due), as_of, &policy);

    println!(
        "{}",
        serde_json::to_string_pretty(&quote).context("failed to render interest quote")?
    );
    Ok(0)
}
