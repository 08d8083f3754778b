//! # Fine Subcommand
//!
//! Prices a traffic fine under the early-payment rule. The base amount
//! comes either from `--amount` or from the catalog via `--code`; the
//! window length and percentage default to the portal's policy.

use anyhow::{bail, Context, Result};
use clap::Args;

use civis_core::{CivilDateTime, CivisError, FineId, ViolationCode};
use civis_tariff::{fine_pricing, tables, EarlyPaymentPolicy, Fine};

/// Arguments for the `civis fine` subcommand.
#[derive(Args, Debug)]
pub struct FineArgs {
    /// Violation code (for example SPEED_11_20); sets the catalog amount.
    #[arg(long, conflicts_with = "amount")]
    pub code: Option<ViolationCode>,

    /// Explicit fine amount, instead of the catalog amount.
    #[arg(long)]
    pub amount: Option<f64>,

    /// Issuance instant (ISO date or timestamp).
    #[arg(long)]
    pub issued_at: String,

    /// Length of the discount window in days after issuance.
    #[arg(long)]
    pub window_days: Option<i64>,

    /// Percentage taken off while the window is open.
    #[arg(long)]
    pub discount_percent: Option<f64>,
}

/// Compute and print a fine pricing.
pub fn run_fine(args: &FineArgs, as_of: &CivilDateTime) -> Result<u8> {
    let issued_at = CivilDateTime::parse(&args.issued_at)
        .ok_or_else(|| CivisError::InvalidDate(args.issued_at.clone()))
        .context("--issued-at must be an ISO date or timestamp")?;

    let amount = match (args.amount, args.code) {
        (Some(amount), _) => amount,
        (None, Some(code)) => tables::fine_base_amount(Some(code)),
        (None, None) => bail!("either --amount or --code is required"),
    };

    let defaults = EarlyPaymentPolicy::default();
    let policy = EarlyPaymentPolicy {
        window_days: args.window_days.unwrap_or(defaults.window_days),
        discount_percent: args.discount_percent.unwrap_or(defaults.discount_percent),
    };

    let fine = Fine {
        id: FineId::new(),
        kind: args.code,
        amount,
        issued_at: Some(issued_at),
    };

    tracing::debug!(?fine.kind, amount, "pricing fine");
    let pricing = fine_pricing(&fine, as_of, &policy);

    println!(
        "{}",
        serde_json::to_string_pretty(&pricing).context("failed to render fine pricing")?
    );
    Ok(0)
}
