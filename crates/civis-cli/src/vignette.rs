//! # Vignette Subcommand
//!
//! Derives a vignette's validity window from a start date and duration
//! class, resolves its price, and reports whether it covers the as-of
//! instant.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::json;

use civis_core::{temporal, CivilDateTime, CivisError, VignetteDuration};
use civis_tariff::{resolve_price, validity_window};

/// Arguments for the `civis vignette` subcommand.
#[derive(Args, Debug)]
pub struct VignetteArgs {
    /// Duration class (WEEKLY, MONTHLY, QUARTERLY, YEARLY).
    #[arg(long)]
    pub duration: VignetteDuration,

    /// First day of validity (YYYY-MM-DD). Defaults to the as-of date.
    #[arg(long)]
    pub valid_from: Option<String>,

    /// Explicit price; the catalog price is used when omitted.
    #[arg(long)]
    pub price: Option<f64>,
}

/// Compute and print a vignette validity window and price.
pub fn run_vignette(args: &VignetteArgs, as_of: &CivilDateTime) -> Result<u8> {
    let valid_from = match args.valid_from.as_deref() {
        Some(raw) => temporal::parse_date(raw)
            .ok_or_else(|| CivisError::InvalidDate(raw.to_string()))
            .context("--valid-from must be a YYYY-MM-DD date")?,
        None => as_of.date(),
    };

    let Some(window) = validity_window(valid_from, args.duration) else {
        bail!("validity window overflows the calendar from {valid_from}");
    };
    let price = resolve_price(args.duration, args.price);

    tracing::debug!(duration = %args.duration, %valid_from, "derived vignette window");

    let rendered = json!({
        "duration": args.duration,
        "price": price,
        "valid_from": window.valid_from,
        "valid_until": window.valid_until,
        "is_active": window.contains(as_of),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&rendered).context("failed to render vignette window")?
    );
    Ok(0)
}
