//! # Catalog Subcommand
//!
//! Prints the fixed tariff catalog — violation codes, vignette duration
//! classes, and emission classes, each with its label and amount or
//! coefficient — as the portal's forms would list them.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use civis_core::{EmissionClass, VignetteDuration, ViolationCode};
use civis_tariff::tables;

/// Arguments for the `civis catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {}

/// Print the tariff catalog as pretty JSON.
pub fn run_catalog(_args: &CatalogArgs) -> Result<u8> {
    let violations: Vec<_> = ViolationCode::all()
        .iter()
        .map(|code| {
            json!({
                "code": code,
                "label": code.label(),
                "amount": tables::fine_base_amount(Some(*code)),
            })
        })
        .collect();

    let vignettes: Vec<_> = VignetteDuration::all()
        .iter()
        .map(|duration| {
            json!({
                "duration": duration,
                "label": duration.label(),
                "price": tables::vignette_price(Some(*duration)),
            })
        })
        .collect();

    let emission_classes: Vec<_> = EmissionClass::all()
        .iter()
        .map(|class| {
            json!({
                "class": class,
                "label": class.label(),
                "coefficient": tables::emission_coefficient(Some(*class)),
            })
        })
        .collect();

    let rendered = json!({
        "violations": violations,
        "vignettes": vignettes,
        "emission_classes": emission_classes,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&rendered).context("failed to render catalog")?
    );
    Ok(0)
}
