//! # Annual Vehicle Tax Calculator
//!
//! Combines engine power, vehicle age, and emission class into a single
//! annual road-tax amount: `power × rate(power) × age coefficient ×
//! emission coefficient`, rounded to cents.
//!
//! The three factors are multiplicative, so age and emission class
//! compound — an old, dirty, high-power vehicle pays disproportionately
//! more than the sum of individual surcharges would.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use civis_core::{round2, CivilDateTime, EmissionClass};

use crate::tables;

/// Disclaimer carried on every tax quote.
pub const TAX_QUOTE_NOTE: &str = "Indicative formula (kW x rate x age coefficient x emission \
     coefficient); not an official municipal or revenue-agency assessment method.";

/// Registration attributes of a vehicle that the tax formula reads.
///
/// Owned and persisted by the backend; the engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Engine power in kW. Non-finite or non-positive values are treated
    /// as zero effective power.
    pub power_kw: f64,
    /// Year of manufacture.
    pub manufacture_year: i32,
    /// Emission class; `None` when unknown or not yet filled in.
    #[serde(default)]
    pub emission_class: Option<EmissionClass>,
}

/// The factors that produced a tax amount, for display next to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Effective engine power used (zero when the input was unusable).
    pub power_kw: f64,
    /// Per-kW rate drawn from the power brackets.
    pub rate_per_kw: f64,
    /// Age multiplier drawn from the age brackets.
    pub age_coefficient: f64,
    /// Emission multiplier for the vehicle's class.
    pub emission_coefficient: f64,
}

/// An annual road-tax quote. Produced fresh on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxQuote {
    /// The payable amount, non-negative, rounded to cents.
    pub amount: f64,
    /// The factors behind the amount.
    pub breakdown: TaxBreakdown,
    /// Human-readable disclaimer.
    pub note: String,
}

/// Compute the annual road tax for a vehicle as of the given stamp.
///
/// Total function: unusable power, an out-of-range manufacture year, or a
/// missing emission class degrade to zero amount / safety coefficients
/// rather than an error.
pub fn annual_tax(vehicle: &VehicleProfile, as_of: &CivilDateTime) -> TaxQuote {
    let power_kw = if vehicle.power_kw.is_finite() && vehicle.power_kw > 0.0 {
        vehicle.power_kw
    } else {
        0.0
    };

    let rate_per_kw = tables::rate_per_kw(power_kw);
    let age_coefficient = tables::age_coefficient(vehicle.manufacture_year, as_of.year());
    let emission_coefficient = tables::emission_coefficient(vehicle.emission_class);

    let amount = round2((power_kw * rate_per_kw * age_coefficient * emission_coefficient).max(0.0));

    TaxQuote {
        amount,
        breakdown: TaxBreakdown {
            power_kw,
            rate_per_kw,
            age_coefficient,
            emission_coefficient,
        },
        note: TAX_QUOTE_NOTE.to_string(),
    }
}

/// The portal's due date for a tax year: December 1 of that year.
///
/// Years outside the backend's 1900..=2100 validity range yield `None`.
pub fn tax_due_date(tax_year: i32) -> Option<NaiveDate> {
    if !(1900..=2100).contains(&tax_year) {
        return None;
    }
    NaiveDate::from_ymd_opt(tax_year, 12, 1)
}
