//! # Validity-Window Calculators
//!
//! Derives vignette and technical-inspection validity windows from their
//! start dates. "Active" and "expired" are never stored: they are derived
//! booleans recomputed against the caller's as-of instant on every query.
//!
//! ## Window Invariant
//!
//! A vignette is active iff `valid_from <= as_of <= valid_until`, both
//! ends inclusive, with the boundary dates taken at civil midnight. An
//! inspection certificate has no lower bound — the inspection date is in
//! the past by construction — and stays valid through midnight of its
//! expiry date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use civis_core::{temporal, CivilDateTime, VehicleId, VignetteDuration, VignetteId};

use crate::tables;

/// The validity span derived from a start date and a duration class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidityWindow {
    /// First day of validity.
    pub valid_from: NaiveDate,
    /// Last day of validity (inclusive).
    pub valid_until: NaiveDate,
}

impl ValidityWindow {
    /// Whether the window covers the given instant, both ends inclusive.
    pub fn contains(&self, as_of: &CivilDateTime) -> bool {
        let from = CivilDateTime::from_date(self.valid_from);
        let until = CivilDateTime::from_date(self.valid_until);
        as_of.is_on_or_after(&from) && as_of.is_on_or_before(&until)
    }
}

/// Derive a vignette's validity window from its start date and duration:
/// 7 days, 1 month, 3 months, or 1 year. `None` only on calendar overflow.
pub fn validity_window(
    valid_from: NaiveDate,
    duration: VignetteDuration,
) -> Option<ValidityWindow> {
    let valid_until = match duration {
        VignetteDuration::Weekly => temporal::add_days_to_date(valid_from, 7),
        VignetteDuration::Monthly => temporal::add_months_to_date(valid_from, 1),
        VignetteDuration::Quarterly => temporal::add_months_to_date(valid_from, 3),
        VignetteDuration::Yearly => temporal::add_years_to_date(valid_from, 1),
    }?;
    Some(ValidityWindow {
        valid_from,
        valid_until,
    })
}

/// A purchased vignette as the portal hands it to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vignette {
    /// Record identifier.
    pub id: VignetteId,
    /// The vehicle this vignette was bought for.
    pub vehicle_id: VehicleId,
    /// Duration class.
    pub duration: VignetteDuration,
    /// Price paid at purchase.
    pub price: f64,
    /// First day of validity.
    pub valid_from: NaiveDate,
    /// Last day of validity (inclusive).
    pub valid_until: NaiveDate,
}

impl Vignette {
    /// Whether this vignette covers the given instant.
    pub fn is_active(&self, as_of: &CivilDateTime) -> bool {
        ValidityWindow {
            valid_from: self.valid_from,
            valid_until: self.valid_until,
        }
        .contains(as_of)
    }
}

/// The first vignette in the slice that is active at the given instant.
///
/// The caller owns fetching and filtering the records (for example, to
/// one vehicle's vignettes); the engine only answers the calendar
/// question.
pub fn active_vignette<'a>(
    vignettes: &'a [Vignette],
    as_of: &CivilDateTime,
) -> Option<&'a Vignette> {
    vignettes.iter().find(|v| v.is_active(as_of))
}

/// Whether any vignette in the slice is active at the given instant.
pub fn has_active_vignette(vignettes: &[Vignette], as_of: &CivilDateTime) -> bool {
    active_vignette(vignettes, as_of).is_some()
}

/// Resolve the price to charge for a duration class: a usable explicit
/// price wins over the catalog price.
pub fn resolve_price(duration: VignetteDuration, explicit: Option<f64>) -> f64 {
    match explicit {
        Some(price) if price.is_finite() && price >= 0.0 => price,
        _ => tables::vignette_price(Some(duration)),
    }
}

/// A technical inspection certificate is valid for one year from the
/// inspection date. `None` only on calendar overflow.
pub fn inspection_valid_until(inspection_date: NaiveDate) -> Option<NaiveDate> {
    temporal::add_years_to_date(inspection_date, 1)
}

/// Whether an inspection certificate is still valid at the given instant.
/// No lower bound: the inspection date is always in the past.
pub fn inspection_valid(valid_until: NaiveDate, as_of: &CivilDateTime) -> bool {
    as_of.is_on_or_before(&CivilDateTime::from_date(valid_until))
}
