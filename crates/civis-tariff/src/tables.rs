//! # Tariff Tables — Fixed Lookup Data
//!
//! Every number the engine charges lives in this module: per-kW rate
//! brackets, age and emission coefficients, base fine amounts, and
//! vignette prices. The calculators hold no constants of their own.
//!
//! ## Lookup Invariant
//!
//! Each lookup is a total function over its domain. Unknown or missing
//! keys map to a safe default — a neutral `1.0` coefficient or a `0`
//! amount — never to a missing-key error. The one deliberate exception:
//! an out-of-range or future manufacture year maps to the **highest** age
//! multiplier, so a garbled registration record can only overcharge a
//! quote shown on screen, not undercharge a payment.

use civis_core::{EmissionClass, VignetteDuration, ViolationCode};

// ── Per-kW rate brackets ───────────────────────────────────────────────

struct PowerBracket {
    /// Inclusive upper bound in kW; the last bracket is open-ended.
    upper_kw: f64,
    /// Currency units charged per kW for power within this bracket.
    rate: f64,
}

/// Five ascending brackets; the rate is non-decreasing across them.
const POWER_BRACKETS: &[PowerBracket] = &[
    PowerBracket { upper_kw: 37.0, rate: 0.34 },
    PowerBracket { upper_kw: 55.0, rate: 0.40 },
    PowerBracket { upper_kw: 74.0, rate: 0.54 },
    PowerBracket { upper_kw: 110.0, rate: 1.10 },
    PowerBracket { upper_kw: f64::INFINITY, rate: 1.23 },
];

/// The per-kW rate for a given engine power.
///
/// Non-finite or non-positive power yields a `0.0` rate, which in turn
/// produces a zero tax amount downstream.
pub fn rate_per_kw(power_kw: f64) -> f64 {
    if !power_kw.is_finite() || power_kw <= 0.0 {
        return 0.0;
    }
    for bracket in POWER_BRACKETS {
        if power_kw <= bracket.upper_kw {
            return bracket.rate;
        }
    }
    0.0
}

// ── Age coefficient ────────────────────────────────────────────────────

struct AgeBracket {
    /// Inclusive upper bound on vehicle age in whole years.
    max_age: i32,
    coefficient: f64,
}

/// Four brackets by vehicle age, ascending multipliers.
const AGE_BRACKETS: &[AgeBracket] = &[
    AgeBracket { max_age: 5, coefficient: 1.0 },
    AgeBracket { max_age: 14, coefficient: 1.2 },
    AgeBracket { max_age: 20, coefficient: 1.4 },
    AgeBracket { max_age: i32::MAX, coefficient: 1.6 },
];

/// Earliest manufacture year the tariff recognizes.
const MIN_MANUFACTURE_YEAR: i32 = 1900;

/// The age multiplier for a vehicle manufactured in `manufacture_year`,
/// assessed in `as_of_year`.
///
/// Age is counted in whole years. A manufacture year before 1900 or after
/// the assessment year is treated as unreliable data and charged at the
/// highest bracket.
pub fn age_coefficient(manufacture_year: i32, as_of_year: i32) -> f64 {
    if manufacture_year < MIN_MANUFACTURE_YEAR || manufacture_year > as_of_year {
        return highest_age_coefficient();
    }
    let age = as_of_year - manufacture_year;
    for bracket in AGE_BRACKETS {
        if age <= bracket.max_age {
            return bracket.coefficient;
        }
    }
    highest_age_coefficient()
}

fn highest_age_coefficient() -> f64 {
    AGE_BRACKETS[AGE_BRACKETS.len() - 1].coefficient
}

// ── Emission coefficient ───────────────────────────────────────────────

/// The emission multiplier for a vehicle's emission class.
///
/// Decreases as the standard improves; an unknown class is neutral.
pub fn emission_coefficient(class: Option<EmissionClass>) -> f64 {
    match class {
        Some(EmissionClass::Euro2) => 1.2,
        Some(EmissionClass::Euro3) => 1.1,
        Some(EmissionClass::Euro4) => 1.0,
        Some(EmissionClass::Euro5) => 0.9,
        Some(EmissionClass::Euro6) => 0.85,
        None => 1.0,
    }
}

// ── Fine base amounts ──────────────────────────────────────────────────

/// The fixed base amount for a violation code; an unknown code is `0.0`.
pub fn fine_base_amount(code: Option<ViolationCode>) -> f64 {
    match code {
        Some(ViolationCode::SpeedUpTo10) => 20.0,
        Some(ViolationCode::Speed11To20) => 50.0,
        Some(ViolationCode::Speed21To30) => 100.0,
        Some(ViolationCode::Speed31To40) => 300.0,
        Some(ViolationCode::RedLight) => 150.0,
        Some(ViolationCode::NoSeatbelt) => 50.0,
        Some(ViolationCode::PhoneWhileDriving) => 50.0,
        Some(ViolationCode::NoInsurance) => 250.0,
        Some(ViolationCode::NoLicense) => 300.0,
        Some(ViolationCode::ParkingForbidden) => 30.0,
        None => 0.0,
    }
}

// ── Vignette prices ────────────────────────────────────────────────────

/// The fixed price for a vignette duration class; unknown is `0.0`.
pub fn vignette_price(duration: Option<VignetteDuration>) -> f64 {
    match duration {
        Some(VignetteDuration::Weekly) => 15.0,
        Some(VignetteDuration::Monthly) => 30.0,
        Some(VignetteDuration::Quarterly) => 54.0,
        Some(VignetteDuration::Yearly) => 97.0,
        None => 0.0,
    }
}
