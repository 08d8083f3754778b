//! # Catalog Enumerations — Single Source of Truth
//!
//! Defines the three fixed vocabularies of the tariff engine: emission
//! classes, traffic-violation codes, and vignette duration classes. Each
//! is the ONE definition used across the workspace; every `match` must be
//! exhaustive, so adding a variant forces every consumer to handle it at
//! compile time.
//!
//! The tariff amounts keyed by these vocabularies (coefficients, base
//! fines, vignette prices) live in `civis-tariff::tables`, not here — the
//! catalog is vocabulary, the tables are policy.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CivisError;

// ── Emission classes ───────────────────────────────────────────────────

/// European emission standard of a vehicle's engine.
///
/// Ordered from oldest/dirtiest to newest/cleanest; the tariff's emission
/// coefficient decreases along that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmissionClass {
    /// Euro 2.
    #[serde(rename = "EURO_2")]
    Euro2,
    /// Euro 3.
    #[serde(rename = "EURO_3")]
    Euro3,
    /// Euro 4.
    #[serde(rename = "EURO_4")]
    Euro4,
    /// Euro 5.
    #[serde(rename = "EURO_5")]
    Euro5,
    /// Euro 6.
    #[serde(rename = "EURO_6")]
    Euro6,
}

/// Total number of emission classes. Used for exhaustiveness assertions.
pub const EMISSION_CLASS_COUNT: usize = 5;

impl EmissionClass {
    /// All emission classes, oldest standard first.
    pub fn all() -> &'static [EmissionClass] {
        &[Self::Euro2, Self::Euro3, Self::Euro4, Self::Euro5, Self::Euro6]
    }

    /// The canonical string identifier (matches the serde format).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Euro2 => "EURO_2",
            Self::Euro3 => "EURO_3",
            Self::Euro4 => "EURO_4",
            Self::Euro5 => "EURO_5",
            Self::Euro6 => "EURO_6",
        }
    }

    /// Human-readable label for form dropdowns and receipts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Euro2 => "Euro 2",
            Self::Euro3 => "Euro 3",
            Self::Euro4 => "Euro 4",
            Self::Euro5 => "Euro 5",
            Self::Euro6 => "Euro 6",
        }
    }
}

impl std::fmt::Display for EmissionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmissionClass {
    type Err = CivisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EURO_2" => Ok(Self::Euro2),
            "EURO_3" => Ok(Self::Euro3),
            "EURO_4" => Ok(Self::Euro4),
            "EURO_5" => Ok(Self::Euro5),
            "EURO_6" => Ok(Self::Euro6),
            other => Err(CivisError::UnknownCatalogValue(format!(
                "emission class {other:?}"
            ))),
        }
    }
}

// ── Violation codes ────────────────────────────────────────────────────

/// The ten enumerated traffic-violation codes a fine can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationCode {
    /// Speeding, up to 10 km/h over the limit.
    #[serde(rename = "SPEED_UP_TO_10")]
    SpeedUpTo10,
    /// Speeding, 11 to 20 km/h over the limit.
    #[serde(rename = "SPEED_11_20")]
    Speed11To20,
    /// Speeding, 21 to 30 km/h over the limit.
    #[serde(rename = "SPEED_21_30")]
    Speed21To30,
    /// Speeding, 31 to 40 km/h over the limit.
    #[serde(rename = "SPEED_31_40")]
    Speed31To40,
    /// Running a red light.
    #[serde(rename = "RED_LIGHT")]
    RedLight,
    /// Seat belt not worn.
    #[serde(rename = "NO_SEATBELT")]
    NoSeatbelt,
    /// Using a phone while driving.
    #[serde(rename = "PHONE_WHILE_DRIVING")]
    PhoneWhileDriving,
    /// No third-party liability insurance.
    #[serde(rename = "NO_INSURANCE")]
    NoInsurance,
    /// Driving without a valid licence.
    #[serde(rename = "NO_LICENSE")]
    NoLicense,
    /// Illegal parking or stopping.
    #[serde(rename = "PARKING_FORBIDDEN")]
    ParkingForbidden,
}

/// Total number of violation codes. Used for exhaustiveness assertions.
pub const VIOLATION_CODE_COUNT: usize = 10;

impl ViolationCode {
    /// All violation codes in catalog order.
    pub fn all() -> &'static [ViolationCode] {
        &[
            Self::SpeedUpTo10,
            Self::Speed11To20,
            Self::Speed21To30,
            Self::Speed31To40,
            Self::RedLight,
            Self::NoSeatbelt,
            Self::PhoneWhileDriving,
            Self::NoInsurance,
            Self::NoLicense,
            Self::ParkingForbidden,
        ]
    }

    /// The canonical string identifier (matches the serde format).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpeedUpTo10 => "SPEED_UP_TO_10",
            Self::Speed11To20 => "SPEED_11_20",
            Self::Speed21To30 => "SPEED_21_30",
            Self::Speed31To40 => "SPEED_31_40",
            Self::RedLight => "RED_LIGHT",
            Self::NoSeatbelt => "NO_SEATBELT",
            Self::PhoneWhileDriving => "PHONE_WHILE_DRIVING",
            Self::NoInsurance => "NO_INSURANCE",
            Self::NoLicense => "NO_LICENSE",
            Self::ParkingForbidden => "PARKING_FORBIDDEN",
        }
    }

    /// Human-readable label for fine listings and receipts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SpeedUpTo10 => "Speeding (up to 10 km/h over the limit)",
            Self::Speed11To20 => "Speeding (11-20 km/h over the limit)",
            Self::Speed21To30 => "Speeding (21-30 km/h over the limit)",
            Self::Speed31To40 => "Speeding (31-40 km/h over the limit)",
            Self::RedLight => "Running a red light",
            Self::NoSeatbelt => "Seat belt not worn",
            Self::PhoneWhileDriving => "Using a phone while driving",
            Self::NoInsurance => "No third-party liability insurance",
            Self::NoLicense => "Driving without a valid licence",
            Self::ParkingForbidden => "Illegal parking or stopping",
        }
    }
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViolationCode {
    type Err = CivisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|code| code.as_str() == s)
            .copied()
            .ok_or_else(|| CivisError::UnknownCatalogValue(format!("violation code {s:?}")))
    }
}

// ── Vignette durations ─────────────────────────────────────────────────

/// Duration class of a road vignette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VignetteDuration {
    /// Valid for 7 days from the start date.
    Weekly,
    /// Valid for 1 calendar month from the start date.
    Monthly,
    /// Valid for 3 calendar months from the start date.
    Quarterly,
    /// Valid for 1 calendar year from the start date.
    Yearly,
}

/// Total number of vignette duration classes.
pub const VIGNETTE_DURATION_COUNT: usize = 4;

impl VignetteDuration {
    /// All duration classes, shortest first.
    pub fn all() -> &'static [VignetteDuration] {
        &[Self::Weekly, Self::Monthly, Self::Quarterly, Self::Yearly]
    }

    /// The canonical string identifier (matches the serde format).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Quarterly => "QUARTERLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Human-readable label for purchase forms.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }
}

impl std::fmt::Display for VignetteDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VignetteDuration {
    type Err = CivisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEEKLY" => Ok(Self::Weekly),
            "MONTHLY" => Ok(Self::Monthly),
            "QUARTERLY" => Ok(Self::Quarterly),
            "YEARLY" => Ok(Self::Yearly),
            other => Err(CivisError::UnknownCatalogValue(format!(
                "vignette duration {other:?}"
            ))),
        }
    }
}
