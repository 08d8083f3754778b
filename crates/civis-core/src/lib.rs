//! # civis-core — Foundational Types for the Civis Portal Engine
//!
//! This crate is the bedrock of the Civis tariff engine. It defines the
//! calendar and currency primitives that every calculator routes through,
//! so a single fix (for example to day-counting) propagates everywhere.
//! Every other crate in the workspace depends on `civis-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `VehicleId`, `FineId`,
//!    `VignetteId` — all newtypes over `Uuid`. No bare strings or UUIDs
//!    for identifiers.
//!
//! 2. **`CivilDateTime` newtype.** ALL calendar arithmetic flows through
//!    `temporal`. No ad-hoc `chrono` math in calculators. This keeps
//!    day-counting, month addition, and comparisons consistent across
//!    every tariff rule.
//!
//! 3. **Single catalog enum per vocabulary.** `EmissionClass`,
//!    `ViolationCode`, `VignetteDuration` — one definition each,
//!    exhaustive `match` everywhere. Adding a variant forces every
//!    consumer to handle it.
//!
//! 4. **Graceful degradation over panics.** Parsing returns `Option` or a
//!    typed error; calculators built on these primitives are total
//!    functions that degrade to zero/neutral values on malformed input.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `civis-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod catalog;
pub mod error;
pub mod identity;
pub mod money;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use catalog::{
    EmissionClass, VignetteDuration, ViolationCode, EMISSION_CLASS_COUNT, VIGNETTE_DURATION_COUNT,
    VIOLATION_CODE_COUNT,
};
pub use error::CivisError;
pub use identity::{FineId, VehicleId, VignetteId};
pub use money::round2;
pub use temporal::CivilDateTime;
