//! # civis-tariff — Tariff Engine for the Civis Portal
//!
//! Pure, deterministic calculators for the vehicle-related money and
//! calendar rules of the portal: annual road tax, late-payment interest,
//! early-payment fine discounts, and vignette/technical-inspection
//! validity windows.
//!
//! ## Engine Contract
//!
//! - Every calculator is a synchronous, side-effect-free function over its
//!   arguments and the fixed tariff tables. No I/O, no shared state, no
//!   clock reads — the caller supplies an explicit as-of stamp.
//! - Every calculator is a **total** function: malformed or missing input
//!   degrades to a zero/neutral quote instead of an error, so a
//!   half-filled form can never crash a page render.
//! - Every monetary output is non-negative and rounded to cents via
//!   [`civis_core::round2`].
//!
//! The computed amounts are an indicative approximation for the portal's
//! payment screens, not an official assessment method; every tax quote
//! carries a disclaimer note saying so.

pub mod fine;
pub mod interest;
pub mod tables;
pub mod tax;
pub mod vignette;

// Re-export primary types for ergonomic imports.
pub use fine::{fine_pricing, EarlyPaymentPolicy, Fine, FinePricing};
pub use interest::{late_interest, InterestQuote, LateInterestPolicy};
pub use tax::{annual_tax, tax_due_date, TaxBreakdown, TaxQuote, VehicleProfile};
pub use vignette::{
    active_vignette, has_active_vignette, inspection_valid, inspection_valid_until,
    resolve_price, validity_window, ValidityWindow, Vignette,
};
