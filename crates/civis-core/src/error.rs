//! # Error Types — Parsing-Boundary Errors
//!
//! Defines the error type used at the engine's parsing boundaries. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! The calculators themselves never return errors: malformed input degrades
//! to zero/neutral results so a half-filled form can never crash a quote.
//! Typed errors exist only where external text is turned into catalog
//! values or dates — `FromStr` on catalog enums and CLI argument parsing.

use thiserror::Error;

/// Top-level error type for the Civis engine's parsing boundaries.
#[derive(Error, Debug)]
pub enum CivisError {
    /// A string did not name any value of a catalog enumeration.
    #[error("unknown catalog value: {0}")]
    UnknownCatalogValue(String),

    /// A string could not be parsed as a civil date or timestamp.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}
