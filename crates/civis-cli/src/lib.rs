//! # civis-cli — CLI Tool for the Civis Tariff Engine
//!
//! Provides the `civis` command-line interface over the pure calculators
//! in `civis-tariff`. Every subcommand prices one record against an
//! explicit `--as-of` instant and prints the resulting quote as pretty
//! JSON, so the same numbers the portal shows can be reproduced from a
//! terminal.
//!
//! ## Subcommands
//!
//! - `civis tax` — Annual road-tax quote for a vehicle.
//! - `civis interest` — Late-payment interest on an unpaid tax.
//! - `civis fine` — Early-payment pricing of a traffic fine.
//! - `civis vignette` — Vignette validity window and price.
//! - `civis inspection` — Technical-inspection expiry.
//! - `civis catalog` — The fixed tariff catalog (codes, labels, amounts).
//!
//! The binary adds no semantics of its own: argument parsing and JSON
//! printing only.

pub mod catalog;
pub mod fine;
pub mod inspection;
pub mod interest;
pub mod tax;
pub mod vignette;
