//! Pile acceptance rules.
//!
//! Piles share one sequence core and differ only in what they accept.
//! Each kind supplies an `AcceptancePolicy`:
//! - `StackingRule` for the seven tableau columns
//! - `VictoryRule` for the four foundations

pub mod acceptance;

pub use acceptance::{AcceptancePolicy, StackingRule, VictoryRule};
