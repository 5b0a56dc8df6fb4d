//! Retirement projection calculations.
//!
//! `common` holds the time-value-of-money primitives; `projection` strings
//! them together into the full retirement projection.

pub mod common;
pub mod projection;

pub use projection::{CalculatorError, HORIZON_AGE, RetirementCalculator};
