pub mod calculations;
pub mod models;

pub use calculations::{CalculatorError, RetirementCalculator};
pub use models::*;
