use serde::{Deserialize, Serialize};

/// Outcome of a successful projection. Always produced as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResults {
    /// Lump sum needed at retirement, never negative (may be `NaN`).
    pub total_needed: f64,

    /// `retirement_age - current_age`.
    pub years_until_retirement: f64,

    /// Monthly contribution that closes the funding gap, never negative (may be `NaN`).
    pub required_monthly_savings: f64,
}
