//! Retirement savings projection.
//!
//! Turns the eight form inputs into the lump sum needed at retirement and the
//! monthly contribution that reaches it, working in inflation-adjusted terms.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Reject the inputs unless current age < retirement age |
//! | 2    | Years until retirement: retirement age - current age |
//! | 3    | Desired retirement income: income × retirement income % |
//! | 4    | Real return: (1 + return) / (1 + inflation) - 1 |
//! | 5    | Withdrawal years: 90 - retirement age |
//! | 6    | Total needed: present value of the withdrawals at the real return |
//! | 7    | Gap: total needed - current savings compounded to retirement |
//! | 8    | Monthly savings: sinking fund payment for the gap at real return / 12 |
//! | 9    | Total needed and monthly savings clamped to a minimum of 0 |
//!
//! Monthly savings already being made are not part of the projection.
//!
//! # Example
//!
//! ```
//! use retire_core::{CalculatorInputs, RetirementCalculator};
//!
//! let calculator = RetirementCalculator::new();
//! let results = calculator.calculate(&CalculatorInputs::default()).unwrap();
//!
//! assert_eq!(results.years_until_retirement, 35.0);
//! assert_eq!(results.total_needed.round(), 569339.0);
//! assert_eq!(results.required_monthly_savings.round(), 464.0);
//! ```

use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{
    clamp_non_negative, compound, present_value_of_annuity, sinking_fund_payment,
};
use crate::{CalculatorInputs, CalculatorResults};

/// Age up to which retirement withdrawals must be funded.
pub const HORIZON_AGE: f64 = 90.0;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Errors that can occur during a retirement projection.
#[derive(Debug, Error, PartialEq)]
pub enum CalculatorError {
    /// Retirement must come strictly after the current age.
    #[error("retirement age ({retirement_age}) must be greater than current age ({current_age})")]
    InvalidAges {
        current_age: f64,
        retirement_age: f64,
    },
}

/// Calculator for the retirement projection.
///
/// Stateless: calculating twice with the same inputs yields the same results.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetirementCalculator;

impl RetirementCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Runs the full projection.
    ///
    /// Only the age ordering is validated. Every other input is used as-is,
    /// so a zero real return produces `NaN` and a retirement age of 90 or
    /// more produces a non-positive withdrawal horizon.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidAges`] when `current_age >= retirement_age`.
    pub fn calculate(
        &self,
        inputs: &CalculatorInputs,
    ) -> Result<CalculatorResults, CalculatorError> {
        self.validate_ages(inputs.current_age, inputs.retirement_age)?;

        let years_until_retirement =
            self.years_until_retirement(inputs.current_age, inputs.retirement_age);
        let desired_income =
            self.desired_retirement_income(inputs.current_income, inputs.retirement_income);
        let real_rate = self.real_return_rate(inputs.expected_return, inputs.inflation_rate);
        let withdrawal_years = self.life_expectancy(inputs.retirement_age);

        if real_rate == 0.0 {
            warn!(
                expected_return = inputs.expected_return,
                inflation_rate = inputs.inflation_rate,
                "real return rate is zero; projection is undefined"
            );
        }
        if withdrawal_years <= 0.0 {
            warn!(
                retirement_age = inputs.retirement_age,
                "retirement age is at or beyond the {HORIZON_AGE} year horizon"
            );
        }

        let total_needed = self.total_needed(desired_income, real_rate, withdrawal_years);
        let future_value_needed = self.future_value_needed(
            total_needed,
            inputs.current_savings,
            real_rate,
            years_until_retirement,
        );
        let monthly_payment =
            self.required_monthly_savings(future_value_needed, real_rate, years_until_retirement);

        debug!(
            years_until_retirement,
            desired_income,
            real_rate,
            withdrawal_years,
            total_needed,
            future_value_needed,
            monthly_payment,
            "projection computed"
        );

        Ok(CalculatorResults {
            total_needed: clamp_non_negative(total_needed),
            years_until_retirement,
            required_monthly_savings: clamp_non_negative(monthly_payment),
        })
    }

    fn validate_ages(
        &self,
        current_age: f64,
        retirement_age: f64,
    ) -> Result<(), CalculatorError> {
        if current_age >= retirement_age {
            return Err(CalculatorError::InvalidAges {
                current_age,
                retirement_age,
            });
        }
        Ok(())
    }

    fn years_until_retirement(
        &self,
        current_age: f64,
        retirement_age: f64,
    ) -> f64 {
        retirement_age - current_age
    }

    fn desired_retirement_income(
        &self,
        current_income: f64,
        retirement_income_pct: f64,
    ) -> f64 {
        current_income * retirement_income_pct / 100.0
    }

    /// Inflation-adjusted return via the Fisher relation, not a subtraction.
    fn real_return_rate(
        &self,
        expected_return_pct: f64,
        inflation_rate_pct: f64,
    ) -> f64 {
        (1.0 + expected_return_pct / 100.0) / (1.0 + inflation_rate_pct / 100.0) - 1.0
    }

    /// Number of yearly withdrawals between retirement and the horizon age.
    fn life_expectancy(
        &self,
        retirement_age: f64,
    ) -> f64 {
        HORIZON_AGE - retirement_age
    }

    fn total_needed(
        &self,
        desired_income: f64,
        real_rate: f64,
        withdrawal_years: f64,
    ) -> f64 {
        present_value_of_annuity(desired_income, real_rate, withdrawal_years)
    }

    /// Shortfall left after current savings grow until retirement.
    fn future_value_needed(
        &self,
        total_needed: f64,
        current_savings: f64,
        real_rate: f64,
        years_until_retirement: f64,
    ) -> f64 {
        total_needed - compound(current_savings, real_rate, years_until_retirement)
    }

    /// Uses `real_rate / 12` as a simple monthly rate.
    fn required_monthly_savings(
        &self,
        future_value_needed: f64,
        real_rate: f64,
        years_until_retirement: f64,
    ) -> f64 {
        sinking_fund_payment(
            future_value_needed,
            real_rate / MONTHS_PER_YEAR,
            years_until_retirement * MONTHS_PER_YEAR,
        )
    }
}
