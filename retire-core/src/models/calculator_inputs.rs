use serde::{Deserialize, Serialize};

use super::InputField;

/// The eight user-supplied parameters of a retirement projection.
///
/// Values are stored exactly as collected; no range checks happen here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    /// Age today, in years.
    pub current_age: f64,
    /// Age at which withdrawals begin, in years.
    pub retirement_age: f64,
    /// Yearly income before taxes.
    pub current_income: f64,
    /// Savings already set aside for retirement.
    pub current_savings: f64,
    /// Amount saved per month. Collected and displayed, never used by the projection.
    pub monthly_savings: f64,
    /// Nominal annual return, in percent.
    pub expected_return: f64,
    /// Annual inflation, in percent.
    pub inflation_rate: f64,
    /// Retirement income as a percentage of `current_income`.
    pub retirement_income: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            current_age: 30.0,
            retirement_age: 65.0,
            current_income: 50000.0,
            current_savings: 10000.0,
            monthly_savings: 500.0,
            expected_return: 7.0,
            inflation_rate: 2.0,
            retirement_income: 80.0,
        }
    }
}

impl CalculatorInputs {
    pub fn get(
        &self,
        field: InputField,
    ) -> f64 {
        match field {
            InputField::CurrentAge => self.current_age,
            InputField::RetirementAge => self.retirement_age,
            InputField::CurrentIncome => self.current_income,
            InputField::CurrentSavings => self.current_savings,
            InputField::MonthlySavings => self.monthly_savings,
            InputField::ExpectedReturn => self.expected_return,
            InputField::InflationRate => self.inflation_rate,
            InputField::RetirementIncome => self.retirement_income,
        }
    }

    pub fn set(
        &mut self,
        field: InputField,
        value: f64,
    ) {
        let slot = match field {
            InputField::CurrentAge => &mut self.current_age,
            InputField::RetirementAge => &mut self.retirement_age,
            InputField::CurrentIncome => &mut self.current_income,
            InputField::CurrentSavings => &mut self.current_savings,
            InputField::MonthlySavings => &mut self.monthly_savings,
            InputField::ExpectedReturn => &mut self.expected_return,
            InputField::InflationRate => &mut self.inflation_rate,
            InputField::RetirementIncome => &mut self.retirement_income,
        };
        *slot = value;
    }

    /// Returns a copy with a single field replaced.
    pub fn with(
        mut self,
        field: InputField,
        value: f64,
    ) -> Self {
        self.set(field, value);
        self
    }
}
