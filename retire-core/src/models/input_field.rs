use serde::{Deserialize, Serialize};

/// One of the eight numeric fields collected by the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    CurrentAge,
    RetirementAge,
    CurrentIncome,
    CurrentSavings,
    MonthlySavings,
    ExpectedReturn,
    InflationRate,
    RetirementIncome,
}

impl InputField {
    /// All fields in form order: the first four fill the left column,
    /// the last four the right one.
    pub fn all() -> &'static [InputField] {
        &[
            InputField::CurrentAge,
            InputField::RetirementAge,
            InputField::CurrentIncome,
            InputField::CurrentSavings,
            InputField::MonthlySavings,
            InputField::ExpectedReturn,
            InputField::InflationRate,
            InputField::RetirementIncome,
        ]
    }

    /// Stable field name, used as the form widget name and CLI key.
    pub fn key(&self) -> &'static str {
        match self {
            InputField::CurrentAge => "currentAge",
            InputField::RetirementAge => "retirementAge",
            InputField::CurrentIncome => "currentIncome",
            InputField::CurrentSavings => "currentSavings",
            InputField::MonthlySavings => "monthlySavings",
            InputField::ExpectedReturn => "expectedReturn",
            InputField::InflationRate => "inflationRate",
            InputField::RetirementIncome => "retirementIncome",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::CurrentAge => "Current Age",
            InputField::RetirementAge => "Retirement Age",
            InputField::CurrentIncome => "Current Annual Income ($)",
            InputField::CurrentSavings => "Current Savings ($)",
            InputField::MonthlySavings => "Monthly Savings ($)",
            InputField::ExpectedReturn => "Expected Return (%)",
            InputField::InflationRate => "Inflation Rate (%)",
            InputField::RetirementIncome => "Desired Retirement Income (%)",
        }
    }

    /// Short explanation shown by the field's help affordance.
    pub fn help(&self) -> &'static str {
        match self {
            InputField::CurrentAge => "Your current age in years",
            InputField::RetirementAge => "Your desired retirement age",
            InputField::CurrentIncome => "Your current yearly income before taxes",
            InputField::CurrentSavings => "Your current retirement savings",
            InputField::MonthlySavings => "How much you save monthly for retirement",
            InputField::ExpectedReturn => "Expected annual return on investments",
            InputField::InflationRate => "Expected annual inflation rate",
            InputField::RetirementIncome => "Percentage of current income needed in retirement",
        }
    }
}
