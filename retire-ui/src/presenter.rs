//! Turns calculation results into display text.

use retire_core::CalculatorResults;

use crate::utils::{format_currency, format_number};

pub const TITLE: &str = "Retirement Calculator";
pub const SUBTITLE: &str = "Plan your future with precision";

pub const HOW_IT_WORKS_TITLE: &str = "How it Works";
pub const HOW_IT_WORKS: &str = "This calculator uses your current age, income, and savings to \
project your retirement needs. It factors in inflation and expected investment returns to \
determine how much you need to save monthly to reach your retirement goals. The calculation \
assumes a retirement length up to age 90 and uses the present value of an annuity formula to \
determine total savings needed.";

/// One labeled value of the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub label: &'static str,
    pub value: String,
}

/// The three results panel entries, in display order.
pub fn result_lines(results: &CalculatorResults) -> [ResultLine; 3] {
    [
        ResultLine {
            label: "Total Savings Needed",
            value: format_currency(results.total_needed),
        },
        ResultLine {
            label: "Years Until Retirement",
            value: format_number(results.years_until_retirement),
        },
        ResultLine {
            label: "Required Monthly Savings",
            value: format_currency(results.required_monthly_savings),
        },
    ]
}

/// Renders the results panel as aligned text; empty before the first
/// successful calculation.
pub fn format_results(results: Option<&CalculatorResults>) -> String {
    let Some(results) = results else {
        return String::new();
    };

    result_lines(results)
        .iter()
        .map(|line| format!("{:<26}{:>16}", line.label, line.value))
        .collect::<Vec<_>>()
        .join("\n")
}
