use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use retire_core::InputField;

use crate::presenter::format_results;
use crate::state::AppState;

/// Rough retirement savings projection.
///
/// Without a subcommand the interactive form is opened.
#[derive(Debug, Parser)]
#[command(name = "retirement-calculator", version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive; overrides the configuration file.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate once from the given values and print the results.
    Calc(CalcArgs),
}

/// Raw field values. Each is read exactly as if typed into the form, so
/// non-numeric text counts as 0. Omitted fields keep their defaults.
#[derive(Debug, Default, Args)]
pub struct CalcArgs {
    /// Your current age in years [default: 30]
    #[arg(long, allow_hyphen_values = true)]
    pub current_age: Option<String>,

    /// Your desired retirement age [default: 65]
    #[arg(long, allow_hyphen_values = true)]
    pub retirement_age: Option<String>,

    /// Your current yearly income before taxes [default: 50000]
    #[arg(long, allow_hyphen_values = true)]
    pub current_income: Option<String>,

    /// Your current retirement savings [default: 10000]
    #[arg(long, allow_hyphen_values = true)]
    pub current_savings: Option<String>,

    /// How much you save monthly for retirement [default: 500]
    #[arg(long, allow_hyphen_values = true)]
    pub monthly_savings: Option<String>,

    /// Expected annual return on investments, in percent [default: 7]
    #[arg(long, allow_hyphen_values = true)]
    pub expected_return: Option<String>,

    /// Expected annual inflation rate, in percent [default: 2]
    #[arg(long, allow_hyphen_values = true)]
    pub inflation_rate: Option<String>,

    /// Percentage of current income needed in retirement [default: 80]
    #[arg(long, allow_hyphen_values = true)]
    pub retirement_income: Option<String>,
}

impl CalcArgs {
    /// The supplied fields paired with their raw text, in form order.
    pub fn raw_values(&self) -> Vec<(InputField, &str)> {
        [
            (InputField::CurrentAge, &self.current_age),
            (InputField::RetirementAge, &self.retirement_age),
            (InputField::CurrentIncome, &self.current_income),
            (InputField::CurrentSavings, &self.current_savings),
            (InputField::MonthlySavings, &self.monthly_savings),
            (InputField::ExpectedReturn, &self.expected_return),
            (InputField::InflationRate, &self.inflation_rate),
            (InputField::RetirementIncome, &self.retirement_income),
        ]
        .into_iter()
        .filter_map(|(field, raw)| raw.as_deref().map(|raw| (field, raw)))
        .collect()
    }
}

/// Runs one headless calculation and writes the notification and results.
///
/// Returns `Ok(false)` when the inputs were rejected.
pub fn run_calc(
    args: &CalcArgs,
    out: &mut impl Write,
) -> Result<bool> {
    let mut state = AppState::new();
    for (field, raw) in args.raw_values() {
        state.edit_field(field, raw);
    }

    let notification = state.calculate();
    writeln!(out, "{notification}")?;

    if state.has_results() {
        writeln!(out, "{}", format_results(state.results.as_ref()))?;
    }

    Ok(!notification.is_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_values_skips_omitted_fields() {
        let args = CalcArgs {
            current_age: Some("40".to_string()),
            inflation_rate: Some("abc".to_string()),
            ..CalcArgs::default()
        };

        assert_eq!(
            args.raw_values(),
            vec![
                (InputField::CurrentAge, "40"),
                (InputField::InflationRate, "abc"),
            ]
        );
    }

    #[test]
    fn raw_values_empty_by_default() {
        assert!(CalcArgs::default().raw_values().is_empty());
    }
}
