//! Integration tests for the `calc` subcommand, driven through the parsed
//! command line and captured output.

use std::path::{Path, PathBuf};

use clap::Parser;
use pretty_assertions::assert_eq;
use retire_ui::{AppConfig, Cli, Command, run_calc};

/// Parses `calc` arguments and returns the output text and acceptance flag.
fn calc(args: &[&str]) -> (String, bool) {
    let argv = ["retirement-calculator", "calc"].iter().chain(args).copied();
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    let Some(Command::Calc(calc_args)) = cli.command else {
        panic!("expected the calc subcommand");
    };

    let mut out = Vec::new();
    let accepted = run_calc(&calc_args, &mut out).expect("writing to a buffer cannot fail");
    (String::from_utf8(out).unwrap(), accepted)
}

fn value_of<'a>(output: &'a str, label: &str) -> &'a str {
    output
        .lines()
        .find(|line| line.starts_with(label))
        .map(|line| line[label.len()..].trim())
        .unwrap_or_else(|| panic!("no line for {label}"))
}

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn defaults_print_notification_and_results() {
    let (output, accepted) = calc(&[]);

    assert!(accepted);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Calculation Complete: Your retirement projection has been updated."
    );
    assert_eq!(value_of(&output, "Total Savings Needed"), "$569,339");
    assert_eq!(value_of(&output, "Years Until Retirement"), "35");
    assert_eq!(value_of(&output, "Required Monthly Savings"), "$464");
}

#[test]
fn invalid_ages_print_only_the_error() {
    let (output, accepted) = calc(&["--retirement-age", "30"]);

    assert!(!accepted);
    assert_eq!(
        output,
        "Invalid Ages: Retirement age must be greater than current age\n"
    );
}

#[test]
fn equal_ages_are_rejected() {
    let (_, accepted) = calc(&["--current-age", "50", "--retirement-age", "50"]);

    assert!(!accepted);
}

#[test]
fn non_numeric_savings_count_as_zero() {
    let (output, accepted) = calc(&["--current-savings", "abc"]);

    assert!(accepted);
    assert_eq!(value_of(&output, "Required Monthly Savings"), "$512");
}

#[test]
fn monthly_savings_does_not_change_results() {
    let (baseline, _) = calc(&[]);
    let (output, _) = calc(&["--monthly-savings", "999999"]);

    assert_eq!(output, baseline);
}

#[test]
fn numeric_prefix_is_used() {
    let (output, _) = calc(&["--current-age", "40years"]);

    assert_eq!(value_of(&output, "Years Until Retirement"), "25");
}

#[test]
fn fractional_years_are_not_rounded() {
    let (output, _) = calc(&["--current-age", "30.5"]);

    assert_eq!(value_of(&output, "Years Until Retirement"), "34.5");
}

#[test]
fn negative_values_are_accepted_as_text() {
    let (output, accepted) = calc(&["--current-savings", "-5000"]);

    assert!(accepted);
    let monthly = value_of(&output, "Required Monthly Savings");
    assert!(monthly.starts_with('$'));
    assert_ne!(monthly, "$464");
}

#[test]
fn zero_real_return_shows_nan() {
    let (output, accepted) = calc(&["--expected-return", "2", "--inflation-rate", "2"]);

    assert!(accepted);
    assert_eq!(value_of(&output, "Total Savings Needed"), "$NaN");
    assert_eq!(value_of(&output, "Required Monthly Savings"), "$NaN");
}

#[test]
fn retiring_past_horizon_needs_nothing() {
    let (output, accepted) = calc(&["--retirement-age", "95"]);

    assert!(accepted);
    assert_eq!(value_of(&output, "Total Savings Needed"), "$0");
    assert_eq!(value_of(&output, "Required Monthly Savings"), "$0");
}

#[test]
fn global_options_parse_alongside_calc() {
    let cli = Cli::try_parse_from([
        "retirement-calculator",
        "--log-level",
        "debug",
        "calc",
        "--config",
        "quiet.toml",
    ])
    .unwrap();

    assert_eq!(cli.log_level.as_deref(), Some("debug"));
    assert_eq!(cli.config, Some(PathBuf::from("quiet.toml")));
}

#[test]
fn no_subcommand_means_interactive_form() {
    let cli = Cli::try_parse_from(["retirement-calculator"]).unwrap();

    assert!(cli.command.is_none());
}

#[test]
fn fixture_config_loads() {
    let config = AppConfig::load(Some(&fixture_path("quiet.toml"))).unwrap();

    assert_eq!(config.logging.level, "warn");
    assert!(!config.logging.console);
    assert_eq!(config.logging.file, None);
}
