use std::sync::LazyLock;

use regex::Regex;

/// Longest leading decimal literal, as a browser's `parseFloat` reads it.
static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("number prefix pattern is valid")
});

/// Parses raw field text into a number.
///
/// Reads the longest numeric prefix after leading whitespace and ignores the
/// rest (`"12abc"` is 12, `"1,234"` is 1). Text without a numeric prefix,
/// and any zero, becomes `0.0`. Never fails.
pub fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let Some(prefix) = NUMBER_PREFIX.find(trimmed) else {
        if !trimmed.is_empty() {
            tracing::debug!(input = %s, "non-numeric input treated as 0");
        }
        return 0.0;
    };

    let literal = prefix.as_str();
    let value = match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => literal.parse().unwrap_or(0.0),
    };

    // `-0` and `NaN` both collapse to a plain zero.
    if value == 0.0 || value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Rounds to the nearest integer with halves going toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Inserts `,` every three digits of a plain integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats an amount as whole currency units, e.g. `$569,339`.
///
/// `NaN` renders as `$NaN` and infinities as `$∞` / `$-∞`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "$∞" } else { "$-∞" }.to_string();
    }

    let rounded = round_half_up(value);
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("${sign}{}", group_thousands(&digits))
}

/// Formats a number unrounded in its shortest exact form, e.g. `35` or `2.5`.
///
/// Magnitudes from `1e21` up and below `1e-6` switch to exponent form with
/// an explicit sign, e.g. `1e+22` or `1.5e-7`.
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    format!("{value}")
}
