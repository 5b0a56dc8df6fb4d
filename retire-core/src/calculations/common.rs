//! Common time-value-of-money helpers.
//!
//! All functions work on plain `f64` and follow IEEE-754 semantics: a zero
//! rate divides by zero and yields `NaN` or an infinity rather than a
//! special-cased limit.

/// Clamps a value to a minimum of zero.
///
/// Negative values (including `-0.0`) become `0.0`. `NaN` is passed through
/// unchanged, so an ill-defined projection stays visibly ill-defined.
///
/// # Examples
///
/// ```
/// use retire_core::calculations::common::clamp_non_negative;
///
/// assert_eq!(clamp_non_negative(-12.5), 0.0);
/// assert_eq!(clamp_non_negative(12.5), 12.5);
/// assert!(clamp_non_negative(f64::NAN).is_nan());
/// ```
pub fn clamp_non_negative(value: f64) -> f64 {
    if value <= 0.0 { 0.0 } else { value }
}

/// Present value of an ordinary annuity.
///
/// The lump sum today that funds `periods` end-of-period withdrawals of
/// `payment`, discounted at `rate` per period.
///
/// # Examples
///
/// ```
/// use retire_core::calculations::common::present_value_of_annuity;
///
/// let pv = present_value_of_annuity(100.0, 0.10, 2.0);
/// assert!((pv - 173.553_719).abs() < 1e-6);
/// ```
pub fn present_value_of_annuity(
    payment: f64,
    rate: f64,
    periods: f64,
) -> f64 {
    payment * (1.0 - (1.0 + rate).powf(-periods)) / rate
}

/// Value of `amount` after compounding at `rate` for `periods` periods.
pub fn compound(
    amount: f64,
    rate: f64,
    periods: f64,
) -> f64 {
    amount * (1.0 + rate).powf(periods)
}

/// Level payment that accumulates to `future_value` after `periods`
/// end-of-period deposits earning `rate` per period (sinking fund payment).
pub fn sinking_fund_payment(
    future_value: f64,
    rate: f64,
    periods: f64,
) -> f64 {
    future_value * rate / ((1.0 + rate).powf(periods) - 1.0)
}
