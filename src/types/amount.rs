use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::types::errors::AmountError;

/// Largest fractional scale a `Decimal` holds; inputs parsed at this scale may have been rounded.
const DECIMAL_MAX_SCALE: u32 = 28;

/// Coerces a monetary value received as text into an `f64`.
///
/// Parsing goes through `Decimal` rather than `f64::from_str` so that tokens such as
/// `NaN`, `inf` or `infinity` are rejected instead of leaking into the group statistics.
/// Plain (`-12.50`) and scientific (`1.5e3`) notations are accepted.
///
/// Numbers beyond `Decimal`'s range or scale (`1e29`, `1e-30`) are re-read as `f64`
/// and accepted as long as the result is finite.
pub fn parse_amount(value: &str) -> Result<f64, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::Empty);
    }

    let decimal = if value.contains(['e', 'E']) {
        Decimal::from_scientific(value)
    } else {
        Decimal::from_str(value)
    };

    match decimal {
        Ok(decimal) if decimal.scale() < DECIMAL_MAX_SCALE => decimal.to_f64().ok_or(AmountError::OutOfRange),
        Ok(_) => parse_finite_float(value, "value exceeds decimal precision"),
        Err(error) => parse_finite_float(value, &error.to_string())
    }
}

fn parse_finite_float(value: &str, decimal_error: &str) -> Result<f64, AmountError> {
    match f64::from_str(value) {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(AmountError::InvalidFormat(format!("'{value}' is not numeric: {decimal_error}")))
    }
}
