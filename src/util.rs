use std::str::FromStr;

use num_traits::ToPrimitive;
use rust_decimal::RoundingStrategy;

use crate::core::GenericResult;
use crate::types::Decimal;

/// Parses a locale-formatted amount like `1,00,000.50` ignoring thousands separators.
pub fn parse_amount(string: &str) -> Option<Decimal> {
    let string = string.trim().replace(',', "");
    Decimal::from_str(&string).or_else(|_| Decimal::from_scientific(&string)).ok()
}

pub fn round_to(value: Decimal, points: u32) -> Decimal {
    value.round_dp_with_strategy(points, RoundingStrategy::RoundHalfUp).normalize()
}

pub fn decimal_to_f64(value: Decimal) -> GenericResult<f64> {
    Ok(value.to_f64().ok_or_else(|| format!(
        "Unable to represent {} as a floating point number", value))?)
}
