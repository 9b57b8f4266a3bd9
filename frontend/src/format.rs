//! Number formatting for the balance page.
//!
//! Amounts are plain `f64` values. The balance is printed with the default
//! number-to-string conversion (no rounding), while rates use a fixed number
//! of decimals.

use rust_decimal::{Decimal, RoundingStrategy};

/// Default number-to-string conversion, as a browser would print a number.
///
/// Shortest round-trip digits. Magnitudes from `1e21` up and below `1e-6`
/// switch to exponent form (`1e+21`, `1.5e-7`). Non-finite values print as
/// `NaN`, `Infinity` and `-Infinity`, and negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return value.to_string(),
    };
    if (-6..=20).contains(&exponent) {
        value.to_string()
    } else if exponent > 0 {
        format!("{}e+{}", mantissa, exponent)
    } else {
        format!("{}e{}", mantissa, exponent)
    }
}

/// Formats `value` with exactly `digits` decimals.
///
/// Ties round away from zero on the exact binary value, so `2.5` gives `3`
/// and `43250.125` gives `43250.13` at two decimals. Magnitudes from `1e21`
/// up fall back to [`format_number`].
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return format_number(value);
    }
    // -0.0 would otherwise print with a leading minus
    let value = if value == 0.0 { 0.0 } else { value };
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(digits as u32, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits as u32);
            rounded.to_string()
        }
        None => format!("{:.*}", digits, value),
    }
}

fn format_with_commas(digits: &str) -> String {
    let s = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Currency amount for summary cards: thousands separators on the integer
/// part, fractional part left as the default conversion produced it.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}{}", symbol, format_number(amount));
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let plain = format_number(amount.abs());
    let (whole, fraction) = match plain.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (plain.as_str(), None),
    };
    let grouped = format_with_commas(whole);
    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, symbol, grouped, fraction),
        None => format!("{}{}{}", sign, symbol, grouped),
    }
}
