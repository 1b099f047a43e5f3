//! Display formatting for monetary values and percentages.
//!
//! Every formatter maps an unknown (`None`) or non-finite value to
//! [`UNKNOWN_PLACEHOLDER`] instead of failing.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, UNKNOWN_PLACEHOLDER};

/// Converts a decimal amount to `f64` for projection math.
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Converts an optional decimal amount to `f64`.
pub fn opt_to_f64(value: Option<Decimal>) -> Option<f64> {
    value.map(to_f64)
}

/// Formats a currency amount with two decimals and thousands grouping.
pub fn format_currency(value: Option<f64>, currency: &str) -> String {
    format_money(value, currency, DISPLAY_DECIMAL_PRECISION)
}

/// Formats a currency amount rounded to whole units (chart axis ticks).
pub fn format_compact_currency(value: Option<f64>, currency: &str) -> String {
    format_money(value, currency, 0)
}

/// Formats a signed percentage, e.g. `+4.20%` or `-1.05%`.
pub fn format_percent(value: Option<f64>) -> String {
    let Some(rounded) = round_finite(value, DISPLAY_DECIMAL_PRECISION) else {
        return UNKNOWN_PLACEHOLDER.to_string();
    };
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        "+"
    };
    format!("{}{:.2}%", sign, rounded.abs())
}

/// Formats a plain decimal without trailing zeros (`12.50` → `12.5`).
pub fn format_plain(value: Decimal) -> String {
    value.normalize().to_string()
}

fn format_money(value: Option<f64>, currency: &str, dp: u32) -> String {
    let Some(rounded) = round_finite(value, dp) else {
        return UNKNOWN_PLACEHOLDER.to_string();
    };
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.*}", dp as usize, rounded.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut amount = group_thousands(int_part);
    if let Some(frac) = frac_part {
        amount.push('.');
        amount.push_str(frac);
    }

    let sign = if negative { "-" } else { "" };
    let code = currency.trim().to_uppercase();
    match currency_symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{amount}"),
        None => format!("{sign}{amount} {code}"),
    }
}

fn round_finite(value: Option<f64>, dp: u32) -> Option<Decimal> {
    value
        .filter(|v| v.is_finite())
        .and_then(Decimal::from_f64)
        .map(|d| d.round_dp(dp))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "EUR" => Some("€"),
        "USD" => Some("$"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(Some(1234567.891), "EUR"), "€1,234,567.89");
        assert_eq!(format_currency(Some(999.5), "USD"), "$999.50");
        assert_eq!(format_currency(Some(0.0), "GBP"), "£0.00");
    }

    #[test]
    fn test_format_currency_negative_and_unknown_code() {
        assert_eq!(format_currency(Some(-20000.0), "EUR"), "-€20,000.00");
        assert_eq!(format_currency(Some(1500.0), "chf"), "1,500.00 CHF");
    }

    #[test]
    fn test_format_currency_unknown_value() {
        assert_eq!(format_currency(None, "EUR"), UNKNOWN_PLACEHOLDER);
        assert_eq!(format_currency(Some(f64::NAN), "EUR"), UNKNOWN_PLACEHOLDER);
        assert_eq!(
            format_currency(Some(f64::INFINITY), "EUR"),
            UNKNOWN_PLACEHOLDER
        );
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(Some(10349.6), "EUR"), "€10,350");
        assert_eq!(format_compact_currency(Some(999.4), "USD"), "$999");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(4.2)), "+4.20%");
        assert_eq!(format_percent(Some(-1.054)), "-1.05%");
        assert_eq!(format_percent(Some(-0.0001)), "+0.00%");
        assert_eq!(format_percent(None), UNKNOWN_PLACEHOLDER);
    }

    #[test]
    fn test_format_plain_strips_trailing_zeros() {
        assert_eq!(format_plain(dec!(12.50)), "12.5");
        assert_eq!(format_plain(dec!(100)), "100");
    }
}
