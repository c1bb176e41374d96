//! Currency formatting
//!
//! A single fixed format: US dollars, en-US digit grouping, always two decimal
//! places, rounded half away from zero at the cent.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const CURRENCY_SYMBOL: &str = "$";
const ZERO: &str = "$0.00";

/// Formats a value as `$1,234.56`. Negative values render as `-$1,234.56`.
///
/// Rounding applies to the shortest decimal form of the value, so `1.005`
/// renders as `$1.01`. Values that round to zero cents, and non-finite values,
/// render as `$0.00`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return ZERO.to_string();
    }

    let Some((whole, fraction)) = round_to_cents(value.abs()) else {
        return ZERO.to_string();
    };

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{}.{fraction}", group_thousands(&whole))
}

/// Whole and cent digits of a non-negative finite value, `None` when it rounds to zero.
fn round_to_cents(magnitude: f64) -> Option<(String, String)> {
    match Decimal::from_str(&magnitude.to_string()) {
        Ok(exact) => {
            let cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            if cents.is_zero() {
                return None;
            }
            let text = format!("{cents:.2}");
            let (whole, fraction) = text.split_once('.')?;
            Some((whole.to_string(), fraction.to_string()))
        }
        // Outside Decimal's range. Doubles that large are integral and print
        // as plain digits; doubles that small round to zero.
        Err(_) => {
            let whole = format!("{magnitude:.0}");
            (whole != "0").then(|| (whole, "00".to_string()))
        }
    }
}

/// Formats a magnitude shown as a subtraction, e.g. a tax line: `-$2,500.00`.
///
/// The prefix is applied to whatever `format_currency` returns; callers decide
/// which values are subtractions.
pub fn format_subtraction(value: f64) -> String {
    format!("-{}", format_currency(value))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
