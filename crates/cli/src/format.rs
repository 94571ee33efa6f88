//! Number formatting for terminal output.
//!
//! All formatting lives here in the presentation layer; the core hands out
//! raw `Decimal` values only.

use rust_decimal::Decimal;

/// Formats a currency amount with an explicit sign, rounded to whole units.
pub fn signed(value: Decimal) -> String {
    let mut rounded = value.round_dp(0);
    // Rounding a small loss yields negative zero, which would print "-0".
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    if rounded.is_sign_negative() {
        rounded.to_string()
    } else {
        format!("+{rounded}")
    }
}

/// Formats a price with two decimal places.
pub fn price(value: Decimal) -> String {
    value.round_dp(2).to_string()
}

/// Suffix marking a value that came from a fallback constant.
pub fn stale_marker(stale: bool) -> &'static str {
    if stale {
        " (stale fallback)"
    } else {
        ""
    }
}
