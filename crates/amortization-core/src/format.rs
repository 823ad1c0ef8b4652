//! Display helpers for monetary amounts in Vietnamese dong.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const NOT_AVAILABLE: &str = "N/A";

/// Round to a whole unit and group thousands with commas: `1,000,000`.
pub fn format_grouped(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `1,000,000,000 VND`, or `N/A` when there is no amount.
pub fn format_vnd(amount: Option<Decimal>) -> String {
    match amount {
        Some(a) => format!("{} VND", format_grouped(a)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Same as [`format_vnd`] for floating-point input; NaN, infinities and
/// values outside the decimal range are `N/A`.
pub fn format_vnd_f64(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format_vnd(Decimal::from_f64(amount))
}
