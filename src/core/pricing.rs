//! # Pricing
//!
//! The order total is a pure function of the current screen state:
//!
//! ```text
//! total = (Σ extra.quantity × extra.value + unit_price) × order_quantity
//! ```
//!
//! Nothing here is cached. Callers evaluate it on every render, so the total
//! can never go stale when an extra or the quantity changes.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::state::{Extra, OrderQuantity};

/// Display convention for currency amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

impl Default for CurrencyFormat {
    /// Brazilian real, `R$ 1.234,56`.
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
        }
    }
}

/// Sum of `quantity × value` over all extras.
pub fn extras_subtotal(extras: &[Extra]) -> Decimal {
    extras
        .iter()
        .map(|extra| extra.value * Decimal::from(extra.quantity))
        .sum()
}

/// Total price for `quantity` units of an item with the given extras.
pub fn cart_total(unit_price: Decimal, extras: &[Extra], quantity: OrderQuantity) -> Decimal {
    (extras_subtotal(extras) + unit_price) * Decimal::from(quantity.get())
}

/// Formats an amount as a currency string, e.g. `R$ 1.234,50`.
///
/// Amounts are rounded half-away-from-zero to two fraction digits.
pub fn format_value(amount: Decimal, format: &CurrencyFormat) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    // `{:.2}` on an already-rounded Decimal always yields "<int>.<2 digits>"
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&format.symbol);
    out.push(' ');
    out.push_str(&group_thousands(int_part, format.thousands_separator));
    out.push(format.decimal_separator);
    out.push_str(frac_part);
    out
}

fn group_thousands(int_part: &str, separator: char) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
