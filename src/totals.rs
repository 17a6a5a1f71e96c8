//! Cart Totals
//!
//! Display-only aggregate over cart rows. Plain `f64` arithmetic.

use crate::models::CartItem;

/// Sum of every row's price, missing or unparseable prices counting as zero
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(|item| item.price.amount()).sum()
}

/// Exactly two decimal places, e.g. `15.50`
pub fn format_total(total: f64) -> String {
    format!("{:.2}", total)
}
