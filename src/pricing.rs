//! Pricing
//!
//! Subtotal, GST and total derivation for an order.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::cart::CartLine;

/// Goods-and-services tax applied to every order, as a fraction of the
/// subtotal. Fixed at 5%; not configurable per item.
#[must_use]
pub fn gst_rate() -> Percentage {
    Percentage::from(Decimal::new(5, 2))
}

/// Derived totals for an order, frozen from the cart snapshot taken at
/// submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of unit price times quantity over all lines.
    pub subtotal: Decimal,
    /// GST amount, rounded to two decimal places.
    pub gst: Decimal,
    /// Subtotal plus GST.
    pub total: Decimal,
}

/// Compute subtotal, GST and total for the given cart lines.
///
/// Rounding happens exactly once, here: the GST amount is rounded to two
/// decimal places and the total is derived from the rounded amount, so the
/// stored and the displayed values always agree.
#[must_use]
pub fn order_totals(lines: &[CartLine]) -> OrderTotals {
    let units = lines
        .iter()
        .fold(0_u64, |acc, line| acc.saturating_add(line.line_total()));

    let subtotal = Decimal::from(units);
    let gst = (gst_rate() * subtotal).round_dp(2);
    let total = subtotal + gst;

    OrderTotals { subtotal, gst, total }
}
