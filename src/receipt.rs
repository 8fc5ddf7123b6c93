//! Receipt
//!
//! Printable confirmation for a persisted order: the ordered lines as a
//! table, the bill summary, and the customer details.

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::orders::models::{OrderType, PersistedOrder};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("failed to write receipt")]
    Io(#[from] io::Error),
}

/// Printable confirmation for one persisted order.
#[derive(Debug, Clone)]
pub struct OrderReceipt<'a> {
    order: &'a PersistedOrder,
}

impl<'a> OrderReceipt<'a> {
    /// Create a receipt over the given order.
    #[must_use]
    pub fn new(order: &'a PersistedOrder) -> Self {
        Self { order }
    }

    /// Write the receipt.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let record = &self.order.record;

        writeln!(out, "Order #{}", self.order.id.short())?;
        writeln!(out, "{}", item_table(self.order))?;

        writeln!(out, " Subtotal: {}", inr(record.subtotal))?;
        writeln!(out, " GST (5%): {}", inr(record.gst))?;
        writeln!(out, " Total:    {}", inr(record.total))?;
        writeln!(out)?;

        writeln!(out, " Customer: {} ({})", record.customer, record.phone)?;
        writeln!(out, " {}: {}", record.order_type, record.address)?;
        writeln!(out, " Payment:  {}", record.payment_method)?;

        let note = match record.order_type {
            OrderType::Takeaway => "Show your order id when you arrive to pick up your order.",
            OrderType::Delivery => "Our delivery person will confirm your order with this order id.",
        };
        writeln!(out, "\n {note}")?;

        Ok(())
    }
}

fn item_table(order: &PersistedOrder) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Qty", "Item", "Price", "Line total"]);

    for line in &order.record.items {
        builder.push_record([
            line.quantity.to_string(),
            line.name.clone(),
            inr(Decimal::from(line.price)),
            inr(Decimal::from(line.price.saturating_mul(line.quantity))),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.modify(Columns::new(2..4), Alignment::right());

    table.to_string()
}

fn inr(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::INR).to_string()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::orders::models::{
        OrderId, OrderLine, OrderRecord, OrderStatus, PaymentMethod,
    };

    use super::*;

    fn confirmed_order(order_type: OrderType) -> PersistedOrder {
        PersistedOrder {
            id: OrderId::new("abc123def"),
            record: OrderRecord {
                customer: "Anitha".to_string(),
                phone: "9840012345".to_string(),
                address: "Pickup".to_string(),
                order_type,
                location: None,
                items: vec![
                    OrderLine {
                        name: "Dosa".to_string(),
                        price: 100,
                        quantity: 2,
                    },
                    OrderLine {
                        name: "Chicken Biryani".to_string(),
                        price: 250,
                        quantity: 1,
                    },
                ],
                subtotal: Decimal::from(450),
                gst: Decimal::new(2250, 2),
                total: Decimal::new(47250, 2),
                payment_method: PaymentMethod::Cash,
                status: OrderStatus::Pending,
                date: Timestamp::UNIX_EPOCH,
            },
        }
    }

    fn rendered(order_type: OrderType) -> Result<String, ReceiptError> {
        let order = confirmed_order(order_type);
        let mut out = Vec::new();

        OrderReceipt::new(&order).write_to(&mut out)?;

        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn receipt_shows_the_short_order_id_and_lines() -> TestResult {
        let output = rendered(OrderType::Takeaway)?;

        assert!(output.contains("Order #abc123"), "missing short id:\n{output}");
        assert!(output.contains("Chicken Biryani"), "missing line item:\n{output}");
        assert!(output.contains("GST (5%)"), "missing GST row:\n{output}");

        Ok(())
    }

    #[test]
    fn receipt_totals_match_the_record() -> TestResult {
        let output = rendered(OrderType::Takeaway)?;

        assert!(output.contains("450"), "missing subtotal:\n{output}");
        assert!(output.contains("472.50"), "missing total:\n{output}");

        Ok(())
    }

    #[test]
    fn pickup_and_delivery_notes_differ() -> TestResult {
        let takeaway = rendered(OrderType::Takeaway)?;
        let delivery = rendered(OrderType::Delivery)?;

        assert!(takeaway.contains("pick up your order"), "takeaway note:\n{takeaway}");
        assert!(delivery.contains("delivery person"), "delivery note:\n{delivery}");

        Ok(())
    }
}
