//! Order Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{cart::CartLine, location::Location, pricing::OrderTotals};

/// Address stored for takeaway orders, which have no delivery address.
pub const PICKUP_ADDRESS: &str = "Pickup";

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Collected at the restaurant.
    Takeaway,
    /// Delivered to the customer's address.
    Delivery,
}

impl OrderType {
    /// Wire-format name of the order type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Takeaway => "takeaway",
            Self::Delivery => "delivery",
        }
    }
}

impl Display for OrderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on pickup or delivery.
    #[default]
    Cash,
    /// Card on pickup or delivery.
    Card,
    /// UPI transfer.
    Upi,
}

impl PaymentMethod {
    /// Wire-format name of the payment method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Upi => "upi",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a persisted order, mutated only by the back office.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Newly submitted, not yet picked up by the kitchen.
    #[default]
    Pending,
    /// Being prepared.
    Preparing,
    /// Ready for pickup or dispatch.
    Ready,
    /// Handed over to the customer.
    Completed,
    /// Cancelled by the restaurant.
    Cancelled,
}

impl OrderStatus {
    /// Wire-format name of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Customer-supplied checkout fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Customer name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Delivery address; ignored for takeaway orders.
    pub address: String,
    /// Takeaway or delivery.
    pub order_type: OrderType,
    /// Payment method, cash by default.
    pub payment_method: PaymentMethod,
}

impl Default for CustomerDetails {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            order_type: OrderType::Takeaway,
            payment_method: PaymentMethod::default(),
        }
    }
}

/// One ordered line as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Item display name.
    pub name: String,
    /// Unit price in whole currency units.
    pub price: u64,
    /// Ordered quantity.
    pub quantity: u64,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name.clone(),
            price: line.unit_price,
            quantity: line.quantity,
        }
    }
}

/// The immutable snapshot produced at submission time, prior to persistence.
///
/// A new draft is composed per submission attempt; nothing mutates one after
/// creation.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftOrder {
    customer: String,
    phone: String,
    address: String,
    order_type: OrderType,
    payment_method: PaymentMethod,
    location: Option<Location>,
    lines: Vec<OrderLine>,
    totals: OrderTotals,
}

impl DraftOrder {
    /// Compose a draft from the customer fields, the optional device
    /// location and the cart snapshot with its derived totals.
    ///
    /// Takeaway orders store the [`PICKUP_ADDRESS`] sentinel in place of a
    /// delivery address.
    #[must_use]
    pub fn compose(
        details: &CustomerDetails,
        location: Option<Location>,
        lines: Vec<OrderLine>,
        totals: OrderTotals,
    ) -> Self {
        let address = match details.order_type {
            OrderType::Takeaway => PICKUP_ADDRESS.to_string(),
            OrderType::Delivery => details.address.clone(),
        };

        Self {
            customer: details.name.clone(),
            phone: details.phone.clone(),
            address,
            order_type: details.order_type,
            payment_method: details.payment_method,
            location,
            lines,
            totals,
        }
    }

    /// The ordered lines.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// The derived totals frozen at composition time.
    #[must_use]
    pub fn totals(&self) -> OrderTotals {
        self.totals
    }

    /// Seal the draft into the persisted wire shape, stamping the initial
    /// status and the submission timestamp.
    #[must_use]
    pub fn into_record(self, date: Timestamp) -> OrderRecord {
        OrderRecord {
            customer: self.customer,
            phone: self.phone,
            address: self.address,
            order_type: self.order_type,
            location: self.location,
            items: self.lines,
            subtotal: self.totals.subtotal,
            gst: self.totals.gst,
            total: self.totals.total,
            payment_method: self.payment_method,
            status: OrderStatus::Pending,
            date,
        }
    }
}

/// The order record as written to and read from the realtime store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Customer name.
    pub customer: String,
    /// Contact phone number.
    pub phone: String,
    /// Delivery address, or the [`PICKUP_ADDRESS`] sentinel for takeaway.
    pub address: String,
    /// Takeaway or delivery.
    pub order_type: OrderType,
    /// Device coordinates for delivery orders, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Ordered lines.
    pub items: Vec<OrderLine>,
    /// Sum of unit price times quantity over all lines.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// GST amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub gst: Decimal,
    /// Subtotal plus GST.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Lifecycle status, `pending` on submission.
    pub status: OrderStatus,
    /// Submission timestamp.
    pub date: Timestamp,
}

/// Store-assigned unique identifier of a persisted order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wrap a store-assigned identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The short form shown to customers (`#abc123`).
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.get(..6).unwrap_or(&self.0)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// A draft order after a successful write: the record plus its
/// store-assigned identifier. The status field is mutated only via explicit
/// status updates from the back office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedOrder {
    /// Store-assigned identifier.
    pub id: OrderId,
    /// The order record.
    pub record: OrderRecord,
}
