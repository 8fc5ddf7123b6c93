//! Cart Store
//!
//! The shared mutable collection of order lines for the active session. The
//! store is an owned object injected into whichever surfaces need it, with a
//! typed subscription interface for change notification. All mutation is
//! single-threaded: discrete user actions on the session's event loop.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use smallvec::SmallVec;

use crate::catalog::{CatalogItem, ItemId};

/// One line of the cart: a selected item and its quantity.
///
/// At most one line per item identifier exists at any time; adding an
/// existing identifier merges quantities instead of duplicating the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Identifier of the catalog item.
    pub item_id: ItemId,
    /// Display name captured when the line was created.
    pub name: String,
    /// Unit price in whole currency units.
    pub unit_price: u64,
    /// Selected quantity, always at least one.
    pub quantity: u64,
}

impl CartLine {
    /// Unit price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[CartLine])>;

/// The session cart.
#[derive(Default)]
pub struct CartStore {
    lines: SmallVec<[CartLine; 8]>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `delta` into the quantity for `item_id`, creating the line if it
    /// does not exist yet.
    ///
    /// A merge that drives the quantity to zero or below deletes the line:
    /// zero-quantity lines are pruned eagerly, so every view of the cart sees
    /// the same set of lines. Removal is this same operation with
    /// `delta = -current` (see [`CartStore::remove`]); there is no separate
    /// delete path.
    ///
    /// Subscribers are notified after every call, even when the resulting
    /// quantity is unchanged in value. Returns a snapshot of the cart.
    pub fn add(&mut self, item_id: ItemId, delta: i64, name: &str, unit_price: u64) -> Vec<CartLine> {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item_id) {
            let quantity = i64::try_from(line.quantity)
                .unwrap_or(i64::MAX)
                .saturating_add(delta);

            if quantity > 0 {
                line.quantity = u64::try_from(quantity).unwrap_or_default();
            } else {
                self.lines.retain(|line| line.item_id != item_id);
            }
        } else if delta > 0 {
            self.lines.push(CartLine {
                item_id,
                name: name.to_string(),
                unit_price,
                quantity: u64::try_from(delta).unwrap_or_default(),
            });
        }

        self.notify();
        self.current_order()
    }

    /// Add `quantity` of a catalog item, deriving the line fields from it.
    pub fn add_item(&mut self, item: &CatalogItem, quantity: u64) -> Vec<CartLine> {
        self.add(
            item.id(),
            i64::try_from(quantity).unwrap_or(i64::MAX),
            &item.name,
            item.price,
        )
    }

    /// Set the quantity for an existing line by merging the difference.
    ///
    /// A no-op (without notification) when no line exists for `item_id`;
    /// quantities for unknown items cannot be invented because the line's
    /// name and price are captured at first add.
    pub fn set_quantity(&mut self, item_id: &ItemId, quantity: u64) {
        let Some(line) = self.lines.iter().find(|line| line.item_id == *item_id) else {
            return;
        };

        let delta = i64::try_from(quantity)
            .unwrap_or(i64::MAX)
            .saturating_sub(i64::try_from(line.quantity).unwrap_or(i64::MAX));
        let (name, unit_price) = (line.name.clone(), line.unit_price);

        self.add(item_id.clone(), delta, &name, unit_price);
    }

    /// Remove the line for `item_id` by merging `-current` into its quantity.
    pub fn remove(&mut self, item_id: &ItemId) {
        let Some(line) = self.lines.iter().find(|line| line.item_id == *item_id) else {
            return;
        };

        let delta = i64::try_from(line.quantity).unwrap_or(i64::MAX).saturating_neg();
        let (name, unit_price) = (line.name.clone(), line.unit_price);

        self.add(item_id.clone(), delta, &name, unit_price);
    }

    /// An owned snapshot of the current lines, never the live collection.
    #[must_use]
    pub fn current_order(&self) -> Vec<CartLine> {
        self.lines.to_vec()
    }

    /// Empty the cart and notify subscribers.
    ///
    /// Called exactly once per order, immediately after a successful
    /// submission.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.notify();
    }

    /// Derived total over all lines, in whole currency units.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |acc, line| acc.saturating_add(line.line_total()))
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Register a change subscriber, invoked synchronously after every
    /// mutating call with a snapshot of the lines.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[CartLine]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() < before
    }

    fn notify(&mut self) {
        let snapshot = self.lines.to_vec();

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}

impl Debug for CartStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
