//! Orders administration service.
//!
//! Back-office view over the order store: list and filter persisted orders,
//! move them through their lifecycle. Orders are never deleted here.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::orders::{
    errors::OrderStoreError,
    models::{OrderId, OrderStatus, OrderType, PersistedOrder},
    store::OrderStore,
};

/// Filter over persisted orders. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Match only this status.
    pub status: Option<OrderStatus>,
    /// Match only this order type.
    pub order_type: Option<OrderType>,
    /// Case-insensitive substring over the order id, customer name and
    /// phone number.
    pub query: Option<String>,
}

impl OrderFilter {
    /// Check whether one order passes the filter.
    #[must_use]
    pub fn matches(&self, order: &PersistedOrder) -> bool {
        if self.status.is_some_and(|status| order.record.status != status) {
            return false;
        }

        if self
            .order_type
            .is_some_and(|order_type| order.record.order_type != order_type)
        {
            return false;
        }

        match &self.query {
            None => true,
            Some(query) => {
                let query = query.to_lowercase();

                order.id.as_str().to_lowercase().contains(&query)
                    || order.record.customer.to_lowercase().contains(&query)
                    || order.record.phone.contains(&query)
            }
        }
    }
}

/// Back-office service over an order store.
pub struct OrdersAdmin<S> {
    store: S,
}

impl<S: OrderStore> OrdersAdmin<S> {
    /// Create the service over the given store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List the orders passing `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderStoreError`] when the store cannot be read.
    pub async fn list_orders(
        &self,
        filter: &OrderFilter,
    ) -> Result<Vec<PersistedOrder>, OrderStoreError> {
        let mut orders = self.store.list_orders().await?;

        orders.retain(|order| filter.matches(order));
        orders.sort_by(|a, b| b.record.date.cmp(&a.record.date));

        Ok(orders)
    }

    /// Move one order to a new lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderStoreError`] when the order does not exist or the
    /// store rejects the update.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), OrderStoreError> {
        tracing::info!(order_id = %id, status = %status, "updating order status");

        self.store.update_status(id, status).await
    }
}

impl<S> Debug for OrdersAdmin<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OrdersAdmin").finish_non_exhaustive()
    }
}
