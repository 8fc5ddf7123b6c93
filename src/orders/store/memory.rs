//! In-memory order store, for tests and demos.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use crate::orders::{
    errors::OrderStoreError,
    models::{OrderId, OrderRecord, OrderStatus, PersistedOrder},
    store::OrderStore,
};

/// An [`OrderStore`] backed by process memory, in insertion order.
///
/// Clones are cheap handles onto the same underlying collection, so the
/// checkout surface and the back office can share one store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<Mutex<Vec<PersistedOrder>>>,
}

impl InMemoryOrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if no orders have been persisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, record: OrderRecord) -> Result<OrderId, OrderStoreError> {
        let id = OrderId::new(Uuid::now_v7().simple().to_string());

        let mut orders = self.orders.lock().unwrap_or_else(PoisonError::into_inner);
        orders.push(PersistedOrder {
            id: id.clone(),
            record,
        });

        Ok(id)
    }

    async fn list_orders(&self) -> Result<Vec<PersistedOrder>, OrderStoreError> {
        let orders = self.orders.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(orders.clone())
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<(), OrderStoreError> {
        let mut orders = self.orders.lock().unwrap_or_else(PoisonError::into_inner);

        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(OrderStoreError::NotFound)?;

        order.record.status = status;

        Ok(())
    }
}
