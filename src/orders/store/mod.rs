//! Order Stores

use async_trait::async_trait;
use mockall::automock;

use crate::orders::{
    errors::OrderStoreError,
    models::{OrderId, OrderRecord, OrderStatus, PersistedOrder},
};

mod memory;
mod rtdb;

pub use memory::InMemoryOrderStore;
pub use rtdb::{RtdbConfig, RtdbOrderStore};

/// The realtime persistence contract for submitted orders.
#[automock]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Durably write a new order and return its store-assigned identifier.
    ///
    /// Never fails silently; any write failure surfaces as an
    /// [`OrderStoreError`].
    async fn create(&self, record: OrderRecord) -> Result<OrderId, OrderStoreError>;

    /// Fetch all persisted orders.
    async fn list_orders(&self) -> Result<Vec<PersistedOrder>, OrderStoreError>;

    /// Update the status field of one order.
    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<(), OrderStoreError>;
}
