//! Orders
//!
//! Order models, the realtime order store contract and its implementations,
//! and the back-office administration service.

pub mod admin;
pub mod errors;
pub mod models;
pub mod store;

pub use errors::OrderStoreError;
pub use models::*;
