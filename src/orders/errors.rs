//! Order store errors.

use thiserror::Error;

/// Errors reported by an order store.
///
/// All variants are recoverable by user-initiated retry; the cart is never
/// cleared on failure.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    /// The store rejected the caller's credentials. Retrying will not help;
    /// the restaurant administrator has to grant access.
    #[error("permission denied by the order store; contact the restaurant administrator")]
    PermissionDenied,

    /// No order exists for the given identifier.
    #[error("order not found")]
    NotFound,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-2xx response or an unexpected body.
    #[error("unexpected response from the order store: {0}")]
    UnexpectedResponse(String),
}
