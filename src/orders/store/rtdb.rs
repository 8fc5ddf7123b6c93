//! Realtime database order store.
//!
//! HTTP client for a hosted realtime database REST surface: orders live
//! under `orders.json`, a write returns the generated child key, and a
//! status update patches a single child node.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::orders::{
    errors::OrderStoreError,
    models::{OrderId, OrderRecord, OrderStatus, PersistedOrder},
    store::OrderStore,
};

/// Configuration for connecting to the realtime database.
#[derive(Debug, Clone)]
pub struct RtdbConfig {
    /// Database base URL, e.g. `"https://example-rtdb.firebaseio.com"`.
    pub base_url: String,

    /// Database secret or ID token appended as the `auth` query parameter.
    /// Anonymous access is used when absent.
    pub auth_token: Option<String>,
}

/// An [`OrderStore`] backed by the hosted realtime database.
#[derive(Debug, Clone)]
pub struct RtdbOrderStore {
    config: RtdbConfig,
    http: Client,
}

impl RtdbOrderStore {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: RtdbConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn orders_url(&self) -> String {
        format!("{}/orders.json", self.config.base_url.trim_end_matches('/'))
    }

    fn order_url(&self, id: &OrderId) -> String {
        format!(
            "{}/orders/{}.json",
            self.config.base_url.trim_end_matches('/'),
            id
        )
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.auth_token {
            Some(token) => request.query(&[("auth", token)]),
            None => request,
        }
    }
}

async fn check(response: Response, what: &str) -> Result<Response, OrderStoreError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(OrderStoreError::PermissionDenied);
    }

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();

        return Err(OrderStoreError::UnexpectedResponse(format!(
            "{what} failed with status {status}: {text}"
        )));
    }

    Ok(response)
}

#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

#[async_trait]
impl OrderStore for RtdbOrderStore {
    async fn create(&self, record: OrderRecord) -> Result<OrderId, OrderStoreError> {
        let response = self
            .with_auth(self.http.post(self.orders_url()))
            .json(&record)
            .send()
            .await?;

        let parsed: PushResponse = check(response, "order write").await?.json().await?;

        Ok(OrderId::new(parsed.name))
    }

    async fn list_orders(&self) -> Result<Vec<PersistedOrder>, OrderStoreError> {
        let response = self
            .with_auth(self.http.get(self.orders_url()))
            .send()
            .await?;

        // The database returns a JSON `null` body when no orders exist.
        let parsed: Option<FxHashMap<String, OrderRecord>> =
            check(response, "order listing").await?.json().await?;

        let orders = parsed
            .unwrap_or_default()
            .into_iter()
            .map(|(id, record)| PersistedOrder {
                id: OrderId::new(id),
                record,
            })
            .collect();

        Ok(orders)
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<(), OrderStoreError> {
        let body = serde_json::json!({ "status": status });

        let response = self
            .with_auth(self.http.patch(self.order_url(&id)))
            .json(&body)
            .send()
            .await?;

        check(response, "status update").await?;

        Ok(())
    }
}
