use async_trait::async_trait;
use std::time::Duration;

use crate::domain::checkout::OrderRequest;

use super::{OrderSink, OrderSinkError};

/// Order sink backed by the storefront API
/// (`POST {base_url}/api/orders/add`).
///
/// The whole record sequence goes out as one JSON array in a single
/// request. A request timeout bounds a hung backend; there is no retry -
/// the caller keeps the cart on failure and the user retries.
pub struct HttpOrderSink {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderSink {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl OrderSink for HttpOrderSink {
    async fn submit(&self, request: &OrderRequest) -> Result<(), OrderSinkError> {
        let url = format!("{}/api/orders/add", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                url = %url,
                status = %status,
                units = request.len(),
                "Order rejected by backend"
            );
            return Err(OrderSinkError::Rejected(status));
        }

        tracing::info!(units = request.len(), "Order accepted by backend");
        Ok(())
    }
}
