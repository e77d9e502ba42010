use async_trait::async_trait;
use std::time::Duration;

use crate::domain::cart::Item;

use super::{CatalogError, CatalogSource};

/// Catalog backed by the storefront API (`GET {base_url}/api/products`).
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
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
impl CatalogSource for HttpCatalog {
    async fn fetch_items(&self) -> Result<Vec<Item>, CatalogError> {
        let url = format!("{}/api/products", self.base_url);

        tracing::debug!(url = %url, "Fetching catalog");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Catalog fetch rejected");
            return Err(CatalogError::Status(status));
        }

        let items: Vec<Item> = response.json().await?;
        tracing::info!(count = items.len(), "Catalog fetched");

        Ok(items)
    }
}
