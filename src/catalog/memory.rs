use async_trait::async_trait;

use crate::domain::cart::Item;

use super::{CatalogError, CatalogSource};

/// Fixed in-memory catalog for demos and tests.
pub struct StaticCatalog {
    items: Vec<Item>,
}

impl StaticCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_items(&self) -> Result<Vec<Item>, CatalogError> {
        Ok(self.items.clone())
    }
}
