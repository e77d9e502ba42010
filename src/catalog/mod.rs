use async_trait::async_trait;

use crate::domain::cart::Item;

// ============================================================================
// Catalog Source - External Collaborator
// ============================================================================
//
// Supplies the purchasable items the user picks from. The cart engine never
// mutates the catalog; a fetch failure is surfaced for the UI message and
// treated upstream as "no items available", never as fatal. Cart state is
// unaffected by catalog failures.
//
// ============================================================================

mod http;
mod memory;

pub use http::HttpCatalog;
pub use memory::StaticCatalog;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<Item>, CatalogError>;
}
