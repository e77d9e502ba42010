use actix::Actor;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod actors;
mod catalog;
mod domain;
mod ordering;

use actors::{AddItem, CartSessionActor, Checkout, DecrementLine, GetCart, IncrementLine};
use catalog::{CatalogSource, HttpCatalog};
use ordering::HttpOrderSink;

#[actix::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,storefront_cart=debug")),
        )
        .init();

    tracing::info!("🛒 Starting storefront cart session");

    let base_url =
        std::env::var("STOREFRONT_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    tracing::info!(base_url = %base_url, "Using storefront backend");

    // === 1. Fetch the catalog ===
    // A fetch failure is not fatal: the session simply has no items to sell.
    let catalog = HttpCatalog::new(&base_url);
    let items = match catalog.fetch_items().await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "Catalog fetch failed, no items available");
            Vec::new()
        }
    };

    if items.is_empty() {
        tracing::info!("No items available, nothing to do");
        return Ok(());
    }

    // === 2. Start the cart session ===
    let sink = Arc::new(HttpOrderSink::new(&base_url));
    let session = CartSessionActor::new(sink).start();

    // === 3. Walk the cart lifecycle the way a shopper would ===
    let first = items[0].clone();
    session.send(AddItem { item: first.clone() }).await?;
    session.send(AddItem { item: first.clone() }).await?;

    if let Some(second) = items.get(1) {
        session
            .send(AddItem {
                item: second.clone(),
            })
            .await?;
        session.send(IncrementLine { item_id: second.id }).await?;
    }

    // Changed their mind about one unit of the first item
    let cart = session.send(DecrementLine { item_id: first.id }).await?;
    tracing::info!(
        units = cart.total_units(),
        total = %cart.total_price(),
        "Cart ready for checkout"
    );

    // === 4. Checkout ===
    match session.send(Checkout).await? {
        Ok(receipt) => {
            tracing::info!(units = receipt.units_submitted, "✅ Purchase complete")
        }
        Err(e) => tracing::error!(error = %e, "Purchase failed, cart kept for retry"),
    }

    let cart = session.send(GetCart).await?;
    tracing::info!(units = cart.total_units(), "Session finished");

    Ok(())
}
