use async_trait::async_trait;

use crate::domain::checkout::OrderRequest;

// ============================================================================
// Order Sink - External Collaborator
// ============================================================================
//
// Accepts the assembled order payload and reports success or failure. The
// engine does not retry and does not inspect failures beyond pass/fail:
// on failure the cart is preserved so the user can retry from the UI.
//
// ============================================================================

mod http;

pub use http::HttpOrderSink;

#[derive(Debug, thiserror::Error)]
pub enum OrderSinkError {
    #[error("order submission failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("order endpoint returned status {0}")]
    Rejected(reqwest::StatusCode),
}

#[async_trait]
pub trait OrderSink: Send + Sync {
    /// Submit the full record sequence as one request.
    async fn submit(&self, request: &OrderRequest) -> Result<(), OrderSinkError>;
}
