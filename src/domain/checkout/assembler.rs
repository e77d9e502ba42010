use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cart::Cart;

// ============================================================================
// Order Assembly
// ============================================================================

/// One unit sold. A cart line with `count = 3` expands to three records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderRecord {
    pub item_id: Uuid,
    pub purchased_at: DateTime<Utc>,
}

/// The full checkout payload, in cart insertion order. Sent to the order
/// sink as a single request.
pub type OrderRequest = Vec<OrderRecord>;

/// Expand a cart snapshot into an order request.
///
/// Each record captures its own timestamp at assembly time; records within
/// the same line may share a timestamp under a coarse clock, which is fine.
/// An empty cart assembles to an empty request - gating empty checkouts is
/// the caller's job.
pub fn assemble(cart: &Cart) -> OrderRequest {
    let mut records = Vec::with_capacity(cart.total_units() as usize);

    for line in cart.lines() {
        for _ in 0..line.count {
            records.push(OrderRecord {
                item_id: line.item_id(),
                purchased_at: Utc::now(),
            });
        }
    }

    records
}

// ============================================================================
// Unit Tests
// ============================================================================
