use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Cart Value Objects
// ============================================================================

/// A purchasable catalog entry. Immutable; identity is `id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
}

/// One distinct item and its quantity in the cart.
///
/// `item` is the snapshot taken when the item was first added; later adds of
/// the same id only bump `count`. Invariant: `count >= 1` - a line driven to
/// zero is removed from the cart, never retained.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CartLine {
    pub item: Item,
    pub count: u32,
}

impl CartLine {
    pub fn item_id(&self) -> Uuid {
        self.item.id
    }

    pub fn subtotal(&self) -> BigDecimal {
        &self.item.price * &BigDecimal::from(self.count)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
