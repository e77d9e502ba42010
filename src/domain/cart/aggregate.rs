use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::CartCommand;
use super::value_objects::{CartLine, Item};

// ============================================================================
// Cart Aggregate - Domain Logic
// ============================================================================
//
// Invariants enforced after every command:
// 1. Every retained line has count >= 1
// 2. At most one line per item id
// 3. Insertion order of lines is preserved (stable display order)
//
// Commands never fail: increment/decrement on an absent id is a silent
// no-op, tolerating stale references from a UI that raced a removal.
//
// ============================================================================

/// An immutable snapshot of the cart's contents.
///
/// Lines are kept in insertion order; the order is stable for display but
/// carries no other meaning. Only `CartAggregate` produces new snapshots.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: Uuid) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id() == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines (the cart badge number).
    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|l| l.count).sum()
    }

    pub fn total_price(&self) -> BigDecimal {
        let mut total = BigDecimal::from(0);
        for line in &self.lines {
            total += line.subtotal();
        }
        total
    }
}

/// Owns the cart state for one session and applies commands to it.
pub struct CartAggregate {
    cart: Cart,
}

impl CartAggregate {
    pub fn new() -> Self {
        Self {
            cart: Cart::default(),
        }
    }

    /// Current state as an owned snapshot.
    pub fn snapshot(&self) -> Cart {
        self.cart.clone()
    }

    /// Apply a command and return the resulting snapshot.
    pub fn apply(&mut self, command: CartCommand) -> Cart {
        match command {
            CartCommand::Add(item) => self.add(item),
            CartCommand::Increment(item_id) => self.increment(item_id),
            CartCommand::Decrement(item_id) => self.decrement(item_id),
            CartCommand::Clear => self.cart.lines.clear(),
        }

        debug_assert!(self.cart.lines.iter().all(|l| l.count >= 1));
        self.snapshot()
    }

    fn add(&mut self, item: Item) {
        match self.line_mut(item.id) {
            // First add's snapshot wins: a later add with a changed
            // price/name only bumps the count.
            Some(line) => line.count += 1,
            None => self.cart.lines.push(CartLine { item, count: 1 }),
        }
    }

    fn increment(&mut self, item_id: Uuid) {
        if let Some(line) = self.line_mut(item_id) {
            line.count += 1;
        }
    }

    fn decrement(&mut self, item_id: Uuid) {
        if let Some(line) = self.line_mut(item_id) {
            line.count -= 1;
        }
        // Sole removal path: a line at zero does not survive the command.
        self.cart.lines.retain(|l| l.count > 0);
    }

    fn line_mut(&mut self, item_id: Uuid) -> Option<&mut CartLine> {
        self.cart.lines.iter_mut().find(|l| l.item_id() == item_id)
    }
}

impl Default for CartAggregate {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
