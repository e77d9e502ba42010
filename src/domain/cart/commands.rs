use uuid::Uuid;

use super::value_objects::Item;

// ============================================================================
// Cart Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Add one unit of `item`. An existing line for the same id is
    /// incremented; the line keeps the snapshot from the first add.
    Add(Item),
    /// Add one unit to an existing line. No-op if the line is absent.
    Increment(Uuid),
    /// Remove one unit from an existing line; the line is removed entirely
    /// when its count reaches zero. No-op if the line is absent.
    Decrement(Uuid),
    /// Reset the cart to empty (used after a successful checkout).
    Clear,
}
