// ============================================================================
// Cart Domain - Business Logic for the Cart Aggregate
// ============================================================================
//
// This module contains ALL cart-specific code:
// - Value objects (Item, CartLine)
// - Commands (Add, Increment, Decrement, Clear)
// - Aggregate (Cart snapshot + CartAggregate with the quantity invariants)
//
// Cart operations never fail: missing targets are silent no-ops, so there
// is no error enum here. Checkout failures live in the checkout/ordering
// modules.
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use aggregate::*;
