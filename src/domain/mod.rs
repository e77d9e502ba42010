// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains the cart engine's domain logic:
// - cart/     - The cart aggregate (value objects, commands, aggregate)
// - checkout/ - Order assembly from a cart snapshot
//
// This layer knows nothing about HTTP, actors, or rendering. Everything in
// here is driven through plain values so it can be tested without a UI
// harness or a running backend.
//
// ============================================================================

pub mod cart;
pub mod checkout;
