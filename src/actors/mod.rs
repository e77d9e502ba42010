// ============================================================================
// Actors Module
// ============================================================================
//
// Actor-based infrastructure for the cart session.
//
// Note: Domain logic stays in plain types (CartAggregate, assemble); the
//       actor only owns the session, serializes user events through its
//       mailbox the way a UI event loop does, and talks to the order sink.
//
// ============================================================================

mod cart_session;

pub use cart_session::{
    AddItem, CartSessionActor, Checkout, CheckoutPhase, CheckoutReceipt, ClearCart, DecrementLine,
    GetCart, GetCheckoutPhase, IncrementLine,
};
