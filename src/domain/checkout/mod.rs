// ============================================================================
// Checkout Domain - Order Assembly
// ============================================================================
//
// Converts a cart snapshot into the order payload the backend expects:
// one record per UNIT sold, not per cart line. Submission itself (and the
// clear-on-success / preserve-on-failure decision) lives with the session
// actor; this module is pure.
//
// ============================================================================

pub mod assembler;

pub use assembler::*;
