//! Composer domain module.
//!
//! The composer is the context-sensitive input bar: a set of user-selected
//! modifiers ("pills") that deterministically route a single submit into
//! one of four domain events.
//!
//! # Module Structure
//!
//! - `state`: Pill state and its mutation API (`PillState`, `Mutation`)
//! - `cart`: Point-of-sale cart and payment types
//! - `pills`: The fixed pill ordering and rendering contract
//! - `intent`: Read-only intent summary
//! - `router`: Readiness predicate and submission routing

mod cart;
mod intent;
mod pills;
mod router;
mod state;

// Re-export public API
pub use cart::{Cart, CartItem, CartLine, PaymentMethod, catalog};
pub use intent::summarize;
pub use pills::{Pill, pills};
pub use router::{BlockedReason, SubmissionRouter, SubmitOutcome};
pub use state::{Mutation, Notice, PillState, PrimaryAction};
