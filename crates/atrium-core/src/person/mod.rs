//! Person domain module.
//!
//! People are the "who" of the composer: guests and staff discovered from
//! the feed, plus the two synthetic directory entries (AI concierge and the
//! staff group proxy).

mod model;

pub use model::{Person, PersonKind, PersonRef, PersonSummary, RecipientSummary};
