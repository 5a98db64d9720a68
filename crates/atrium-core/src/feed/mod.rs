//! Feed domain module.
//!
//! The host feed is an append-only, chronologically-ordered sequence of
//! entries: guest messages, tasks, concierge messages, and system events.
//! The composer reads it to discover people and appends the domain events
//! produced by submission; it never edits or deletes existing entries.
//!
//! # Module Structure
//!
//! - `model`: Feed entry shapes and the event builders (`FeedEntry`,
//!   `TaskDraft`, `PosPayload`, `PosReceipt`, `TaskStatus`)
//! - `host`: The `HostFeed` collaborator trait

mod host;
mod model;

pub use host::HostFeed;
pub use model::{FeedEntry, PosPayload, PosReceipt, TaskDraft, TaskStatus};
