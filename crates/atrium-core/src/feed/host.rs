//! Host feed collaborator trait.

use super::model::FeedEntry;

/// Append-only ordered store of feed entries, owned by the hosting shell.
///
/// The composer core only ever appends; entries are never mutated in place
/// after emission. Ordering is append order.
pub trait HostFeed {
    /// All entries, oldest first.
    fn entries(&self) -> &[FeedEntry];

    /// Appends a freshly built entry to the end of the feed.
    fn append(&mut self, entry: FeedEntry);
}
