//! Application layer for Atrium.
//!
//! This crate coordinates the composer domain with its collaborators: the
//! host feed the emitted events are appended to, and the transient notice
//! surface for "switched mode" feedback.

pub mod composer_service;
pub mod feed_store;
pub mod notice;

pub use composer_service::ComposerService;
pub use feed_store::InMemoryFeed;
pub use notice::NoticeHost;
