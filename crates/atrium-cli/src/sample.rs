//! Sample feed used by the CLI subcommands.

use atrium_core::feed::{FeedEntry, TaskStatus};
use atrium_core::person::{PersonKind, PersonSummary};

fn staff(name: &str, avatar: &str) -> PersonSummary {
    PersonSummary {
        name: name.to_string(),
        avatar: avatar.to_string(),
        kind: PersonKind::Staff,
    }
}

/// A small slice of an evening's feed: enough history for the directory to
/// discover a few guests and staff.
pub fn feed() -> Vec<FeedEntry> {
    vec![
        FeedEntry::System {
            id: "sys-1".to_string(),
            title: "Arrivals spike: +12 in 10m".to_string(),
            note: None,
            timestamp: "2026-08-06T18:42:00Z".to_string(),
            pos_receipt: None,
        },
        FeedEntry::Guest {
            id: "guest-1".to_string(),
            name: "Sarah Chen".to_string(),
            avatar: Some("SC".to_string()),
            message: Some("What time does the performance start?".to_string()),
            timestamp: "2026-08-06T18:45:00Z".to_string(),
        },
        FeedEntry::Task {
            id: "task-1".to_string(),
            category: "service".to_string(),
            title: "Restock bar before doors".to_string(),
            description: Some("Wine and soft drinks are running low".to_string()),
            status: TaskStatus::Pending,
            timestamp: "2026-08-06T18:47:00Z".to_string(),
            assigned_to: staff("Alex Rivera", "AR"),
            for_guest: None,
            location: Some("Gallery 1".to_string()),
            pos_payload: None,
        },
        FeedEntry::Guest {
            id: "guest-2".to_string(),
            name: "Marcus Johnson".to_string(),
            avatar: Some("MJ".to_string()),
            message: Some("My QR code won't scan at the door".to_string()),
            timestamp: "2026-08-06T18:50:00Z".to_string(),
        },
        FeedEntry::Concierge {
            id: "message-1".to_string(),
            message: "On our way with a replacement ticket".to_string(),
            timestamp: "2026-08-06T18:51:00Z".to_string(),
            sender: staff("Priya Patel", "PP"),
            recipients: Vec::new(),
        },
        FeedEntry::Task {
            id: "task-2".to_string(),
            category: "ticket".to_string(),
            title: "Walk-up ticket sale completed".to_string(),
            description: None,
            status: TaskStatus::Completed,
            timestamp: "2026-08-06T18:55:00Z".to_string(),
            assigned_to: staff("Jordan Kim", "JK"),
            for_guest: None,
            location: None,
            pos_payload: None,
        },
        FeedEntry::Guest {
            id: "guest-3".to_string(),
            name: "Emma Rodriguez".to_string(),
            avatar: Some("ER".to_string()),
            message: Some("Could we get two more chairs at table 4?".to_string()),
            timestamp: "2026-08-06T18:58:00Z".to_string(),
        },
    ]
}
