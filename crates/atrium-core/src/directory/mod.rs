//! Recipient directory: the selectable people, derived from the feed.
//!
//! Pure functions of the host feed contents, recomputed on every feed
//! change. The two synthetic entries (AI concierge, staff group proxy)
//! always lead; concrete guests and staff follow in feed-scan order.
//! Name collisions across distinct ids are kept as distinct people.

use std::collections::HashSet;

use crate::feed::FeedEntry;
use crate::person::{Person, PersonKind, PersonSummary};

/// All selectable people: the special entries first (`ai`, then `staff`),
/// then guests (keyed by entry id, first occurrence wins) and staff
/// referenced as task assignees or message senders (keyed by name, first
/// occurrence wins), in feed-scan order.
pub fn list(entries: &[FeedEntry]) -> Vec<Person> {
    let mut people = vec![Person::ai_concierge(), Person::staff_group()];
    let mut seen = HashSet::new();

    for entry in entries {
        match entry {
            FeedEntry::Guest {
                id, name, avatar, ..
            } => {
                if seen.insert(format!("guest-{id}")) {
                    people.push(Person::new(
                        id.clone(),
                        name.clone(),
                        avatar_or_initial(avatar.as_deref(), name),
                        PersonKind::Guest,
                    ));
                }
            }
            FeedEntry::Task { assigned_to, .. } if assigned_to.kind == PersonKind::Staff => {
                if seen.insert(format!("staff-{}", assigned_to.name)) {
                    people.push(staff_person(assigned_to));
                }
            }
            FeedEntry::Concierge { sender, .. } if sender.kind == PersonKind::Staff => {
                if seen.insert(format!("staff-{}", sender.name)) {
                    people.push(staff_person(sender));
                }
            }
            _ => {}
        }
    }

    people
}

/// Only the individually discovered staff (no group proxy, no guests);
/// used to populate the staff sub-menu.
pub fn staff_list(entries: &[FeedEntry]) -> Vec<Person> {
    list(entries)
        .into_iter()
        .filter(|p| p.kind == PersonKind::Staff && !p.is_special)
        .collect()
}

/// Case-insensitive substring filter over names; a blank query returns the
/// full directory.
pub fn search(entries: &[FeedEntry], query: &str) -> Vec<Person> {
    let people = list(entries);
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return people;
    }
    people
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&query))
        .collect()
}

fn staff_person(summary: &PersonSummary) -> Person {
    Person::new(
        format!("staff-{}", summary.name),
        summary.name.clone(),
        summary.avatar.clone(),
        PersonKind::Staff,
    )
}

fn avatar_or_initial(avatar: Option<&str>, name: &str) -> String {
    match avatar {
        Some(avatar) => avatar.to_string(),
        None => name.chars().next().map(String::from).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::TaskStatus;

    fn guest_entry(id: &str, name: &str) -> FeedEntry {
        FeedEntry::Guest {
            id: id.to_string(),
            name: name.to_string(),
            avatar: None,
            message: Some("hello".to_string()),
            timestamp: "2026-08-06T18:00:00Z".to_string(),
        }
    }

    fn task_entry(assignee: &str, kind: PersonKind) -> FeedEntry {
        FeedEntry::Task {
            id: format!("task-{assignee}"),
            category: "service".to_string(),
            title: "Restock bar".to_string(),
            description: None,
            status: TaskStatus::Pending,
            timestamp: "2026-08-06T18:00:00Z".to_string(),
            assigned_to: PersonSummary {
                name: assignee.to_string(),
                avatar: "AA".to_string(),
                kind,
            },
            for_guest: None,
            location: None,
            pos_payload: None,
        }
    }

    #[test]
    fn test_special_entries_lead_in_fixed_order() {
        let people = list(&[]);
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].id, "ai");
        assert_eq!(people[1].id, "staff");
        assert!(people.iter().all(|p| p.is_special));
    }

    #[test]
    fn test_discovery_in_feed_scan_order() {
        let entries = vec![
            task_entry("Alex Rivera", PersonKind::Staff),
            guest_entry("guest-1", "Sarah Chen"),
            task_entry("Jordan Kim", PersonKind::Staff),
        ];
        let people = list(&entries);
        let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "AI Concierge",
                "Staff",
                "Alex Rivera",
                "Sarah Chen",
                "Jordan Kim",
            ]
        );
    }

    #[test]
    fn test_first_occurrence_wins() {
        let entries = vec![
            guest_entry("guest-1", "Sarah Chen"),
            guest_entry("guest-1", "Sarah C."),
            task_entry("Alex Rivera", PersonKind::Staff),
            task_entry("Alex Rivera", PersonKind::Staff),
        ];
        let people = list(&entries);
        assert_eq!(people.len(), 4);
        assert_eq!(people[2].name, "Sarah Chen");
    }

    #[test]
    fn test_same_name_distinct_ids_kept_separate() {
        let entries = vec![
            guest_entry("guest-1", "Sarah Chen"),
            guest_entry("guest-2", "Sarah Chen"),
        ];
        let people = list(&entries);
        assert_eq!(people.len(), 4);
        assert_eq!(people[2].id, "guest-1");
        assert_eq!(people[3].id, "guest-2");
    }

    #[test]
    fn test_guest_assignees_are_not_staff() {
        let entries = vec![task_entry("Emma Rodriguez", PersonKind::Guest)];
        assert_eq!(list(&entries).len(), 2);
    }

    #[test]
    fn test_staff_list_excludes_specials_and_guests() {
        let entries = vec![
            guest_entry("guest-1", "Sarah Chen"),
            task_entry("Alex Rivera", PersonKind::Staff),
        ];
        let staff = staff_list(&entries);
        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0].name, "Alex Rivera");
        assert_eq!(staff[0].id, "staff-Alex Rivera");
    }

    #[test]
    fn test_concierge_senders_are_discovered() {
        let entries = vec![FeedEntry::Concierge {
            id: "message-1".to_string(),
            message: "On it".to_string(),
            timestamp: "2026-08-06T18:00:00Z".to_string(),
            sender: PersonSummary {
                name: "Priya Patel".to_string(),
                avatar: "PP".to_string(),
                kind: PersonKind::Staff,
            },
            recipients: Vec::new(),
        }];
        let people = list(&entries);
        assert_eq!(people.len(), 3);
        assert_eq!(people[2].name, "Priya Patel");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let entries = vec![
            guest_entry("guest-1", "Sarah Chen"),
            guest_entry("guest-2", "Marcus Johnson"),
        ];
        let hits = search(&entries, "CHEN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sarah Chen");

        // Blank query returns everything unfiltered.
        assert_eq!(search(&entries, "  ").len(), 4);
    }

    #[test]
    fn test_missing_avatar_falls_back_to_initial() {
        let entries = vec![guest_entry("guest-1", "Sarah Chen")];
        assert_eq!(list(&entries)[2].avatar, "S");
    }
}
