//! Feed entry model and domain-event builders.
//!
//! A single tagged enum covers both the entries the composer scans for
//! people (guest messages, tasks, concierge messages) and the four event
//! shapes it emits on submission. The builders own the title derivation and
//! note/description de-duplication rules, so every emission path produces
//! the same wire shape.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::composer::{Cart, PaymentMethod};
use crate::person::{Person, PersonRef, PersonSummary, RecipientSummary};

/// Lifecycle status of a task entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    Assigned,
    Completed,
}

/// Cart and payment attached to a deferred (assigned) purchase task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosPayload {
    pub cart: Cart,
    pub payment_method: Option<PaymentMethod>,
}

/// Receipt recorded by an immediately executed sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosReceipt {
    pub cart: Cart,
    pub payment_method: Option<PaymentMethod>,
    pub total: f64,
    pub for_guest: Option<PersonRef>,
}

/// One entry in the host feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum FeedEntry {
    /// An inbound message from a guest.
    Guest {
        id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        avatar: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        timestamp: String,
    },
    /// A task, either seeded or emitted as an assigned-task event.
    Task {
        id: String,
        category: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        status: TaskStatus,
        timestamp: String,
        assigned_to: PersonSummary,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        for_guest: Option<PersonRef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pos_payload: Option<PosPayload>,
    },
    /// An outbound message sent by the operator (message-event).
    Concierge {
        id: String,
        message: String,
        timestamp: String,
        sender: PersonSummary,
        #[serde(default)]
        recipients: Vec<RecipientSummary>,
    },
    /// A declarative system event (executed POS or executed check-in).
    System {
        id: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
        timestamp: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pos_receipt: Option<PosReceipt>,
    },
}

/// Input to the assigned-task builder, as routed by the composer.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    /// Operator-supplied description (may be empty).
    pub description: String,
    pub assignee: PersonSummary,
    pub for_guest: Option<PersonRef>,
    pub location: Option<String>,
    pub pos_payload: Option<PosPayload>,
}

fn fresh_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

impl FeedEntry {
    /// Unique entry id.
    pub fn id(&self) -> &str {
        match self {
            Self::Guest { id, .. }
            | Self::Task { id, .. }
            | Self::Concierge { id, .. }
            | Self::System { id, .. } => id,
        }
    }

    /// Creation timestamp (RFC 3339).
    pub fn timestamp(&self) -> &str {
        match self {
            Self::Guest { timestamp, .. }
            | Self::Task { timestamp, .. }
            | Self::Concierge { timestamp, .. }
            | Self::System { timestamp, .. } => timestamp,
        }
    }

    /// The note a renderer should show under the entry's title, suppressed
    /// when it would duplicate the title itself.
    pub fn display_note(&self) -> Option<&str> {
        match self {
            Self::Task {
                title, description, ..
            } => match description {
                Some(d) if d != title => Some(d.as_str()),
                _ => None,
            },
            Self::System { title, note, .. } => match note {
                Some(n) if n != title => Some(n.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Builds a message-event from the operator to the selected recipients.
    ///
    /// An empty body falls back to a "No message" placeholder (reachable
    /// only when recipients are present, since an empty submission is
    /// blocked upstream).
    pub fn message(body: &str, sender: &Person, recipients: &[Person]) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            "No message".to_string()
        } else {
            trimmed.to_string()
        };
        Self::Concierge {
            id: fresh_id("message"),
            message,
            timestamp: now(),
            sender: sender.to_summary(),
            recipients: recipients.iter().map(Person::to_recipient).collect(),
        }
    }

    /// Builds an assigned-task event from a routed draft.
    ///
    /// Title rules: with a POS payload the title is always the literal
    /// "Complete purchase"; otherwise the trimmed description, falling back
    /// to "New Task" when empty. The description is stored only when it
    /// differs from the derived title, so the same string never renders
    /// twice on the card.
    pub fn assigned_task(draft: TaskDraft) -> Self {
        let description = draft.description.trim().to_string();
        let title = if draft.pos_payload.is_some() {
            "Complete purchase".to_string()
        } else if description.is_empty() {
            "New Task".to_string()
        } else {
            description.clone()
        };
        let description = if description.is_empty() || description == title {
            None
        } else {
            Some(description)
        };
        Self::Task {
            id: fresh_id("task"),
            category: "service".to_string(),
            title,
            description,
            status: TaskStatus::Assigned,
            timestamp: now(),
            assigned_to: draft.assignee,
            for_guest: draft.for_guest,
            location: draft.location,
            pos_payload: draft.pos_payload,
        }
    }

    /// Builds an executed-pos event with its receipt.
    ///
    /// Title format: `POS completed: {items} · ${total} · {payment label}`.
    pub fn executed_pos(
        cart: Cart,
        payment_method: Option<PaymentMethod>,
        for_guest: Option<PersonRef>,
        note: Option<String>,
    ) -> Self {
        let total = cart.total();
        let payment_label = payment_method
            .map(|m| m.label())
            .unwrap_or(PaymentMethod::CardOnFile.label());
        let title = format!(
            "POS completed: {} · ${:.2} · {}",
            cart.summary(),
            total,
            payment_label
        );
        Self::System {
            id: fresh_id("pos"),
            title,
            note,
            timestamp: now(),
            pos_receipt: Some(PosReceipt {
                cart,
                payment_method,
                total,
                for_guest,
            }),
        }
    }

    /// Builds an executed-checkin event for one guest.
    pub fn executed_check_in(guest: &Person, note: Option<String>) -> Self {
        Self::System {
            id: fresh_id("checkin"),
            title: format!("Checked in: {}", guest.name),
            note,
            timestamp: now(),
            pos_receipt: None,
        }
    }
}
