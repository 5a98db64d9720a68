//! Person domain model.

use serde::{Deserialize, Serialize};

/// Classifies a person appearing in the feed or the recipient directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonKind {
    /// The operator themselves.
    User,
    /// A staff member (or the staff group proxy).
    Staff,
    /// The AI concierge.
    Ai,
    /// A guest discovered from the feed.
    Guest,
}

impl std::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::User => "user",
            Self::Staff => "staff",
            Self::Ai => "ai",
            Self::Guest => "guest",
        };
        f.write_str(label)
    }
}

/// A selectable person in the recipient directory.
///
/// The two synthetic entries ("AI Concierge" and the "Staff" group proxy)
/// carry `is_special = true`; concrete individuals discovered from feed
/// history do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier within the directory.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar glyph or initials.
    pub avatar: String,
    /// What kind of person this is.
    #[serde(rename = "type")]
    pub kind: PersonKind,
    /// Whether this is one of the two synthetic directory entries.
    pub is_special: bool,
}

impl Person {
    /// Creates a concrete (non-special) person.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        avatar: impl Into<String>,
        kind: PersonKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
            kind,
            is_special: false,
        }
    }

    /// The synthetic "AI Concierge" directory entry.
    pub fn ai_concierge() -> Self {
        Self {
            id: "ai".to_string(),
            name: "AI Concierge".to_string(),
            avatar: "🤖".to_string(),
            kind: PersonKind::Ai,
            is_special: true,
        }
    }

    /// The synthetic "Staff" group proxy directory entry.
    pub fn staff_group() -> Self {
        Self {
            id: "staff".to_string(),
            name: "Staff".to_string(),
            avatar: "👔".to_string(),
            kind: PersonKind::Staff,
            is_special: true,
        }
    }

    /// Whether this person can act as a task assignee.
    pub fn is_assignable(&self) -> bool {
        matches!(self.kind, PersonKind::Staff | PersonKind::Ai)
    }

    /// Reference shape embedded in emitted events (`forGuest`, check-in guest).
    pub fn to_ref(&self) -> PersonRef {
        PersonRef {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }

    /// Summary shape embedded as a task assignee or message sender.
    pub fn to_summary(&self) -> PersonSummary {
        PersonSummary {
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            kind: self.kind,
        }
    }

    /// Summary shape embedded in a message's recipient list.
    pub fn to_recipient(&self) -> RecipientSummary {
        RecipientSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
        }
    }
}

/// Identifying reference to a person, as embedded in emitted events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// Name/avatar summary of a person, as embedded in task and message events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub name: String,
    pub avatar: String,
    #[serde(rename = "type")]
    pub kind: PersonKind,
}

/// Recipient summary embedded in a sent message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PersonKind,
}
