//! Submission routing: from pill state to domain events.
//!
//! On submit, the router validates readiness, resolves exactly one of four
//! outcomes (plain message, assigned task, executed sale, executed
//! check-in), builds the corresponding feed entries, and fully resets the
//! pill state. The whole transition is synchronous and atomic: it either
//! emits and resets, or blocks and leaves the state untouched.

use super::state::{PillState, PrimaryAction};
use crate::feed::{FeedEntry, PosPayload, TaskDraft};
use crate::person::{Person, PersonSummary};

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedReason {
    /// Nothing submittable is staged.
    NotReady,
    /// Check-in is active but no guest is selected. This guard is stricter
    /// than the generic readiness predicate and takes precedence for the
    /// check-in branch.
    CheckInNeedsGuest,
}

impl BlockedReason {
    /// Inline hint for the hosting shell to surface.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::NotReady => "Type a message or pick an action",
            Self::CheckInNeedsGuest => "Select a guest or scan a QR",
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Events to append to the host feed; the pill state has been reset.
    Emitted(Vec<FeedEntry>),
    /// Nothing happened; the pill state is unchanged.
    Blocked(BlockedReason),
}

/// Routes submissions for one composer, carrying the operator identity
/// used as the default assignee and message sender.
#[derive(Debug, Clone)]
pub struct SubmissionRouter {
    operator: Person,
}

impl SubmissionRouter {
    pub fn new(operator: Person) -> Self {
        Self { operator }
    }

    pub fn operator(&self) -> &Person {
        &self.operator
    }

    /// The readiness predicate: free text, a recipient, an active POS
    /// action, the Assign wrapper, or a check-in with a guest.
    pub fn can_submit(&self, state: &PillState) -> bool {
        let check_in_ready = state.primary_action() == Some(PrimaryAction::CheckIn)
            && !state.selected_guests().is_empty();
        !state.free_text().trim().is_empty()
            || !state.selected_recipients().is_empty()
            || state.primary_action() == Some(PrimaryAction::PointOfSale)
            || state.assign()
            || check_in_ready
    }

    /// Attempts to submit, emitting the resulting events and resetting the
    /// state, or blocking without touching it.
    pub fn submit(&self, state: &mut PillState) -> SubmitOutcome {
        if state.primary_action() == Some(PrimaryAction::CheckIn)
            && state.selected_guests().is_empty()
        {
            return SubmitOutcome::Blocked(BlockedReason::CheckInNeedsGuest);
        }
        if !self.can_submit(state) {
            return SubmitOutcome::Blocked(BlockedReason::NotReady);
        }

        let events = match state.primary_action() {
            Some(PrimaryAction::CheckIn) => self.route_check_in(state),
            Some(PrimaryAction::PointOfSale) => self.route_point_of_sale(state),
            None if state.assign() => vec![self.route_assign_only(state)],
            None => vec![FeedEntry::message(
                state.free_text(),
                &self.operator,
                state.selected_recipients(),
            )],
        };

        state.reset();
        SubmitOutcome::Emitted(events)
    }

    // One event per selected guest, independently.
    fn route_check_in(&self, state: &PillState) -> Vec<FeedEntry> {
        let note = trimmed_note(state);
        let guests = state.selected_guests();
        if state.assign() {
            let assignee = self.resolve_assignee(state);
            guests
                .into_iter()
                .map(|guest| {
                    let description = match &note {
                        Some(note) => format!("Check-in {} - {}", guest.name, note),
                        None => format!("Check-in {}", guest.name),
                    };
                    FeedEntry::assigned_task(TaskDraft {
                        description,
                        assignee: assignee.clone(),
                        for_guest: Some(guest.to_ref()),
                        location: None,
                        pos_payload: None,
                    })
                })
                .collect()
        } else {
            guests
                .into_iter()
                .map(|guest| FeedEntry::executed_check_in(guest, note.clone()))
                .collect()
        }
    }

    fn route_point_of_sale(&self, state: &PillState) -> Vec<FeedEntry> {
        let for_guest = state.first_guest().map(Person::to_ref);
        if state.assign() {
            let trimmed = state.free_text().trim();
            let description = if trimmed.is_empty() {
                "Complete purchase".to_string()
            } else {
                trimmed.to_string()
            };
            vec![FeedEntry::assigned_task(TaskDraft {
                description,
                assignee: self.resolve_assignee(state),
                for_guest,
                location: None,
                pos_payload: Some(PosPayload {
                    cart: state.cart().clone(),
                    payment_method: state.payment_method(),
                }),
            })]
        } else {
            vec![FeedEntry::executed_pos(
                state.cart().clone(),
                state.payment_method(),
                for_guest,
                trimmed_note(state),
            )]
        }
    }

    // Assign with no primary action: a plain text task, no fallback text.
    fn route_assign_only(&self, state: &PillState) -> FeedEntry {
        FeedEntry::assigned_task(TaskDraft {
            description: state.free_text().to_string(),
            assignee: self.resolve_assignee(state),
            for_guest: state.first_guest().map(Person::to_ref),
            location: None,
            pos_payload: None,
        })
    }

    fn resolve_assignee(&self, state: &PillState) -> PersonSummary {
        state
            .first_assignee()
            .unwrap_or(&self.operator)
            .to_summary()
    }
}

fn trimmed_note(state: &PillState) -> Option<String> {
    let trimmed = state.free_text().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
