//! Intent summary: a read-only preview of what submit will do.
//!
//! Purely informational; the submission router never consults it.

use super::state::{PillState, PrimaryAction};
use crate::person::Person;

/// Produces the one-line intent summary for the current modifier
/// combination, or `None` when nothing noteworthy is staged.
///
/// The assignee is the first selected staff/AI recipient, falling back to
/// the operator identity injected by the hosting shell.
pub fn summarize(state: &PillState, operator: &Person) -> Option<String> {
    let assignee = state
        .first_assignee()
        .map(|p| p.name.as_str())
        .unwrap_or(operator.name.as_str());
    let guest = state.first_guest();

    match state.primary_action() {
        Some(PrimaryAction::CheckIn) => {
            if state.assign() {
                let guest_name = guest.map(|g| g.name.as_str()).unwrap_or("guest");
                Some(format!("Assign → {assignee} · Check-in {guest_name}"))
            } else {
                guest.map(|g| format!("Check-in {}", g.name))
            }
        }
        Some(PrimaryAction::PointOfSale) => {
            let guest_name = guest.map(|g| g.name.as_str()).unwrap_or("no guest");
            if state.assign() {
                Some(format!("Assign → {assignee} · POS for {guest_name}"))
            } else {
                Some(format!("POS for {guest_name}"))
            }
        }
        None => {
            if state.assign() {
                let target = guest
                    .map(|g| format!("for {}", g.name))
                    .unwrap_or_else(|| "task".to_string());
                Some(format!("Assign → {assignee} · {target}"))
            } else {
                None
            }
        }
    }
}
