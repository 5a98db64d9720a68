//! Pill ordering and rendering contract.
//!
//! The visual pill row is a pure projection of [`PillState`], in a fixed,
//! non-configurable order: who, then the primary action, then the action
//! detail, then the wrapper. Every pill except the derived total carries a
//! removal mutation that maps exactly onto the state machine's API.

use super::cart::{CartLine, PaymentMethod};
use super::state::{Mutation, PillState, PrimaryAction};
use crate::person::{Person, PersonKind};

/// One removable visual token in the composer's pill row.
#[derive(Debug, Clone, PartialEq)]
pub enum Pill {
    /// A selected recipient (staff/AI group first, then guests).
    Recipient(Person),
    /// The Check-in primary action.
    CheckIn,
    /// The point-of-sale primary action.
    Pos,
    /// One cart line, insertion order.
    CartLine(CartLine),
    /// The derived cart total; not removable.
    Total(f64),
    /// The chosen payment method.
    Payment(PaymentMethod),
    /// The Assign wrapper.
    Assign,
}

impl Pill {
    /// Display label for the pill.
    pub fn label(&self) -> String {
        match self {
            Self::Recipient(person) => person.name.clone(),
            Self::CheckIn => "Check-in".to_string(),
            Self::Pos => "POS".to_string(),
            Self::CartLine(line) => format!("{} ×{}", line.name, line.quantity),
            Self::Total(total) => format!("${total:.2}"),
            Self::Payment(method) => method.label().to_string(),
            Self::Assign => "Assign".to_string(),
        }
    }

    /// The mutation performed by the pill's removal affordance, if it has
    /// one. The total pill is derived and cannot be removed directly.
    pub fn removal(&self) -> Option<Mutation> {
        match self {
            Self::Recipient(person) => Some(Mutation::RemoveRecipient(person.id.clone())),
            Self::CheckIn | Self::Pos => Some(Mutation::ClearPrimaryAction),
            Self::CartLine(line) => Some(Mutation::CartRemove(line.id.clone())),
            Self::Total(_) => None,
            Self::Payment(_) => Some(Mutation::SetPaymentMethod(None)),
            Self::Assign => Some(Mutation::SetAssign(false)),
        }
    }
}

/// Projects the pill row for the current state, in contract order:
/// staff/AI recipients, guest recipients, Check-in, POS, cart lines,
/// total (if positive), payment method, Assign.
pub fn pills(state: &PillState) -> Vec<Pill> {
    let mut row = Vec::new();

    for person in state.selected_recipients() {
        if matches!(person.kind, PersonKind::Staff | PersonKind::Ai) {
            row.push(Pill::Recipient(person.clone()));
        }
    }
    for person in state.selected_recipients() {
        if person.kind == PersonKind::Guest {
            row.push(Pill::Recipient(person.clone()));
        }
    }

    match state.primary_action() {
        Some(PrimaryAction::CheckIn) => row.push(Pill::CheckIn),
        Some(PrimaryAction::PointOfSale) => row.push(Pill::Pos),
        None => {}
    }

    for line in state.cart().lines() {
        row.push(Pill::CartLine(line.clone()));
    }
    let total = state.cart().total();
    if total > 0.0 {
        row.push(Pill::Total(total));
    }
    if let Some(method) = state.payment_method() {
        row.push(Pill::Payment(method));
    }
    if state.assign() {
        row.push(Pill::Assign);
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::cart::catalog;

    #[test]
    fn test_contract_order() {
        let mut state = PillState::new();
        let guest = Person::new("guest-1", "Sarah Chen", "SC", PersonKind::Guest);
        let staff = Person::new("staff-Alex Rivera", "Alex Rivera", "AR", PersonKind::Staff);
        // Select the guest first; staff must still render ahead of guests.
        state.apply(Mutation::AddRecipient(guest));
        state.apply(Mutation::AddRecipient(staff));
        state.apply(Mutation::CartAdd(
            catalog().into_iter().find(|i| i.id == "ticket").unwrap(),
        ));
        state.apply(Mutation::SetPaymentMethod(Some(PaymentMethod::Cash)));
        state.apply(Mutation::SetAssign(true));

        let labels: Vec<String> = pills(&state).iter().map(Pill::label).collect();
        assert_eq!(
            labels,
            vec![
                "Alex Rivera",
                "Sarah Chen",
                "POS",
                "Ticket ×1",
                "$25.00",
                "Cash",
                "Assign",
            ]
        );
    }

    #[test]
    fn test_check_in_pill_position() {
        let mut state = PillState::new();
        state.apply(Mutation::AddRecipient(Person::new(
            "guest-1",
            "Sarah Chen",
            "SC",
            PersonKind::Guest,
        )));
        state.apply(Mutation::SetPrimaryAction(PrimaryAction::CheckIn));

        let row = pills(&state);
        assert_eq!(row.len(), 2);
        assert!(matches!(row[0], Pill::Recipient(_)));
        assert_eq!(row[1], Pill::CheckIn);
    }

    #[test]
    fn test_no_total_pill_for_empty_cart() {
        let mut state = PillState::new();
        state.apply(Mutation::SetPrimaryAction(PrimaryAction::PointOfSale));
        let row = pills(&state);
        assert_eq!(row, vec![Pill::Pos]);
    }

    #[test]
    fn test_removal_mutations_round_trip() {
        let mut state = PillState::new();
        state.apply(Mutation::AddRecipient(Person::new(
            "guest-1",
            "Sarah Chen",
            "SC",
            PersonKind::Guest,
        )));
        state.apply(Mutation::CartAdd(
            catalog().into_iter().find(|i| i.id == "wine").unwrap(),
        ));
        state.apply(Mutation::SetPaymentMethod(Some(PaymentMethod::Card)));

        // Removing every removable pill returns the state to empty.
        loop {
            let row = pills(&state);
            let Some(mutation) = row.iter().find_map(Pill::removal) else {
                break;
            };
            state.apply(mutation);
        }
        assert_eq!(state, PillState::new());
    }

    #[test]
    fn test_total_pill_is_not_removable() {
        assert_eq!(Pill::Total(50.0).removal(), None);
    }
}
