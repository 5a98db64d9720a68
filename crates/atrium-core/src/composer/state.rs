//! Composer pill state and its mutation API.
//!
//! All composer mutations funnel through [`PillState::apply`], which is the
//! single place the modifier invariants are enforced:
//!
//! - at most one primary action is active at any time;
//! - Assign and Check-in are never both active;
//! - the cart and payment method only exist while point-of-sale is active.
//!
//! Transitions that would violate an invariant are converted into explicit
//! "switch" transitions, reported back to the caller as a [`Notice`] for
//! transient display. Nothing here performs I/O.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cart::{Cart, CartItem, PaymentMethod};
use crate::person::{Person, PersonKind};

/// The single dominant operation the composer will perform on submit,
/// exclusive of the Assign wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryAction {
    /// Sell items from the POS catalog.
    #[serde(rename = "pos")]
    PointOfSale,
    /// Check a guest in at the door.
    CheckIn,
}

/// Transient, auto-dismissing notice produced by a switch transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    SwitchedToPos,
    SwitchedToCheckIn,
    SwitchedToAssign,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::SwitchedToPos => "Switched to POS",
            Self::SwitchedToCheckIn => "Switched to Check-in",
            Self::SwitchedToAssign => "Switched to Assign",
        };
        f.write_str(text)
    }
}

/// A single state transition of the composer.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Select a recipient; idempotent by id, malformed persons rejected.
    AddRecipient(Person),
    /// Deselect a recipient by id; no-op if absent.
    RemoveRecipient(String),
    /// Add if absent, remove if present (checkbox-style selection).
    ToggleRecipient(Person),
    /// Activate a primary action, displacing the other one.
    SetPrimaryAction(PrimaryAction),
    /// Remove the active primary action pill.
    ClearPrimaryAction,
    /// Set or clear the Assign wrapper.
    SetAssign(bool),
    /// Add one unit of an item, implicitly activating point-of-sale.
    CartAdd(CartItem),
    /// Remove a whole cart line by item id.
    CartRemove(String),
    /// Set or clear the payment method (point-of-sale only).
    SetPaymentMethod(Option<PaymentMethod>),
    /// Replace the free text.
    SetFreeText(String),
    /// Return to the empty initial state.
    Reset,
}

/// The composer's in-progress modifier set.
///
/// Created empty on composer mount, mutated only through [`apply`], and
/// fully reset after every successful submission.
///
/// [`apply`]: PillState::apply
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PillState {
    selected_recipients: Vec<Person>,
    primary_action: Option<PrimaryAction>,
    assign: bool,
    cart: Cart,
    payment_method: Option<PaymentMethod>,
    free_text: String,
}

impl PillState {
    /// Creates the empty initial state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_recipients(&self) -> &[Person] {
        &self.selected_recipients
    }

    pub fn primary_action(&self) -> Option<PrimaryAction> {
        self.primary_action
    }

    pub fn assign(&self) -> bool {
        self.assign
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    /// Selected recipients of guest kind, in selection order.
    pub fn selected_guests(&self) -> Vec<&Person> {
        self.selected_recipients
            .iter()
            .filter(|p| p.kind == PersonKind::Guest)
            .collect()
    }

    /// First selected staff or AI recipient, if any (first-match wins).
    pub fn first_assignee(&self) -> Option<&Person> {
        self.selected_recipients.iter().find(|p| p.is_assignable())
    }

    /// First selected guest, if any.
    pub fn first_guest(&self) -> Option<&Person> {
        self.selected_recipients
            .iter()
            .find(|p| p.kind == PersonKind::Guest)
    }

    /// Input placeholder reflecting the active modifier combination.
    pub fn placeholder(&self) -> &'static str {
        if self.assign {
            "Task description…"
        } else if self.primary_action == Some(PrimaryAction::PointOfSale) {
            "Add note (optional)…"
        } else {
            "Ask or act…"
        }
    }

    /// Applies one mutation, returning a notice when the transition
    /// displaced a conflicting modifier.
    pub fn apply(&mut self, mutation: Mutation) -> Option<Notice> {
        match mutation {
            Mutation::AddRecipient(person) => {
                if person.id.trim().is_empty() {
                    tracing::warn!("rejected recipient without id: {:?}", person.name);
                    return None;
                }
                if !self.selected_recipients.iter().any(|p| p.id == person.id) {
                    self.selected_recipients.push(person);
                }
                None
            }
            Mutation::RemoveRecipient(id) => {
                self.selected_recipients.retain(|p| p.id != id);
                None
            }
            Mutation::ToggleRecipient(person) => {
                if self.selected_recipients.iter().any(|p| p.id == person.id) {
                    self.selected_recipients.retain(|p| p.id != person.id);
                } else {
                    self.selected_recipients.push(person);
                }
                None
            }
            Mutation::SetPrimaryAction(action) => self.set_primary_action(action),
            Mutation::ClearPrimaryAction => {
                if self.primary_action == Some(PrimaryAction::PointOfSale) {
                    self.clear_pos_payload();
                }
                self.primary_action = None;
                None
            }
            Mutation::SetAssign(true) => {
                if self.assign {
                    return None;
                }
                self.assign = true;
                if self.primary_action == Some(PrimaryAction::CheckIn) {
                    self.primary_action = None;
                    return Some(Notice::SwitchedToAssign);
                }
                None
            }
            Mutation::SetAssign(false) => {
                self.assign = false;
                None
            }
            Mutation::CartAdd(item) => {
                let notice = self.activate_pos_for_cart();
                self.cart.add(&item);
                notice
            }
            Mutation::CartRemove(item_id) => {
                self.cart.remove(&item_id);
                None
            }
            Mutation::SetPaymentMethod(method) => {
                if self.primary_action != Some(PrimaryAction::PointOfSale) {
                    tracing::warn!("ignored payment method outside point-of-sale");
                    return None;
                }
                self.payment_method = method;
                None
            }
            Mutation::SetFreeText(text) => {
                self.free_text = text;
                None
            }
            Mutation::Reset => {
                self.reset();
                None
            }
        }
    }

    /// Returns the state to its empty initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_primary_action(&mut self, action: PrimaryAction) -> Option<Notice> {
        if self.primary_action == Some(action) {
            return None;
        }
        match action {
            PrimaryAction::PointOfSale => {
                let switched = self.primary_action == Some(PrimaryAction::CheckIn);
                self.primary_action = Some(PrimaryAction::PointOfSale);
                switched.then_some(Notice::SwitchedToPos)
            }
            PrimaryAction::CheckIn => {
                let switched =
                    self.assign || self.primary_action == Some(PrimaryAction::PointOfSale);
                if self.primary_action == Some(PrimaryAction::PointOfSale) {
                    self.clear_pos_payload();
                }
                self.assign = false;
                self.primary_action = Some(PrimaryAction::CheckIn);
                switched.then_some(Notice::SwitchedToCheckIn)
            }
        }
    }

    // Cart interactions implicitly activate POS, displacing Check-in/Assign.
    fn activate_pos_for_cart(&mut self) -> Option<Notice> {
        if self.primary_action == Some(PrimaryAction::PointOfSale) {
            return None;
        }
        let switched = self.primary_action == Some(PrimaryAction::CheckIn) || self.assign;
        self.assign = false;
        self.primary_action = Some(PrimaryAction::PointOfSale);
        switched.then_some(Notice::SwitchedToPos)
    }

    fn clear_pos_payload(&mut self) {
        self.cart.clear();
        self.payment_method = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::cart::catalog;

    fn guest(n: u32) -> Person {
        Person::new(
            format!("guest-{n}"),
            format!("Guest {n}"),
            "G",
            PersonKind::Guest,
        )
    }

    fn staff(name: &str) -> Person {
        Person::new(format!("staff-{name}"), name, "S", PersonKind::Staff)
    }

    fn ticket() -> CartItem {
        catalog().into_iter().find(|i| i.id == "ticket").unwrap()
    }

    #[test]
    fn test_add_recipient_is_idempotent() {
        let mut state = PillState::new();
        state.apply(Mutation::AddRecipient(guest(1)));
        state.apply(Mutation::AddRecipient(guest(1)));
        assert_eq!(state.selected_recipients().len(), 1);
    }

    #[test]
    fn test_add_recipient_rejects_missing_id() {
        let mut state = PillState::new();
        let malformed = Person::new("", "Nobody", "N", PersonKind::Guest);
        state.apply(Mutation::AddRecipient(malformed));
        assert!(state.selected_recipients().is_empty());
    }

    #[test]
    fn test_toggle_recipient() {
        let mut state = PillState::new();
        state.apply(Mutation::ToggleRecipient(guest(1)));
        assert_eq!(state.selected_recipients().len(), 1);
        state.apply(Mutation::ToggleRecipient(guest(1)));
        assert!(state.selected_recipients().is_empty());
    }

    #[test]
    fn test_primary_actions_are_mutually_exclusive() {
        let mut state = PillState::new();
        state.apply(Mutation::SetPrimaryAction(PrimaryAction::PointOfSale));
        state.apply(Mutation::CartAdd(ticket()));
        state.apply(Mutation::SetPaymentMethod(Some(PaymentMethod::Cash)));

        let notice = state.apply(Mutation::SetPrimaryAction(PrimaryAction::CheckIn));
        assert_eq!(notice, Some(Notice::SwitchedToCheckIn));
        assert_eq!(state.primary_action(), Some(PrimaryAction::CheckIn));
        // Leaving point-of-sale clears its payload.
        assert!(state.cart().is_empty());
        assert_eq!(state.payment_method(), None);
    }

    #[test]
    fn test_switch_to_check_in_clears_assign() {
        let mut state = PillState::new();
        state.apply(Mutation::SetAssign(true));
        let notice = state.apply(Mutation::SetPrimaryAction(PrimaryAction::CheckIn));
        assert_eq!(notice, Some(Notice::SwitchedToCheckIn));
        assert!(!state.assign());
        assert_eq!(state.primary_action(), Some(PrimaryAction::CheckIn));
    }

    #[test]
    fn test_switch_from_assigned_pos_clears_everything() {
        let mut state = PillState::new();
        state.apply(Mutation::CartAdd(ticket()));
        state.apply(Mutation::SetPaymentMethod(Some(PaymentMethod::Cash)));
        state.apply(Mutation::SetAssign(true));

        let notice = state.apply(Mutation::SetPrimaryAction(PrimaryAction::CheckIn));
        assert_eq!(notice, Some(Notice::SwitchedToCheckIn));
        assert_eq!(state.primary_action(), Some(PrimaryAction::CheckIn));
        assert!(!state.assign());
        assert!(state.cart().is_empty());
        assert_eq!(state.payment_method(), None);
    }

    #[test]
    fn test_assign_cancels_check_in() {
        let mut state = PillState::new();
        state.apply(Mutation::SetPrimaryAction(PrimaryAction::CheckIn));
        let notice = state.apply(Mutation::SetAssign(true));
        assert_eq!(notice, Some(Notice::SwitchedToAssign));
        assert!(state.assign());
        assert_eq!(state.primary_action(), None);
    }

    #[test]
    fn test_assign_coexists_with_pos() {
        let mut state = PillState::new();
        state.apply(Mutation::SetPrimaryAction(PrimaryAction::PointOfSale));
        let notice = state.apply(Mutation::SetAssign(true));
        assert_eq!(notice, None);
        assert!(state.assign());
        assert_eq!(state.primary_action(), Some(PrimaryAction::PointOfSale));
    }

    #[test]
    fn test_cart_add_implicitly_activates_pos() {
        let mut state = PillState::new();
        let notice = state.apply(Mutation::CartAdd(ticket()));
        assert_eq!(notice, None);
        assert_eq!(state.primary_action(), Some(PrimaryAction::PointOfSale));
        assert_eq!(state.cart().lines().len(), 1);
    }

    #[test]
    fn test_cart_add_displaces_check_in_with_notice() {
        let mut state = PillState::new();
        state.apply(Mutation::SetPrimaryAction(PrimaryAction::CheckIn));
        let notice = state.apply(Mutation::CartAdd(ticket()));
        assert_eq!(notice, Some(Notice::SwitchedToPos));
        assert_eq!(state.primary_action(), Some(PrimaryAction::PointOfSale));
    }

    #[test]
    fn test_cart_add_displaces_assign_with_notice() {
        let mut state = PillState::new();
        state.apply(Mutation::SetAssign(true));
        let notice = state.apply(Mutation::CartAdd(ticket()));
        assert_eq!(notice, Some(Notice::SwitchedToPos));
        assert!(!state.assign());
    }

    #[test]
    fn test_payment_method_requires_pos() {
        let mut state = PillState::new();
        state.apply(Mutation::SetPaymentMethod(Some(PaymentMethod::Card)));
        assert_eq!(state.payment_method(), None);

        state.apply(Mutation::SetPrimaryAction(PrimaryAction::PointOfSale));
        state.apply(Mutation::SetPaymentMethod(Some(PaymentMethod::Card)));
        assert_eq!(state.payment_method(), Some(PaymentMethod::Card));
    }

    #[test]
    fn test_clear_primary_action_drops_pos_payload() {
        let mut state = PillState::new();
        state.apply(Mutation::CartAdd(ticket()));
        state.apply(Mutation::SetPaymentMethod(Some(PaymentMethod::Cash)));
        state.apply(Mutation::ClearPrimaryAction);
        assert_eq!(state.primary_action(), None);
        assert!(state.cart().is_empty());
        assert_eq!(state.payment_method(), None);
    }

    #[test]
    fn test_placeholder_follows_modifiers() {
        let mut state = PillState::new();
        assert_eq!(state.placeholder(), "Ask or act…");
        state.apply(Mutation::SetPrimaryAction(PrimaryAction::PointOfSale));
        assert_eq!(state.placeholder(), "Add note (optional)…");
        state.apply(Mutation::SetAssign(true));
        assert_eq!(state.placeholder(), "Task description…");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = PillState::new();
        state.apply(Mutation::AddRecipient(staff("Alex Rivera")));
        state.apply(Mutation::CartAdd(ticket()));
        state.apply(Mutation::SetFreeText("note".to_string()));
        state.apply(Mutation::Reset);
        assert_eq!(state, PillState::new());
    }

    #[test]
    fn test_first_assignee_is_first_match() {
        let mut state = PillState::new();
        state.apply(Mutation::AddRecipient(guest(1)));
        state.apply(Mutation::AddRecipient(staff("Alex Rivera")));
        state.apply(Mutation::AddRecipient(staff("Jordan Kim")));
        assert_eq!(state.first_assignee().unwrap().name, "Alex Rivera");
    }
}
