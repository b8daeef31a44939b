//! Guards deciding whether an action may run.
//!
//! A guard is the per-(state, action) rule of the transition table viewed as
//! a predicate over states. Queries such as `Order::can_pay` go through a
//! guard, so they can never disagree with what the action itself does.

use super::action::Action;
use super::state::OrderState;
use super::transition::next_state;

/// Pure predicate that determines if an action can execute from a state.
///
/// # Example
///
/// ```rust
/// use order_lifecycle::core::{Action, Guard, OrderState};
///
/// let can_ship = Guard::for_action(Action::Ship);
///
/// assert!(can_ship.check(&OrderState::Paid));
/// assert!(!can_ship.check(&OrderState::Pending));
/// assert!(!can_ship.check(&OrderState::Completed));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Guard {
    action: Action,
}

impl Guard {
    /// Create the guard for `action`.
    pub fn for_action(action: Action) -> Self {
        Self { action }
    }

    /// The action this guard protects.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Check if the guarded action may run from `state`.
    pub fn check(&self, state: &OrderState) -> bool {
        next_state(*state, self.action).is_some()
    }
}
