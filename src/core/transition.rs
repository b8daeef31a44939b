//! The transition table.
//!
//! `next_state` is the single source of truth for which actions are legal in
//! which states. Guards, queries and presentation text are all derived from
//! it, and `apply` is the only function that produces a new state.

use super::action::Action;
use super::state::OrderState;
use serde::{Deserialize, Serialize};

/// A successful move from one state to another.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StateChange {
    /// The action that caused the change
    pub action: Action,
    /// The state being left
    pub from: OrderState,
    /// The state being entered
    pub to: OrderState,
}

/// Errors returned when an action cannot run.
///
/// These are expected outcomes, not faults: callers may attempt actions
/// speculatively and inspect the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("{action} is not allowed in state {state}")]
    NotAllowed { action: Action, state: OrderState },
}

/// Look up the target state for `action` taken from `state`.
///
/// Returns `None` when the action is illegal in that state. The match is
/// exhaustive over every `(state, action)` pair.
///
/// ```rust
/// use order_lifecycle::core::{next_state, Action, OrderState};
///
/// assert_eq!(next_state(OrderState::Pending, Action::Pay), Some(OrderState::Paid));
/// assert_eq!(next_state(OrderState::Pending, Action::Ship), None);
/// ```
pub fn next_state(state: OrderState, action: Action) -> Option<OrderState> {
    use Action::*;
    use OrderState::*;

    match (state, action) {
        (Pending, Pay) => Some(Paid),
        (Pending, Cancel) => Some(Cancelled),
        (Pending, Ship | ConfirmDelivery) => None,

        (Paid, Ship) => Some(Shipped),
        (Paid, Cancel) => Some(Cancelled),
        (Paid, Pay | ConfirmDelivery) => None,

        (Shipped, ConfirmDelivery) => Some(Completed),
        (Shipped, Pay | Ship | Cancel) => None,

        (Completed, _) | (Cancelled, _) => None,
    }
}

/// Apply `action` to `state`, returning the resulting state and the outcome.
///
/// On failure the returned state is the input state.
///
/// ```rust
/// use order_lifecycle::core::{apply, Action, OrderState};
///
/// let (state, result) = apply(OrderState::Paid, Action::Ship);
/// assert_eq!(state, OrderState::Shipped);
/// assert!(result.is_ok());
///
/// let (state, result) = apply(OrderState::Shipped, Action::Cancel);
/// assert_eq!(state, OrderState::Shipped);
/// assert!(result.is_err());
/// ```
pub fn apply(
    state: OrderState,
    action: Action,
) -> (OrderState, Result<StateChange, TransitionError>) {
    match next_state(state, action) {
        Some(to) => (
            to,
            Ok(StateChange {
                action,
                from: state,
                to,
            }),
        ),
        None => (state, Err(TransitionError::NotAllowed { action, state })),
    }
}
