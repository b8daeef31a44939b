//! Order states and the `State` trait describing them.
//!
//! States carry no data. Everything an order can do is a pure function of
//! which variant it currently holds.

use super::action::Action;
use super::transition::next_state;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for lifecycle states.
///
/// All methods are pure. Implementors are plain tags, so they must be
/// `Copy` and serializable for presentation layers.
///
/// # Example
///
/// ```rust
/// use order_lifecycle::core::{OrderState, State};
///
/// assert_eq!(OrderState::Pending.name(), "PENDING");
/// assert!(!OrderState::Pending.is_final());
/// assert!(OrderState::Cancelled.is_final());
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Stable upper-case label for display and logging.
    fn name(&self) -> &'static str;

    /// Human-readable description of what the state means.
    fn description(&self) -> &'static str;

    /// Check if this is a terminal state.
    ///
    /// Terminal states admit no outgoing transition for any action.
    fn is_final(&self) -> bool;
}

/// The lifecycle position of an order.
///
/// ```text
/// Pending ──pay──► Paid ──ship──► Shipped ──confirm_delivery──► Completed
///    │               │
///    └────cancel─────┴──────────► Cancelled
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub enum OrderState {
    /// Created, awaiting payment.
    #[default]
    Pending,
    /// Payment received, awaiting shipment.
    Paid,
    /// Handed to the carrier, awaiting delivery confirmation.
    Shipped,
    /// Delivered (terminal).
    Completed,
    /// Cancelled before shipment (terminal).
    Cancelled,
}

impl OrderState {
    /// Every state, in lifecycle order.
    pub const ALL: [OrderState; 5] = [
        OrderState::Pending,
        OrderState::Paid,
        OrderState::Shipped,
        OrderState::Completed,
        OrderState::Cancelled,
    ];

    /// Actions that would succeed from this state.
    ///
    /// Derived from the transition table, so it can never disagree with it.
    ///
    /// ```rust
    /// use order_lifecycle::core::{Action, OrderState};
    ///
    /// assert_eq!(
    ///     OrderState::Paid.allowed_actions(),
    ///     vec![Action::Ship, Action::Cancel]
    /// );
    /// assert!(OrderState::Completed.allowed_actions().is_empty());
    /// ```
    pub fn allowed_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| next_state(*self, *action).is_some())
            .collect()
    }
}

impl State for OrderState {
    fn name(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Shipped => "SHIPPED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Pending => "Awaiting payment",
            Self::Paid => "Paid",
            Self::Shipped => "Shipped",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
