//! The order entity.
//!
//! An `Order` holds identity, amount and the current lifecycle state. It owns
//! the only mutation path for that state: every action is looked up in the
//! transition table and the outcome is assigned in one step.

mod value_objects;

pub use value_objects::{Amount, OrderId};

use crate::builder::{BuildError, OrderBuilder};
use crate::core::{apply, Action, Guard, OrderState, State, StateChange, TransitionError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A purchase order and its lifecycle state.
///
/// # Example
///
/// ```rust
/// use order_lifecycle::core::OrderState;
/// use order_lifecycle::order::Order;
///
/// let mut order = Order::new("ORD-S001", 299.99).unwrap();
/// assert_eq!(order.state(), OrderState::Pending);
///
/// assert!(order.pay());
/// assert!(order.ship());
/// assert!(order.confirm_delivery());
/// assert_eq!(order.state(), OrderState::Completed);
///
/// assert!(!order.cancel());
/// assert_eq!(order.state(), OrderState::Completed);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    amount: Amount,
    state: OrderState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a pending order, validating the id and amount.
    pub fn new(id: impl Into<OrderId>, amount: f64) -> Result<Self, BuildError> {
        OrderBuilder::new().id(id).amount(amount).build()
    }

    /// Start building an order with non-default settings.
    pub fn builder() -> OrderBuilder {
        OrderBuilder::new()
    }

    pub(crate) fn from_parts(id: OrderId, amount: Amount, state: OrderState) -> Self {
        let now = Utc::now();
        tracing::debug!(order_id = %id, %amount, state = %state, "order created");
        Self {
            id,
            amount,
            state,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Instant of the last successful transition, or creation time.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_final()
    }

    /// Run `action` against the current state.
    ///
    /// On success the new state is stored and the change returned. On
    /// failure nothing about the order changes.
    #[tracing::instrument(skip(self), fields(order_id = %self.id))]
    pub fn apply(&mut self, action: Action) -> Result<StateChange, TransitionError> {
        let (next, result) = apply(self.state, action);
        match &result {
            Ok(change) => {
                self.state = next;
                self.updated_at = Utc::now();
                tracing::info!(
                    action = %change.action,
                    from = %change.from,
                    to = %change.to,
                    "order state changed"
                );
            }
            Err(err) => {
                tracing::debug!(error = %err, "action rejected");
            }
        }
        result
    }

    /// Pay for the order. Succeeds only from `Pending`.
    pub fn pay(&mut self) -> bool {
        self.apply(Action::Pay).is_ok()
    }

    /// Ship the order. Succeeds only from `Paid`.
    pub fn ship(&mut self) -> bool {
        self.apply(Action::Ship).is_ok()
    }

    /// Confirm delivery. Succeeds only from `Shipped`.
    pub fn confirm_delivery(&mut self) -> bool {
        self.apply(Action::ConfirmDelivery).is_ok()
    }

    /// Cancel the order. Succeeds from `Pending` or `Paid`; cancelling a
    /// paid order implies a refund that is assumed to succeed.
    pub fn cancel(&mut self) -> bool {
        self.apply(Action::Cancel).is_ok()
    }

    /// Check if `action` would succeed right now.
    pub fn can(&self, action: Action) -> bool {
        Guard::for_action(action).check(&self.state)
    }

    pub fn can_pay(&self) -> bool {
        self.can(Action::Pay)
    }

    pub fn can_ship(&self) -> bool {
        self.can(Action::Ship)
    }

    pub fn can_confirm_delivery(&self) -> bool {
        self.can(Action::ConfirmDelivery)
    }

    pub fn can_cancel(&self) -> bool {
        self.can(Action::Cancel)
    }

    pub fn current_state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn current_state_description(&self) -> &'static str {
        self.state.description()
    }

    /// Presentation text listing the actions legal in the current state.
    ///
    /// ```rust
    /// use order_lifecycle::order::Order;
    ///
    /// let mut order = Order::new("ORD-S002", 199.99).unwrap();
    /// assert_eq!(order.available_actions(), "Available actions: pay, cancel");
    ///
    /// order.cancel();
    /// assert_eq!(order.available_actions(), "No actions available");
    /// ```
    pub fn available_actions(&self) -> String {
        let actions = self.state.allowed_actions();
        if actions.is_empty() {
            return "No actions available".to_string();
        }
        let names: Vec<&str> = actions.iter().map(Action::name).collect();
        format!("Available actions: {}", names.join(", "))
    }

    /// Multi-line summary of the order for display.
    pub fn status_report(&self) -> String {
        format!(
            "Order {}\n  Amount: {}\n  Status: {} ({})\n  {}",
            self.id,
            self.amount,
            self.state.description(),
            self.state.name(),
            self.available_actions()
        )
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order{{id={}, amount={}, status={}}}",
            self.id,
            self.amount,
            self.state.description()
        )
    }
}
