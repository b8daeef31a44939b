//! Builder for constructing orders.

use crate::builder::error::BuildError;
use crate::builder::validation::validate;
use crate::core::OrderState;
use crate::order::{Amount, Order, OrderId};

/// Builder for constructing orders with a fluent API.
///
/// Defaults: a generated id and the `Pending` state. The amount is required.
///
/// # Example
///
/// ```rust
/// use order_lifecycle::builder::OrderBuilder;
/// use order_lifecycle::core::OrderState;
///
/// let order = OrderBuilder::new()
///     .id("ORD-S003")
///     .amount(399.99)
///     .initial_state(OrderState::Paid)
///     .build()
///     .unwrap();
///
/// assert_eq!(order.state(), OrderState::Paid);
/// assert!(order.can_ship());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    id: Option<OrderId>,
    amount: Option<f64>,
    initial_state: OrderState,
}

impl OrderBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the order id (optional, generated when omitted).
    pub fn id(mut self, id: impl Into<OrderId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the order amount (required).
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Place the order in `state` instead of `Pending` (optional).
    ///
    /// Used to rehydrate an order whose lifecycle position is already known.
    pub fn initial_state(mut self, state: OrderState) -> Self {
        self.initial_state = state;
        self
    }

    /// Build the order.
    /// Returns an error listing every invalid input.
    pub fn build(self) -> Result<Order, BuildError> {
        let value = self.amount.ok_or(BuildError::MissingAmount)?;
        let id = self.id.unwrap_or_else(OrderId::generate);

        validate(&id, value).map_err(|violations| BuildError::Invalid { violations })?;
        let amount = Amount::new(value).map_err(|violation| BuildError::Invalid {
            violations: vec![violation],
        })?;

        Ok(Order::from_parts(id, amount, self.initial_state))
    }
}
