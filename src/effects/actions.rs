//! Actions gated on a payment collaborator.

use crate::core::{Action, OrderState, StateChange, TransitionError};
use crate::effects::gateway::{PaymentError, PaymentGateway};
use crate::order::Order;
use thiserror::Error;

/// Errors from a collaborator-gated action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("Payment collaborator failed: {0}")]
    Payment(#[from] PaymentError),
}

impl Order {
    /// Pay, charging the order amount through `gateway`.
    ///
    /// The guard is checked first, so an illegal payment never reaches the
    /// gateway. If the charge fails the order stays `Pending`.
    ///
    /// ```rust
    /// use order_lifecycle::core::OrderState;
    /// use order_lifecycle::effects::ApprovingGateway;
    /// use order_lifecycle::order::Order;
    ///
    /// let mut order = Order::new("ORD-S001", 299.99).unwrap();
    /// let change = order.pay_with(&mut ApprovingGateway).unwrap();
    ///
    /// assert_eq!(change.to, OrderState::Paid);
    /// assert!(order.pay_with(&mut ApprovingGateway).is_err());
    /// ```
    pub fn pay_with<G: PaymentGateway>(
        &mut self,
        mut gateway: G,
    ) -> Result<StateChange, ActionError> {
        self.ensure_allowed(Action::Pay)?;

        if let Err(err) = gateway.charge(self.id(), self.amount()) {
            tracing::warn!(order_id = %self.id(), error = %err, "charge failed, order unchanged");
            return Err(err.into());
        }

        Ok(self.apply(Action::Pay)?)
    }

    /// Cancel, refunding through `gateway` when the order was already paid.
    ///
    /// A pending order is cancelled without contacting the gateway. A paid
    /// order is only cancelled once the refund succeeds.
    pub fn cancel_with<G: PaymentGateway>(
        &mut self,
        mut gateway: G,
    ) -> Result<StateChange, ActionError> {
        self.ensure_allowed(Action::Cancel)?;

        if self.state() == OrderState::Paid {
            if let Err(err) = gateway.refund(self.id(), self.amount()) {
                tracing::warn!(order_id = %self.id(), error = %err, "refund failed, order unchanged");
                return Err(err.into());
            }
        }

        Ok(self.apply(Action::Cancel)?)
    }

    fn ensure_allowed(&self, action: Action) -> Result<(), TransitionError> {
        if self.can(action) {
            Ok(())
        } else {
            tracing::debug!(order_id = %self.id(), %action, state = %self.state(), "action rejected");
            Err(TransitionError::NotAllowed {
                action,
                state: self.state(),
            })
        }
    }
}
