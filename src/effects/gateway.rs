//! Payment collaborator seam.

use crate::order::{Amount, OrderId};
use thiserror::Error;

/// Errors reported by a payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Payment declined: {reason}")]
    Declined { reason: String },

    #[error("Payment service unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous payment collaborator.
///
/// Implementations talk to whatever actually moves money. The lifecycle
/// only cares whether the call succeeded.
pub trait PaymentGateway {
    /// Charge `amount` for the order.
    fn charge(&mut self, order_id: &OrderId, amount: Amount) -> Result<(), PaymentError>;

    /// Return `amount` to the customer for the order.
    fn refund(&mut self, order_id: &OrderId, amount: Amount) -> Result<(), PaymentError>;
}

/// Gateway that approves every request.
///
/// Using it with the `_with` actions gives the same outcomes as the plain
/// `pay` and `cancel` operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApprovingGateway;

impl PaymentGateway for ApprovingGateway {
    fn charge(&mut self, _order_id: &OrderId, _amount: Amount) -> Result<(), PaymentError> {
        Ok(())
    }

    fn refund(&mut self, _order_id: &OrderId, _amount: Amount) -> Result<(), PaymentError> {
        Ok(())
    }
}

impl<G: PaymentGateway + ?Sized> PaymentGateway for &mut G {
    fn charge(&mut self, order_id: &OrderId, amount: Amount) -> Result<(), PaymentError> {
        (**self).charge(order_id, amount)
    }

    fn refund(&mut self, order_id: &OrderId, amount: Amount) -> Result<(), PaymentError> {
        (**self).refund(order_id, amount)
    }
}
