//! Collaborator-gated order actions.
//!
//! This module is the "imperative shell" around the pure lifecycle core.
//! Payment is an external collaborator called synchronously; its result
//! decides whether the transition happens.
//!
//! # Key Concepts
//!
//! - **Gateway**: the `PaymentGateway` trait that charges and refunds
//! - **Gated actions**: `Order::pay_with` and `Order::cancel_with`
//! - **Atomicity**: a collaborator failure leaves the order untouched
//!
//! The plain `Order::pay` and `Order::cancel` assume the collaborator always
//! succeeds, which is equivalent to passing `ApprovingGateway`.

mod actions;
mod gateway;

pub use actions::ActionError;
pub use gateway::{ApprovingGateway, PaymentError, PaymentGateway};
