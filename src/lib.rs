//! Order lifecycle: a pure, total state machine for purchase orders.
//!
//! An order moves through a fixed set of states. Which actions are legal in
//! each state is decided by a single transition table; everything else
//! (guards, queries, display text) is derived from it.
//!
//! # Core Concepts
//!
//! - **State**: the closed `OrderState` enum, one tag per lifecycle position
//! - **Action**: `pay`, `ship`, `confirm_delivery`, `cancel`
//! - **Transition table**: the pure `apply(state, action)` function
//! - **Order**: identity, amount and current state; the only mutation path
//!
//! Illegal actions are expected outcomes, not faults. They return `false`
//! (or a `TransitionError`) and leave the order unchanged.
//!
//! # Example
//!
//! ```rust
//! use order_lifecycle::{Order, OrderState};
//!
//! let mut order = Order::new("ORD-S002", 199.99).unwrap();
//!
//! assert!(!order.ship());
//! assert_eq!(order.state(), OrderState::Pending);
//!
//! assert!(order.cancel());
//! assert!(!order.pay());
//! assert_eq!(order.state(), OrderState::Cancelled);
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod order;

// Re-export commonly used types
pub use crate::builder::{BuildError, OrderBuilder};
pub use crate::core::{Action, OrderState, State, StateChange, TransitionError};
pub use crate::effects::{ActionError, PaymentGateway};
pub use crate::order::{Amount, Order, OrderId};
