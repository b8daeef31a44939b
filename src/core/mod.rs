//! Core lifecycle types and logic.
//!
//! This module contains the pure part of the order lifecycle:
//! - State and action definitions
//! - The transition table and the `apply` function
//! - Guards derived from the table
//!
//! Nothing here performs I/O or mutates shared data; `Order` is the thin
//! wrapper that stores the result of `apply`.

mod action;
mod guard;
mod state;
mod transition;

pub use action::Action;
pub use guard::Guard;
pub use state::{OrderState, State};
pub use transition::{apply, next_state, StateChange, TransitionError};
