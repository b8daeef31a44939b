//! Builder API for constructing orders.
//!
//! Construction is the only place input is validated. An order that exists
//! always has a non-blank id and a positive, finite amount, so nothing
//! downstream has to re-check them.

pub mod error;
pub mod order;
mod validation;

pub use error::{BuildError, Violation};
pub use order::OrderBuilder;
