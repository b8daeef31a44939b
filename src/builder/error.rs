//! Errors raised while constructing an order.

use thiserror::Error;

/// A single problem with order construction input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("Order id must not be blank")]
    BlankId,

    #[error("Order amount must be positive, got {amount}")]
    NonPositiveAmount { amount: f64 },

    #[error("Order amount must be a finite number, got {amount}")]
    NonFiniteAmount { amount: f64 },
}

/// Errors that can occur when building an order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Order amount not specified. Call .amount(value) before .build()")]
    MissingAmount,

    /// Every violation found, not just the first.
    #[error("Order input rejected: {}", describe(.violations))]
    Invalid { violations: Vec<Violation> },
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
