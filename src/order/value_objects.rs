//! Value objects identifying and pricing an order.

use crate::builder::Violation;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, caller-visible order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wraps an existing identifier such as `"ORD-S001"`.
    ///
    /// Blank identifiers are rejected when the order is built, not here.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Positive, finite monetary value of an order.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Validates `value` as an order amount.
    ///
    /// ```rust
    /// use order_lifecycle::order::Amount;
    ///
    /// assert!(Amount::new(299.99).is_ok());
    /// assert!(Amount::new(0.0).is_err());
    /// assert!(Amount::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, Violation> {
        if !value.is_finite() {
            return Err(Violation::NonFiniteAmount { amount: value });
        }
        if value <= 0.0 {
            return Err(Violation::NonPositiveAmount { amount: value });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
