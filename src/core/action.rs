//! Business actions that can move an order between states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An operation a caller may attempt on an order.
///
/// Actions are the only way to change an order's state. Whether an action
/// succeeds depends solely on the state the order is in when it is invoked.
///
/// # Example
///
/// ```rust
/// use order_lifecycle::core::Action;
///
/// assert_eq!(Action::ConfirmDelivery.name(), "confirm_delivery");
/// assert_eq!(Action::ALL.len(), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Action {
    Pay,
    Ship,
    ConfirmDelivery,
    Cancel,
}

impl Action {
    /// Every action, in lifecycle order.
    pub const ALL: [Action; 4] = [
        Action::Pay,
        Action::Ship,
        Action::ConfirmDelivery,
        Action::Cancel,
    ];

    /// Snake-case name used in logs and presentation text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pay => "pay",
            Self::Ship => "ship",
            Self::ConfirmDelivery => "confirm_delivery",
            Self::Cancel => "cancel",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_action_once_in_lifecycle_order() {
        assert_eq!(
            Action::ALL,
            [
                Action::Pay,
                Action::Ship,
                Action::ConfirmDelivery,
                Action::Cancel
            ]
        );
    }

    #[test]
    fn display_matches_name() {
        for action in Action::ALL {
            assert_eq!(action.to_string(), action.name());
        }
    }

    #[test]
    fn action_serializes_correctly() {
        let json = serde_json::to_string(&Action::ConfirmDelivery).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Action::ConfirmDelivery);
    }
}
