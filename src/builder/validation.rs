//! Construction checks using `Validation`.
//!
//! Every check runs, and all failures are reported together, so a caller
//! with both a blank id and a bad amount learns about both at once.

use crate::builder::error::Violation;
use crate::order::{Amount, OrderId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub(crate) type Checked<T> = Validation<T, NonEmptyVec<Violation>>;

pub(crate) fn check_id(id: &OrderId) -> Checked<()> {
    if id.is_blank() {
        Validation::fail(Violation::BlankId)
    } else {
        Validation::success(())
    }
}

pub(crate) fn check_amount(value: f64) -> Checked<()> {
    match Amount::new(value) {
        Ok(_) => Validation::success(()),
        Err(violation) => Validation::fail(violation),
    }
}

/// Run all construction checks, accumulating every violation.
pub(crate) fn validate(id: &OrderId, amount: f64) -> Result<(), Vec<Violation>> {
    let checks = vec![check_id(id), check_amount(amount)];

    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(violations) => Err(violations.iter().cloned().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_passes() {
        assert!(validate(&OrderId::new("ORD-1"), 10.0).is_ok());
    }

    #[test]
    fn blank_id_fails() {
        let result = check_id(&OrderId::new(" "));
        assert!(result.is_failure());
    }

    #[test]
    fn amount_check_delegates_to_amount() {
        assert!(check_amount(0.01).is_success());
        assert!(check_amount(0.0).is_failure());
        assert!(check_amount(f64::NAN).is_failure());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let violations = validate(&OrderId::new(""), -3.0).unwrap_err();

        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&Violation::BlankId));
        assert!(violations.contains(&Violation::NonPositiveAmount { amount: -3.0 }));
    }
}
