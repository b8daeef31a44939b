//! End-to-end order scenarios through the public API.

use order_lifecycle::effects::{ApprovingGateway, PaymentError, PaymentGateway};
use order_lifecycle::{
    Action, ActionError, Amount, BuildError, Order, OrderId, OrderState, TransitionError,
};

#[test]
fn normal_flow_completes_and_then_rejects_cancel() {
    let mut order = Order::new("ORD-S001", 299.99).unwrap();
    assert_eq!(order.state(), OrderState::Pending);

    assert!(order.pay());
    assert_eq!(order.state(), OrderState::Paid);

    assert!(order.ship());
    assert_eq!(order.state(), OrderState::Shipped);

    assert!(order.confirm_delivery());
    assert_eq!(order.state(), OrderState::Completed);

    assert!(!order.cancel());
    assert_eq!(order.state(), OrderState::Completed);
}

#[test]
fn cancelled_order_cannot_be_paid() {
    let mut order = Order::new("ORD-S002", 199.99).unwrap();

    assert!(order.cancel());
    assert_eq!(order.state(), OrderState::Cancelled);

    assert!(!order.pay());
    assert_eq!(order.state(), OrderState::Cancelled);
}

#[test]
fn paid_order_can_be_cancelled() {
    let mut order = Order::new("ORD-S003", 399.99).unwrap();

    assert!(order.pay());
    assert!(order.cancel());
    assert_eq!(order.current_state_description(), "Cancelled");
}

#[test]
fn completed_order_rejects_every_action() {
    let mut order = Order::new("ORD-S004", 159.99).unwrap();
    order.pay();
    order.ship();
    order.confirm_delivery();

    for action in Action::ALL {
        assert_eq!(
            order.apply(action),
            Err(TransitionError::NotAllowed {
                action,
                state: OrderState::Completed,
            })
        );
    }
    assert_eq!(order.state(), OrderState::Completed);
}

#[test]
fn skipping_a_step_fails_at_that_step() {
    let sequences: [&[Action]; 3] = [
        &[Action::Ship, Action::Pay, Action::ConfirmDelivery],
        &[Action::Pay, Action::ConfirmDelivery, Action::Ship],
        &[Action::ConfirmDelivery, Action::Pay, Action::Ship],
    ];

    for sequence in sequences {
        let mut order = Order::new("ORD-SKIP", 10.0).unwrap();
        let first = sequence[0];
        let mut failed_at = None;

        for (index, action) in sequence.iter().enumerate() {
            let before = order.state();
            if order.apply(*action).is_err() {
                assert_eq!(order.state(), before);
                failed_at = Some(index);
                break;
            }
        }

        let expected = if first == Action::Pay { 1 } else { 0 };
        assert_eq!(failed_at, Some(expected), "sequence {sequence:?}");
    }
}

#[test]
fn state_change_reports_transition() {
    let mut order = Order::new("ORD-S005", 259.99).unwrap();

    let change = order.apply(Action::Pay).unwrap();

    assert_eq!(change.action, Action::Pay);
    assert_eq!(change.from, OrderState::Pending);
    assert_eq!(change.to, OrderState::Paid);
}

#[test]
fn invalid_construction_fails_fast() {
    let err = Order::new("   ", -1.0).unwrap_err();

    match err {
        BuildError::Invalid { violations } => assert_eq!(violations.len(), 2),
        other => panic!("Expected Invalid, got {other:?}"),
    }
}

#[test]
fn builder_can_rehydrate_shipped_order() {
    let mut order = Order::builder()
        .id(OrderId::new("ORD-S006"))
        .amount(88.0)
        .initial_state(OrderState::Shipped)
        .build()
        .unwrap();

    assert!(!order.can_cancel());
    assert!(order.confirm_delivery());
    assert!(order.is_terminal());
}

struct DecliningGateway;

impl PaymentGateway for DecliningGateway {
    fn charge(&mut self, _order_id: &OrderId, _amount: Amount) -> Result<(), PaymentError> {
        Err(PaymentError::Declined {
            reason: "card expired".to_string(),
        })
    }

    fn refund(&mut self, _order_id: &OrderId, _amount: Amount) -> Result<(), PaymentError> {
        Err(PaymentError::Unavailable("maintenance".to_string()))
    }
}

#[test]
fn declined_payment_keeps_order_pending() {
    let mut order = Order::new("ORD-S007", 20.0).unwrap();

    let err = order.pay_with(DecliningGateway).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Payment collaborator failed: Payment declined: card expired"
    );
    assert_eq!(order.state(), OrderState::Pending);
    assert!(order.can_pay());
}

#[test]
fn gated_flow_matches_plain_flow() {
    let mut gated = Order::new("ORD-S008", 20.0).unwrap();
    let mut plain = Order::new("ORD-S009", 20.0).unwrap();

    gated.pay_with(ApprovingGateway).unwrap();
    plain.pay();
    gated.cancel_with(ApprovingGateway).unwrap();
    plain.cancel();

    assert_eq!(gated.state(), plain.state());
    assert!(matches!(
        gated.cancel_with(ApprovingGateway),
        Err(ActionError::Transition(_))
    ));
}
