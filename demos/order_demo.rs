//! Order Lifecycle Walkthrough
//!
//! This demo replays the classic order scenarios against the state machine.
//!
//! Key concepts:
//! - Normal flow: Pending -> Paid -> Shipped -> Completed
//! - Cancellation before and after payment
//! - Illegal actions fail without changing the order
//! - Collaborator-gated payment with a declining gateway
//!
//! Run with: RUST_LOG=debug cargo run --example order_demo

use order_lifecycle::effects::{PaymentError, PaymentGateway};
use order_lifecycle::{Amount, Order, OrderId};
use tracing_subscriber::EnvFilter;

struct DecliningGateway;

impl PaymentGateway for DecliningGateway {
    fn charge(&mut self, order_id: &OrderId, amount: Amount) -> Result<(), PaymentError> {
        println!("  [Payment] Declining {} for {}", amount, order_id);
        Err(PaymentError::Declined {
            reason: "card expired".to_string(),
        })
    }

    fn refund(&mut self, _order_id: &OrderId, _amount: Amount) -> Result<(), PaymentError> {
        Ok(())
    }
}

fn outcome(ok: bool) -> &'static str {
    if ok {
        "succeeded"
    } else {
        "failed"
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Order Lifecycle ===\n");

    println!("Scenario 1: normal flow");
    let mut order = Order::new("ORD-S001", 299.99)?;
    println!("{}", order.status_report());
    println!("  pay {}", outcome(order.pay()));
    println!("  ship {}", outcome(order.ship()));
    println!("  confirm_delivery {}", outcome(order.confirm_delivery()));
    println!("{}\n", order.status_report());

    println!("Scenario 2: cancel while pending");
    let mut pending = Order::new("ORD-S002", 199.99)?;
    println!("  cancel {}", outcome(pending.cancel()));
    println!("  {}\n", pending);

    println!("Scenario 3: cancel after payment (refund implied)");
    let mut paid = Order::new("ORD-S003", 399.99)?;
    paid.pay();
    println!("  cancel {}", outcome(paid.cancel()));
    println!("  {}\n", paid);

    println!("Scenario 4: actions on a completed order");
    let mut completed = Order::new("ORD-S004", 159.99)?;
    completed.pay();
    completed.ship();
    completed.confirm_delivery();
    println!("  pay again {}", outcome(completed.pay()));
    println!("  ship again {}", outcome(completed.ship()));
    println!("  cancel {}", outcome(completed.cancel()));
    println!("  {}\n", completed.available_actions());

    println!("Scenario 5: declined payment");
    let mut declined = Order::new("ORD-S005", 259.99)?;
    if let Err(err) = declined.pay_with(DecliningGateway) {
        println!("  pay_with failed: {}", err);
    }
    println!("  {}", declined);

    println!("\n=== Demo Complete ===");
    Ok(())
}
