//! Order submission.
//!
//! Converts the current cart into an order payload and posts it once. An
//! empty cart is rejected before any network call; a failed request leaves
//! the cart untouched so the shopper can retry; a confirmed order clears it.
//!
//! No idempotency token is attached, so a retry after a timeout can create a
//! duplicate remote order. Known limitation of the wire contract.

use std::fmt;

use bowleria_core::{Money, OrderId};

use crate::api::{ApiClient, ApiError, OrderItem, OrderPayload};
use crate::cart::CartStore;

/// Customer details attached to an order.
///
/// Both fields default to empty strings when the shopper provides none.
#[derive(Debug, Clone, Default)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

/// What a checkout attempt produced.
///
/// `Display` renders the user-facing notice; internal detail stays in the
/// logs.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// The cart had no lines; nothing was sent.
    EmptyCart,
    /// The API confirmed the order and the cart was cleared.
    Placed { id: OrderId, total: Money },
    /// The request failed; the cart was left untouched for a retry.
    Failed(ApiError),
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCart => write!(f, "Your cart is empty."),
            Self::Placed { id, total } => write!(f, "Order placed! #{id} Total: {total}"),
            Self::Failed(_) => {
                write!(f, "Could not place the order; your cart was kept so you can retry.")
            }
        }
    }
}

/// Submit the current cart as an order.
pub async fn submit_order(
    store: &mut CartStore,
    client: &ApiClient,
    customer: Customer,
) -> CheckoutOutcome {
    if store.is_empty() {
        return CheckoutOutcome::EmptyCart;
    }

    let payload = OrderPayload {
        customer_name: customer.name,
        customer_phone: customer.phone,
        items: store.lines().map(OrderItem::from).collect(),
    };

    match client.submit_order(&payload).await {
        Ok(confirmation) => {
            store.clear();
            tracing::info!(
                order_id = %confirmation.id,
                total = %confirmation.total,
                "order placed"
            );
            CheckoutOutcome::Placed {
                id: confirmation.id,
                total: confirmation.total,
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "order submission failed");
            CheckoutOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_notices() {
        assert_eq!(CheckoutOutcome::EmptyCart.to_string(), "Your cart is empty.");
        assert_eq!(
            CheckoutOutcome::Placed {
                id: OrderId::new(7),
                total: Money::from(190),
            }
            .to_string(),
            "Order placed! #7 Total: $190"
        );
    }

    #[test]
    fn failure_notice_does_not_leak_detail() {
        let outcome = CheckoutOutcome::Failed(ApiError::Status {
            status: 500,
            body: "stack trace".to_string(),
        });
        assert!(!outcome.to_string().contains("stack trace"));
    }
}
