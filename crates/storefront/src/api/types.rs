//! Wire types for the shop API.
//!
//! Field names match the JSON the backend sends and accepts; nothing here is
//! renamed on the wire.

use bowleria_core::{Money, OrderId, ProductKey};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;

/// A product as returned by `GET /bowls/`.
///
/// Read-only within the storefront; the cart captures the fields it needs at
/// add time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Money,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub badge: String,
}

impl Product {
    /// The key this product uses in the cart mapping.
    ///
    /// The slug is preferred; products without one fall back to the numeric
    /// id.
    #[must_use]
    pub fn key(&self) -> ProductKey {
        if self.slug.is_empty() {
            ProductKey::new(self.id.to_string())
        } else {
            ProductKey::new(self.slug.as_str())
        }
    }
}

/// Request body for `POST /orders/`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPayload {
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<OrderItem>,
}

/// One cart line inside an order payload.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    /// Server-side product reference. The cart keys lines by slug, so the
    /// numeric id is not tracked and this is always `None` on the wire.
    pub bowl: Option<i64>,
    pub name: String,
    /// Serialized as a JSON number, the format the order endpoint expects.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    pub image_url: String,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            bowl: None,
            name: line.name.clone(),
            price: line.price.amount(),
            quantity: line.quantity,
            image_url: line.image_url.clone(),
        }
    }
}

/// Success response from `POST /orders/`.
///
/// The wire object carries more fields; only the identifier and total are
/// used.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderConfirmation {
    pub id: OrderId,
    pub total: Money,
}
