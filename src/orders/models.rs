//! Order Domain Models

use crate::cart::CartLine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Payment method recorded when the caller does not name one
pub const DEFAULT_PAYMENT_METHOD: &str = "credit_card";

/// Message returned with a successful checkout
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No gateway is consulted; every checkout is approved.
    Approved,
}

/// Synthesised payment details attached to an order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentRecord {
    pub method: String,
    pub status: PaymentStatus,
    pub transaction_id: String,
}

impl PaymentRecord {
    /// Builds an approved record, keeping the caller's `method` when it is a
    /// string.
    pub fn approve(payment_info: Option<&Map<String, Value>>) -> Self {
        // Non-string methods (null, numbers, objects) record the default
        // rather than being echoed back.
        let method = payment_info
            .and_then(|p| p.get("method"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PAYMENT_METHOD)
            .to_string();

        Self {
            method,
            status: PaymentStatus::Approved,
            transaction_id: format!("TXN-{}", short_hex(10)),
        }
    }
}

/// A placed order, immutable once stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Order {
    pub order_id: String,
    /// Cart lines as they were at checkout
    pub items: Vec<CartLine>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// Echoed verbatim from the checkout call
    pub customer_info: Map<String, Value>,
    pub payment_info: PaymentRecord,
}

/// Response of a successful checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutReceipt {
    pub order: Order,
    pub success: bool,
    pub message: String,
}

/// Input for the checkout tool
#[derive(Debug, Deserialize)]
pub struct CheckoutInput {
    pub session_id: String,
    pub customer_info: Option<Map<String, Value>>,
    pub payment_info: Option<Map<String, Value>>,
}

/// Input for the get_order_status tool
#[derive(Debug, Deserialize)]
pub struct OrderLookupInput {
    pub order_id: String,
}

/// Order identifiers look like `ORD-1A2B3C4D`, unlike hyphenated session ids.
pub fn new_order_id() -> String {
    format!("ORD-{}", short_hex(8))
}

/// First `len` upper-case hex digits of a fresh UUID v4.
fn short_hex(len: usize) -> String {
    let mut hex = Uuid::new_v4().simple().to_string();
    hex.truncate(len);
    hex.to_uppercase()
}
