//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to guest sessions and
//! their carts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for add_to_cart
fn default_quantity() -> i64 {
    1
}

/// One line of a cart. Name and price are captured when the line is created
/// and never re-read from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

/// Server-side state for one guest.
#[derive(Debug, Clone)]
pub struct Session {
    /// Lines in the order they were first added
    pub cart: Vec<CartLine>,
    pub created_at: DateTime<Utc>,
    /// Bumped by every mutating operation
    pub last_active: DateTime<Utc>,
}

impl Session {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            cart: Vec::new(),
            created_at: now,
            last_active: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }
}

/// Cart contents together with their computed total.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartView {
    pub cart: Vec<CartLine>,
    pub total: f64,
}

/// Response of `create_cart`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCart {
    pub session_id: String,
    pub cart: Vec<CartLine>,
}

// =============================================================================
// Tool Inputs
// =============================================================================

/// Input for the add_to_cart tool
#[derive(Debug, Deserialize)]
pub struct AddToCartInput {
    pub session_id: String,
    pub item_id: String,

    /// Quantity to add (defaults to 1); not checked for positivity
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// Input for the remove_from_cart tool
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartInput {
    pub session_id: String,
    pub item_id: String,
}

/// Input for the get_cart tool
#[derive(Debug, Deserialize)]
pub struct SessionInput {
    pub session_id: String,
}
