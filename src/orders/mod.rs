//! Order Domain Module
//!
//! Orders are immutable snapshots of a cart, produced by checkout.

pub mod models;
pub mod store;

pub use models::{CheckoutReceipt, Order, OrderStatus, PaymentRecord, PaymentStatus};
pub use store::OrderStore;
