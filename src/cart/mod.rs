//! Shopping Cart Domain Module
//!
//! This module contains all session and cart business logic, including:
//! - Domain models (CartLine, Session, tool inputs)
//! - Business logic helpers (line accumulation, totals, formatting)
//! - The session store

pub mod helpers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use models::{CartLine, CartView, NewCart, Session};
pub use store::SessionStore;
