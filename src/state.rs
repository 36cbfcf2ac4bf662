//! Application State
//!
//! Bundles the read-only catalog with the session and order stores. One
//! instance is created at startup and shared by every request.

use crate::{cart::SessionStore, menu::Catalog, orders::OrderStore};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub sessions: SessionStore,
    pub orders: OrderStore,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            sessions: SessionStore::new(),
            orders: OrderStore::new(),
        }
    }

    pub fn shared(catalog: Catalog) -> SharedState {
        Arc::new(Self::new(catalog))
    }
}
