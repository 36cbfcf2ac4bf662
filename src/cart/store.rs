//! Session Store
//!
//! Maps session identifiers to their carts. Each operation runs under the
//! DashMap entry guard for its session, so the read-modify-write of a cart
//! is never interleaved with another call on the same session.

use super::{
    helpers::{add_line, cart_total, new_session_id},
    models::{CartLine, CartView, NewCart, Session},
};
use crate::{error::ShopError, menu::Catalog};
use chrono::{Duration, Utc};
use dashmap::DashMap;

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Opens a new session with an empty cart.
    pub fn create(&self) -> NewCart {
        let session_id = new_session_id();
        self.sessions
            .insert(session_id.clone(), Session::new(Utc::now()));
        tracing::debug!(%session_id, "session created");

        NewCart {
            session_id,
            cart: Vec::new(),
        }
    }

    /// Adds `quantity` of catalog item `item_id` to the session's cart.
    ///
    /// The session is validated before the item.
    pub fn add_item(
        &self,
        catalog: &Catalog,
        session_id: &str,
        item_id: &str,
        quantity: i64,
    ) -> Result<CartView, ShopError> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or(ShopError::InvalidSession)?;
        let item = catalog
            .get_by_id(item_id)
            .ok_or_else(|| ShopError::ItemNotFound(item_id.to_string()))?;

        add_line(&mut session.cart, item, quantity);
        session.touch();
        Ok(view(&session.cart))
    }

    /// Drops every line for `item_id`. Removing an absent item is a no-op.
    pub fn remove_item(&self, session_id: &str, item_id: &str) -> Result<CartView, ShopError> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or(ShopError::InvalidSession)?;

        session.cart.retain(|l| l.item_id != item_id);
        session.touch();
        Ok(view(&session.cart))
    }

    /// Current cart and total; does not count as activity.
    pub fn cart(&self, session_id: &str) -> Result<CartView, ShopError> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or(ShopError::InvalidSession)?;
        Ok(view(&session.cart))
    }

    /// Empties a non-empty cart and hands its lines to `finalize` while the
    /// session is still locked, returning whatever `finalize` produces.
    pub fn drain_cart<T>(
        &self,
        session_id: &str,
        finalize: impl FnOnce(Vec<CartLine>) -> T,
    ) -> Result<T, ShopError> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or(ShopError::InvalidSession)?;
        if session.cart.is_empty() {
            return Err(ShopError::EmptyCart);
        }

        let lines = std::mem::take(&mut session.cart);
        session.touch();
        Ok(finalize(lines))
    }

    /// Removes sessions idle for longer than `max_idle`, returning how many
    /// were dropped. A `max_idle` reaching past the earliest representable
    /// time evicts nothing.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let Some(cutoff) = Utc::now().checked_sub_signed(max_idle) else {
            return 0;
        };
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.last_active >= cutoff);
        before.saturating_sub(self.sessions.len())
    }
}

fn view(lines: &[CartLine]) -> CartView {
    CartView {
        cart: lines.to_vec(),
        total: cart_total(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;

    fn catalog() -> Catalog {
        let item = |id: &str, name: &str, price: f64| MenuItem {
            id: id.into(),
            name: name.into(),
            category: "Mains".into(),
            price,
            description: String::new(),
            is_vegetarian: true,
            is_vegan: true,
            is_gluten_free: true,
            allergens: Vec::new(),
        };
        Catalog::new(vec![item("i1", "Salad", 8.0), item("i2", "Soup", 4.25)])
    }

    #[test]
    fn unknown_session_is_rejected_everywhere() {
        let store = SessionStore::new();
        let catalog = catalog();

        assert_eq!(
            store.add_item(&catalog, "nope", "i1", 1),
            Err(ShopError::InvalidSession)
        );
        assert_eq!(store.remove_item("nope", "i1"), Err(ShopError::InvalidSession));
        assert_eq!(store.cart("nope"), Err(ShopError::InvalidSession));
        assert_eq!(
            store.drain_cart("nope", |lines| lines.len()),
            Err(ShopError::InvalidSession)
        );
    }

    #[test]
    fn session_checked_before_item() {
        let store = SessionStore::new();
        assert_eq!(
            store.add_item(&catalog(), "nope", "missing", 1),
            Err(ShopError::InvalidSession)
        );
    }

    #[test]
    fn add_unknown_item_leaves_cart_untouched() {
        let store = SessionStore::new();
        let catalog = catalog();
        let id = store.create().session_id;

        assert_eq!(
            store.add_item(&catalog, &id, "missing", 1),
            Err(ShopError::ItemNotFound("missing".into()))
        );
        assert!(store.cart(&id).unwrap().cart.is_empty());
    }

    #[test]
    fn total_tracks_every_mutation() {
        let store = SessionStore::new();
        let catalog = catalog();
        let id = store.create().session_id;

        let view = store.add_item(&catalog, &id, "i1", 2).unwrap();
        assert_eq!(view.total, 16.0);

        let view = store.add_item(&catalog, &id, "i2", 4).unwrap();
        assert_eq!(view.total, 33.0);

        let view = store.add_item(&catalog, &id, "i1", 1).unwrap();
        assert_eq!(view.cart.len(), 2);
        assert_eq!(view.cart[0].quantity, 3);
        assert_eq!(view.total, 41.0);

        let view = store.remove_item(&id, "i1").unwrap();
        assert_eq!(view.cart.len(), 1);
        assert_eq!(view.total, 17.0);
    }

    #[test]
    fn remove_absent_item_is_noop() {
        let store = SessionStore::new();
        let catalog = catalog();
        let id = store.create().session_id;
        let before = store.add_item(&catalog, &id, "i1", 1).unwrap();

        let after = store.remove_item(&id, "i2").unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn non_positive_quantities_are_accepted() {
        let store = SessionStore::new();
        let catalog = catalog();
        let id = store.create().session_id;

        let view = store.add_item(&catalog, &id, "i1", -2).unwrap();
        assert_eq!(view.cart[0].quantity, -2);
        assert_eq!(view.total, -16.0);
    }

    #[test]
    fn repeated_huge_quantities_saturate() {
        let store = SessionStore::new();
        let catalog = catalog();
        let id = store.create().session_id;

        store.add_item(&catalog, &id, "i1", i64::MAX).unwrap();
        let view = store.add_item(&catalog, &id, "i1", 1).unwrap();
        assert_eq!(view.cart.len(), 1);
        assert_eq!(view.cart[0].quantity, i64::MAX);
        assert!(view.total > 0.0);

        store.add_item(&catalog, &id, "i2", i64::MIN).unwrap();
        let view = store.add_item(&catalog, &id, "i2", -1).unwrap();
        assert_eq!(view.cart[1].quantity, i64::MIN);
    }

    #[test]
    fn last_active_moves_on_mutations_only() {
        let store = SessionStore::new();
        let catalog = catalog();
        let id = store.create().session_id;
        let long_ago = Utc::now() - Duration::hours(1);

        let backdate = || {
            if let Some(mut s) = store.sessions.get_mut(&id) {
                s.last_active = long_ago;
            }
        };
        let last_active = || store.sessions.get(&id).map(|s| s.last_active).unwrap();

        backdate();
        store.cart(&id).unwrap();
        assert_eq!(last_active(), long_ago);

        store.add_item(&catalog, &id, "i1", 1).unwrap();
        assert!(last_active() > long_ago);

        backdate();
        store.remove_item(&id, "i2").unwrap();
        assert!(last_active() > long_ago);

        backdate();
        store.remove_item(&id, "i1").unwrap();
        assert!(last_active() > long_ago);

        store.add_item(&catalog, &id, "i1", 1).unwrap();
        backdate();
        store.drain_cart(&id, |lines| lines.len()).unwrap();
        assert!(last_active() > long_ago);

        backdate();
        assert_eq!(store.drain_cart(&id, |lines| lines.len()), Err(ShopError::EmptyCart));
        assert_eq!(last_active(), long_ago);
    }

    #[test]
    fn evict_idle_with_unbounded_ttl_evicts_nothing() {
        let store = SessionStore::new();
        store.create();
        assert_eq!(store.evict_idle(Duration::milliseconds(i64::MAX)), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn drain_requires_lines_and_clears_cart() {
        let store = SessionStore::new();
        let catalog = catalog();
        let id = store.create().session_id;

        assert_eq!(
            store.drain_cart(&id, |lines| lines.len()),
            Err(ShopError::EmptyCart)
        );

        store.add_item(&catalog, &id, "i1", 2).unwrap();
        let drained = store.drain_cart(&id, |lines| lines).unwrap();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].quantity, 2);

        let view = store.cart(&id).unwrap();
        assert!(view.cart.is_empty());
        assert_eq!(view.total, 0.0);
    }

    #[test]
    fn evict_idle_drops_only_stale_sessions() {
        let store = SessionStore::new();
        let stale = store.create().session_id;
        let fresh = store.create().session_id;

        if let Some(mut s) = store.sessions.get_mut(&stale) {
            s.last_active = Utc::now() - Duration::hours(2);
        }

        assert_eq!(store.evict_idle(Duration::hours(1)), 1);
        assert!(store.cart(&fresh).is_ok());
        assert_eq!(store.cart(&stale), Err(ShopError::InvalidSession));
    }
}
