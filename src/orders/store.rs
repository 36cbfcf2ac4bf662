//! Order Store
//!
//! Holds every order placed during the process lifetime. Orders are listed
//! in the order they were stored.

use super::models::{
    new_order_id, CheckoutInput, CheckoutReceipt, Order, OrderStatus, PaymentRecord,
    ORDER_PLACED_MESSAGE,
};
use crate::{
    cart::{
        helpers::{cart_total, format_line_summary},
        SessionStore,
    },
    error::ShopError,
};
use chrono::Utc;
use dashmap::{mapref::entry::Entry, DashMap};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
struct StoredOrder {
    seq: u64,
    order: Order,
}

#[derive(Debug, Default)]
pub struct OrderStore {
    orders: DashMap<String, StoredOrder>,
    next_seq: AtomicU64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Stores `order`, drawing a fresh id while its id is already taken.
    /// Returns the order as stored.
    fn insert(&self, mut order: Order) -> Order {
        loop {
            match self.orders.entry(order.order_id.clone()) {
                Entry::Occupied(_) => {
                    tracing::warn!(order_id = %order.order_id, "order id collision, regenerating");
                    order.order_id = new_order_id();
                }
                Entry::Vacant(slot) => {
                    let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                    slot.insert(StoredOrder {
                        seq,
                        order: order.clone(),
                    });
                    return order;
                }
            }
        }
    }

    /// Turns the session's cart into a confirmed order and empties the cart.
    ///
    /// Fails without creating an order when the session is unknown or its
    /// cart is empty.
    pub fn checkout(
        &self,
        sessions: &SessionStore,
        input: CheckoutInput,
    ) -> Result<CheckoutReceipt, ShopError> {
        let CheckoutInput {
            session_id,
            customer_info,
            payment_info,
        } = input;

        let order = sessions.drain_cart(&session_id, |items| {
            self.insert(Order {
                order_id: new_order_id(),
                total: cart_total(&items),
                items,
                status: OrderStatus::Confirmed,
                created_at: Utc::now(),
                customer_info: customer_info.unwrap_or_default(),
                payment_info: PaymentRecord::approve(payment_info.as_ref()),
            })
        })?;

        tracing::info!(
            order_id = %order.order_id,
            %session_id,
            total = order.total,
            items = %format_line_summary(&order.items),
            "order placed"
        );

        Ok(CheckoutReceipt {
            order,
            success: true,
            message: ORDER_PLACED_MESSAGE.to_string(),
        })
    }

    pub fn get(&self, order_id: &str) -> Result<Order, ShopError> {
        self.orders
            .get(order_id)
            .map(|stored| stored.order.clone())
            .ok_or_else(|| ShopError::OrderNotFound(order_id.to_string()))
    }

    /// All orders in insertion order.
    pub fn list(&self) -> Vec<Order> {
        let mut stored: Vec<(u64, Order)> = self
            .orders
            .iter()
            .map(|entry| (entry.seq, entry.order.clone()))
            .collect();
        stored.sort_by_key(|(seq, _)| *seq);
        stored.into_iter().map(|(_, order)| order).collect()
    }
}
