//! Order store for locally created orders.
//!
//! Orders are appended at checkout and only ever mutated through status
//! updates; nothing deletes an order in-session. There is no workflow
//! engine behind the status, callers set it directly.

use chrono::Utc;
use log::{info, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::models::{CartItem, Order, OrderStatus};

#[derive(Default)]
pub struct OrderService {
    orders: Mutex<Vec<Order>>,
}

impl OrderService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Order>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create an order from a cart snapshot and prepend it to the list.
    /// New orders always start in preparation.
    pub fn add_order(
        &self,
        items: Vec<CartItem>,
        total: String,
        payment_method: String,
        delivery_method: String,
    ) -> Order {
        let created_at = Utc::now();
        let order = Order {
            id: Order::generate_id(created_at.timestamp_millis() as u64),
            items,
            total,
            status: OrderStatus::InPreparation,
            payment_method,
            delivery_method,
            created_at,
        };
        info!("Created order {} with total {}", order.id, order.total);
        self.lock().insert(0, order.clone());
        order
    }

    /// Update the status of an order in place. Returns false (and logs)
    /// when the id is unknown.
    pub fn update_status(&self, order_id: &str, status: OrderStatus) -> bool {
        let mut orders = self.lock();
        match orders.iter_mut().find(|order| order.id == order_id) {
            Some(order) => {
                order.status = status;
                info!("Order {} is now {:?}", order_id, status);
                true
            }
            None => {
                warn!("Status update for unknown order: {}", order_id);
                false
            }
        }
    }

    /// Snapshot of the orders, newest first.
    pub fn orders(&self) -> Vec<Order> {
        self.lock().clone()
    }
}
