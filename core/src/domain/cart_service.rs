//! Cart store for the storefront app.
//!
//! Holds the in-memory list of cart lines and computes the monetary
//! total from their formatted price strings. Prices tagged in loyalty
//! points never count toward the monetary total, and malformed price
//! strings contribute zero rather than failing the sum.

use log::{debug, info};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::models::CartItem;

/// Service owning the cart state. Single cart per app session; the cart
/// is never persisted across restarts.
#[derive(Default)]
pub struct CartService {
    items: Mutex<Vec<CartItem>>,
}

impl CartService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CartItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add one unit of a product to the cart. A line with the same id has
    /// its quantity incremented; otherwise a new line starts at quantity 1.
    pub fn add_item(&self, id: &str, name: &str, price: &str) {
        let mut items = self.lock();
        if let Some(existing) = items.iter_mut().find(|item| item.id == id) {
            existing.quantity += 1;
            debug!("Incremented '{}' to quantity {}", id, existing.quantity);
        } else {
            items.push(CartItem::new(id, name, price));
            debug!("Added '{}' to cart", id);
        }
    }

    /// Remove the entire line for a product, regardless of its quantity.
    /// Returns false when the id was not in the cart.
    pub fn remove_item(&self, id: &str) -> bool {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|item| item.id != id);
        before != items.len()
    }

    /// Empty the cart.
    pub fn clear(&self) {
        let mut items = self.lock();
        if !items.is_empty() {
            info!("Clearing cart with {} lines", items.len());
        }
        items.clear();
    }

    /// Snapshot of the current cart lines.
    pub fn items(&self) -> Vec<CartItem> {
        self.lock().clone()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lock().iter().map(|item| item.quantity).sum()
    }

    /// Quantity of one product in the cart, 0 when absent.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.lock()
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Formatted monetary total over all lines. Lines whose price cannot
    /// be parsed as currency (including points-priced lines) contribute
    /// zero. An empty cart totals "R$ 0,00".
    pub fn total_price(&self) -> String {
        // Fold from an explicit 0.0: `Iterator::sum` over an empty f64
        // iterator yields -0.0 on current toolchains, which would format
        // as "R$ -0,00" for an empty cart.
        let total: f64 = self
            .lock()
            .iter()
            .filter_map(CartItem::line_total)
            .fold(0.0, |acc, line| acc + line);
        shared::format_price(total)
    }
}
