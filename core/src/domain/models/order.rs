//! Domain model for a locally created order.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::cart::CartItem;

/// Fulfillment status of an order. Wire names match the remote API's
/// snake_case Portuguese values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "em_preparo")]
    InPreparation,
    #[serde(rename = "pronto")]
    Ready,
    #[serde(rename = "concluido")]
    Done,
}

/// An order created at checkout. Items are a snapshot of the cart at the
/// time of checkout; their prices may diverge from current product prices
/// and no referential integrity is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<CartItem>,
    /// Formatted total, e.g. "R$ 20,40"
    pub total: String,
    pub status: OrderStatus,
    pub payment_method: String,
    pub delivery_method: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Generate an order ID from a timestamp.
    /// Format: order-<epoch_millis>-<random_suffix>
    /// Example: order-1625846400123-af3c
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("order-{}-{}", timestamp_ms, Self::generate_random_suffix(4))
    }

    /// Generate a random hex suffix for order IDs.
    fn generate_random_suffix(len: usize) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("{:x}", now % (16_u128.pow(len as u32)))
            .chars()
            .take(len)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = Order::generate_id(1625846400123);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "order");
        assert_eq!(parts[1], "1625846400123");
        assert!(!parts[2].is_empty());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InPreparation).unwrap(),
            "\"em_preparo\""
        );
        assert_eq!(serde_json::to_string(&OrderStatus::Ready).unwrap(), "\"pronto\"");
        assert_eq!(serde_json::to_string(&OrderStatus::Done).unwrap(), "\"concluido\"");

        let status: OrderStatus = serde_json::from_str("\"pronto\"").unwrap();
        assert_eq!(status, OrderStatus::Ready);
    }
}
