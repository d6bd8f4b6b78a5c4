//! Command and result types for the cross-service operations on [`crate::AppCore`].

use crate::domain::models::Order;

/// Input to the checkout flow: the fulfillment choices made on the
/// checkout screen. Both methods are required; the wire values are free
/// strings (e.g. "dinheiro", "cartao", "pix" / "retirada").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutCommand {
    pub payment_method: String,
    pub delivery_method: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutResult {
    pub order: Order,
}
