//! Domain model for a cart line.
use serde::{Deserialize, Serialize};

/// One line of the cart: a product reference with its display price and
/// an aggregated quantity. Invariant: the cart holds at most one line per
/// product id and every line has quantity >= 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Formatted display price as shown on the store screen, e.g.
    /// "R$ 7,95" for monetary prices or "795 pts" for points prices.
    pub price: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            quantity: 1,
        }
    }

    /// Monetary contribution of this line, `None` for points-priced or
    /// unparseable lines.
    pub fn line_total(&self) -> Option<f64> {
        shared::parse_price(&self.price).map(|unit| unit * f64::from(self.quantity))
    }
}
