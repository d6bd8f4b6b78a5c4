use serde::{Deserialize, Serialize};

/// Currency prefix used on every formatted monetary price string.
pub const CURRENCY_PREFIX: &str = "R$ ";

/// A merchant/store entity as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Establishment {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub address: String,
    pub logo_url: Option<String>,
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

/// A product belonging to an establishment's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub establishment_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Decimal amount as a string with a dot separator, e.g. "7.95"
    pub price: String,
    /// Price of the product when redeemed with loyalty points
    pub points_price: u32,
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// An order as returned by the remote API (distinct from the locally
/// created order held in the order store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteOrder {
    pub id: String,
    pub client_id: String,
    pub establishment_id: String,
    pub status: String,
    /// Decimal amount as a string with a dot separator
    pub total_amount: String,
    pub points_generated: u32,
    pub pickup_type: String,
    pub pickup_qr_code: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub order_items: Vec<RemoteOrderItem>,
    pub establishment: Establishment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteOrderItem {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
    /// Decimal amount as a string with a dot separator
    pub unit_price: String,
    pub product: Product,
}

/// Request body for creating an order on the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub establishment_id: String,
    pub items: Vec<OrderItemInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub product_id: String,
    pub quantity: u32,
}

/// Request body for registering a payment against a remote order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// Decimal amount as a string with a dot separator
    pub amount: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub password: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date_of_birth: String,
}

/// Response from the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// The locally persisted user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Points balance for one client at one establishment, derived from orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePoints {
    pub points: u32,
}

/// One row of the per-user establishment ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsEntry {
    pub establishment_id: String,
    pub establishment_name: String,
    pub points: u32,
}

/// One row of an establishment's client leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub points: u32,
}

/// Parse a formatted price string into a monetary amount.
///
/// Accepts the display format produced by [`format_price`]: a `R$ ` prefix
/// and a decimal comma, e.g. `"R$ 7,95"`. Returns `None` for malformed
/// strings and for loyalty-points price tags (`"795 pts"`), so points-priced
/// cart lines never leak into a monetary sum.
pub fn parse_price(price: &str) -> Option<f64> {
    let trimmed = price.trim();
    if trimmed.contains("pts") || trimmed.contains("pontos") {
        return None;
    }
    let normalized = trimmed
        .trim_start_matches(CURRENCY_PREFIX)
        .trim()
        .replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a monetary amount for display: two decimals, comma separator,
/// `R$ ` prefix. Non-finite amounts format as `R$ 0,00`.
pub fn format_price(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("{}{}", CURRENCY_PREFIX, format!("{:.2}", amount).replace('.', ","))
}

impl Product {
    /// Monetary display price, e.g. `"R$ 7,95"`.
    ///
    /// The wire format uses a dot separator; unparseable prices display
    /// as zero rather than failing the whole catalog render.
    pub fn display_price(&self) -> String {
        format_price(self.price.parse::<f64>().unwrap_or(0.0))
    }

    /// Loyalty-points display price, e.g. `"795 pts"`.
    pub fn display_points_price(&self) -> String {
        format!("{} pts", self.points_price)
    }
}
