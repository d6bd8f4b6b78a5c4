//! # Remote Data Gateway
//!
//! Thin client for the storefront REST backend plus the hardcoded
//! fallback dataset. The [`StorefrontApi`] trait is the injection seam:
//! domain services depend on it, not on the HTTP implementation, so
//! tests substitute stubs and the fallback path stays observable.

pub mod error;
pub mod fallback;
pub mod http;
#[cfg(test)]
pub mod test_support;

pub use error::ApiError;
pub use http::HttpApi;

use async_trait::async_trait;
use shared::{
    AuthResponse, CreateOrderRequest, CreatePaymentRequest, Establishment, LoginRequest, Product,
    RankingEntry, RegisterRequest, RemoteOrder, StorePoints,
};

/// Interface to the remote storefront backend.
///
/// One method per REST endpoint the app consumes. Every call is a single
/// request/response attempt; retry and fallback policy belong to the
/// callers.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// List establishments, optionally filtered by category and search term
    async fn establishments(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Establishment>, ApiError>;

    /// Fetch a single establishment by id
    async fn establishment(&self, id: &str) -> Result<Establishment, ApiError>;

    /// List the products of an establishment
    async fn products(&self, establishment_id: &str) -> Result<Vec<Product>, ApiError>;

    /// Create an order on the backend
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<RemoteOrder, ApiError>;

    /// List the current user's orders
    async fn my_orders(&self) -> Result<Vec<RemoteOrder>, ApiError>;

    /// Register a payment for an existing remote order
    async fn create_payment(
        &self,
        order_id: &str,
        request: &CreatePaymentRequest,
    ) -> Result<RemoteOrder, ApiError>;

    /// Authenticate with email and password
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Create a new account
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// Points a client has earned from orders at one establishment
    async fn points_from_orders(
        &self,
        client_id: &str,
        establishment_id: &str,
    ) -> Result<StorePoints, ApiError>;

    /// Client leaderboard for an establishment
    async fn establishment_ranking(
        &self,
        establishment_id: &str,
    ) -> Result<Vec<RankingEntry>, ApiError>;
}
