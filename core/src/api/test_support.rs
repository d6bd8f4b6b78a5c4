//! Configurable in-memory [`StorefrontApi`] stub for service tests.

use async_trait::async_trait;
use shared::{
    AuthResponse, CreateOrderRequest, CreatePaymentRequest, Establishment, LoginRequest, Product,
    RankingEntry, RegisterRequest, RemoteOrder, StorePoints, UserProfile,
};
use std::collections::HashMap;

use super::{ApiError, StorefrontApi};

/// Stub backend: serves canned data, or fails every call when `offline`
/// is set, to exercise the fallback paths.
#[derive(Default)]
pub struct StubApi {
    pub offline: bool,
    pub establishments: Vec<Establishment>,
    pub products: HashMap<String, Vec<Product>>,
    /// Points per establishment id, independent of client
    pub points: HashMap<String, u32>,
    pub ranking: Vec<RankingEntry>,
    pub remote_orders: Vec<RemoteOrder>,
}

impl StubApi {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline {
            Err(ApiError::Network("stub backend offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StorefrontApi for StubApi {
    async fn establishments(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Establishment>, ApiError> {
        self.check_online()?;
        let list = self
            .establishments
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .filter(|e| {
                search.map_or(true, |s| e.name.to_lowercase().contains(&s.to_lowercase()))
            })
            .cloned()
            .collect();
        Ok(list)
    }

    async fn establishment(&self, id: &str) -> Result<Establishment, ApiError> {
        self.check_online()?;
        self.establishments
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                body: "establishment not found".to_string(),
            })
    }

    async fn products(&self, establishment_id: &str) -> Result<Vec<Product>, ApiError> {
        self.check_online()?;
        Ok(self.products.get(establishment_id).cloned().unwrap_or_default())
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<RemoteOrder, ApiError> {
        self.check_online()?;
        let establishment = self.establishment(&request.establishment_id).await?;
        Ok(RemoteOrder {
            id: format!("remote-{}", request.establishment_id),
            client_id: "client-1".to_string(),
            establishment_id: request.establishment_id.clone(),
            status: "em_preparo".to_string(),
            total_amount: "0.00".to_string(),
            points_generated: 0,
            pickup_type: "retirada".to_string(),
            pickup_qr_code: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
            order_items: Vec::new(),
            establishment,
        })
    }

    async fn my_orders(&self) -> Result<Vec<RemoteOrder>, ApiError> {
        self.check_online()?;
        Ok(self.remote_orders.clone())
    }

    async fn create_payment(
        &self,
        order_id: &str,
        _request: &CreatePaymentRequest,
    ) -> Result<RemoteOrder, ApiError> {
        self.check_online()?;
        self.remote_orders
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                body: "order not found".to_string(),
            })
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.check_online()?;
        Ok(AuthResponse {
            access_token: "stub-token".to_string(),
            user: Some(UserProfile {
                id: "client-1".to_string(),
                email: request.email.clone(),
                name: None,
            }),
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.check_online()?;
        Ok(AuthResponse {
            access_token: "stub-token".to_string(),
            user: Some(UserProfile {
                id: "client-1".to_string(),
                email: request.email.clone(),
                name: Some(request.name.clone()),
            }),
        })
    }

    async fn points_from_orders(
        &self,
        _client_id: &str,
        establishment_id: &str,
    ) -> Result<StorePoints, ApiError> {
        self.check_online()?;
        Ok(StorePoints {
            points: self.points.get(establishment_id).copied().unwrap_or(0),
        })
    }

    async fn establishment_ranking(
        &self,
        _establishment_id: &str,
    ) -> Result<Vec<RankingEntry>, ApiError> {
        self.check_online()?;
        Ok(self.ranking.clone())
    }
}
