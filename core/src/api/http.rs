use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AuthResponse, CreateOrderRequest, CreatePaymentRequest, Establishment, LoginRequest, Product,
    RankingEntry, RegisterRequest, RemoteOrder, StorePoints,
};
use std::sync::Arc;

use super::error::ApiError;
use super::StorefrontApi;
use crate::storage::SessionStorage;

/// reqwest-backed implementation of [`StorefrontApi`].
///
/// Attaches the persisted bearer token to every request when one exists;
/// unauthenticated requests are still sent, matching the backend's mix of
/// public and authenticated endpoints.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStorage>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStorage>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.get_auth_token() {
            Ok(Some(token)) => builder.bearer_auth(token),
            Ok(None) => builder,
            Err(e) => {
                warn!("Could not read auth token, sending unauthenticated request: {}", e);
                builder
            }
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.authorize(builder).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {}", path);
        self.execute(self.client.get(self.url(path))).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!("POST {}", path);
        self.execute(self.client.post(self.url(path)).json(body)).await
    }

    /// Probe the backend by listing establishments. Used by screens to
    /// decide between live and fallback data up front.
    pub async fn test_connection(&self) -> bool {
        match self.client.get(self.url("/establishments")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Connection test failed: {}", e);
                false
            }
        }
    }
}

#[async_trait]
impl StorefrontApi for HttpApi {
    async fn establishments(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Establishment>, ApiError> {
        let mut params = Vec::new();
        if let Some(category) = category {
            params.push(("category", category));
        }
        if let Some(search) = search {
            params.push(("search", search));
        }
        let builder = self.client.get(self.url("/establishments")).query(&params);
        self.execute(builder).await
    }

    async fn establishment(&self, id: &str) -> Result<Establishment, ApiError> {
        self.get_json(&format!("/establishments/{}", id)).await
    }

    async fn products(&self, establishment_id: &str) -> Result<Vec<Product>, ApiError> {
        self.get_json(&format!("/establishments/{}/products", establishment_id))
            .await
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<RemoteOrder, ApiError> {
        self.post_json("/orders", request).await
    }

    async fn my_orders(&self) -> Result<Vec<RemoteOrder>, ApiError> {
        self.get_json("/orders/me").await
    }

    async fn create_payment(
        &self,
        order_id: &str,
        request: &CreatePaymentRequest,
    ) -> Result<RemoteOrder, ApiError> {
        self.post_json(&format!("/orders/{}/payment", order_id), request)
            .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/register", request).await
    }

    async fn points_from_orders(
        &self,
        client_id: &str,
        establishment_id: &str,
    ) -> Result<StorePoints, ApiError> {
        self.get_json(&format!(
            "/clients/points-from-orders/{}/{}",
            client_id, establishment_id
        ))
        .await
    }

    async fn establishment_ranking(
        &self,
        establishment_id: &str,
    ) -> Result<Vec<RankingEntry>, ApiError> {
        self.get_json(&format!("/clients/establishment-ranking/{}", establishment_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use shared::UserProfile;

    struct EmptySession;

    impl SessionStorage for EmptySession {
        fn get_user(&self) -> Result<Option<UserProfile>> {
            Ok(None)
        }
        fn set_user(&self, _user: &UserProfile) -> Result<()> {
            Ok(())
        }
        fn get_auth_token(&self) -> Result<Option<String>> {
            Ok(None)
        }
        fn set_auth_token(&self, _token: &str) -> Result<()> {
            Ok(())
        }
        fn clear_session(&self) -> Result<()> {
            Ok(())
        }
        fn get_last_visited(&self) -> Result<Option<String>> {
            Ok(None)
        }
        fn set_last_visited(&self, _establishment_id: &str) -> Result<()> {
            Ok(())
        }
        fn get_visited(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
        fn set_visited(&self, _establishment_ids: &[String]) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let api = HttpApi::new("https://api.example.com/", Arc::new(EmptySession));
        assert_eq!(
            api.url("/establishments/diade"),
            "https://api.example.com/establishments/diade"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_network_error() {
        // Discard port on loopback, connection is refused immediately
        let api = HttpApi::new("http://127.0.0.1:9", Arc::new(EmptySession));
        let result = api.establishments(None, None).await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn test_connection_probe_reports_unreachable_backend() {
        let api = HttpApi::new("http://127.0.0.1:9", Arc::new(EmptySession));
        assert!(!api.test_connection().await);
    }
}
