//! # Pontuei Core
//!
//! Client-side core of the Pontuei storefront/loyalty app: the remote
//! data gateway (with hardcoded fallback data), the cart and order
//! stores, points/ranking derivation, and the locally persisted session
//! state. Screens and navigation live in the frontends; everything they
//! share lives here.
//!
//! [`AppCore`] wires the services together; the [`api::StorefrontApi`]
//! trait is the seam where tests (or an offline demo) inject a different
//! backend.

pub mod api;
pub mod config;
pub mod domain;
pub mod storage;

pub use config::Config;

use anyhow::{bail, Context, Result};
use std::sync::Arc;

use api::{HttpApi, StorefrontApi};
use domain::commands::{CheckoutCommand, CheckoutResult};
use domain::{
    AuthService, CartService, CatalogService, OrderService, PointsService, SessionService,
};
use shared::{CreateOrderRequest, CreatePaymentRequest, OrderItemInput, RemoteOrder};
use storage::{KvConnection, SessionRepository};

/// Main application core that orchestrates all services.
pub struct AppCore {
    api: Arc<dyn StorefrontApi>,
    pub session_service: SessionService,
    pub cart_service: CartService,
    pub order_service: OrderService,
    pub catalog_service: CatalogService,
    pub points_service: PointsService,
    pub auth_service: AuthService,
}

impl AppCore {
    /// Create a core instance backed by the HTTP gateway.
    pub fn new(config: &Config) -> Result<Self> {
        let storage = Self::open_storage(config)?;
        let api: Arc<dyn StorefrontApi> =
            Arc::new(HttpApi::new(config.api_base_url.clone(), storage.clone()));
        Ok(Self::assemble(api, storage))
    }

    /// Create a core instance with an injected gateway implementation.
    pub fn with_api(config: &Config, api: Arc<dyn StorefrontApi>) -> Result<Self> {
        let storage = Self::open_storage(config)?;
        Ok(Self::assemble(api, storage))
    }

    fn open_storage(config: &Config) -> Result<Arc<SessionRepository>> {
        let connection = Arc::new(KvConnection::new(&config.data_dir)?);
        Ok(Arc::new(SessionRepository::new(connection)))
    }

    fn assemble(api: Arc<dyn StorefrontApi>, storage: Arc<SessionRepository>) -> Self {
        let session_service = SessionService::new(storage);
        let catalog_service = CatalogService::new(api.clone());
        let points_service = PointsService::new(
            api.clone(),
            catalog_service.clone(),
            session_service.clone(),
        );
        let auth_service = AuthService::new(api.clone(), session_service.clone());

        Self {
            api,
            session_service,
            cart_service: CartService::new(),
            order_service: OrderService::new(),
            catalog_service,
            points_service,
            auth_service,
        }
    }

    /// Finalize the cart into a local order.
    ///
    /// Requires a payment and a delivery method and a non-empty cart; the
    /// order snapshots the cart lines and the computed total, then the
    /// cart is emptied.
    pub fn checkout(&self, command: CheckoutCommand) -> Result<CheckoutResult> {
        if command.payment_method.trim().is_empty() || command.delivery_method.trim().is_empty() {
            bail!("Payment and delivery method are required");
        }
        let items = self.cart_service.items();
        if items.is_empty() {
            bail!("Cannot check out an empty cart");
        }

        let total = self.cart_service.total_price();
        let order = self.order_service.add_order(
            items,
            total,
            command.payment_method,
            command.delivery_method,
        );
        self.cart_service.clear();
        Ok(CheckoutResult { order })
    }

    /// Submit the cart as an order on the remote backend and register its
    /// payment. Unlike [`checkout`](Self::checkout) this has no fallback:
    /// failures propagate and the cart is kept so the user can retry.
    pub async fn submit_remote_order(
        &self,
        establishment_id: &str,
        payment_method: &str,
    ) -> Result<RemoteOrder> {
        let items = self.cart_service.items();
        if items.is_empty() {
            bail!("Cannot submit an empty cart");
        }

        let request = CreateOrderRequest {
            establishment_id: establishment_id.to_string(),
            items: items
                .iter()
                .map(|item| OrderItemInput {
                    product_id: item.id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        };
        let order = self
            .api
            .create_order(&request)
            .await
            .context("Order submission failed")?;

        let payment = CreatePaymentRequest {
            amount: order.total_amount.clone(),
            method: payment_method.to_string(),
        };
        let order = self
            .api
            .create_payment(&order.id, &payment)
            .await
            .context("Payment registration failed")?;

        self.cart_service.clear();
        Ok(order)
    }
}
