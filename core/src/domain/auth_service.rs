//! Login and registration against the remote backend.
//!
//! Auth has no fallback dataset: failures propagate to the caller so the
//! screen can show them. A successful response persists the token and
//! profile through the session service.

use anyhow::{Context, Result};
use log::{info, warn};
use shared::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use std::sync::Arc;

use crate::api::StorefrontApi;
use crate::domain::session_service::SessionService;

#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn StorefrontApi>,
    session: SessionService,
}

impl AuthService {
    pub fn new(api: Arc<dyn StorefrontApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    /// Authenticate and persist the resulting session.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&request).await.context("Login failed")?;
        self.persist(response, email)
    }

    /// Create an account and persist the resulting session.
    pub async fn register(&self, request: RegisterRequest) -> Result<UserProfile> {
        let email = request.email.clone();
        let response = self
            .api
            .register(&request)
            .await
            .context("Registration failed")?;
        self.persist(response, &email)
    }

    /// Drop the persisted session.
    pub fn logout(&self) -> Result<()> {
        self.session.clear_session()
    }

    fn persist(&self, response: AuthResponse, email: &str) -> Result<UserProfile> {
        // Older backend builds omit the user record; fall back to an
        // email-keyed profile so the rest of the app still has an id.
        let profile = response.user.unwrap_or_else(|| {
            warn!("Auth response carried no user record, deriving profile from email");
            UserProfile {
                id: email.to_string(),
                email: email.to_string(),
                name: None,
            }
        });
        self.session.set_session(&profile, &response.access_token)?;
        info!("Authenticated as {}", profile.id);
        Ok(profile)
    }
}
