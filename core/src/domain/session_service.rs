//! Session state: current user, auth token, and establishment visit history.

use anyhow::Result;
use log::{info, warn};
use shared::UserProfile;
use std::sync::Arc;

use crate::storage::SessionStorage;

/// Recently-visited establishments kept, most recent first.
const MAX_VISITED: usize = 10;

#[derive(Clone)]
pub struct SessionService {
    storage: Arc<dyn SessionStorage>,
}

impl SessionService {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// The persisted user profile, if a session exists. Storage failures
    /// read as "no session" (logged), matching how the app treats an
    /// absent login everywhere.
    pub fn current_user(&self) -> Option<UserProfile> {
        match self.storage.get_user() {
            Ok(user) => user,
            Err(e) => {
                warn!("Could not read user profile: {}", e);
                None
            }
        }
    }

    pub fn current_user_id(&self) -> Option<String> {
        self.current_user().map(|user| user.id)
    }

    /// The persisted bearer token, if any.
    pub fn auth_token(&self) -> Option<String> {
        match self.storage.get_auth_token() {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read auth token: {}", e);
                None
            }
        }
    }

    /// Persist a freshly authenticated session.
    pub fn set_session(&self, user: &UserProfile, token: &str) -> Result<()> {
        info!("Persisting session for user {}", user.id);
        self.storage.set_user(user)?;
        self.storage.set_auth_token(token)
    }

    /// Drop the persisted user and token. Visit history survives logout.
    pub fn clear_session(&self) -> Result<()> {
        info!("Clearing session");
        self.storage.clear_session()
    }

    /// Record a store visit: persists the last visited establishment and
    /// moves its id to the front of the visited list, deduplicated and
    /// capped at the ten most recent.
    pub fn set_last_visited(&self, establishment_id: &str) -> Result<()> {
        self.storage.set_last_visited(establishment_id)?;

        let mut visited = self.storage.get_visited()?;
        visited.retain(|id| id != establishment_id);
        visited.insert(0, establishment_id.to_string());
        visited.truncate(MAX_VISITED);
        self.storage.set_visited(&visited)
    }

    pub fn last_visited(&self) -> Option<String> {
        match self.storage.get_last_visited() {
            Ok(last) => last,
            Err(e) => {
                warn!("Could not read last visited establishment: {}", e);
                None
            }
        }
    }

    /// The recently-visited establishment ids, most recent first.
    pub fn visited_establishments(&self) -> Vec<String> {
        match self.storage.get_visited() {
            Ok(visited) => visited,
            Err(e) => {
                warn!("Could not read visited establishments: {}", e);
                Vec::new()
            }
        }
    }
}
