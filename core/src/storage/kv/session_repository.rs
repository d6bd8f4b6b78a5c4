use anyhow::Result;
use log::debug;
use shared::UserProfile;
use std::sync::Arc;

use super::connection::KvConnection;
use crate::storage::traits::SessionStorage;

// Entry names are part of the on-disk format, keep them stable.
const KEY_USER: &str = "usuario";
const KEY_AUTH_TOKEN: &str = "auth_token";
const KEY_LAST_VISITED: &str = "last_visited_establishment";
const KEY_VISITED: &str = "visited_establishments";

/// Key-value backed session repository
#[derive(Clone)]
pub struct SessionRepository {
    connection: Arc<KvConnection>,
}

impl SessionRepository {
    pub fn new(connection: Arc<KvConnection>) -> Self {
        Self { connection }
    }
}

impl SessionStorage for SessionRepository {
    fn get_user(&self) -> Result<Option<UserProfile>> {
        self.connection.read_value(KEY_USER)
    }

    fn set_user(&self, user: &UserProfile) -> Result<()> {
        debug!("Persisting user profile: {}", user.id);
        self.connection.write_value(KEY_USER, user)
    }

    fn get_auth_token(&self) -> Result<Option<String>> {
        self.connection.read_value(KEY_AUTH_TOKEN)
    }

    fn set_auth_token(&self, token: &str) -> Result<()> {
        self.connection.write_value(KEY_AUTH_TOKEN, &token.to_string())
    }

    fn clear_session(&self) -> Result<()> {
        debug!("Clearing persisted session");
        self.connection.delete_value(KEY_USER)?;
        self.connection.delete_value(KEY_AUTH_TOKEN)
    }

    fn get_last_visited(&self) -> Result<Option<String>> {
        self.connection.read_value(KEY_LAST_VISITED)
    }

    fn set_last_visited(&self, establishment_id: &str) -> Result<()> {
        self.connection
            .write_value(KEY_LAST_VISITED, &establishment_id.to_string())
    }

    fn get_visited(&self) -> Result<Vec<String>> {
        Ok(self.connection.read_value(KEY_VISITED)?.unwrap_or_default())
    }

    fn set_visited(&self, establishment_ids: &[String]) -> Result<()> {
        self.connection.write_value(KEY_VISITED, &establishment_ids.to_vec())
    }
}
