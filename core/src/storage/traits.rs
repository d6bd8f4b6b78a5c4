//! # Storage Traits
//!
//! Storage abstraction for the locally persisted session state, so the
//! domain layer can work against different backends (key-value files in
//! production, in-memory fakes in tests) without modification.

use anyhow::Result;
use shared::UserProfile;

/// Interface for the small set of persisted session entries: the current
/// user profile, the auth token, the last visited establishment and the
/// recently-visited establishment id list.
///
/// There is no schema versioning; each entry is read and written directly.
pub trait SessionStorage: Send + Sync {
    /// Retrieve the persisted user profile, if a session exists
    fn get_user(&self) -> Result<Option<UserProfile>>;

    /// Persist the current user profile
    fn set_user(&self, user: &UserProfile) -> Result<()>;

    /// Retrieve the persisted auth token, if any
    fn get_auth_token(&self) -> Result<Option<String>>;

    /// Persist the auth token used for bearer authentication
    fn set_auth_token(&self, token: &str) -> Result<()>;

    /// Remove the user profile and auth token (logout)
    fn clear_session(&self) -> Result<()>;

    /// Retrieve the last visited establishment id
    fn get_last_visited(&self) -> Result<Option<String>>;

    /// Persist the last visited establishment id
    fn set_last_visited(&self, establishment_id: &str) -> Result<()>;

    /// Retrieve the recently-visited establishment id list, most recent first
    fn get_visited(&self) -> Result<Vec<String>>;

    /// Persist the recently-visited establishment id list
    fn set_visited(&self, establishment_ids: &[String]) -> Result<()>;
}
