//! # Key-Value Storage Module
//!
//! File-backed implementation of the session storage traits: one JSON
//! file per entry under a data directory. No transactions and no schema
//! versioning; this is single-user local state.

pub mod connection;
pub mod session_repository;

pub use connection::KvConnection;
pub use session_repository::SessionRepository;
