pub mod kv;
pub mod traits;

pub use kv::{KvConnection, SessionRepository};
pub use traits::SessionStorage;
