//! Domain services: the cart, order, points and session stores plus the
//! catalog access layer they share.

pub mod auth_service;
pub mod cart_service;
pub mod catalog_service;
pub mod commands;
pub mod models;
pub mod order_service;
pub mod points_service;
pub mod session_service;

pub use auth_service::AuthService;
pub use cart_service::CartService;
pub use catalog_service::{CatalogService, DataSource, Fetched};
pub use order_service::OrderService;
pub use points_service::PointsService;
pub use session_service::SessionService;
