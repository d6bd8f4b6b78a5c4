pub mod cart;
pub mod order;

pub use cart::CartItem;
pub use order::{Order, OrderStatus};
