//! Domain types for shops, items and edit sessions.

pub mod item;
pub mod price;
pub mod session;
pub mod shop;

pub use item::{AIR, ItemError, ItemStack, ShopItem};
pub use price::Price;
pub use session::ShopEditSession;
pub use shop::Shop;
