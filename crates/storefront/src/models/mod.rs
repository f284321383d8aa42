//! Storefront domain models.

pub mod cart;
pub mod session;

pub use cart::{Cart, CartLine};
pub use session::{CurrentClient, keys as session_keys};
