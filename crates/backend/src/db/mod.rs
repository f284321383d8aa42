//! Typed repositories over the backend tables.
//!
//! # Tables
//!
//! - `clients` - customer accounts
//! - `admins` - back-office accounts (seeded externally, read-only)
//! - `products` - the furniture catalog
//! - `orders` / `order_items` - placed orders and their immutable lines
//! - `notifications` - per-client order event feed
//!
//! Repositories are thin: one method per query the application actually
//! issues, no speculative CRUD surface.

mod admins;
mod clients;
mod notifications;
mod orders;
mod products;

pub use admins::AdminRepository;
pub use clients::ClientRepository;
pub use notifications::NotificationRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;

pub(crate) mod tables {
    pub const CLIENTS: &str = "clients";
    pub const ADMINS: &str = "admins";
    pub const PRODUCTS: &str = "products";
    pub const ORDERS: &str = "orders";
    pub const ORDER_ITEMS: &str = "order_items";
    pub const NOTIFICATIONS: &str = "notifications";
}
