//! HTTP middleware for the storefront.

pub mod auth;
pub mod session;

pub use auth::{RequireClient, clear_current_client, set_current_client};
pub use session::create_session_layer;
