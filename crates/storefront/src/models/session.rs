//! Session-related types.
//!
//! Types stored in the session for authentication and cart state.

use serde::{Deserialize, Serialize};

use cabella_core::{ClientId, Email};

/// Session-stored client identity.
///
/// Minimal data stored in the session to identify the logged-in client.
/// The name and email double as the customer fields of a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentClient {
    /// Client's database ID.
    pub id: ClientId,
    /// Client's email address.
    pub email: Email,
    /// Client's display name.
    pub name: String,
}

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the current logged-in client.
    pub const CURRENT_CLIENT: &str = "current_client";

    /// Key for storing the shopping cart.
    pub const CART: &str = "cart";
}
