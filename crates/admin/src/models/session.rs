//! Session-related types.

use serde::{Deserialize, Serialize};

use cabella_core::{AdminId, Email};

/// Session-stored admin identity.
///
/// Independent from the storefront client slot: the two services run
/// separate session stores and cookies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminId,
    /// Admin's email address.
    pub email: Email,
    /// Admin's display name.
    pub name: String,
}

/// Session keys for back-office data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
