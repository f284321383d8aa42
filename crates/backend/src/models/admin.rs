//! Rows of the `admins` table.
//!
//! Admin accounts are seeded directly in the backend; the application
//! never creates, updates or deletes them.

use serde::Deserialize;

use cabella_core::{AdminId, Email};

/// A back-office administrator.
#[derive(Debug, Clone, Deserialize)]
pub struct Admin {
    pub id: AdminId,
    pub email: Email,
    /// Argon2id hash stored under the `password` column.
    #[serde(rename = "password")]
    pub password_hash: String,
    pub name: String,
}
