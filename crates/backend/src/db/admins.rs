//! Admin account repository.

use cabella_core::Email;

use super::tables;
use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::Admin;
use crate::query::Select;

/// Repository for the `admins` table. Lookup only; accounts are seeded
/// directly in the backend.
pub struct AdminRepository<'a> {
    backend: &'a BackendClient,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// Get an admin by email address.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<Admin>, BackendError> {
        self.backend
            .select_one(tables::ADMINS, &Select::all().eq("email", email.as_str()))
            .await
    }
}
