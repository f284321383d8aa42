//! Client account repository.

use cabella_core::{ClientId, Email};

use super::tables;
use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::{Client, ClientPatch, NewClient};
use crate::query::Select;

/// Repository for the `clients` table.
pub struct ClientRepository<'a> {
    backend: &'a BackendClient,
}

impl<'a> ClientRepository<'a> {
    /// Create a new client repository.
    #[must_use]
    pub const fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// Get a client by email address.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<Client>, BackendError> {
        self.backend
            .select_one(tables::CLIENTS, &Select::all().eq("email", email.as_str()))
            .await
    }

    /// Whether an account with this email already exists.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the query fails.
    pub async fn email_exists(&self, email: &Email) -> Result<bool, BackendError> {
        let row: Option<serde_json::Value> = self
            .backend
            .select_one(
                tables::CLIENTS,
                &Select::columns("id").eq("email", email.as_str()),
            )
            .await?;
        Ok(row.is_some())
    }

    /// Create a new client account.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Conflict` if the email is already taken
    /// and `BackendError` for other failures.
    pub async fn insert(&self, new: &NewClient) -> Result<Client, BackendError> {
        self.backend.insert_one(tables::CLIENTS, new).await
    }

    /// Apply a profile patch and return the updated row.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the update fails or matches no row.
    pub async fn update_profile(
        &self,
        id: ClientId,
        patch: &ClientPatch,
    ) -> Result<Client, BackendError> {
        let mut rows: Vec<Client> = self
            .backend
            .update_returning(
                tables::CLIENTS,
                patch,
                &Select::filter_only().eq("id", id),
            )
            .await?;
        if rows.is_empty() {
            return Err(BackendError::EmptyReturn(tables::CLIENTS));
        }
        Ok(rows.swap_remove(0))
    }
}
