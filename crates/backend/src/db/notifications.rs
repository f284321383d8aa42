//! Notification repository.

use cabella_core::{ClientId, NotificationId};

use super::tables;
use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::{NewNotification, Notification, NotificationWithOrder};
use crate::query::Select;

/// Size of the notification feed page.
const FEED_LIMIT: u32 = 20;

/// Feed projection: the notification plus the parent order's current
/// status and total for icon selection.
const FEED_COLUMNS: &str = "*,orders(status,total_price)";

/// Repository for the `notifications` table.
pub struct NotificationRepository<'a> {
    backend: &'a BackendClient,
}

impl<'a> NotificationRepository<'a> {
    /// Create a new notification repository.
    #[must_use]
    pub const fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// Insert a notification.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the insert fails.
    pub async fn insert(&self, new: &NewNotification) -> Result<Notification, BackendError> {
        self.backend.insert_one(tables::NOTIFICATIONS, new).await
    }

    /// The latest 20 notifications of one client, newest first, each with
    /// its parent order joined in.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the query fails.
    pub async fn latest_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<NotificationWithOrder>, BackendError> {
        self.backend
            .select(
                tables::NOTIFICATIONS,
                &Select::columns(FEED_COLUMNS)
                    .eq("client_id", client_id)
                    .order_desc("created_at")
                    .limit(FEED_LIMIT),
            )
            .await
    }

    /// Number of unread notifications for one client.
    ///
    /// A dedicated count query: the true total, not the unread rows of
    /// the 20-item feed window.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the count fails.
    pub async fn unread_count(&self, client_id: ClientId) -> Result<u64, BackendError> {
        self.backend
            .count(
                tables::NOTIFICATIONS,
                &Select::filter_only()
                    .eq("client_id", client_id)
                    .eq("is_read", false),
            )
            .await
    }

    /// Mark one notification as read. Scoped to the owning client so a
    /// forged id cannot touch another client's row.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the update fails.
    pub async fn mark_read(
        &self,
        id: NotificationId,
        client_id: ClientId,
    ) -> Result<(), BackendError> {
        self.backend
            .update(
                tables::NOTIFICATIONS,
                &serde_json::json!({ "is_read": true }),
                &Select::filter_only().eq("id", id).eq("client_id", client_id),
            )
            .await
    }

    /// Mark every unread notification of one client as read, in a single
    /// bulk update.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the update fails.
    pub async fn mark_all_read(&self, client_id: ClientId) -> Result<(), BackendError> {
        self.backend
            .update(
                tables::NOTIFICATIONS,
                &serde_json::json!({ "is_read": true }),
                &Select::filter_only()
                    .eq("client_id", client_id)
                    .eq("is_read", false),
            )
            .await
    }
}
