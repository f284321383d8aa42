//! Notification feed route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use cabella_backend::db::NotificationRepository;
use cabella_backend::models::NotificationWithOrder;
use cabella_core::NotificationId;

use crate::error::Result;
use crate::middleware::auth::RequireClient;
use crate::state::AppState;

/// GET /notifications - the latest 20 notifications, newest first, each
/// with the parent order's current status and total.
#[instrument(skip(state, client), fields(client_id = %client.id))]
pub async fn index(
    State(state): State<AppState>,
    RequireClient(client): RequireClient,
) -> Result<Json<Vec<NotificationWithOrder>>> {
    let feed = NotificationRepository::new(state.backend())
        .latest_for_client(client.id)
        .await?;
    Ok(Json(feed))
}

/// GET /notifications/unread-count - true unread total, independent of
/// the 20-row feed window.
#[instrument(skip(state, client), fields(client_id = %client.id))]
pub async fn unread_count(
    State(state): State<AppState>,
    RequireClient(client): RequireClient,
) -> Result<Json<serde_json::Value>> {
    let count = NotificationRepository::new(state.backend())
        .unread_count(client.id)
        .await?;
    Ok(Json(serde_json::json!({ "count": count })))
}

/// POST /notifications/{id}/read - mark one notification as read.
#[instrument(skip(state, client), fields(client_id = %client.id))]
pub async fn mark_read(
    State(state): State<AppState>,
    RequireClient(client): RequireClient,
    Path(id): Path<NotificationId>,
) -> Result<StatusCode> {
    NotificationRepository::new(state.backend())
        .mark_read(id, client.id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /notifications/read-all - mark every unread notification as read.
#[instrument(skip(state, client), fields(client_id = %client.id))]
pub async fn mark_all_read(
    State(state): State<AppState>,
    RequireClient(client): RequireClient,
) -> Result<StatusCode> {
    NotificationRepository::new(state.backend())
        .mark_all_read(client.id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
