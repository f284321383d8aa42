//! Order board route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use cabella_backend::db::OrderRepository;
use cabella_backend::models::{Order, OrderItemDetail};
use cabella_core::OrderId;

use crate::error::{AppError, Result};
use crate::middleware::auth::RequireAdmin;
use crate::services::orders::{self, BoardColumn};
use crate::state::AppState;

/// GET /orders - every order, newest first.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.backend()).list_all().await?;
    Ok(Json(orders))
}

/// GET /orders/board - the Kanban buckets, one column per status.
#[instrument(skip(state, _admin))]
pub async fn board(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<BoardColumn>>> {
    let all = OrderRepository::new(state.backend()).list_all().await?;
    Ok(Json(orders::board(all)))
}

/// GET /orders/{id}/items - the lines of one order with their product
/// snapshots. Refetched on every open, never cached.
#[instrument(skip(state, _admin))]
pub async fn items(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(order_id): Path<OrderId>,
) -> Result<Json<Vec<OrderItemDetail>>> {
    let items = OrderRepository::new(state.backend())
        .items_with_products(order_id)
        .await?;
    Ok(Json(items))
}

/// POST /orders/{id}/advance - move an order one step forward and
/// notify its client.
#[instrument(skip(state, _admin))]
pub async fn advance(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(order_id): Path<OrderId>,
) -> Result<Json<serde_json::Value>> {
    let order = OrderRepository::new(state.backend())
        .list_all()
        .await?
        .into_iter()
        .find(|o| o.id == order_id)
        .ok_or_else(|| AppError::NotFound("Commande introuvable".to_string()))?;

    let next = orders::advance(state.backend(), &order).await?;

    Ok(Json(serde_json::json!({
        "status": next,
        "label": next.label(),
    })))
}
