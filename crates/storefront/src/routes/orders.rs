//! Order route handlers: checkout, history and detail.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;
use tracing::instrument;

use cabella_backend::db::OrderRepository;
use cabella_backend::models::{Order, OrderItemDetail};
use cabella_core::OrderId;

use crate::error::{AppError, Result};
use crate::middleware::auth::RequireClient;
use crate::routes::cart::{load_cart, save_cart};
use crate::services::checkout::{self, CheckoutError};
use crate::state::AppState;

/// POST /orders - place an order from the session cart.
///
/// On success the cart is cleared; on failure it is left intact so the
/// client can retry.
#[instrument(skip(state, session, client), fields(client_id = %client.id))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    RequireClient(client): RequireClient,
) -> Result<impl IntoResponse> {
    let mut cart = load_cart(&session).await?;

    let order = checkout::place_order(state.backend(), &client, &cart)
        .await
        .map_err(|e| match e {
            CheckoutError::EmptyCart => {
                AppError::BadRequest("Votre panier est vide".to_string())
            }
            CheckoutError::Backend(err) => AppError::Backend(err),
        })?;

    cart.clear();
    save_cart(&session, &cart).await?;
    tracing::info!(order_id = %order.id, "order placed");

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders - the client's order history, newest first.
#[instrument(skip(state, client), fields(client_id = %client.id))]
pub async fn index(
    State(state): State<AppState>,
    RequireClient(client): RequireClient,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.backend())
        .list_for_client(client.id)
        .await?;
    Ok(Json(orders))
}

/// GET /orders/{id}/items - the lines of one order, joined to their
/// product snapshots. Refetched on every open, never cached.
#[instrument(skip(state, client), fields(client_id = %client.id))]
pub async fn items(
    State(state): State<AppState>,
    RequireClient(client): RequireClient,
    Path(order_id): Path<OrderId>,
) -> Result<Json<Vec<OrderItemDetail>>> {
    let repo = OrderRepository::new(state.backend());

    // Ownership check: the order must belong to the logged-in client.
    let owned = repo
        .list_for_client(client.id)
        .await?
        .iter()
        .any(|o| o.id == order_id);
    if !owned {
        return Err(AppError::NotFound("Commande introuvable".to_string()));
    }

    let items = repo.items_with_products(order_id).await?;
    Ok(Json(items))
}
