//! Cart route handlers.
//!
//! The cart lives in the session; every mutation loads it, applies the
//! operation and writes it back.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use cabella_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::{Cart, CartLine, session_keys};
use crate::services::catalog;
use crate::state::AppState;

/// Cart contents plus the derived aggregates.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub count: u32,
    pub total: Decimal,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            count: cart.count(),
            total: cart.total(),
        }
    }
}

/// Payload naming a cart line.
#[derive(Debug, Deserialize)]
pub struct LinePayload {
    pub product_id: ProductId,
}

/// Payload overwriting a line quantity.
#[derive(Debug, Deserialize)]
pub struct QuantityPayload {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Load the cart from the session, defaulting to empty.
pub(crate) async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Write the cart back to the session.
pub(crate) async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// GET /cart - current cart contents.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartResponse>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartResponse::from(&cart)))
}

/// POST /cart/add - add one unit of a product.
///
/// The product snapshot is taken from the live catalog at add time.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LinePayload>,
) -> Result<Json<CartResponse>> {
    let products = catalog::load_products(state.backend()).await;
    let product = products
        .iter()
        .find(|p| p.id == payload.product_id)
        .ok_or_else(|| AppError::NotFound("Produit introuvable".to_string()))?;

    let mut cart = load_cart(&session).await?;
    cart.add(product);
    save_cart(&session, &cart).await?;

    Ok(Json(CartResponse::from(&cart)))
}

/// POST /cart/update - overwrite a line quantity (0 removes the line).
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(payload): Json<QuantityPayload>,
) -> Result<Json<CartResponse>> {
    let mut cart = load_cart(&session).await?;
    cart.set_quantity(payload.product_id, payload.quantity);
    save_cart(&session, &cart).await?;

    Ok(Json(CartResponse::from(&cart)))
}

/// POST /cart/remove - drop a line.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(payload): Json<LinePayload>,
) -> Result<Json<CartResponse>> {
    let mut cart = load_cart(&session).await?;
    cart.remove(payload.product_id);
    save_cart(&session, &cart).await?;

    Ok(Json(CartResponse::from(&cart)))
}

/// GET /cart/count - article count for the header badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<serde_json::Value>> {
    let cart = load_cart(&session).await?;
    Ok(Json(serde_json::json!({ "count": cart.count() })))
}
