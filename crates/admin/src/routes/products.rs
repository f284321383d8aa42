//! Catalog management route handlers.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use cabella_backend::db::ProductRepository;
use cabella_backend::models::{NewProduct, Product};
use cabella_core::ProductId;

use crate::error::{AppError, Result};
use crate::middleware::auth::RequireAdmin;
use crate::services::media;
use crate::services::products::{PRODUCT_CATEGORIES, validate_input};
use crate::state::AppState;

/// Product form submission, used for both create and update.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl ProductPayload {
    fn into_new_product(self) -> Result<NewProduct> {
        validate_input(&self.name, &self.category, self.price)?;
        Ok(NewProduct {
            name: self.name.trim().to_owned(),
            category: self.category,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
        })
    }
}

/// Payload naming an image by its public URL.
#[derive(Debug, Deserialize)]
pub struct ImageUrlPayload {
    pub url: String,
}

/// GET /products - every product, newest first.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.backend())
        .list_newest_first()
        .await?;
    Ok(Json(products))
}

/// GET /products/categories - the fixed form category list.
#[instrument(skip(_admin))]
pub async fn categories(_admin: RequireAdmin) -> Json<Vec<&'static str>> {
    Json(PRODUCT_CATEGORIES.to_vec())
}

/// POST /products - create a product.
#[instrument(skip(state, _admin, payload), fields(name = %payload.name))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse> {
    let new = payload.into_new_product()?;
    let product = ProductRepository::new(state.backend()).insert(&new).await?;
    tracing::info!(product_id = %product.id, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/{id} - overwrite a product's editable columns.
#[instrument(skip(state, _admin, payload), fields(name = %payload.name))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductPayload>,
) -> Result<StatusCode> {
    let input = payload.into_new_product()?;
    ProductRepository::new(state.backend())
        .update(id, &input)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /products/{id} - delete a product.
///
/// The blob store image is left in place; existing order items keep
/// their snapshot price.
#[instrument(skip(state, _admin))]
pub async fn remove(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    ProductRepository::new(state.backend()).delete(id).await?;
    tracing::info!(product_id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /products/image - upload a product image (multipart `file`
/// field) and return its public URL.
#[instrument(skip(state, _admin, multipart))]
pub async fn upload_image(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("image").to_owned();
        let content_type = field.content_type().unwrap_or("").to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let url =
            media::upload_image(state.storage(), &file_name, &content_type, bytes.to_vec())
                .await?;
        tracing::info!(url = %url, "product image uploaded");

        return Ok(Json(serde_json::json!({ "url": url })));
    }

    Err(AppError::BadRequest("Aucun fichier reçu".to_string()))
}

/// DELETE /products/image - remove an image by its public URL.
#[instrument(skip(state, _admin))]
pub async fn remove_image(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(payload): Json<ImageUrlPayload>,
) -> Result<StatusCode> {
    media::remove_image(state.storage(), &payload.url).await?;
    Ok(StatusCode::NO_CONTENT)
}
