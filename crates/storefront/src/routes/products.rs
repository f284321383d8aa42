//! Catalog route handlers.

use axum::{Json, extract::{Query, State}};
use serde::Deserialize;
use tracing::instrument;

use cabella_backend::models::Product;

use crate::services::catalog;
use crate::state::AppState;

/// Catalog query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Category filter; absent means the "Tous" sentinel.
    pub category: Option<String>,
    /// Case-insensitive substring search on name and description.
    pub q: Option<String>,
}

/// GET /products - the filtered catalog, newest first.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Product>> {
    let products = catalog::load_products(state.backend()).await;
    let category = query.category.as_deref().unwrap_or(catalog::ALL_CATEGORIES);
    let search = query.q.as_deref().unwrap_or("");

    let filtered = catalog::filter(&products, category, search)
        .into_iter()
        .cloned()
        .collect();
    Json(filtered)
}

/// GET /products/categories - filter options, sentinel first.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let products = catalog::load_products(state.backend()).await;
    Json(catalog::categories(&products))
}
