//! HTTP route handlers for the back-office.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the data service)
//!
//! # Auth
//! POST /auth/login             - Admin login
//! POST /auth/logout            - Logout
//! GET  /auth/me                - Current session identity
//!
//! # Catalog management (require auth)
//! GET    /products             - All products, newest first
//! GET    /products/categories  - Fixed form category list
//! POST   /products             - Create a product
//! PUT    /products/{id}        - Update a product
//! DELETE /products/{id}        - Delete a product
//! POST   /products/image       - Upload an image (multipart), returns its URL
//! DELETE /products/image       - Remove an image by public URL
//!
//! # Order board (require auth)
//! GET  /orders                 - Every order, newest first
//! GET  /orders/board           - Kanban buckets by status
//! GET  /orders/{id}/items      - Order detail lines
//! POST /orders/{id}/advance    - Move one step forward and notify
//! ```

pub mod auth;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the product management routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/categories", get(products::categories))
        .route("/{id}", put(products::update).delete(products::remove))
        .route(
            "/image",
            post(products::upload_image).delete(products::remove_image),
        )
}

/// Create the order board routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/board", get(orders::board))
        .route("/{id}/items", get(orders::items))
        .route("/{id}/advance", post(orders::advance))
}

/// Create all routes for the back-office.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
}
