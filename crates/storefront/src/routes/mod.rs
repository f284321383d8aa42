//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (pings the data service)
//!
//! # Catalog
//! GET  /products                  - Product listing (?category=&q=)
//! GET  /products/categories       - Category filter options
//!
//! # Cart (session-backed)
//! GET  /cart                      - Cart contents
//! POST /cart/add                  - Add a product (quantity +1)
//! POST /cart/update               - Overwrite a line quantity
//! POST /cart/remove               - Remove a line
//! GET  /cart/count                - Article count badge
//!
//! # Auth
//! POST /auth/register             - Create an account and log in
//! POST /auth/login                - Login
//! POST /auth/logout               - Logout
//! GET  /auth/me                   - Current session identity
//! PUT  /auth/profile              - Update profile (requires auth)
//!
//! # Orders (require auth)
//! POST /orders                    - Checkout the cart
//! GET  /orders                    - Order history
//! GET  /orders/{id}/items         - Order detail lines
//!
//! # Notifications (require auth)
//! GET  /notifications             - Latest 20, with parent order state
//! GET  /notifications/unread-count - Unread total
//! POST /notifications/{id}/read   - Mark one as read
//! POST /notifications/read-all    - Mark all as read
//! ```

pub mod auth;
pub mod cart;
pub mod notifications;
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
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/profile", put(auth::update_profile))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/categories", get(products::categories))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::checkout).get(orders::index))
        .route("/{id}/items", get(orders::items))
}

/// Create the notification routes router.
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::index))
        .route("/unread-count", get(notifications::unread_count))
        .route("/{id}/read", post(notifications::mark_read))
        .route("/read-all", post(notifications::mark_all_read))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/auth", auth_routes())
        .nest("/orders", order_routes())
        .nest("/notifications", notification_routes())
}
