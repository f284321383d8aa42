//! Product catalog repository.

use cabella_core::ProductId;

use super::tables;
use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::{NewProduct, Product};
use crate::query::Select;

/// Repository for the `products` table.
pub struct ProductRepository<'a> {
    backend: &'a BackendClient,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// All products, newest first. The catalog is assumed small enough
    /// to load whole; filtering happens in memory.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the query fails.
    pub async fn list_newest_first(&self) -> Result<Vec<Product>, BackendError> {
        self.backend
            .select(tables::PRODUCTS, &Select::all().order_desc("created_at"))
            .await
    }

    /// Total product count. Cheap (header-only); doubles as the
    /// readiness probe of both services.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the count fails.
    pub async fn count(&self) -> Result<u64, BackendError> {
        self.backend
            .count(tables::PRODUCTS, &Select::filter_only())
            .await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the insert fails.
    pub async fn insert(&self, new: &NewProduct) -> Result<Product, BackendError> {
        self.backend.insert_one(tables::PRODUCTS, new).await
    }

    /// Overwrite a product's editable columns.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the update fails.
    pub async fn update(&self, id: ProductId, input: &NewProduct) -> Result<(), BackendError> {
        self.backend
            .update(tables::PRODUCTS, input, &Select::filter_only().eq("id", id))
            .await
    }

    /// Delete a product.
    ///
    /// The blob store image is intentionally left in place; order items
    /// referencing the product keep their snapshot price.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), BackendError> {
        self.backend
            .delete(tables::PRODUCTS, &Select::filter_only().eq("id", id))
            .await
    }
}
