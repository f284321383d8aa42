//! Order and order-item repository.

use cabella_core::{ClientId, OrderId, OrderStatus};

use super::tables;
use crate::client::BackendClient;
use crate::error::BackendError;
use crate::models::{NewOrder, NewOrderItem, Order, OrderItem, OrderItemDetail};
use crate::query::Select;

/// Columns fetched for the order detail view: the item plus its product
/// snapshot for display.
const ITEM_DETAIL_COLUMNS: &str = "*,products(name,price,image_url,category)";

/// Repository for the `orders` and `order_items` tables.
pub struct OrderRepository<'a> {
    backend: &'a BackendClient,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// Insert a new order row.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the insert fails.
    pub async fn insert(&self, new: &NewOrder) -> Result<Order, BackendError> {
        self.backend.insert_one(tables::ORDERS, new).await
    }

    /// Batch-insert the lines of an order.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the insert fails.
    pub async fn insert_items(
        &self,
        items: &[NewOrderItem],
    ) -> Result<Vec<OrderItem>, BackendError> {
        self.backend.insert(tables::ORDER_ITEMS, items).await
    }

    /// Delete an order row. Only used by the checkout rollback path.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the delete fails.
    pub async fn delete(&self, id: OrderId) -> Result<(), BackendError> {
        self.backend
            .delete(tables::ORDERS, &Select::filter_only().eq("id", id))
            .await
    }

    /// Delete the lines of an order. Only used by the checkout rollback
    /// path.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the delete fails.
    pub async fn delete_items(&self, order_id: OrderId) -> Result<(), BackendError> {
        self.backend
            .delete(
                tables::ORDER_ITEMS,
                &Select::filter_only().eq("order_id", order_id),
            )
            .await
    }

    /// Move an order to `status`.
    ///
    /// Concurrent updates to the same order are not sequenced by the
    /// application; last write wins at the data service.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the update fails.
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<(), BackendError> {
        self.backend
            .update(
                tables::ORDERS,
                &serde_json::json!({ "status": status }),
                &Select::filter_only().eq("id", id),
            )
            .await
    }

    /// All orders of one client, newest first.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the query fails.
    pub async fn list_for_client(&self, client_id: ClientId) -> Result<Vec<Order>, BackendError> {
        self.backend
            .select(
                tables::ORDERS,
                &Select::all()
                    .eq("client_id", client_id)
                    .order_desc("created_at"),
            )
            .await
    }

    /// Every order, newest first (back-office view).
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, BackendError> {
        self.backend
            .select(tables::ORDERS, &Select::all().order_desc("created_at"))
            .await
    }

    /// The lines of one order joined to their product snapshots.
    ///
    /// Refetched each time a detail view opens; never cached.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the query fails.
    pub async fn items_with_products(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderItemDetail>, BackendError> {
        self.backend
            .select(
                tables::ORDER_ITEMS,
                &Select::columns(ITEM_DETAIL_COLUMNS).eq("order_id", order_id),
            )
            .await
    }
}
