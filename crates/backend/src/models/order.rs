//! Rows of the `orders` and `order_items` tables.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cabella_core::{ClientId, OrderId, OrderItemId, OrderStatus, ProductId};

/// A placed order.
///
/// `total_price` is fixed at checkout from the cart's line snapshots and
/// is never recomputed, even when product prices change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Owning client. Nullable at the schema level; the application
    /// always supplies one at checkout.
    pub client_id: Option<ClientId>,
    pub customer_name: String,
    pub customer_email: String,
    pub status: OrderStatus,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new order.
#[derive(Debug, Serialize)]
pub struct NewOrder {
    pub client_id: ClientId,
    pub customer_name: String,
    pub customer_email: String,
    pub status: OrderStatus,
    pub total_price: Decimal,
}

/// One line of an order. Created in the same checkout as its order and
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    /// Product price at the time of the order, decoupled from the
    /// current catalog price.
    pub price: Decimal,
}

/// Insert payload for one order line.
#[derive(Debug, Serialize)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Decimal,
}

/// Product columns embedded into an order-item join for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// An order line joined to its product, as shown in the order detail
/// view. `products` is `None` when the product row has been deleted
/// since the order was placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    #[serde(flatten)]
    pub item: OrderItem,
    pub products: Option<ProductSummary>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_on_the_wire() {
        let row = serde_json::json!({
            "id": "22222222-0000-0000-0000-000000000000",
            "client_id": null,
            "customer_name": "Claire Dubois",
            "customer_email": "claire@example.com",
            "status": "ready_for_pickup",
            "total_price": 250,
            "created_at": "2024-05-01T10:30:00Z"
        });
        let order: Order = serde_json::from_value(row).unwrap();
        assert_eq!(order.status, OrderStatus::ReadyForPickup);
        assert_eq!(order.client_id, None);
        assert_eq!(order.total_price, Decimal::new(250, 0));
    }

    #[test]
    fn test_item_detail_with_deleted_product() {
        let row = serde_json::json!({
            "id": "33333333-0000-0000-0000-000000000000",
            "order_id": "22222222-0000-0000-0000-000000000000",
            "product_id": "11111111-0000-0000-0000-000000000000",
            "quantity": 2,
            "price": 100,
            "products": null
        });
        let detail: OrderItemDetail = serde_json::from_value(row).unwrap();
        assert_eq!(detail.item.quantity, 2);
        assert!(detail.products.is_none());
    }

    #[test]
    fn test_item_detail_with_joined_product() {
        let row = serde_json::json!({
            "id": "33333333-0000-0000-0000-000000000000",
            "order_id": "22222222-0000-0000-0000-000000000000",
            "product_id": "11111111-0000-0000-0000-000000000000",
            "quantity": 1,
            "price": 299.99,
            "products": {
                "name": "Canapé 3 places",
                "price": 349.99,
                "image_url": null,
                "category": "Canapé"
            }
        });
        let detail: OrderItemDetail = serde_json::from_value(row).unwrap();
        let product = detail.products.unwrap();
        // Snapshot price differs from the current catalog price.
        assert_ne!(detail.item.price, product.price);
    }
}
