//! Rows of the `notifications` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cabella_core::{ClientId, NotificationId, OrderId, OrderStatus};

/// A customer notification, written once per order event and mutated
/// only by the read-state operations. `is_read` goes false→true and
/// never back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub client_id: ClientId,
    pub order_id: OrderId,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a notification. `is_read` defaults to false at the
/// backend.
#[derive(Debug, Serialize)]
pub struct NewNotification {
    pub client_id: ClientId,
    pub order_id: OrderId,
    pub title: String,
    pub message: String,
}

/// Parent order columns embedded into the notification feed for icon
/// selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRef {
    pub status: OrderStatus,
    pub total_price: Decimal,
}

/// A notification joined to its parent order's current state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationWithOrder {
    #[serde(flatten)]
    pub notification: Notification,
    pub orders: Option<OrderRef>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_row_with_embedded_order() {
        let row = serde_json::json!({
            "id": "44444444-0000-0000-0000-000000000000",
            "client_id": "55555555-0000-0000-0000-000000000000",
            "order_id": "22222222-0000-0000-0000-000000000000",
            "title": "Commande confirmée",
            "message": "Votre commande #22222222 a été reçue.",
            "is_read": false,
            "created_at": "2024-05-01T10:30:00Z",
            "orders": { "status": "pending", "total_price": 250 }
        });
        let feed_row: NotificationWithOrder = serde_json::from_value(row).unwrap();
        assert!(!feed_row.notification.is_read);
        assert_eq!(
            feed_row.orders.unwrap().status,
            OrderStatus::Pending
        );
    }
}
