//! Order board and status advance.

use serde::Serialize;
use thiserror::Error;

use cabella_backend::db::{NotificationRepository, OrderRepository};
use cabella_backend::models::{NewNotification, Order};
use cabella_backend::{BackendClient, BackendError};
use cabella_core::OrderStatus;

/// Errors that can occur while advancing an order.
#[derive(Debug, Error)]
pub enum AdvanceError {
    /// The order is already completed; there is no next status.
    #[error("order is already completed")]
    AlreadyCompleted,

    /// Data service error.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// One Kanban column: a status and the orders currently in it.
#[derive(Debug, Serialize)]
pub struct BoardColumn {
    pub status: OrderStatus,
    pub label: &'static str,
    pub orders: Vec<Order>,
}

/// Bucket orders into the four lifecycle columns, in lifecycle order.
/// Relative order within a column is preserved (newest first when the
/// input is newest first).
#[must_use]
pub fn board(orders: Vec<Order>) -> Vec<BoardColumn> {
    let mut columns: Vec<BoardColumn> = OrderStatus::ALL
        .into_iter()
        .map(|status| BoardColumn {
            status,
            label: status.label(),
            orders: Vec::new(),
        })
        .collect();

    for order in orders {
        if let Some(column) = columns.iter_mut().find(|c| c.status == order.status) {
            column.orders.push(order);
        }
    }

    columns
}

/// Move an order one step forward and notify its client.
///
/// The notification is skipped when the order has no linked client (the
/// schema allows it even though checkout always sets one). A failure
/// writing the notification is logged but does not undo the status
/// change.
///
/// # Errors
///
/// Returns `AdvanceError::AlreadyCompleted` for a completed order and
/// `AdvanceError::Backend` if the status update fails.
pub async fn advance(backend: &BackendClient, order: &Order) -> Result<OrderStatus, AdvanceError> {
    let next = order.status.next().ok_or(AdvanceError::AlreadyCompleted)?;

    OrderRepository::new(backend)
        .set_status(order.id, next)
        .await?;
    tracing::info!(order_id = %order.id, from = %order.status, to = %next, "order advanced");

    match order.client_id {
        Some(client_id) => {
            // Pending has no transition copy, and next() never returns it
            if let Some(copy) = next.transition_copy(&order.id.short()) {
                let result = NotificationRepository::new(backend)
                    .insert(&NewNotification {
                        client_id,
                        order_id: order.id,
                        title: copy.title,
                        message: copy.message,
                    })
                    .await;
                if let Err(e) = result {
                    tracing::error!(
                        order_id = %order.id,
                        error = %e,
                        "status updated but notification insert failed"
                    );
                }
            }
        }
        None => {
            tracing::warn!(order_id = %order.id, "order has no client, skipping notification");
        }
    }

    Ok(next)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use cabella_core::OrderId;

    use super::*;

    fn order(status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(uuid::Uuid::new_v4()),
            client_id: None,
            customer_name: "Claire Dubois".to_string(),
            customer_email: "claire@example.com".to_string(),
            status,
            total_price: Decimal::new(25000, 2),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_board_has_all_four_columns_in_lifecycle_order() {
        let columns = board(Vec::new());
        let statuses: Vec<OrderStatus> = columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, OrderStatus::ALL.to_vec());
        assert!(columns.iter().all(|c| c.orders.is_empty()));
    }

    #[test]
    fn test_board_buckets_by_status() {
        let orders = vec![
            order(OrderStatus::Pending),
            order(OrderStatus::Completed),
            order(OrderStatus::Pending),
        ];
        let columns = board(orders);

        assert_eq!(columns[0].orders.len(), 2);
        assert_eq!(columns[1].orders.len(), 0);
        assert_eq!(columns[2].orders.len(), 0);
        assert_eq!(columns[3].orders.len(), 1);
    }

    #[test]
    fn test_board_preserves_relative_order_within_column() {
        let first = order(OrderStatus::Pending);
        let second = order(OrderStatus::Pending);
        let ids = (first.id, second.id);
        let columns = board(vec![first, second]);

        let column_ids: Vec<OrderId> = columns[0].orders.iter().map(|o| o.id).collect();
        assert_eq!(column_ids, vec![ids.0, ids.1]);
    }

    #[test]
    fn test_board_columns_carry_french_labels() {
        let columns = board(Vec::new());
        let labels: Vec<&str> = columns.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec!["En attente", "En préparation", "Prêt à retirer", "Terminée"]
        );
    }
}
