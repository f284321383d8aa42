//! Checkout: turn the session cart into an order.
//!
//! The data service has no transactions, so checkout is a three-step
//! insert with compensating deletes: order row, order lines, then the
//! confirmation notification. A failure at any step undoes the earlier
//! inserts and reports the whole checkout as failed; the cart is left
//! intact so the client can retry.

use thiserror::Error;

use cabella_backend::db::{NotificationRepository, OrderRepository};
use cabella_backend::models::{NewNotification, NewOrder, NewOrderItem, Order};
use cabella_backend::{BackendClient, BackendError};
use cabella_core::{OrderId, OrderStatus, confirmation_copy};

use crate::models::{Cart, CurrentClient};

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout on an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A step failed; any partial inserts have been rolled back.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Place an order from the cart.
///
/// On success the order row, its lines and the "Commande confirmée"
/// notification all exist; the caller clears the cart. On failure
/// nothing persists (best effort: a rollback delete that itself fails is
/// logged and left for manual cleanup).
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` if the cart has no lines and
/// `CheckoutError::Backend` if any insert fails.
pub async fn place_order(
    backend: &BackendClient,
    client: &CurrentClient,
    cart: &Cart,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let orders = OrderRepository::new(backend);
    let notifications = NotificationRepository::new(backend);

    let total = cart.total();
    let order = orders
        .insert(&NewOrder {
            client_id: client.id,
            customer_name: client.name.clone(),
            customer_email: client.email.to_string(),
            status: OrderStatus::Pending,
            total_price: total,
        })
        .await?;

    if let Err(e) = orders.insert_items(&order_items_for(order.id, cart)).await {
        rollback_order(&orders, order.id).await;
        return Err(e.into());
    }

    let copy = confirmation_copy(&order.id.short(), total);
    if let Err(e) = notifications
        .insert(&NewNotification {
            client_id: client.id,
            order_id: order.id,
            title: copy.title,
            message: copy.message,
        })
        .await
    {
        rollback_items_and_order(&orders, order.id).await;
        return Err(e.into());
    }

    // The source application only simulated the confirmation email.
    tracing::info!(
        order_id = %order.id,
        email = %client.email,
        total = %total,
        "simulated order confirmation email"
    );

    Ok(order)
}

/// Build the insert payloads for the cart lines, carrying each line's
/// snapshot price.
fn order_items_for(order_id: OrderId, cart: &Cart) -> Vec<NewOrderItem> {
    cart.lines()
        .iter()
        .map(|line| NewOrderItem {
            order_id,
            product_id: line.product.id,
            quantity: line.quantity,
            price: line.product.price,
        })
        .collect()
}

/// Compensating delete for a failure at the items step.
async fn rollback_order(orders: &OrderRepository<'_>, order_id: OrderId) {
    if let Err(e) = orders.delete(order_id).await {
        tracing::error!(order_id = %order_id, error = %e, "checkout rollback failed to delete order");
    }
}

/// Compensating deletes for a failure at the notification step.
async fn rollback_items_and_order(orders: &OrderRepository<'_>, order_id: OrderId) {
    if let Err(e) = orders.delete_items(order_id).await {
        tracing::error!(order_id = %order_id, error = %e, "checkout rollback failed to delete order items");
    }
    rollback_order(orders, order_id).await;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use cabella_backend::models::Product;
    use cabella_core::ProductId;

    use super::*;

    /// Recompute a total from item payloads, to pin the total invariant.
    fn items_total(items: &[NewOrderItem]) -> Decimal {
        items
            .iter()
            .map(|i| i.price * Decimal::from(i.quantity))
            .sum()
    }

    fn product(price: Decimal) -> Product {
        Product {
            id: ProductId::new(uuid::Uuid::new_v4()),
            name: "Bureau chêne".to_string(),
            category: "Bureau".to_string(),
            price,
            description: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_order_items_carry_snapshot_prices_and_quantities() {
        let desk = product(Decimal::new(19900, 2));
        let lamp = product(Decimal::new(3500, 2));
        let mut cart = Cart::new();
        cart.add(&desk);
        cart.add(&lamp);
        cart.set_quantity(lamp.id, 3);

        let order_id = OrderId::new(uuid::Uuid::new_v4());
        let items = order_items_for(order_id, &cart);

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.order_id == order_id));
        let lamp_line = items.iter().find(|i| i.product_id == lamp.id).unwrap();
        assert_eq!(lamp_line.quantity, 3);
        assert_eq!(lamp_line.price, Decimal::new(3500, 2));
    }

    #[test]
    fn test_items_total_matches_cart_total() {
        let desk = product(Decimal::new(19900, 2));
        let chair = product(Decimal::new(8950, 2));
        let mut cart = Cart::new();
        cart.add(&desk);
        cart.add(&chair);
        cart.add(&chair);

        let items = order_items_for(OrderId::new(uuid::Uuid::new_v4()), &cart);
        assert_eq!(items_total(&items), cart.total());
    }

    #[test]
    fn test_confirmation_copy_carries_short_id_and_eur_total() {
        let order_id = OrderId::new(uuid::Uuid::new_v4());
        let copy = confirmation_copy(&order_id.short(), Decimal::new(30900, 2));

        assert_eq!(copy.title, "Commande confirmée");
        assert!(copy.message.contains(&format!("#{}", order_id.short())));
        assert!(copy.message.contains("309,00\u{202f}€"));
    }
}
