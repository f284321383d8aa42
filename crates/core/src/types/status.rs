//! Order lifecycle state machine.
//!
//! An order moves forward through a fixed sequence and never backwards:
//!
//! ```text
//! pending -> processing -> ready_for_pickup -> completed
//! ```
//!
//! Each status carries its display metadata (French label and progress
//! description shown to the customer) and the notification copy sent to
//! the owning client when an admin advances an order into it. Everything
//! is a closed enum matched exhaustively, so a new status cannot be added
//! without the compiler pointing at every table that needs a row for it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::format_eur;

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order received, waiting for the shop to pick it up.
    #[default]
    Pending,
    /// The shop is preparing the order.
    Processing,
    /// Prepared and waiting in store for the customer.
    ReadyForPickup,
    /// Picked up and paid. Terminal.
    Completed,
}

/// Title and message of a customer notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCopy {
    pub title: String,
    pub message: String,
}

impl OrderStatus {
    /// Every status, in lifecycle order. Drives the admin Kanban columns
    /// and the customer-facing progress bar.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Processing,
        Self::ReadyForPickup,
        Self::Completed,
    ];

    /// The next status in the lifecycle, or `None` from `Completed`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Processing),
            Self::Processing => Some(Self::ReadyForPickup),
            Self::ReadyForPickup => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// Wire representation used by the orders table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::ReadyForPickup => "ready_for_pickup",
            Self::Completed => "completed",
        }
    }

    /// Status label shown in both the storefront and the back-office.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Processing => "En préparation",
            Self::ReadyForPickup => "Prêt à retirer",
            Self::Completed => "Terminée",
        }
    }

    /// Progress description shown under the label in the order history.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Pending => "Votre commande a été reçue",
            Self::Processing => "Nous préparons votre commande",
            Self::ReadyForPickup => "Venez récupérer votre commande en magasin",
            Self::Completed => "Commande récupérée",
        }
    }

    /// Zero-based position in the lifecycle, for progress display.
    #[must_use]
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Notification copy for an order advancing *into* this status.
    ///
    /// `order_short` is the 8-character short order id shown to customers.
    /// Returns `None` for `Pending`: that is the creation state, announced
    /// by [`confirmation_copy`] instead.
    #[must_use]
    pub fn transition_copy(self, order_short: &str) -> Option<NotificationCopy> {
        match self {
            Self::Pending => None,
            Self::Processing => Some(NotificationCopy {
                title: "Commande en préparation".to_owned(),
                message: format!(
                    "Votre commande #{order_short} est en cours de préparation. \
                     Nous vous préviendrons quand elle sera prête."
                ),
            }),
            Self::ReadyForPickup => Some(NotificationCopy {
                title: "🎉 Commande prête !".to_owned(),
                message: format!(
                    "Votre commande #{order_short} est prête ! \
                     Venez la récupérer en magasin et procéder au paiement."
                ),
            }),
            Self::Completed => Some(NotificationCopy {
                title: "Commande terminée".to_owned(),
                message: format!(
                    "Merci pour votre achat ! Votre commande #{order_short} a été récupérée. \
                     À bientôt chez Cabella KC !"
                ),
            }),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "ready_for_pickup" => Ok(Self::ReadyForPickup),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Notification copy for a freshly placed order.
///
/// Sent together with the order and its items at checkout.
#[must_use]
pub fn confirmation_copy(order_short: &str, total: Decimal) -> NotificationCopy {
    NotificationCopy {
        title: "Commande confirmée".to_owned(),
        message: format!(
            "Votre commande #{order_short} d'un montant de {} a été reçue. \
             Nous vous tiendrons informé de son avancement.",
            format_eur(total)
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_is_linear_and_forward_only() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Processing));
        assert_eq!(
            OrderStatus::Processing.next(),
            Some(OrderStatus::ReadyForPickup)
        );
        assert_eq!(
            OrderStatus::ReadyForPickup.next(),
            Some(OrderStatus::Completed)
        );
        assert_eq!(OrderStatus::Completed.next(), None);
    }

    #[test]
    fn test_all_matches_next_chain() {
        // Walking next() from Pending visits ALL in order.
        let mut walked = vec![OrderStatus::Pending];
        while let Some(next) = walked.last().unwrap().next() {
            walked.push(next);
        }
        assert_eq!(walked, OrderStatus::ALL);
    }

    #[test]
    fn test_wire_roundtrip() {
        for status in OrderStatus::ALL {
            let parsed: OrderStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);

            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_positions() {
        assert_eq!(OrderStatus::Pending.position(), 0);
        assert_eq!(OrderStatus::Completed.position(), 3);
    }

    #[test]
    fn test_no_notification_for_pending() {
        assert!(OrderStatus::Pending.transition_copy("a1b2c3d4").is_none());
    }

    #[test]
    fn test_exactly_three_statuses_carry_transition_copy() {
        // A full lifecycle sends one notification per advance, so
        // together with the confirmation a client sees four in total.
        let with_copy = OrderStatus::ALL
            .iter()
            .filter(|s| s.transition_copy("a1b2c3d4").is_some())
            .count();
        assert_eq!(with_copy, 3);
    }

    #[test]
    fn test_transition_copy_carries_short_id() {
        let copy = OrderStatus::Processing
            .transition_copy("a1b2c3d4")
            .unwrap();
        assert_eq!(copy.title, "Commande en préparation");
        assert!(copy.message.contains("#a1b2c3d4"));

        let copy = OrderStatus::ReadyForPickup
            .transition_copy("a1b2c3d4")
            .unwrap();
        assert_eq!(copy.title, "🎉 Commande prête !");

        let copy = OrderStatus::Completed.transition_copy("a1b2c3d4").unwrap();
        assert_eq!(copy.title, "Commande terminée");
        assert!(copy.message.contains("Cabella KC"));
    }

    #[test]
    fn test_confirmation_copy() {
        let copy = confirmation_copy("a1b2c3d4", Decimal::new(25000, 2));
        assert_eq!(copy.title, "Commande confirmée");
        assert!(copy.message.contains("#a1b2c3d4"));
        assert!(copy.message.contains("250,00\u{202f}€"));
    }
}
