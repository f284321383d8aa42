//! Core types for Cabella.
//!
//! Type-safe wrappers for common domain concepts: entity IDs, email
//! addresses, order statuses and EUR price display.

mod email;
mod id;
mod price;
mod status;

pub use email::{Email, EmailError};
pub use id::{AdminId, ClientId, NotificationId, OrderId, OrderItemId, ProductId};
pub use price::format_eur;
pub use status::{NotificationCopy, OrderStatus, confirmation_copy};
