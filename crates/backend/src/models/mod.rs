//! Row types for the six backend tables.
//!
//! These structs mirror the wire representation of the data service:
//! UUID primary keys, ISO-8601 timestamps, numeric columns as JSON
//! numbers. Insert payloads are separate `New*` types so a caller can
//! never accidentally send a client-chosen primary key or timestamp.

mod admin;
mod client;
mod notification;
mod order;
mod product;

pub use admin::Admin;
pub use client::{Client, ClientPatch, NewClient};
pub use notification::{NewNotification, Notification, NotificationWithOrder, OrderRef};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem, OrderItemDetail, ProductSummary};
pub use product::{NewProduct, Product};
