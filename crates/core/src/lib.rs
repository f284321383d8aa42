//! Cabella Core - Shared types library.
//!
//! This crate provides common types used across all Cabella components:
//! - `storefront` - Public-facing furniture shop
//! - `admin` - Internal back-office (products, order board)
//! - `backend` - Client for the remote managed data service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! sessions. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, email addresses, the order status state
//!   machine, and EUR price formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
