//! Cabella Backend - client for the remote managed data service.
//!
//! All persistence is delegated to a hosted backend that exposes a
//! PostgREST-style REST interface over its tables plus a blob store for
//! product images. This crate wraps that contract:
//!
//! - [`BackendClient`] - per-table select / insert / update / delete /
//!   count with equality filters, ordering, limits and embedded joins
//! - [`StorageClient`] - blob upload, public URL derivation and removal
//! - [`models`] - row types for the six tables
//! - [`db`] - typed repositories used by the storefront and admin crates
//!
//! The application treats any non-2xx response as a uniform failure:
//! there is no retryable-vs-fatal distinction and no automatic retry.
//!
//! # Example
//!
//! ```rust,ignore
//! use cabella_backend::{BackendClient, BackendConfig, db::ProductRepository};
//!
//! let backend = BackendClient::new(&config);
//! let products = ProductRepository::new(&backend).list_newest_first().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod error;
mod query;
mod storage;

pub mod db;
pub mod models;

pub use client::{BackendClient, BackendConfig};
pub use error::BackendError;
pub use query::Select;
pub use storage::{StorageClient, object_key_from_public_url};
