//! Storefront business services.

pub mod auth;
pub mod catalog;
pub mod checkout;
