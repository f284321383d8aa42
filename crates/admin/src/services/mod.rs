//! Back-office business services.

pub mod auth;
pub mod media;
pub mod orders;
pub mod products;
