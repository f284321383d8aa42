//! Application state shared across handlers.

use std::sync::Arc;

use cabella_backend::{BackendClient, StorageClient};

use crate::config::AdminConfig;

/// Bucket holding the product images.
const PRODUCT_IMAGE_BUCKET: &str = "products";

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the data service client and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    backend: BackendClient,
    storage: StorageClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let backend = BackendClient::new(&config.backend);
        let storage = StorageClient::new(backend.clone(), PRODUCT_IMAGE_BUCKET);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                storage,
            }),
        }
    }

    /// Get a reference to the back-office configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the data service client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Get a reference to the product image bucket client.
    #[must_use]
    pub fn storage(&self) -> &StorageClient {
        &self.inner.storage
    }
}
