//! Blob store client.
//!
//! Product images live in a bucket on the managed backend. The contract
//! is small: upload bytes under a key, derive the public URL for a key,
//! and remove a key. Objects are never listed.

use tracing::instrument;

use crate::client::BackendClient;
use crate::error::BackendError;

/// Client for one bucket of the blob store.
#[derive(Clone)]
pub struct StorageClient {
    backend: BackendClient,
    bucket: String,
}

impl StorageClient {
    /// Create a storage client for `bucket`.
    #[must_use]
    pub fn new(backend: BackendClient, bucket: &str) -> Self {
        Self {
            backend,
            bucket: bucket.to_owned(),
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{key}",
            self.backend.base_url(),
            self.bucket
        )
    }

    /// Public URL for `key`. Derived, not fetched.
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{key}",
            self.backend.base_url(),
            self.bucket
        )
    }

    /// Upload `bytes` under `key`.
    ///
    /// Objects are cached for an hour and never overwritten; callers
    /// generate fresh keys per upload.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the upload is rejected.
    #[instrument(skip(self, bytes, content_type), fields(key = key, size = bytes.len()))]
    pub async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BackendError> {
        let response = self
            .backend
            .authed(self.backend.http().post(self.object_url(key)))
            .header("Content-Type", content_type)
            .header("cache-control", "3600")
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;
        check_storage(response).await
    }

    /// Remove the object stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the removal fails.
    #[instrument(skip(self), fields(key = key))]
    pub async fn remove(&self, key: &str) -> Result<(), BackendError> {
        let response = self
            .backend
            .authed(self.backend.http().delete(self.object_url(key)))
            .send()
            .await?;
        check_storage(response).await
    }

    /// Extract the object key from one of this bucket's public URLs.
    ///
    /// Returns `None` for URLs that do not point into the bucket.
    #[must_use]
    pub fn object_key(&self, public_url: &str) -> Option<String> {
        object_key_from_public_url(public_url, &self.bucket)
    }
}

/// Extract an object key from a blob store public URL.
///
/// The public URL format is
/// `{base}/storage/v1/object/public/{bucket}/{key}`.
#[must_use]
pub fn object_key_from_public_url(public_url: &str, bucket: &str) -> Option<String> {
    let marker = format!("/storage/v1/object/public/{bucket}/");
    let (_, key) = public_url.split_once(&marker)?;
    if key.is_empty() {
        None
    } else {
        Some(key.to_owned())
    }
}

async fn check_storage(response: reqwest::Response) -> Result<(), BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let message = response
        .text()
        .await
        .unwrap_or_default()
        .chars()
        .take(200)
        .collect();
    tracing::error!(status = %status, "blob store returned non-success status");
    Err(BackendError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::BackendConfig;
    use secrecy::SecretString;

    fn storage() -> StorageClient {
        let backend = BackendClient::new(&BackendConfig {
            url: "https://example.supabase.co".to_owned(),
            service_key: SecretString::from("k"),
        });
        StorageClient::new(backend, "products")
    }

    #[test]
    fn test_public_url() {
        assert_eq!(
            storage().public_url("products/123-abc.png"),
            "https://example.supabase.co/storage/v1/object/public/products/products/123-abc.png"
        );
    }

    #[test]
    fn test_object_key_roundtrip() {
        let storage = storage();
        let url = storage.public_url("products/123-abc.png");
        assert_eq!(
            storage.object_key(&url),
            Some("products/123-abc.png".to_owned())
        );
    }

    #[test]
    fn test_object_key_rejects_foreign_urls() {
        let storage = storage();
        assert_eq!(storage.object_key("https://elsewhere.example/img.png"), None);
        assert_eq!(
            storage.object_key("https://example.supabase.co/storage/v1/object/public/other/img.png"),
            None
        );
    }

    #[test]
    fn test_object_key_empty() {
        assert_eq!(
            object_key_from_public_url(
                "https://example.supabase.co/storage/v1/object/public/products/",
                "products"
            ),
            None
        );
    }
}
