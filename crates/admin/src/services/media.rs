//! Product image handling.
//!
//! Images are validated before any request leaves the process, stored
//! under a fresh time-plus-random key (uploads never overwrite), and
//! referenced from the product row by their derived public URL.

use rand::Rng;
use rand::distr::Alphanumeric;
use thiserror::Error;

use cabella_backend::{BackendError, StorageClient};

/// Maximum accepted image size (5 MB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Length of the random key suffix.
const KEY_SUFFIX_LEN: usize = 8;

/// Errors that can occur while handling a product image.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The uploaded file is not an image.
    #[error("not an image: {0}")]
    NotAnImage(String),

    /// The uploaded file exceeds the size limit.
    #[error("image too large: {0} bytes")]
    TooLarge(usize),

    /// The URL to remove does not point into the product bucket.
    #[error("not a product image URL: {0}")]
    ForeignUrl(String),

    /// Blob store error.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Validate an upload before any request is made.
///
/// # Errors
///
/// Returns `MediaError::NotAnImage` unless the MIME type starts with
/// `image/`, and `MediaError::TooLarge` over 5 MB.
pub fn validate_image(content_type: &str, size: usize) -> Result<(), MediaError> {
    if !content_type.starts_with("image/") {
        return Err(MediaError::NotAnImage(content_type.to_owned()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(MediaError::TooLarge(size));
    }
    Ok(())
}

/// Generate a fresh object key: `products/{millis}-{rand}.{ext}`.
///
/// The extension is taken from the submitted file name; a name without
/// one falls back to `bin`.
#[must_use]
pub fn object_key(file_name: &str) -> String {
    let ext = file_name.rsplit_once('.').map_or("bin", |(_, e)| e);
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(KEY_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("products/{millis}-{suffix}.{ext}")
}

/// Validate and upload an image, returning its public URL.
///
/// # Errors
///
/// Returns `MediaError` if validation fails or the blob store rejects
/// the upload.
pub async fn upload_image(
    storage: &StorageClient,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<String, MediaError> {
    validate_image(content_type, bytes.len())?;

    let key = object_key(file_name);
    storage.upload(&key, bytes, content_type).await?;

    Ok(storage.public_url(&key))
}

/// Remove an image by its public URL.
///
/// # Errors
///
/// Returns `MediaError::ForeignUrl` if the URL does not point into the
/// product bucket, and `MediaError::Backend` if the removal fails.
pub async fn remove_image(storage: &StorageClient, public_url: &str) -> Result<(), MediaError> {
    let key = storage
        .object_key(public_url)
        .ok_or_else(|| MediaError::ForeignUrl(public_url.to_owned()))?;
    storage.remove(&key).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_image_accepts_images_under_limit() {
        assert!(validate_image("image/png", 1024).is_ok());
        assert!(validate_image("image/jpeg", MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn test_validate_image_rejects_non_image_mime() {
        assert!(matches!(
            validate_image("application/pdf", 1024),
            Err(MediaError::NotAnImage(_))
        ));
    }

    #[test]
    fn test_validate_image_rejects_oversized() {
        assert!(matches!(
            validate_image("image/png", MAX_IMAGE_BYTES + 1),
            Err(MediaError::TooLarge(_))
        ));
    }

    #[test]
    fn test_object_key_shape() {
        let key = object_key("sofa.png");
        assert!(key.starts_with("products/"));
        assert!(key.ends_with(".png"));

        let stem = key
            .strip_prefix("products/")
            .unwrap()
            .strip_suffix(".png")
            .unwrap();
        let (millis, suffix) = stem.split_once('-').unwrap();
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(suffix.len(), KEY_SUFFIX_LEN);
    }

    #[test]
    fn test_object_key_without_extension() {
        let key = object_key("photo");
        assert!(key.ends_with(".bin"));
    }

    #[test]
    fn test_object_keys_are_unique() {
        assert_ne!(object_key("a.png"), object_key("a.png"));
    }
}
