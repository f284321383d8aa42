//! Table interface client implementation.
//!
//! Thin wrapper over `reqwest` for the data service's REST dialect. Every
//! call is request/response; failures are surfaced as [`BackendError`]
//! and never retried here.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::{ApiErrorBody, BackendError};
use crate::query::Select;

/// How much of an error body to keep in the error message.
const ERROR_BODY_LIMIT: usize = 200;

/// Connection settings for the managed backend.
///
/// Implements `Debug` manually to redact the service key.
#[derive(Clone)]
pub struct BackendConfig {
    /// Base URL of the backend project (e.g. `https://xyz.supabase.co`).
    pub url: String,
    /// Service key sent as both `apikey` and bearer token.
    pub service_key: SecretString,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("service_key", &"[REDACTED]")
            .finish()
    }
}

/// Client for the table-oriented interface of the remote backend.
///
/// Cheaply cloneable; shares one `reqwest` connection pool.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl BackendClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            inner: Arc::new(BackendClientInner {
                http: reqwest::Client::new(),
                base_url: config.url.trim_end_matches('/').to_owned(),
                service_key: config.service_key.expose_secret().to_owned(),
            }),
        }
    }

    /// Base URL of the backend project.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    pub(crate) fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.inner.service_key)
            .bearer_auth(&self.inner.service_key)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.inner.base_url)
    }

    /// Select rows from `table`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the request fails or the response cannot
    /// be decoded into `T`.
    #[instrument(skip(self, query), fields(table = table))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Select,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .authed(self.inner.http.get(self.table_url(table)))
            .query(&query.to_params())
            .send()
            .await?;
        let response = check(response).await?;
        let rows = response.json().await?;
        Ok(rows)
    }

    /// Select at most one row from `table`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the request fails or the response cannot
    /// be decoded into `T`.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Select,
    ) -> Result<Option<T>, BackendError> {
        let mut rows: Vec<T> = self.select(table, &query.clone().limit(1)).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Insert `body` (a single object or an array for batch inserts) into
    /// `table`, returning the inserted rows.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Conflict` on uniqueness violations and
    /// `BackendError` for other failures.
    #[instrument(skip(self, body), fields(table = table))]
    pub async fn insert<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .authed(self.inner.http.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let response = check(response).await?;
        let rows = response.json().await?;
        Ok(rows)
    }

    /// Insert a single row and return it.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::EmptyReturn` if the backend answered with an
    /// empty representation, plus everything [`Self::insert`] can return.
    pub async fn insert_one<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        table: &'static str,
        body: &B,
    ) -> Result<T, BackendError> {
        let mut rows: Vec<T> = self.insert(table, body).await?;
        if rows.is_empty() {
            return Err(BackendError::EmptyReturn(table));
        }
        Ok(rows.swap_remove(0))
    }

    /// Apply a partial `patch` to the rows matched by `filters`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the request fails.
    #[instrument(skip(self, patch, filters), fields(table = table))]
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        table: &str,
        patch: &B,
        filters: &Select,
    ) -> Result<(), BackendError> {
        let response = self
            .authed(self.inner.http.patch(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .query(&filters.to_params())
            .json(patch)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Apply a partial `patch` and return the updated rows.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the request fails or the response cannot
    /// be decoded into `T`.
    pub async fn update_returning<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        table: &str,
        patch: &B,
        filters: &Select,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .authed(self.inner.http.patch(self.table_url(table)))
            .header("Prefer", "return=representation")
            .query(&filters.to_params())
            .json(patch)
            .send()
            .await?;
        let response = check(response).await?;
        let rows = response.json().await?;
        Ok(rows)
    }

    /// Delete the rows matched by `filters`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the request fails.
    #[instrument(skip(self, filters), fields(table = table))]
    pub async fn delete(&self, table: &str, filters: &Select) -> Result<(), BackendError> {
        let response = self
            .authed(self.inner.http.delete(self.table_url(table)))
            .query(&filters.to_params())
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Exact count of the rows matched by `filters`.
    ///
    /// Issued as a zero-row range request with `Prefer: count=exact`; the
    /// total comes back in the `Content-Range` header (`0-0/57`).
    ///
    /// # Errors
    ///
    /// Returns `BackendError::BadCount` if the header is missing or
    /// malformed, plus the usual request failures.
    #[instrument(skip(self, filters), fields(table = table))]
    pub async fn count(&self, table: &str, filters: &Select) -> Result<u64, BackendError> {
        let response = self
            .authed(self.inner.http.get(self.table_url(table)))
            .header("Prefer", "count=exact")
            .header("Range", "0-0")
            .query(&filters.to_params())
            .send()
            .await?;
        let response = check(response).await?;

        let header = response
            .headers()
            .get("Content-Range")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| BackendError::BadCount("missing Content-Range".to_owned()))?
            .to_owned();
        parse_content_range_total(&header)
            .ok_or(BackendError::BadCount(header))
    }
}

/// Extract the total from a `Content-Range` value such as `0-0/57` or `*/0`.
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit_once('/')?.1.parse().ok()
}

/// Map a non-success response to a `BackendError`.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.chars().take(ERROR_BODY_LIMIT).collect());

    if status == reqwest::StatusCode::CONFLICT {
        return Err(BackendError::Conflict(message));
    }

    tracing::error!(status = %status, message = %message, "backend returned non-success status");
    Err(BackendError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_range_total() {
        assert_eq!(parse_content_range_total("0-0/57"), Some(57));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("garbage"), None);
        assert_eq!(parse_content_range_total("0-0/notanumber"), None);
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = BackendConfig {
            url: "https://example.supabase.co".to_owned(),
            service_key: SecretString::from("very-secret-service-key"),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("example.supabase.co"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("very-secret-service-key"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_select_params_end_up_in_the_request_url() {
        let client = BackendClient::new(&BackendConfig {
            url: "https://example.supabase.co".to_owned(),
            service_key: SecretString::from("k"),
        });
        let query = Select::all()
            .eq("client_id", "42")
            .order_desc("created_at")
            .limit(20);

        let request = client
            .http()
            .get(client.table_url("orders"))
            .query(&query.to_params())
            .build()
            .unwrap();

        assert_eq!(
            request.url().query(),
            Some("select=*&client_id=eq.42&order=created_at.desc&limit=20")
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new(&BackendConfig {
            url: "https://example.supabase.co/".to_owned(),
            service_key: SecretString::from("k"),
        });
        assert_eq!(client.base_url(), "https://example.supabase.co");
        assert_eq!(
            client.table_url("orders"),
            "https://example.supabase.co/rest/v1/orders"
        );
    }
}
