//! Errors returned by the data service and blob store clients.

use thiserror::Error;

/// Errors that can occur when talking to the remote backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body, truncated.
        message: String,
    },

    /// A row violated a uniqueness constraint.
    #[error("conflict: {0}")]
    Conflict(String),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An insert with `return=representation` came back empty.
    #[error("backend returned no rows for {0}")]
    EmptyReturn(&'static str),

    /// The `Content-Range` header of a count request was missing or
    /// malformed.
    #[error("unparseable count response: {0}")]
    BadCount(String),
}

/// Error payload shape of the data service.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = BackendError::Api {
            status: 500,
            message: "internal".to_owned(),
        };
        assert_eq!(err.to_string(), "backend error (HTTP 500): internal");
    }

    #[test]
    fn test_conflict_display() {
        let err = BackendError::Conflict("clients.email".to_owned());
        assert_eq!(err.to_string(), "conflict: clients.email");
    }
}
