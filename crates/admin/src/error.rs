//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use cabella_backend::BackendError;

use crate::services::auth::AuthError;
use crate::services::media::MediaError;
use crate::services::orders::AdvanceError;
use crate::services::products::ProductInputError;

/// Application-level error type for the back-office.
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote data service operation failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Image upload or removal failed.
    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    /// Product form validation failed.
    #[error("Product input error: {0}")]
    ProductInput(#[from] ProductInputError),

    /// Order advance failed.
    #[error("Advance error: {0}")]
    Advance(#[from] AdvanceError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Session read or write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Backend(_)
                | Self::Internal(_)
                | Self::Session(_)
                | Self::Auth(AuthError::Backend(_))
                | Self::Media(MediaError::Backend(_))
                | Self::Advance(AdvanceError::Backend(_))
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::InvalidEmail(_)) => StatusCode::BAD_REQUEST,
            Self::Media(MediaError::NotAnImage(_) | MediaError::TooLarge(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Media(MediaError::ForeignUrl(_)) => StatusCode::BAD_REQUEST,
            Self::ProductInput(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Advance(AdvanceError::AlreadyCompleted) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Auth(AuthError::InvalidCredentials) => {
                "Email ou mot de passe incorrect".to_string()
            }
            Self::Auth(AuthError::InvalidEmail(_)) => "Adresse email invalide".to_string(),
            Self::Media(MediaError::NotAnImage(_)) => {
                "Veuillez sélectionner une image".to_string()
            }
            Self::Media(MediaError::TooLarge(_)) => {
                "L'image ne doit pas dépasser 5MB".to_string()
            }
            Self::Media(MediaError::ForeignUrl(_)) => "URL d'image invalide".to_string(),
            Self::ProductInput(err) => err.to_string(),
            Self::Advance(AdvanceError::AlreadyCompleted) => {
                "Commande déjà terminée".to_string()
            }
            Self::NotFound(_) | Self::BadRequest(_) => self.to_string(),
            _ => "Une erreur est survenue".to_string(),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_media_errors_are_client_errors() {
        assert_eq!(
            get_status(AppError::Media(MediaError::NotAnImage("text/html".into()))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Media(MediaError::TooLarge(6_000_000))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_invalid_credentials_is_unauthorized() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_advance_on_completed_is_conflict() {
        assert_eq!(
            get_status(AppError::Advance(AdvanceError::AlreadyCompleted)),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_backend_errors_are_masked() {
        let err = AppError::Internal("connection pool exhausted".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
