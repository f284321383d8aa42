//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring client authentication in route handlers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentClient, session_keys};

/// Extractor that requires a logged-in client.
///
/// If no client is in the session, the request is rejected with 401.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireClient(client): RequireClient,
/// ) -> impl IntoResponse {
///     format!("Bonjour, {}!", client.name)
/// }
/// ```
pub struct RequireClient(pub CurrentClient);

/// Rejection returned when authentication is required but missing.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

impl<S> FromRequestParts<S> for RequireClient
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Session is placed in extensions by SessionManagerLayer
        let session = parts.extensions.get::<Session>().ok_or(AuthRejection)?;

        let client: CurrentClient = session
            .get(session_keys::CURRENT_CLIENT)
            .await
            .ok()
            .flatten()
            .ok_or(AuthRejection)?;

        Ok(Self(client))
    }
}

/// Helper to set the current client in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_client(
    session: &Session,
    client: &CurrentClient,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_CLIENT, client).await
}

/// Helper to clear the current client from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_client(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentClient>(session_keys::CURRENT_CLIENT)
        .await?;
    Ok(())
}
