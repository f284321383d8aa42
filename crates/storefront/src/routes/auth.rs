//! Authentication route handlers.
//!
//! Registration, login, logout and profile updates. A successful
//! registration or login puts the client identity into the session.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use cabella_backend::models::{Client, ClientPatch};
use cabella_core::{ClientId, Email};

use crate::error::{AppError, Result};
use crate::middleware::auth::{RequireClient, clear_current_client, set_current_client};
use crate::models::CurrentClient;
use crate::services::auth::{AuthService, RegisterInput};
use crate::state::AppState;

// =============================================================================
// Payloads
// =============================================================================

/// Registration payload.
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Profile update payload. Omitted fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct ProfilePayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Client account as exposed over the API. The password hash never
/// appears here.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: ClientId,
    pub email: Email,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ProfileResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            email: client.email,
            name: client.name,
            phone: client.phone,
            address: client.address,
            created_at: client.created_at,
        }
    }
}

fn current_client_of(client: &Client) -> CurrentClient {
    CurrentClient {
        id: client.id,
        email: client.email.clone(),
        name: client.name.clone(),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /auth/register - create an account and log the client in.
#[instrument(skip(state, session, payload), fields(email = %payload.email))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Le nom est requis".to_string()));
    }

    let client = AuthService::new(state.backend())
        .register(RegisterInput {
            email: &payload.email,
            password: &payload.password,
            password_confirm: &payload.password_confirm,
            name: payload.name.trim(),
            phone: payload.phone.as_deref(),
            address: payload.address.as_deref(),
        })
        .await?;

    set_current_client(&session, &current_client_of(&client)).await?;
    tracing::info!(client_id = %client.id, "client registered");

    Ok((StatusCode::CREATED, Json(ProfileResponse::from(client))))
}

/// POST /auth/login - authenticate and store the identity in the session.
#[instrument(skip(state, session, payload), fields(email = %payload.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<ProfileResponse>> {
    let client = AuthService::new(state.backend())
        .login(&payload.email, &payload.password)
        .await?;

    set_current_client(&session, &current_client_of(&client)).await?;
    tracing::info!(client_id = %client.id, "client logged in");

    Ok(Json(ProfileResponse::from(client)))
}

/// POST /auth/logout - drop the identity from the session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_client(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/me - the current session identity.
#[instrument(skip(client))]
pub async fn me(RequireClient(client): RequireClient) -> Json<CurrentClient> {
    Json(client)
}

/// PUT /auth/profile - update the profile of the logged-in client.
#[instrument(skip(state, session, client, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    RequireClient(client): RequireClient,
    Json(payload): Json<ProfilePayload>,
) -> Result<Json<ProfileResponse>> {
    if payload.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::BadRequest("Le nom est requis".to_string()));
    }

    let updated = AuthService::new(state.backend())
        .update_profile(
            client.id,
            &ClientPatch {
                name: payload.name,
                phone: payload.phone,
                address: payload.address,
            },
        )
        .await?;

    // The session identity carries the name; keep it in sync.
    set_current_client(&session, &current_client_of(&updated)).await?;

    Ok(Json(ProfileResponse::from(updated)))
}
