//! Admin authentication route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::auth::{RequireAdmin, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// POST /auth/login - authenticate and store the identity in the session.
#[instrument(skip(state, session, payload), fields(email = %payload.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<CurrentAdmin>> {
    let admin = AuthService::new(state.backend())
        .login(&payload.email, &payload.password)
        .await?;

    let current = CurrentAdmin {
        id: admin.id,
        email: admin.email,
        name: admin.name,
    };
    set_current_admin(&session, &current).await?;
    tracing::info!(admin_id = %current.id, "admin logged in");

    Ok(Json(current))
}

/// POST /auth/logout - drop the identity from the session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_admin(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/me - the current session identity.
#[instrument(skip(admin))]
pub async fn me(RequireAdmin(admin): RequireAdmin) -> Json<CurrentAdmin> {
    Json(admin)
}
