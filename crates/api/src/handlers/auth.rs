//! Handler for the shared admin password login.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use venue_core::error::CoreError;
use venue_db::repositories::AdminRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::auth::ROLE_ADMIN;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/login
///
/// Exchange the admin password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = AdminRepo::find_first(&state.pool).await?.ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized("No admin configured".into()))
    })?;

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!("Admin login rejected: invalid password");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let access_token = generate_access_token(admin.id, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(admin_id = admin.id, "Admin logged in");
    Ok(Json(LoginResponse {
        success: true,
        access_token,
        expires_in: state.config.jwt.expires_in_secs(),
    }))
}
