//! Bearer-token extractor for admin-only handlers.
//!
//! Public handlers take no extractor; admin handlers add an [`AdminUser`]
//! argument and are rejected with 401 (no or bad token) or 403 (token for a
//! role other than admin) before their body runs.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use venue_core::error::CoreError;
use venue_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::auth::ROLE_ADMIN;
use crate::error::AppError;
use crate::state::AppState;

/// The administrator making the request.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub admin_id: DbId,
}

fn unauthorized(message: &str) -> AppError {
    CoreError::Unauthorized(message.to_string()).into()
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?
        .to_str()
        .map_err(|_| unauthorized("Authorization header is not valid text"))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Expected Authorization: Bearer <token>"))
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        if claims.role != ROLE_ADMIN {
            return Err(CoreError::Forbidden("Admin role required".into()).into());
        }

        Ok(AdminUser {
            admin_id: claims.sub,
        })
    }
}
