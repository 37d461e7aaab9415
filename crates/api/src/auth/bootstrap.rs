//! First-start creation of the admin credential.

use venue_db::repositories::AdminRepo;
use venue_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Store `password` as the admin credential if no admin exists yet.
///
/// Returns `true` when a new admin row was created. An existing admin is
/// never overwritten.
pub async fn ensure_admin(pool: &DbPool, password: Option<&str>) -> AppResult<bool> {
    if AdminRepo::find_first(pool).await?.is_some() {
        return Ok(false);
    }

    let Some(password) = password else {
        tracing::warn!("No admin configured and ADMIN_PASSWORD is unset; dashboard login disabled");
        return Ok(false);
    };

    let hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let admin = AdminRepo::create(pool, &hash).await?;
    tracing::info!(admin_id = admin.id, "Admin credential created from ADMIN_PASSWORD");
    Ok(true)
}
