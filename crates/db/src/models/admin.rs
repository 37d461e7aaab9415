//! Shared administrator credential.

use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// A row from the `admins` table. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
