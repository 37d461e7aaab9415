//! Repository for the `admins` table.

use sqlx::PgPool;

use crate::models::admin::Admin;

const COLUMNS: &str = "id, password_hash, created_at, updated_at";

/// Access to the shared administrator credential.
pub struct AdminRepo;

impl AdminRepo {
    /// The configured administrator, if any. Only the first row is used.
    pub async fn find_first(pool: &PgPool) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Admin>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Store a new administrator credential from an already-hashed password.
    pub async fn create(pool: &PgPool, password_hash: &str) -> Result<Admin, sqlx::Error> {
        let query = format!("INSERT INTO admins (password_hash) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Admin>(&query)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }
}
