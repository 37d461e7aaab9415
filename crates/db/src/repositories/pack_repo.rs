//! Repository for the `packs` table.

use sqlx::PgPool;
use venue_core::types::DbId;

use crate::models::pack::{CreatePack, Pack, UpdatePack};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title_fr, title_en, title_pt, items_fr, items_en, items_pt, \
                       price, recommended_for, created_at, updated_at";

/// Provides CRUD operations for packs.
pub struct PackRepo;

impl PackRepo {
    /// Insert a new pack, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePack) -> Result<Pack, sqlx::Error> {
        let query = format!(
            "INSERT INTO packs \
                (title_fr, title_en, title_pt, items_fr, items_en, items_pt, price, recommended_for) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pack>(&query)
            .bind(&input.title_fr)
            .bind(&input.title_en)
            .bind(&input.title_pt)
            .bind(&input.items_fr)
            .bind(&input.items_en)
            .bind(&input.items_pt)
            .bind(&input.price)
            .bind(&input.recommended_for)
            .fetch_one(pool)
            .await
    }

    /// Find a pack by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pack>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packs WHERE id = $1");
        sqlx::query_as::<_, Pack>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every pack whose id is in `ids`. Unknown ids are skipped.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Pack>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM packs WHERE id = ANY($1)");
        sqlx::query_as::<_, Pack>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List all packs in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Pack>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packs ORDER BY id");
        sqlx::query_as::<_, Pack>(&query).fetch_all(pool).await
    }

    /// Update a pack. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePack,
    ) -> Result<Option<Pack>, sqlx::Error> {
        let query = format!(
            "UPDATE packs SET \
                title_fr = COALESCE($2, title_fr), \
                title_en = COALESCE($3, title_en), \
                title_pt = COALESCE($4, title_pt), \
                items_fr = COALESCE($5, items_fr), \
                items_en = COALESCE($6, items_en), \
                items_pt = COALESCE($7, items_pt), \
                price = COALESCE($8, price), \
                recommended_for = COALESCE($9, recommended_for) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pack>(&query)
            .bind(id)
            .bind(&input.title_fr)
            .bind(&input.title_en)
            .bind(&input.title_pt)
            .bind(&input.items_fr)
            .bind(&input.items_en)
            .bind(&input.items_pt)
            .bind(&input.price)
            .bind(&input.recommended_for)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pack. Reservations referencing it keep their row with
    /// `pack_id` cleared by the foreign key.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM packs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
