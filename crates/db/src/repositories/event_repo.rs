//! Repository for the `events` table.

use sqlx::PgPool;
use venue_core::types::DbId;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title_fr, title_en, title_pt, date, description_fr, description_en, \
                       description_pt, image, created_at, updated_at";

/// Provides CRUD operations for venue events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event. Missing or empty English/Portuguese titles copy the French one.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (title_fr, title_en, title_pt, date, description_fr, description_en, \
                 description_pt, image) \
             VALUES ($1, COALESCE(NULLIF($2, ''), $1), COALESCE(NULLIF($3, ''), $1), \
                     $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title_fr)
            .bind(&input.title_en)
            .bind(&input.title_pt)
            .bind(input.date)
            .bind(&input.description_fr)
            .bind(&input.description_en)
            .bind(&input.description_pt)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// List all events, soonest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY date ASC, id");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Update an event. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                title_fr = COALESCE($2, title_fr), \
                title_en = COALESCE($3, title_en), \
                title_pt = COALESCE($4, title_pt), \
                date = COALESCE($5, date), \
                description_fr = COALESCE($6, description_fr), \
                description_en = COALESCE($7, description_en), \
                description_pt = COALESCE($8, description_pt), \
                image = COALESCE($9, image) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title_fr)
            .bind(&input.title_en)
            .bind(&input.title_pt)
            .bind(input.date)
            .bind(&input.description_fr)
            .bind(&input.description_en)
            .bind(&input.description_pt)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
