//! Repository for the `hero_config` singleton table.

use sqlx::PgPool;

use crate::models::hero_config::{HeroConfig, UpsertHeroConfig};

const COLUMNS: &str = "id, video_url, created_at, updated_at";

pub struct HeroConfigRepo;

impl HeroConfigRepo {
    pub async fn find(pool: &PgPool) -> Result<Option<HeroConfig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_config ORDER BY id LIMIT 1");
        sqlx::query_as::<_, HeroConfig>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update the existing row, or insert the first one.
    pub async fn upsert(pool: &PgPool, input: &UpsertHeroConfig) -> Result<HeroConfig, sqlx::Error> {
        match Self::find(pool).await? {
            Some(existing) => {
                let query = format!(
                    "UPDATE hero_config SET video_url = $2 WHERE id = $1 RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, HeroConfig>(&query)
                    .bind(existing.id)
                    .bind(&input.video_url)
                    .fetch_one(pool)
                    .await
            }
            None => {
                let query =
                    format!("INSERT INTO hero_config (video_url) VALUES ($1) RETURNING {COLUMNS}");
                sqlx::query_as::<_, HeroConfig>(&query)
                    .bind(&input.video_url)
                    .fetch_one(pool)
                    .await
            }
        }
    }
}
