//! Home page hero configuration singleton.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// The single row of the `hero_config` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    pub id: DbId,
    pub video_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertHeroConfig {
    pub video_url: String,
}
