//! Venue event (listing) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub title_fr: String,
    pub title_en: String,
    pub title_pt: String,
    pub date: Timestamp,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_pt: Option<String>,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event. Missing English/Portuguese titles fall back
/// to the French title.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub title_fr: String,
    pub title_en: Option<String>,
    pub title_pt: Option<String>,
    pub date: Timestamp,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_pt: Option<String>,
    pub image: Option<String>,
}

/// DTO for updating an existing event. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    pub title_fr: Option<String>,
    pub title_en: Option<String>,
    pub title_pt: Option<String>,
    pub date: Option<Timestamp>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_pt: Option<String>,
    pub image: Option<String>,
}
