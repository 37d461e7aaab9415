//! Package ("pack") entity model and DTOs.
//!
//! A pack is a priced bundle a guest may attach to a reservation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// A row from the `packs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    pub id: DbId,
    pub title_fr: String,
    pub title_en: String,
    pub title_pt: String,
    pub items_fr: Vec<String>,
    pub items_en: Vec<String>,
    pub items_pt: Vec<String>,
    /// Display price, e.g. `"12,000 CVE"`.
    pub price: String,
    pub recommended_for: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Pack {
    /// Name used in notifications: English title, falling back to French.
    pub fn display_name(&self) -> &str {
        if self.title_en.trim().is_empty() {
            &self.title_fr
        } else {
            &self.title_en
        }
    }
}

/// DTO for creating a new pack.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePack {
    pub title_fr: String,
    pub title_en: String,
    pub title_pt: String,
    #[serde(default)]
    pub items_fr: Vec<String>,
    #[serde(default)]
    pub items_en: Vec<String>,
    #[serde(default)]
    pub items_pt: Vec<String>,
    pub price: String,
    pub recommended_for: Option<String>,
}

/// DTO for updating an existing pack. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePack {
    pub title_fr: Option<String>,
    pub title_en: Option<String>,
    pub title_pt: Option<String>,
    pub items_fr: Option<Vec<String>>,
    pub items_en: Option<Vec<String>>,
    pub items_pt: Option<Vec<String>>,
    pub price: Option<String>,
    pub recommended_for: Option<String>,
}
