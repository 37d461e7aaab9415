//! Menu item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// A row from the `menu_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: DbId,
    pub name_fr: String,
    pub name_en: String,
    pub name_pt: String,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_pt: Option<String>,
    /// Price in the smallest currency unit.
    pub price: i32,
    /// Free-form grouping such as `HOOKAH`, `DRINK` or `FOOD`.
    pub category: String,
    pub image: Option<String>,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new menu item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItem {
    pub name_fr: String,
    pub name_en: String,
    pub name_pt: String,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_pt: Option<String>,
    pub price: i32,
    pub category: String,
    pub image: Option<String>,
    pub available: Option<bool>,
}

/// DTO for updating an existing menu item. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItem {
    pub name_fr: Option<String>,
    pub name_en: Option<String>,
    pub name_pt: Option<String>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_pt: Option<String>,
    pub price: Option<i32>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub available: Option<bool>,
}
