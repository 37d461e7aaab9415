//! Contact information singleton.
//!
//! The `email` field doubles as the destination for reservation notices.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// The single row of the `contact_info` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub id: DbId,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub maps_url: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub whatsapp: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for replacing the contact information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertContactInfo {
    pub address: String,
    pub email: String,
    pub phone: String,
    pub maps_url: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub whatsapp: Option<String>,
}
