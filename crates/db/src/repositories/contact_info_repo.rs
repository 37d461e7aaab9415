//! Repository for the `contact_info` singleton table.

use sqlx::PgPool;

use crate::models::contact_info::{ContactInfo, UpsertContactInfo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, address, email, phone, maps_url, instagram, facebook, whatsapp, created_at, updated_at";

/// Contact details written the first time the row is read and none exists.
const DEFAULT_ADDRESS: &str = "Praia, Cape Verde";
const DEFAULT_EMAIL: &str = "info@huqqapraia.com";
const DEFAULT_PHONE: &str = "+238 999 99 99";

/// Provides read and upsert for the venue contact details.
pub struct ContactInfoRepo;

impl ContactInfoRepo {
    /// Return the contact row, if one has been stored.
    pub async fn find(pool: &PgPool) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info ORDER BY id LIMIT 1");
        sqlx::query_as::<_, ContactInfo>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Return the contact row, inserting the default details first if absent.
    pub async fn get_or_create_default(pool: &PgPool) -> Result<ContactInfo, sqlx::Error> {
        if let Some(existing) = Self::find(pool).await? {
            return Ok(existing);
        }
        let defaults = UpsertContactInfo {
            address: DEFAULT_ADDRESS.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            maps_url: Some(String::new()),
            instagram: None,
            facebook: None,
            whatsapp: None,
        };
        Self::insert(pool, &defaults).await
    }

    /// Replace the stored contact details, creating the row if needed.
    pub async fn upsert(pool: &PgPool, input: &UpsertContactInfo) -> Result<ContactInfo, sqlx::Error> {
        let Some(existing) = Self::find(pool).await? else {
            return Self::insert(pool, input).await;
        };

        let query = format!(
            "UPDATE contact_info SET \
                address = $2, email = $3, phone = $4, maps_url = $5, \
                instagram = $6, facebook = $7, whatsapp = $8 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(existing.id)
            .bind(&input.address)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.maps_url)
            .bind(&input.instagram)
            .bind(&input.facebook)
            .bind(&input.whatsapp)
            .fetch_one(pool)
            .await
    }

    async fn insert(pool: &PgPool, input: &UpsertContactInfo) -> Result<ContactInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_info \
                (address, email, phone, maps_url, instagram, facebook, whatsapp) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(&input.address)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.maps_url)
            .bind(&input.instagram)
            .bind(&input.facebook)
            .bind(&input.whatsapp)
            .fetch_one(pool)
            .await
    }
}
