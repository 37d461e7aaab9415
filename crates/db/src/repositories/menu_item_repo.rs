//! Repository for the `menu_items` table.

use sqlx::PgPool;
use venue_core::types::DbId;

use crate::models::menu_item::{CreateMenuItem, MenuItem, UpdateMenuItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name_fr, name_en, name_pt, description_fr, description_en, \
                       description_pt, price, category, image, available, created_at, updated_at";

/// Provides CRUD operations for menu items.
pub struct MenuItemRepo;

impl MenuItemRepo {
    /// Insert a new menu item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMenuItem) -> Result<MenuItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu_items \
                (name_fr, name_en, name_pt, description_fr, description_en, description_pt, \
                 price, category, image, available) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(&input.name_fr)
            .bind(&input.name_en)
            .bind(&input.name_pt)
            .bind(&input.description_fr)
            .bind(&input.description_en)
            .bind(&input.description_pt)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.image)
            .bind(input.available)
            .fetch_one(pool)
            .await
    }

    /// List menu items, optionally including unavailable ones.
    ///
    /// Ordered by category, then id.
    pub async fn list(
        pool: &PgPool,
        include_unavailable: bool,
    ) -> Result<Vec<MenuItem>, sqlx::Error> {
        let query = if include_unavailable {
            format!("SELECT {COLUMNS} FROM menu_items ORDER BY category, id")
        } else {
            format!(
                "SELECT {COLUMNS} FROM menu_items WHERE available = true ORDER BY category, id"
            )
        };
        sqlx::query_as::<_, MenuItem>(&query).fetch_all(pool).await
    }

    /// Update a menu item. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMenuItem,
    ) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!(
            "UPDATE menu_items SET \
                name_fr = COALESCE($2, name_fr), \
                name_en = COALESCE($3, name_en), \
                name_pt = COALESCE($4, name_pt), \
                description_fr = COALESCE($5, description_fr), \
                description_en = COALESCE($6, description_en), \
                description_pt = COALESCE($7, description_pt), \
                price = COALESCE($8, price), \
                category = COALESCE($9, category), \
                image = COALESCE($10, image), \
                available = COALESCE($11, available) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .bind(&input.name_fr)
            .bind(&input.name_en)
            .bind(&input.name_pt)
            .bind(&input.description_fr)
            .bind(&input.description_en)
            .bind(&input.description_pt)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.image)
            .bind(input.available)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
