//! Handlers for the `/menu` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::error::CoreError;
use venue_core::reservation::validate_required;
use venue_core::types::DbId;
use venue_db::models::menu_item::{CreateMenuItem, UpdateMenuItem};
use venue_db::repositories::MenuItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::query::IncludeUnavailableParams;
use crate::state::AppState;

fn validate_price(price: i32) -> Result<(), CoreError> {
    if price < 0 {
        return Err(CoreError::Validation(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(())
}

/// GET /api/menu?include_unavailable=false
///
/// List menu items. Unavailable items are hidden unless requested.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeUnavailableParams>,
) -> AppResult<impl IntoResponse> {
    let items = MenuItemRepo::list(&state.pool, params.include_unavailable).await?;
    Ok(Json(items))
}

/// POST /api/menu
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMenuItem>,
) -> AppResult<impl IntoResponse> {
    validate_required("nameFr", &input.name_fr)?;
    validate_required("category", &input.category)?;
    validate_price(input.price)?;

    let item = MenuItemRepo::create(&state.pool, &input).await?;
    tracing::info!(menu_item_id = item.id, "Menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/menu/{id}
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMenuItem>,
) -> AppResult<impl IntoResponse> {
    if let Some(price) = input.price {
        validate_price(price)?;
    }

    let item = MenuItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MenuItem",
            id,
        }))?;
    Ok(Json(item))
}

/// DELETE /api/menu/{id}
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MenuItemRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MenuItem",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
