//! Handlers for the `/packs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::error::CoreError;
use venue_core::reservation::validate_required;
use venue_core::types::DbId;
use venue_db::models::pack::{CreatePack, UpdatePack};
use venue_db::repositories::PackRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// GET /api/packs
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let packs = PackRepo::list(&state.pool).await?;
    Ok(Json(packs))
}

/// POST /api/packs
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePack>,
) -> AppResult<impl IntoResponse> {
    validate_required("titleFr", &input.title_fr)?;
    validate_required("price", &input.price)?;

    let pack = PackRepo::create(&state.pool, &input).await?;
    tracing::info!(pack_id = pack.id, "Pack created");
    Ok((StatusCode::CREATED, Json(pack)))
}

/// PUT /api/packs/{id}
///
/// Partial update; omitted fields keep their current value.
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePack>,
) -> AppResult<impl IntoResponse> {
    let pack = PackRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pack", id }))?;
    Ok(Json(pack))
}

/// DELETE /api/packs/{id}
///
/// Reservations that referenced the pack keep existing without one.
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PackRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Pack", id }));
    }
    tracing::info!(pack_id = id, "Pack deleted");
    Ok(StatusCode::NO_CONTENT)
}
