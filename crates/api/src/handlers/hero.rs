//! Handlers for the `/hero` singleton.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use venue_core::reservation::validate_required;
use venue_db::models::hero_config::UpsertHeroConfig;
use venue_db::repositories::HeroConfigRepo;

use crate::error::AppResult;
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// GET /api/hero
///
/// Returns the hero configuration, or `{}` when none has been saved.
pub async fn get(State(state): State<AppState>) -> AppResult<Response> {
    let response = match HeroConfigRepo::find(&state.pool).await? {
        Some(hero) => Json(hero).into_response(),
        None => Json(json!({})).into_response(),
    };
    Ok(response)
}

/// POST /api/hero
pub async fn upsert(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertHeroConfig>,
) -> AppResult<impl IntoResponse> {
    validate_required("videoUrl", &input.video_url)?;

    let hero = HeroConfigRepo::upsert(&state.pool, &input).await?;
    Ok(Json(hero))
}
