//! Handlers for the `/contact` singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::reservation::validate_required;
use venue_db::models::contact_info::UpsertContactInfo;
use venue_db::repositories::ContactInfoRepo;

use crate::error::AppResult;
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// GET /api/contact
///
/// Returns the contact details, seeding the default row on first access.
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let contact = ContactInfoRepo::get_or_create_default(&state.pool).await?;
    Ok(Json(contact))
}

/// POST /api/contact
///
/// Replace the contact details. The email also receives reservation notices.
pub async fn upsert(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertContactInfo>,
) -> AppResult<impl IntoResponse> {
    validate_required("address", &input.address)?;
    validate_required("email", &input.email)?;
    validate_required("phone", &input.phone)?;

    let contact = ContactInfoRepo::upsert(&state.pool, &input).await?;
    tracing::info!(contact_id = contact.id, "Contact info updated");
    Ok(Json(contact))
}
