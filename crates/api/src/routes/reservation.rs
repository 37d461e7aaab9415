//! Route definitions for the `/reservations` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::reservation;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// ```text
/// GET  /                -> list (admin)
/// POST /                -> create
/// GET  /availability    -> availability
/// PUT  /{id}/status     -> update_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reservation::list).post(reservation::create))
        .route("/availability", get(reservation::availability))
        .route("/{id}/status", put(reservation::update_status))
}
