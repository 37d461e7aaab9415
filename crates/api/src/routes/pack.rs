//! Route definitions for the `/packs` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::pack;
use crate::state::AppState;

/// Routes mounted at `/packs`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (admin)
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pack::list).post(pack::create))
        .route("/{id}", put(pack::update).delete(pack::delete))
}
