//! Route definitions for the `/menu` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::menu;
use crate::state::AppState;

/// Routes mounted at `/menu`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (admin)
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::list).post(menu::create))
        .route("/{id}", put(menu::update).delete(menu::delete))
}
