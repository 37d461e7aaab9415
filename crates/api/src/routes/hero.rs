use axum::routing::get;
use axum::Router;

use crate::handlers::hero;
use crate::state::AppState;

/// Routes mounted at `/hero`: `GET /` is public, `POST /` upserts (admin).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(hero::get).post(hero::upsert))
}
