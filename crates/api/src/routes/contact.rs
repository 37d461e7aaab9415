use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`: `GET /` is public, `POST /` upserts (admin).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(contact::get).post(contact::upsert))
}
