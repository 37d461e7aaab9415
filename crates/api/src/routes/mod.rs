pub mod auth;
pub mod contact;
pub mod event;
pub mod health;
pub mod hero;
pub mod menu;
pub mod pack;
pub mod reservation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                               login (public)
///
/// /reservations                        list (admin), create (public)
/// /reservations/availability           spots left for a day (public)
/// /reservations/{id}/status            update status (admin)
///
/// /packs                               list (public), create (admin)
/// /packs/{id}                          update, delete (admin)
///
/// /menu                                list (public), create (admin)
/// /menu/{id}                           update, delete (admin)
///
/// /events                              list (public), create (admin)
/// /events/{id}                         update, delete (admin)
///
/// /contact                             get (public), upsert (admin)
/// /hero                                get (public), upsert (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/reservations", reservation::router())
        .nest("/packs", pack::router())
        .nest("/menu", menu::router())
        .nest("/events", event::router())
        .nest("/contact", contact::router())
        .nest("/hero", hero::router())
}
