use std::sync::Arc;

use venue_events::ReservationNotifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: venue_db::DbPool,
    /// Server configuration (capacity policy, JWT settings, CORS).
    pub config: Arc<ServerConfig>,
    /// Reservation notice delivery. `None` when SMTP is not configured.
    pub notifier: Option<Arc<dyn ReservationNotifier>>,
}
