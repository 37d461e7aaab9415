//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the menu listing (`?include_unavailable=true`).
#[derive(Debug, Deserialize)]
pub struct IncludeUnavailableParams {
    #[serde(default)]
    pub include_unavailable: bool,
}

/// Query parameters for the availability lookup (`?date=2026-07-04`).
///
/// `date` accepts a bare calendar date or any requested-date format.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub date: String,
}
