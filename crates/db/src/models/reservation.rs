//! Reservation entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::error::CoreError;
use venue_core::reservation::ReservationStatus;
use venue_core::types::{DbId, Timestamp};

use crate::models::pack::Pack;
use crate::models::serde_helpers::{i32_lenient, opt_i64_lenient};

/// A row from the `reservations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: i32,
    pub date: Timestamp,
    /// One of `PENDING`, `CONFIRMED`, `CANCELLED` (enforced by a CHECK constraint).
    pub status: String,
    pub pack_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Reservation {
    pub fn status(&self) -> Result<ReservationStatus, CoreError> {
        self.status.parse()
    }
}

/// A reservation with its package resolved, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationWithPack {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub pack: Option<Pack>,
}

/// Raw reservation request as submitted by the public booking form.
///
/// `date` stays a string so it can be parsed in the venue's offset, and the
/// numeric fields accept the form's string values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReservation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(deserialize_with = "i32_lenient")]
    pub guests: i32,
    pub date: String,
    #[serde(default, deserialize_with = "opt_i64_lenient")]
    pub pack_id: Option<DbId>,
}

/// Validated input for inserting a reservation. Always inserted as `PENDING`.
#[derive(Debug, Clone)]
pub struct CreateReservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: i32,
    pub date: Timestamp,
    pub pack_id: Option<DbId>,
}

/// DTO for an administrative status change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReservationStatus {
    pub status: String,
}
