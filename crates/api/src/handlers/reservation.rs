//! Handlers for the `/reservations` resource.
//!
//! Creation is public and goes through the daily capacity check. Listing and
//! status changes are admin-only.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use venue_core::admission::{parse_requested_date, DayBucket};
use venue_core::error::CoreError;
use venue_core::reservation::{
    validate_guest_count, validate_required, validate_transition, ReservationStatus,
};
use venue_core::types::DbId;
use venue_db::models::pack::Pack;
use venue_db::models::reservation::{
    CreateReservation, ReservationWithPack, SubmitReservation, UpdateReservationStatus,
};
use venue_db::repositories::{Admission, PackRepo, ReservationRepo};
use venue_events::ReservationNotice;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::notifications::dispatch_reservation_notice;
use crate::query::AvailabilityParams;
use crate::state::AppState;

/// Response body for `GET /reservations/availability`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub date: NaiveDate,
    pub capacity: i32,
    pub booked: i64,
    /// Spots still open, never below zero.
    pub remaining: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/reservations
///
/// Submit a reservation. It is stored as `PENDING` only if the requested
/// calendar day can still hold the party; otherwise nothing is written and
/// the response reports the spots left.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SubmitReservation>,
) -> AppResult<Json<ReservationWithPack>> {
    validate_required("name", &input.name)?;
    validate_required("email", &input.email)?;
    validate_required("phone", &input.phone)?;
    validate_guest_count(input.guests)?;

    let policy = state.config.admission_policy();
    let date = parse_requested_date(&input.date, policy.venue_zone)?;
    let day = policy.day_of(date)?;

    let pack = match input.pack_id {
        Some(id) => Some(
            PackRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound { entity: "Pack", id }))?,
        ),
        None => None,
    };

    let request = CreateReservation {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        phone: input.phone.trim().to_string(),
        guests: input.guests,
        date,
        pack_id: input.pack_id,
    };

    let reservation = match ReservationRepo::admit(&state.pool, &request, &day, &policy).await? {
        Admission::Admitted(reservation) => reservation,
        Admission::Rejected { remaining, .. } => {
            return Err(CoreError::CapacityExceeded { remaining }.into());
        }
    };

    tracing::info!(
        reservation_id = reservation.id,
        guests = reservation.guests,
        "Reservation created",
    );

    let notice = ReservationNotice {
        name: reservation.name.clone(),
        email: reservation.email.clone(),
        phone: reservation.phone.clone(),
        guests: reservation.guests,
        date: reservation.date,
        pack_name: pack
            .as_ref()
            .map(|p| p.display_name().to_string())
            .filter(|name| !name.trim().is_empty()),
    };
    dispatch_reservation_notice(&state, notice);

    Ok(Json(ReservationWithPack { reservation, pack }))
}

/// GET /api/reservations
///
/// List every reservation, newest submission first, with its pack resolved.
pub async fn list(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ReservationWithPack>>> {
    let reservations = ReservationRepo::list(&state.pool).await?;

    let mut pack_ids: Vec<DbId> = reservations.iter().filter_map(|r| r.pack_id).collect();
    pack_ids.sort_unstable();
    pack_ids.dedup();
    let packs: HashMap<DbId, Pack> = PackRepo::find_by_ids(&state.pool, &pack_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let items = reservations
        .into_iter()
        .map(|reservation| {
            let pack = reservation.pack_id.and_then(|id| packs.get(&id).cloned());
            ReservationWithPack { reservation, pack }
        })
        .collect();
    Ok(Json(items))
}

/// PUT /api/reservations/{id}/status
///
/// Overwrite a reservation's status. Capacity is not re-checked when a
/// cancelled reservation is reactivated.
pub async fn update_status(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReservationStatus>,
) -> AppResult<Json<ReservationWithPack>> {
    let target: ReservationStatus = input.status.parse()?;

    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        })
    };

    let current = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;
    let from = current.status()?;
    validate_transition(from, target)?;

    let reservation = ReservationRepo::update_status(&state.pool, id, target)
        .await?
        .ok_or_else(not_found)?;

    let pack = match reservation.pack_id {
        Some(pack_id) => PackRepo::find_by_id(&state.pool, pack_id).await?,
        None => None,
    };

    tracing::info!(
        reservation_id = id,
        admin_id = admin.admin_id,
        from = %from,
        to = %target,
        "Reservation status updated",
    );
    Ok(Json(ReservationWithPack { reservation, pack }))
}

/// GET /api/reservations/availability?date=2026-07-04
///
/// Report how many guests the calendar day containing `date` already holds.
pub async fn availability(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<Json<Availability>> {
    let policy = state.config.admission_policy();

    let bucket = match NaiveDate::parse_from_str(params.date.trim(), "%Y-%m-%d") {
        Ok(date) => DayBucket::for_date(date, policy.venue_zone)?,
        Err(_) => policy.day_of(parse_requested_date(&params.date, policy.venue_zone)?)?,
    };

    let booked = ReservationRepo::booked_guests(&state.pool, &bucket).await?;

    Ok(Json(Availability {
        date: bucket.date,
        capacity: policy.daily_capacity,
        booked,
        remaining: policy.remaining(booked).max(0),
    }))
}
