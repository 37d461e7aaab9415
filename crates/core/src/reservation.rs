//! Reservation lifecycle and request validation.
//!
//! Reservations start as [`ReservationStatus::Pending`] and only move when an
//! administrator changes them. No transition is automatic.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Party size bounds
// ---------------------------------------------------------------------------

/// Smallest party accepted for a single reservation.
pub const MIN_GUESTS: i32 = 1;

/// Largest party accepted for a single reservation.
pub const MAX_GUESTS: i32 = 6;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Status of a reservation, stored as upper-case text in `reservations.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    /// Submitted by a guest and awaiting review.
    Pending,
    /// Accepted by an administrator.
    Confirmed,
    /// Withdrawn by an administrator. Excluded from the daily aggregate.
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 3] = [Self::Pending, Self::Confirmed, Self::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether guests in this status count against the day's capacity.
    pub fn holds_capacity(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Unknown reservation status '{other}'. Expected one of PENDING, CONFIRMED, CANCELLED"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Returns the statuses an administrator may move a reservation to from `from`.
///
/// Every status is currently reachable from every other, including moving a
/// cancelled reservation back to an active state.
pub fn valid_transitions(from: ReservationStatus) -> &'static [ReservationStatus] {
    match from {
        ReservationStatus::Pending
        | ReservationStatus::Confirmed
        | ReservationStatus::Cancelled => &ReservationStatus::ALL,
    }
}

pub fn can_transition(from: ReservationStatus, to: ReservationStatus) -> bool {
    valid_transitions(from).contains(&to)
}

/// Validate an administrative status change.
pub fn validate_transition(from: ReservationStatus, to: ReservationStatus) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid reservation status transition: {from} -> {to}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Request validation
// ---------------------------------------------------------------------------

/// Validate that a party size is within [`MIN_GUESTS`]..=[`MAX_GUESTS`].
pub fn validate_guest_count(guests: i32) -> Result<(), CoreError> {
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(CoreError::Validation(format!(
            "guests must be between {MIN_GUESTS} and {MAX_GUESTS}, got {guests}"
        )));
    }
    Ok(())
}

/// Validate that a required contact field is present and not blank.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
