//! Daily capacity admission control for reservations.
//!
//! A reservation is admitted only if the guests already committed to the
//! same venue-local calendar day (excluding cancelled reservations) plus the
//! requested party stay within the configured daily capacity.
//!
//! The decision itself is pure ([`check_capacity`]); the database layer runs
//! the aggregate and the insert inside one transaction guarded by an advisory
//! lock derived from [`DayBucket::lock_key`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::zone::{ensure_supported, VenueZone};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default number of guests the venue accepts per calendar day.
pub const DEFAULT_DAILY_CAPACITY: i32 = 50;

/// First key of the two-key `pg_advisory_xact_lock` used for admissions.
///
/// The second key is [`DayBucket::lock_key`], so admissions for different
/// days never wait on each other.
pub const ADMISSION_LOCK_NAMESPACE: i32 = 0x5245_5356; // "RESV"

/// Naive formats accepted for a requested date without a UTC offset.
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Capacity and calendar settings injected into the admission path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionPolicy {
    /// Maximum sum of non-cancelled guests per calendar day.
    pub daily_capacity: i32,
    /// Zone that decides which calendar day a timestamp belongs to.
    pub venue_zone: VenueZone,
}

impl AdmissionPolicy {
    pub fn new(daily_capacity: i32, venue_zone: VenueZone) -> Self {
        Self {
            daily_capacity,
            venue_zone,
        }
    }

    /// The calendar day containing `at`, in the venue zone.
    pub fn day_of(&self, at: Timestamp) -> Result<DayBucket, CoreError> {
        DayBucket::containing(at, self.venue_zone)
    }

    /// See [`check_capacity`].
    pub fn check(&self, booked: i64, requested: i32) -> Result<(), CoreError> {
        check_capacity(booked, requested, self.daily_capacity)
    }

    /// Spots left on a day that already has `booked` guests. Negative if the
    /// day is already over capacity.
    pub fn remaining(&self, booked: i64) -> i64 {
        i64::from(self.daily_capacity) - booked
    }
}

// ---------------------------------------------------------------------------
// Day bucket
// ---------------------------------------------------------------------------

/// A venue-local calendar day expressed as a half-open UTC interval
/// `[start, end)`.
///
/// `end - start` is 24 hours except on daylight saving transition days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Local midnight of `date`, in UTC.
    pub start: Timestamp,
    /// Local midnight of the following day, in UTC.
    pub end: Timestamp,
}

impl DayBucket {
    pub fn containing(at: Timestamp, zone: VenueZone) -> Result<Self, CoreError> {
        Self::for_date(zone.local_date(at)?, zone)
    }

    /// Fails with [`CoreError::Validation`] for dates outside the supported
    /// year range.
    pub fn for_date(date: NaiveDate, zone: VenueZone) -> Result<Self, CoreError> {
        ensure_supported(date)?;
        let next = date.succ_opt().ok_or_else(|| {
            CoreError::Validation(format!("date '{date}' is out of the supported range"))
        })?;
        Ok(Self {
            date,
            start: zone.to_utc(date.and_time(NaiveTime::MIN))?,
            end: zone.resolve(next.and_time(NaiveTime::MIN))?,
        })
    }

    pub fn contains(&self, at: Timestamp) -> bool {
        self.start <= at && at < self.end
    }

    /// Second key of the admission advisory lock. Unique per calendar date.
    pub fn lock_key(&self) -> i32 {
        use chrono::Datelike;
        self.date.num_days_from_ce()
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Admit `requested` guests onto a day already holding `booked` guests.
///
/// Fails with [`CoreError::CapacityExceeded`] carrying `capacity - booked`
/// when the sum would exceed `capacity`. Reaching the capacity exactly is
/// allowed.
pub fn check_capacity(booked: i64, requested: i32, capacity: i32) -> Result<(), CoreError> {
    if booked + i64::from(requested) > i64::from(capacity) {
        return Err(CoreError::CapacityExceeded {
            remaining: i64::from(capacity) - booked,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Requested date parsing
// ---------------------------------------------------------------------------

/// Parse the date-time a guest asked for.
///
/// RFC 3339 input keeps its own offset. Input without an offset
/// (`2026-07-04T21:30`, `2026-07-04T21:30:00.000`) is read as venue wall-clock
/// time. Dates outside the supported year range are rejected.
pub fn parse_requested_date(input: &str, zone: VenueZone) -> Result<Timestamp, CoreError> {
    let input = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| CoreError::Validation(format!("date '{input}' is not a valid date-time")))?;
    zone.to_utc(naive)
}
