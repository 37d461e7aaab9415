//! The venue's time zone, resolved per instant.
//!
//! Calendar days follow the wall clock of the venue, so the UTC offset is
//! looked up for every timestamp instead of being fixed once at startup. A
//! zone with daylight saving time therefore moves its day boundaries by an
//! hour across a transition, and the transition days are 23 or 25 hours long.

use std::fmt;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime,
    Offset, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Earliest calendar year accepted for reservations and day lookups.
pub const MIN_SUPPORTED_YEAR: i32 = 1;

/// Latest calendar year accepted for reservations and day lookups.
pub const MAX_SUPPORTED_YEAR: i32 = 9999;

/// Where the venue's calendar days begin and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueZone {
    /// A constant offset with no daylight saving time.
    Fixed(FixedOffset),
    /// An IANA zone such as `Europe/Lisbon`.
    Named(Tz),
    /// Whatever zone the server process runs in (`TZ`, `/etc/localtime`).
    ServerLocal,
}

impl VenueZone {
    /// Offset from UTC in effect at `at`.
    pub fn offset_at(&self, at: Timestamp) -> FixedOffset {
        let utc = at.naive_utc();
        match self {
            Self::Fixed(offset) => *offset,
            Self::Named(tz) => tz.offset_from_utc_datetime(&utc).fix(),
            Self::ServerLocal => Local.offset_from_utc_datetime(&utc).fix(),
        }
    }

    /// `at` as venue wall-clock time.
    pub fn to_local(&self, at: Timestamp) -> DateTime<FixedOffset> {
        at.with_timezone(&self.offset_at(at))
    }

    /// Venue calendar date of `at`.
    pub fn local_date(&self, at: Timestamp) -> Result<NaiveDate, CoreError> {
        let date = at
            .naive_utc()
            .checked_add_signed(Duration::seconds(i64::from(
                self.offset_at(at).local_minus_utc(),
            )))
            .map(|local| local.date())
            .ok_or_else(|| out_of_range(&at))?;
        ensure_supported(date)?;
        Ok(date)
    }

    /// The instant a venue wall-clock time refers to.
    ///
    /// A repeated wall time (clocks going back) resolves to its first
    /// occurrence. A skipped wall time (clocks going forward) is moved
    /// forward by one hour, past the gap.
    pub fn to_utc(&self, local: NaiveDateTime) -> Result<Timestamp, CoreError> {
        ensure_supported(local.date())?;
        self.resolve(local)
    }

    /// [`Self::to_utc`] without the year range check. Only used for the
    /// midnight that closes an already validated day.
    pub(crate) fn resolve(&self, local: NaiveDateTime) -> Result<Timestamp, CoreError> {
        let resolved = match self {
            Self::Fixed(offset) => local
                .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
                .map(|naive| naive.and_utc()),
            Self::Named(tz) => resolve_wall_time(tz, local),
            Self::ServerLocal => resolve_wall_time(&Local, local),
        };
        resolved.ok_or_else(|| out_of_range(&local))
    }
}

impl fmt::Display for VenueZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(offset) => write!(f, "{offset}"),
            Self::Named(tz) => write!(f, "{}", tz.name()),
            Self::ServerLocal => f.write_str("server-local"),
        }
    }
}

fn resolve_wall_time<Z: TimeZone>(zone: &Z, local: NaiveDateTime) -> Option<Timestamp> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        LocalResult::None => zone
            .from_local_datetime(&local.checked_add_signed(Duration::hours(1))?)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Reject dates outside `MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR`.
pub fn ensure_supported(date: NaiveDate) -> Result<(), CoreError> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&date.year()) {
        Ok(())
    } else {
        Err(out_of_range(&date))
    }
}

fn out_of_range(value: &dyn fmt::Display) -> CoreError {
    CoreError::Validation(format!("date '{value}' is out of the supported range"))
}
