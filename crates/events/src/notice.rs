//! Reservation notice payload and the delivery trait.

use async_trait::async_trait;
use venue_core::types::Timestamp;
use venue_core::zone::VenueZone;

use crate::email::NotifyError;

/// Details sent to the venue's contact address when a reservation is admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationNotice {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: i32,
    pub date: Timestamp,
    pub pack_name: Option<String>,
}

impl ReservationNotice {
    /// Requested date as venue wall-clock time, e.g. `Saturday 04 July 2026, 21:30`.
    pub fn formatted_date(&self, zone: VenueZone) -> String {
        zone.to_local(self.date)
            .format("%A %d %B %Y, %H:%M")
            .to_string()
    }

    pub fn subject(&self, zone: VenueZone) -> String {
        format!(
            "New Reservation: {} - {}",
            self.name,
            self.formatted_date(zone)
        )
    }

    pub fn body(&self, zone: VenueZone) -> String {
        format!(
            "New Reservation Received\n\
             \n\
             Name: {}\n\
             Date: {}\n\
             Guests: {}\n\
             Pack: {}\n\
             \n\
             Contact Details\n\
             Email: {}\n\
             Phone: {}\n",
            self.name,
            self.formatted_date(zone),
            self.guests,
            self.pack_name.as_deref().unwrap_or("None"),
            self.email,
            self.phone,
        )
    }
}

/// Sends a [`ReservationNotice`] to a destination address.
///
/// Callers treat failures as non-fatal: the reservation is already committed
/// when a notifier runs.
#[async_trait]
pub trait ReservationNotifier: Send + Sync {
    async fn notify(&self, to: &str, notice: &ReservationNotice) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone, Utc};

    use super::*;

    fn notice(pack_name: Option<&str>) -> ReservationNotice {
        ReservationNotice {
            name: "Ana Lopes".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+238 555 01 01".to_string(),
            guests: 4,
            date: Utc.with_ymd_and_hms(2026, 7, 4, 22, 30, 0).unwrap(),
            pack_name: pack_name.map(str::to_string),
        }
    }

    fn venue() -> VenueZone {
        VenueZone::Fixed(FixedOffset::west_opt(3600).unwrap())
    }

    #[test]
    fn date_is_rendered_in_venue_time() {
        assert_eq!(
            notice(None).formatted_date(venue()),
            "Saturday 04 July 2026, 21:30"
        );
    }

    #[test]
    fn named_zone_renders_with_seasonal_offset() {
        let lisbon = VenueZone::Named(chrono_tz::Europe::Lisbon);
        let mut winter = notice(None);
        winter.date = Utc.with_ymd_and_hms(2027, 1, 15, 21, 30, 0).unwrap();

        assert_eq!(notice(None).formatted_date(lisbon), "Saturday 04 July 2026, 23:30");
        assert_eq!(winter.formatted_date(lisbon), "Friday 15 January 2027, 21:30");
    }

    #[test]
    fn subject_names_guest_and_date() {
        assert_eq!(
            notice(None).subject(venue()),
            "New Reservation: Ana Lopes - Saturday 04 July 2026, 21:30"
        );
    }

    #[test]
    fn body_lists_details_and_pack() {
        let body = notice(Some("PACK 4 PEOPLE")).body(venue());
        assert!(body.contains("Guests: 4"));
        assert!(body.contains("Pack: PACK 4 PEOPLE"));
        assert!(body.contains("Email: ana@example.com"));
        assert!(body.contains("Phone: +238 555 01 01"));
    }

    #[test]
    fn body_without_pack_says_none() {
        assert!(notice(None).body(venue()).contains("Pack: None"));
    }
}
