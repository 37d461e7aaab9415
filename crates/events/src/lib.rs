//! Reservation notification side effect.
//!
//! - [`ReservationNotice`] -- what the venue is told about a new reservation.
//! - [`ReservationNotifier`] -- delivery seam; the API holds an optional
//!   `Arc<dyn ReservationNotifier>` and skips notification when it is absent.
//! - [`EmailDelivery`] -- SMTP implementation backed by `lettre`.

pub mod email;
pub mod notice;

pub use email::{EmailConfig, EmailDelivery, NotifyError};
pub use notice::{ReservationNotice, ReservationNotifier};
