//! Background dispatch of reservation notices.
//!
//! Runs after the admission transaction has committed. The destination is the
//! venue's contact email; if there is no contact row or no notifier, nothing
//! is sent. Failures are logged and never reach the HTTP response.

use venue_db::repositories::ContactInfoRepo;
use venue_events::ReservationNotice;

use crate::state::AppState;

/// Spawn a task that delivers `notice` to the venue's contact address.
///
/// Returns the task handle, or `None` when no notifier is configured.
pub fn dispatch_reservation_notice(
    state: &AppState,
    notice: ReservationNotice,
) -> Option<tokio::task::JoinHandle<()>> {
    let Some(notifier) = state.notifier.clone() else {
        tracing::debug!("No reservation notifier configured, skipping notice");
        return None;
    };
    let pool = state.pool.clone();

    Some(tokio::spawn(async move {
        let to = match ContactInfoRepo::find(&pool).await {
            Ok(Some(contact)) if !contact.email.trim().is_empty() => contact.email,
            Ok(_) => {
                tracing::warn!("No contact email on record, reservation notice not sent");
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load contact info for reservation notice");
                return;
            }
        };

        if let Err(e) = notifier.notify(&to, &notice).await {
            tracing::error!(error = %e, to = %to, "Failed to send reservation notice");
        }
    }))
}
