//! Reservation notice delivery via SMTP.
//!
//! [`EmailDelivery`] wraps the `lettre` async SMTP transport to send
//! plain-text notices. Configuration is loaded from environment variables;
//! if `SMTP_HOST` is not set, [`EmailConfig::from_env`] returns `None` and no
//! mailer should be constructed.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use venue_core::zone::VenueZone;

use crate::notice::{ReservationNotice, ReservationNotifier};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "Venue Reservations <noreply@venue.local>";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                                     |
    /// |-----------------|----------|---------------------------------------------|
    /// | `SMTP_HOST`     | yes      | --                                          |
    /// | `SMTP_PORT`     | no       | `587`                                       |
    /// | `SMTP_FROM`     | no       | `Venue Reservations <noreply@venue.local>`  |
    /// | `SMTP_USER`     | no       | --                                          |
    /// | `SMTP_PASSWORD` | no       | --                                          |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// EmailDelivery
// ---------------------------------------------------------------------------

/// Sends reservation notices via SMTP.
pub struct EmailDelivery {
    from_address: String,
    venue_zone: VenueZone,
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailDelivery {
    /// Build the SMTP transport. Dates in notices render in `venue_zone`.
    pub fn new(config: EmailConfig, venue_zone: VenueZone) -> Result<Self, NotifyError> {
        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            from_address: config.from_address,
            venue_zone,
            mailer: transport_builder.build(),
        })
    }

    fn build_message(&self, to: &str, notice: &ReservationNotice) -> Result<Message, NotifyError> {
        Message::builder()
            .from(self.from_address.parse()?)
            .to(to.parse()?)
            .subject(notice.subject(self.venue_zone))
            .header(ContentType::TEXT_PLAIN)
            .body(notice.body(self.venue_zone))
            .map_err(|e| NotifyError::Build(e.to_string()))
    }
}

#[async_trait]
impl ReservationNotifier for EmailDelivery {
    async fn notify(&self, to: &str, notice: &ReservationNotice) -> Result<(), NotifyError> {
        let message = self.build_message(to, notice)?;
        self.mailer.send(message).await?;

        tracing::info!(to, guests = notice.guests, "Reservation notice sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
