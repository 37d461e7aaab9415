use chrono::FixedOffset;
use chrono_tz::Tz;
use venue_core::admission::{AdmissionPolicy, DEFAULT_DAILY_CAPACITY};
use venue_core::zone::VenueZone;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum non-cancelled guests per calendar day (default: `50`).
    pub daily_capacity: i32,
    /// Zone that decides which calendar day a reservation falls on.
    pub venue_zone: VenueZone,
    /// Password stored for the admin account on first start, if none exists.
    pub admin_password: Option<String>,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                                       |
    /// |------------------------------|-----------------------------------------------|
    /// | `HOST`                       | `0.0.0.0`                                     |
    /// | `PORT`                       | `4000`                                        |
    /// | `CORS_ORIGINS`               | `http://localhost:3000,http://localhost:3001` |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                                          |
    /// | `RESERVATION_DAILY_CAPACITY` | `50`                                          |
    /// | `VENUE_TIMEZONE`             | unset (IANA name, wins over the offset)       |
    /// | `VENUE_UTC_OFFSET`           | unset (server time zone when both are unset)  |
    /// | `ADMIN_PASSWORD`             | --                                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let daily_capacity: i32 = std::env::var("RESERVATION_DAILY_CAPACITY")
            .unwrap_or_else(|_| DEFAULT_DAILY_CAPACITY.to_string())
            .parse()
            .expect("RESERVATION_DAILY_CAPACITY must be a valid i32");
        assert!(daily_capacity > 0, "RESERVATION_DAILY_CAPACITY must be positive");

        let venue_zone = resolve_venue_zone(
            std::env::var("VENUE_TIMEZONE").ok().as_deref(),
            std::env::var("VENUE_UTC_OFFSET").ok().as_deref(),
        )
        .unwrap_or_else(|e| panic!("{e}"));

        let admin_password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            daily_capacity,
            venue_zone,
            admin_password,
            jwt,
        }
    }

    /// Capacity rules handed to the admission path.
    pub fn admission_policy(&self) -> AdmissionPolicy {
        AdmissionPolicy::new(self.daily_capacity, self.venue_zone)
    }
}

/// Pick the venue zone from the `VENUE_TIMEZONE` and `VENUE_UTC_OFFSET` values.
///
/// A named zone wins. With neither set, days follow the server's time zone,
/// resolved per instant so daylight saving changes are honoured.
pub fn resolve_venue_zone(
    timezone: Option<&str>,
    utc_offset: Option<&str>,
) -> Result<VenueZone, String> {
    if let Some(name) = timezone.map(str::trim).filter(|name| !name.is_empty()) {
        return name
            .parse::<Tz>()
            .map(VenueZone::Named)
            .map_err(|_| format!("VENUE_TIMEZONE '{name}' is not an IANA time zone"));
    }

    match utc_offset.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_utc_offset(raw)
            .map(VenueZone::Fixed)
            .ok_or_else(|| format!("VENUE_UTC_OFFSET '{raw}' must look like +01:00")),
        None => Ok(VenueZone::ServerLocal),
    }
}

/// Parse `+HH:MM`, `-HH:MM`, `+HH` or `Z` into a fixed offset.
pub fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match *raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        None => (rest.parse::<i32>().ok()?, 0),
    };
    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
