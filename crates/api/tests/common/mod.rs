#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::FixedOffset;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use venue_api::auth::jwt::{generate_access_token, JwtConfig};
use venue_api::auth::ROLE_ADMIN;
use venue_api::config::ServerConfig;
use venue_api::router::build_app_router;
use venue_api::state::AppState;
use venue_core::zone::VenueZone;
use venue_events::{NotifyError, ReservationNotice, ReservationNotifier};

/// Build a test `ServerConfig`: capacity 50, UTC calendar days, and the
/// first dev CORS origin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        daily_capacity: 50,
        venue_zone: VenueZone::Fixed(FixedOffset::east_opt(0).unwrap()),
        admin_password: None,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router without a notifier.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, None)
}

/// Build the full application router with the same middleware stack as
/// `main.rs` and an optional notifier.
pub fn build_test_app_with(pool: PgPool, notifier: Option<Arc<dyn ReservationNotifier>>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier,
    };
    build_app_router(state, &config)
}

/// A bearer token for the admin role, signed with the test secret.
pub fn admin_token() -> String {
    generate_access_token(1, ROLE_ADMIN, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Recording notifier
// ---------------------------------------------------------------------------

/// Notifier that records every notice instead of sending it.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, ReservationNotice)>>,
}

#[async_trait]
impl ReservationNotifier for RecordingNotifier {
    async fn notify(&self, to: &str, notice: &ReservationNotice) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), notice.clone()));
        Ok(())
    }
}

/// Notifier that always fails.
pub struct FailingNotifier;

#[async_trait]
impl ReservationNotifier for FailingNotifier {
    async fn notify(&self, _to: &str, _notice: &ReservationNotice) -> Result<(), NotifyError> {
        Err(NotifyError::Build("smtp unavailable".to_string()))
    }
}

impl RecordingNotifier {
    /// Wait for the background dispatch task to record `count` notices.
    pub async fn wait_for(&self, count: usize) -> Vec<(String, ReservationNotice)> {
        for _ in 0..100 {
            {
                let sent = self.sent.lock().unwrap();
                if sent.len() >= count {
                    return sent.clone();
                }
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        self.sent.lock().unwrap().clone()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}
