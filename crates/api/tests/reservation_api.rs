//! HTTP-level tests for reservation submission, capacity rejection, status
//! changes, availability, and the reservation notice side effect.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, get, get_auth, post_json, post_json_auth, put_json, put_json_auth,
    RecordingNotifier,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use venue_api::auth::jwt::generate_access_token;
use venue_db::repositories::ContactInfoRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn reservation(guests: Value, date: &str) -> Value {
    json!({
        "name": "Ana Lopes",
        "email": "ana@example.com",
        "phone": "+238 555 01 01",
        "guests": guests,
        "date": date,
    })
}

async fn submit(pool: &PgPool, body: Value) -> (StatusCode, Value) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/reservations", body).await;
    let status = response.status();
    (status, body_json(response).await)
}

async fn set_status(pool: &PgPool, id: i64, status: &str) -> (StatusCode, Value) {
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/reservations/{id}/status"),
        json!({ "status": status }),
        &admin_token(),
    )
    .await;
    let code = response.status();
    (code, body_json(response).await)
}

async fn reservation_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reservations")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

async fn create_pack(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/packs",
        json!({
            "titleFr": "PACK 4 PERSONNES",
            "titleEn": "PACK 4 PEOPLE",
            "titlePt": "PACK 4 PESSOAS",
            "itemsEn": ["2 Bottles", "2 Shishas"],
            "price": "24,000 CVE",
            "recommendedFor": "4 People",
        }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submitted_reservation_is_pending(pool: PgPool) {
    let (status, json) = submit(&pool, reservation(json!(4), "2026-08-10T20:00:00.000Z")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "PENDING");
    assert_eq!(json["guests"], 4);
    assert_eq!(json["name"], "Ana Lopes");
    assert!(json["id"].is_number());
    assert!(json["pack"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn form_payload_with_string_numbers_is_accepted(pool: PgPool) {
    let pack_id = create_pack(&pool).await;
    let mut body = reservation(json!("4"), "2026-08-10T21:30");
    body["packId"] = json!(pack_id.to_string());

    let (status, json) = submit(&pool, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["guests"], 4);
    assert_eq!(json["packId"], pack_id);
    assert_eq!(json["pack"]["titleEn"], "PACK 4 PEOPLE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_pack_id_means_no_pack(pool: PgPool) {
    let mut body = reservation(json!(2), "2026-08-10T21:30");
    body["packId"] = json!("");

    let (status, json) = submit(&pool, body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["packId"].is_null());
}

// ---------------------------------------------------------------------------
// Capacity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn party_larger_than_remaining_spots_is_rejected(pool: PgPool) {
    // 48 confirmed guests, submitted as parties of six and four plus two.
    let mut ids = Vec::new();
    for guests in [6, 6, 6, 6, 6, 6, 6, 4, 2] {
        let (status, json) =
            submit(&pool, reservation(json!(guests), "2026-08-11T19:00:00Z")).await;
        assert_eq!(status, StatusCode::OK);
        ids.push(json["id"].as_i64().unwrap());
    }
    for id in ids {
        assert_eq!(set_status(&pool, id, "CONFIRMED").await.0, StatusCode::OK);
    }

    let before = reservation_count(&pool).await;
    let (status, json) = submit(&pool, reservation(json!(3), "2026-08-11T22:00:00Z")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Daily capacity reached");
    assert_eq!(json["code"], "CAPACITY_EXCEEDED");
    assert_eq!(json["message"], "Only 2 spots left for this date.");
    assert_eq!(json["remaining"], 2);
    assert_eq!(reservation_count(&pool).await, before);

    let (status, _) = submit(&pool, reservation(json!(2), "2026-08-11T23:00:00Z")).await;
    assert_eq!(status, StatusCode::OK);

    let app = common::build_test_app(pool);
    let availability = body_json(get(app, "/api/reservations/availability?date=2026-08-11").await).await;
    assert_eq!(availability["booked"], 50);
    assert_eq!(availability["remaining"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn full_day_reports_zero_spots_left(pool: PgPool) {
    for _ in 0..8 {
        submit(&pool, reservation(json!(6), "2026-08-12T20:00:00Z")).await;
    }
    let (status, _) = submit(&pool, reservation(json!(2), "2026-08-12T20:00:00Z")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = submit(&pool, reservation(json!(1), "2026-08-12T21:00:00Z")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Only 0 spots left for this date.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn separate_days_do_not_share_capacity(pool: PgPool) {
    for _ in 0..7 {
        let (status, _) = submit(&pool, reservation(json!(6), "2026-08-13T20:00:00Z")).await;
        assert_eq!(status, StatusCode::OK);
    }
    for _ in 0..7 {
        let (status, _) = submit(&pool, reservation(json!(6), "2026-08-14T20:00:00Z")).await;
        assert_eq!(status, StatusCode::OK);
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn guest_count_outside_one_to_six_is_rejected(pool: PgPool) {
    for guests in [json!(0), json!(7), json!(50), json!("-2")] {
        let (status, json) = submit(&pool, reservation(guests, "2026-08-15T20:00:00Z")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
    assert_eq!(reservation_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_pack_is_not_found_and_writes_nothing(pool: PgPool) {
    let mut body = reservation(json!(2), "2026-08-15T20:00:00Z");
    body["packId"] = json!(424_242);

    let (status, json) = submit(&pool, body).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Pack with id 424242 not found");
    assert_eq!(reservation_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unparseable_date_is_rejected(pool: PgPool) {
    let (status, json) = submit(&pool, reservation(json!(2), "next friday")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(reservation_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_contact_fields_are_rejected(pool: PgPool) {
    let mut body = reservation(json!(2), "2026-08-15T20:00:00Z");
    body["phone"] = json!("  ");

    let (status, json) = submit(&pool, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "phone is required");
}

// ---------------------------------------------------------------------------
// Status changes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_update_requires_admin_token(pool: PgPool) {
    let (_, created) = submit(&pool, reservation(json!(2), "2026-08-16T20:00:00Z")).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/reservations/{id}/status");

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({ "status": "CONFIRMED" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let guest_token = generate_access_token(1, "guest", &common::test_config().jwt).unwrap();
    let app = common::build_test_app(pool);
    let response = put_json_auth(app, &uri, json!({ "status": "CONFIRMED" }), &guest_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_update_on_unknown_id_is_not_found(pool: PgPool) {
    let (status, json) = set_status(&pool, 999_999, "CONFIRMED").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(reservation_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_status_value_is_rejected(pool: PgPool) {
    let (_, created) = submit(&pool, reservation(json!(2), "2026-08-16T20:00:00Z")).await;

    let (status, json) = set_status(&pool, created["id"].as_i64().unwrap(), "ARCHIVED").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cancelling_frees_spots_and_reactivating_takes_them_back(pool: PgPool) {
    let (_, created) = submit(&pool, reservation(json!(6), "2026-08-17T20:00:00Z")).await;
    let id = created["id"].as_i64().unwrap();
    let availability_uri = "/api/reservations/availability?date=2026-08-17";

    let (status, json) = set_status(&pool, id, "CANCELLED").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "CANCELLED");
    let app = common::build_test_app(pool.clone());
    assert_eq!(body_json(get(app, availability_uri).await).await["booked"], 0);

    let (status, json) = set_status(&pool, id, "CONFIRMED").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "CONFIRMED");
    let app = common::build_test_app(pool);
    assert_eq!(body_json(get(app, availability_uri).await).await["booked"], 6);
}

// ---------------------------------------------------------------------------
// Listing and availability
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_requires_admin_and_returns_newest_first(pool: PgPool) {
    let pack_id = create_pack(&pool).await;
    let mut with_pack = reservation(json!(4), "2026-08-18T20:00:00Z");
    with_pack["packId"] = json!(pack_id);
    submit(&pool, reservation(json!(2), "2026-08-18T19:00:00Z")).await;
    submit(&pool, with_pack).await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, "/api/reservations").await.status(),
        StatusCode::UNAUTHORIZED
    );

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/reservations", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["guests"], 4);
    assert_eq!(items[0]["pack"]["id"], pack_id);
    assert!(items[1]["pack"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn availability_reports_capacity_and_remaining(pool: PgPool) {
    submit(&pool, reservation(json!(5), "2026-08-19T20:00:00Z")).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/reservations/availability?date=2026-08-19T12:00:00Z").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["date"], "2026-08-19");
    assert_eq!(json["capacity"], 50);
    assert_eq!(json["booked"], 5);
    assert_eq!(json["remaining"], 45);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn availability_rejects_bad_date(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reservations/availability?date=soon").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn far_future_dates_are_validation_errors(pool: PgPool) {
    for date in ["+262142-12-31T23:30", "9999-12-31T23:30:00-05:00"] {
        let (status, json) = submit(&pool, reservation(json!(2), date)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "date {date}");
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
    assert_eq!(reservation_count(&pool).await, 0);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/reservations/availability?date=%2B262142-12-31").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Notification side effect
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn admitted_reservation_notifies_contact_email(pool: PgPool) {
    ContactInfoRepo::get_or_create_default(&pool).await.unwrap();
    let pack_id = create_pack(&pool).await;
    let notifier = Arc::new(RecordingNotifier::default());

    let mut body = reservation(json!(4), "2026-08-20T20:00:00Z");
    body["packId"] = json!(pack_id);
    let app = common::build_test_app_with(pool, Some(notifier.clone()));
    let response = post_json(app, "/api/reservations", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let sent = notifier.wait_for(1).await;
    assert_eq!(sent.len(), 1);
    let (to, notice) = &sent[0];
    assert_eq!(to, "info@huqqapraia.com");
    assert_eq!(notice.name, "Ana Lopes");
    assert_eq!(notice.guests, 4);
    assert_eq!(notice.pack_name.as_deref(), Some("PACK 4 PEOPLE"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejected_reservation_sends_no_notice(pool: PgPool) {
    ContactInfoRepo::get_or_create_default(&pool).await.unwrap();
    let notifier = Arc::new(RecordingNotifier::default());

    for guests in [6, 6, 6, 6, 6, 6, 6, 6, 2] {
        submit(&pool, reservation(json!(guests), "2026-08-21T20:00:00Z")).await;
    }
    let app = common::build_test_app_with(pool, Some(notifier.clone()));
    let response = post_json(
        app,
        "/api/reservations",
        reservation(json!(1), "2026-08-21T21:00:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn notifier_failure_does_not_fail_the_request(pool: PgPool) {
    ContactInfoRepo::get_or_create_default(&pool).await.unwrap();

    let app = common::build_test_app_with(pool.clone(), Some(Arc::new(common::FailingNotifier)));
    let response = post_json(
        app,
        "/api/reservations",
        reservation(json!(2), "2026-08-22T20:00:00Z"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(reservation_count(&pool).await, 1);
}
