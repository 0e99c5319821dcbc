//! End-to-end tests driving the full router against an in-memory database.

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, DurationRound, SecondsFormat, Utc};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::Service;

use roombook::{create_api_router, init_database, DatabaseConfig, Migrator, SeaOrmRepositoryProvider};

async fn app() -> Router {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    create_api_router(repos, db, Instant::now())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let mut svc = app.clone().into_service();
    let resp = svc.call(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Whole hour one day ahead, offset by `hours`.
fn slot(hours: i64) -> String {
    static BASE: OnceLock<DateTime<Utc>> = OnceLock::new();
    let base = BASE.get_or_init(|| {
        (Utc::now() + Duration::days(1))
            .duration_trunc(Duration::hours(1))
            .unwrap()
    });
    (*base + Duration::hours(hours)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

async fn create_user(app: &Router, name: &str, email: &str) -> i64 {
    let (status, body) = send(app, "POST", "/users", Some(json!({"name": name, "email": email}))).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().unwrap()
}

async fn create_room(app: &Router, name: &str, capacity: i64) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/rooms",
        Some(json!({"name": name, "floor": 2, "capacity": capacity})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().unwrap()
}

async fn reserve(app: &Router, room: i64, reserver: i64, start: i64, end: i64) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/reservations",
        Some(json!({
            "startTime": slot(start),
            "endTime": slot(end),
            "reserverId": reserver,
            "roomId": room,
        })),
    )
    .await
}

// ── Users ──────────────────────────────────────────────────────

#[tokio::test]
async fn user_crud_round_trip() {
    let app = app().await;
    let id = create_user(&app, "Alice", "alice@example.com").await;

    let (status, body) = send(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert!(body["data"]["createdAt"].is_string());

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/users/{id}"),
        Some(json!({"name": "Alice Kim"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Alice Kim");
    assert_eq!(body["data"]["email"], "alice@example.com");

    let (status, body) = send(&app, "DELETE", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);

    let (status, body) = send(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = app().await;
    create_user(&app, "Alice", "alice@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "Imposter", "email": "alice@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let app = app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "Alice", "email": "not-an-email"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "Alice", "email": "alice@example.com", "isAdmin": true})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/rooms", Some(json!({"name": "Aurora"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unparsable_ids_and_filters_use_the_envelope() {
    let app = app().await;

    for uri in [
        "/users/abc",
        "/rooms/1.5",
        "/reservations/abc",
        "/reservations?roomId=abc",
        "/rooms?minCapacity=lots",
        "/users?page=first",
    ] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["success"], false, "{uri}: {body}");
        assert!(body["data"].is_null(), "{uri}");
        assert!(body["error"].is_string(), "{uri}");
    }

    let (status, body) = send(
        &app,
        "PATCH",
        "/users/abc",
        Some(json!({"name": "Alice"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn user_list_is_paginated() {
    let app = app().await;
    for i in 0..3 {
        create_user(&app, &format!("User {i}"), &format!("user{i}@example.com")).await;
    }

    let (status, body) = send(&app, "GET", "/users?page=1&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let page = &body["data"];
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["total"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["limit"], 2);
}

// ── Rooms ──────────────────────────────────────────────────────

#[tokio::test]
async fn room_rules() {
    let app = app().await;
    create_room(&app, "Aurora", 4).await;
    create_room(&app, "Borealis", 12).await;

    let (status, _) = send(
        &app,
        "POST",
        "/rooms",
        Some(json!({"name": "Aurora", "floor": 5, "capacity": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "POST",
        "/rooms",
        Some(json!({"name": "Closet", "floor": 0, "capacity": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "GET", "/rooms?minCapacity=10", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Borealis");

    let (status, _) = send(&app, "GET", "/rooms/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Reservations ───────────────────────────────────────────────

#[tokio::test]
async fn create_reservation_embeds_relations() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let bob = create_user(&app, "Bob", "bob@example.com").await;
    let room = create_room(&app, "Aurora", 6).await;

    let (status, body) = send(
        &app,
        "POST",
        "/reservations",
        Some(json!({
            "startTime": slot(0),
            "endTime": slot(1),
            "reserverId": alice,
            "roomId": room,
            "attendeeIds": [bob, bob, 4242],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let data = &body["data"];
    assert_eq!(data["room"]["id"], room);
    assert_eq!(data["reserver"]["id"], alice);
    assert_eq!(data["attendees"].as_array().unwrap().len(), 1);
    assert_eq!(data["attendees"][0]["id"], bob);

    let start: DateTime<Utc> = data["startTime"].as_str().unwrap().parse().unwrap();
    assert_eq!(start.to_rfc3339_opts(SecondsFormat::Secs, true), slot(0));
}

#[tokio::test]
async fn invalid_time_ranges_are_bad_requests() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let room = create_room(&app, "Aurora", 6).await;

    let (status, _) = reserve(&app, room, alice, 2, 2).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = reserve(&app, room, alice, 3, 2).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let past = (Utc::now() - Duration::hours(2)).to_rfc3339_opts(SecondsFormat::Secs, true);
    let (status, body) = send(
        &app,
        "POST",
        "/reservations",
        Some(json!({
            "startTime": past,
            "endTime": slot(0),
            "reserverId": alice,
            "roomId": room,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("past"));
}

#[tokio::test]
async fn missing_room_or_reserver_is_not_found() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let room = create_room(&app, "Aurora", 6).await;

    let (status, _) = reserve(&app, 999, alice, 0, 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = reserve(&app, room, 999, 0, 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn overlapping_reservations_conflict() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let bob = create_user(&app, "Bob", "bob@example.com").await;
    let aurora = create_room(&app, "Aurora", 6).await;
    let borealis = create_room(&app, "Borealis", 6).await;

    let (status, _) = reserve(&app, aurora, alice, 0, 2).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = reserve(&app, aurora, bob, 1, 3).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);

    // Back-to-back in the same room
    let (status, _) = reserve(&app, aurora, bob, 2, 3).await;
    assert_eq!(status, StatusCode::CREATED);

    // Same interval, different room
    let (status, _) = reserve(&app, borealis, bob, 0, 2).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn only_the_reserver_may_modify() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let bob = create_user(&app, "Bob", "bob@example.com").await;
    let room = create_room(&app, "Aurora", 6).await;

    let (_, body) = reserve(&app, room, alice, 0, 1).await;
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/reservations/{id}");

    let (status, _) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({"requestingUserId": bob, "endTime": slot(2)})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, "DELETE", &uri, Some(json!({"requestingUserId": bob}))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, "DELETE", &uri, Some(json!({"requestingUserId": alice}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &uri, Some(json!({"requestingUserId": alice}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn updates_do_not_conflict_with_themselves() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let bob = create_user(&app, "Bob", "bob@example.com").await;
    let room = create_room(&app, "Aurora", 6).await;

    let (_, body) = reserve(&app, room, alice, 0, 2).await;
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/reservations/{id}");

    // Same times resubmitted
    let (status, body) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({"requestingUserId": alice, "startTime": slot(0), "endTime": slot(2)})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    // Attendees only
    let (status, body) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({"requestingUserId": alice, "attendeeIds": [bob]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["attendees"][0]["id"], bob);

    // Shift within its own old slot
    let (status, body) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({"requestingUserId": alice, "startTime": slot(1), "endTime": slot(3)})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["attendees"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_into_taken_slot_conflicts() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let room = create_room(&app, "Aurora", 6).await;

    reserve(&app, room, alice, 0, 1).await;
    let (_, body) = reserve(&app, room, alice, 3, 4).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/reservations/{id}"),
        Some(json!({"requestingUserId": alice, "startTime": slot(0)})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/reservations/{id}"),
        Some(json!({"requestingUserId": alice, "endTime": slot(3)})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_rejects_start_in_the_past() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let room = create_room(&app, "Aurora", 6).await;
    let (_, body) = reserve(&app, room, alice, 0, 1).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let yesterday = (Utc::now() - Duration::days(1)).to_rfc3339_opts(SecondsFormat::Secs, true);
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/reservations/{id}"),
        Some(json!({"requestingUserId": alice, "startTime": yesterday})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert!(body["error"].as_str().unwrap().contains("past"));

    let (_, body) = send(&app, "GET", &format!("/reservations/{id}"), None).await;
    let start: DateTime<Utc> = body["data"]["startTime"].as_str().unwrap().parse().unwrap();
    assert_eq!(start, slot(0).parse::<DateTime<Utc>>().unwrap());
}

#[tokio::test]
async fn update_room_change_is_checked() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let aurora = create_room(&app, "Aurora", 6).await;
    let borealis = create_room(&app, "Borealis", 6).await;
    let cirrus = create_room(&app, "Cirrus", 6).await;

    reserve(&app, borealis, alice, 0, 2).await;
    let (_, body) = reserve(&app, aurora, alice, 1, 3).await;
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/reservations/{id}");

    let (status, _) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({"requestingUserId": alice, "roomId": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({"requestingUserId": alice, "roomId": borealis})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");

    let (status, body) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({"requestingUserId": alice, "roomId": cirrus})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["room"]["id"], cirrus);
}

#[tokio::test]
async fn referenced_rows_cannot_be_deleted() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let room = create_room(&app, "Aurora", 6).await;
    reserve(&app, room, alice, 0, 1).await;

    let (status, _) = send(&app, "DELETE", &format!("/users/{alice}"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, "DELETE", &format!("/rooms/{room}"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn reservation_list_filters() {
    let app = app().await;
    let alice = create_user(&app, "Alice", "alice@example.com").await;
    let aurora = create_room(&app, "Aurora", 6).await;
    let borealis = create_room(&app, "Borealis", 6).await;

    reserve(&app, aurora, alice, 4, 5).await;
    reserve(&app, aurora, alice, 0, 1).await;
    reserve(&app, borealis, alice, 0, 1).await;

    let (status, body) = send(&app, "GET", &format!("/reservations?roomId={aurora}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Ordered by start time
    let first: DateTime<Utc> = items[0]["startTime"].as_str().unwrap().parse().unwrap();
    assert_eq!(first.to_rfc3339_opts(SecondsFormat::Secs, true), slot(0));

    let (_, body) = send(&app, "GET", &format!("/reservations?reserverId={alice}"), None).await;
    assert_eq!(body["data"]["total"], 3);
}

// ── Operational ────────────────────────────────────────────────

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");

    let (status, body) = send(&app, "GET", "/apidoc-json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/reservations/{id}"].is_object());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = app().await;
    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();

    let mut svc = app.clone().into_service();
    let resp = svc.call(req).await.unwrap();
    assert_eq!(resp.headers()["x-request-id"], "abc-123");
}
