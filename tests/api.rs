//! HTTP surface tests. The router runs on the in-memory store, so every test
//! drives the full extractor → validation → store path without a database or
//! a bound socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use stillpoint_api::store::MemoryStore;
use stillpoint_api::{router, AppState};

fn app() -> Router {
    router(AppState {
        store: Arc::new(MemoryStore::new()),
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn entry_body(user_id: i32, date: &str) -> Value {
    json!({
        "userId": user_id,
        "date": date,
        "emotion": "anxious",
        "anxietyLevel": 6,
        "trigger": "work",
        "description": "Deadline pressure all afternoon",
        "mind": ["racing-thoughts", "overthinking"],
        "body": ["muscle-tension"],
        "emotions": ["worried"],
        "behaviors": ["procrastination"],
        "strategiesUsed": "Went for a walk"
    })
}

#[tokio::test]
async fn user_is_created_lazily_and_reused() {
    let app = app();

    let (status, first) = send(&app, get("/api/user")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["username"], "testuser");
    assert_eq!(first["id"], 1);

    let (status, second) = send(&app, get("/api/user")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);
}

#[tokio::test]
async fn create_entry_round_trips_through_get() {
    let app = app();

    let (status, created) =
        send(&app, json_request("POST", "/api/entries", entry_body(1, "2025-03-09"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["userId"], 1);
    assert_eq!(created["date"], "2025-03-09");
    assert_eq!(created["emotion"], "anxious");
    assert_eq!(created["anxietyLevel"], 6);
    assert_eq!(created["trigger"], "work");
    assert_eq!(created["mind"], json!(["racing-thoughts", "overthinking"]));
    assert_eq!(created["strategiesUsed"], "Went for a walk");
    assert!(created["createdAt"].is_string());

    let (status, fetched) = send(&app, get("/api/entries/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_coerces_datetime_to_calendar_date() {
    let app = app();

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/entries",
            entry_body(1, "2025-03-09T23:30:00-05:00"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["date"], "2025-03-09");
}

#[tokio::test]
async fn anxiety_level_bounds_are_inclusive() {
    let app = app();

    for (level, expected) in [
        (0, StatusCode::BAD_REQUEST),
        (11, StatusCode::BAD_REQUEST),
        (1, StatusCode::CREATED),
        (10, StatusCode::CREATED),
    ] {
        let mut body = entry_body(1, "2025-03-09");
        body["anxietyLevel"] = json!(level);
        let (status, response) = send(&app, json_request("POST", "/api/entries", body)).await;
        assert_eq!(status, expected, "anxietyLevel = {level}");
        if expected == StatusCode::BAD_REQUEST {
            assert!(response["message"]
                .as_str()
                .unwrap()
                .contains("anxietyLevel"));
        }
    }
}

#[tokio::test]
async fn unknown_emotion_and_missing_fields_are_rejected() {
    let app = app();

    let mut body = entry_body(1, "2025-03-09");
    body["emotion"] = json!("furious");
    let (status, response) = send(&app, json_request("POST", "/api/entries", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["message"].is_string());

    let mut body = entry_body(1, "2025-03-09");
    body.as_object_mut().unwrap().remove("description");
    let (status, _) = send(&app, json_request("POST", "/api/entries", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut body = entry_body(1, "2025-03-09");
    body["date"] = json!("not-a-date");
    let (status, _) = send(&app, json_request("POST", "/api/entries", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_requires_a_numeric_user_id() {
    let app = app();

    let (status, response) = send(&app, get("/api/entries")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["message"].is_string());

    let (status, _) = send(&app, get("/api/entries?userId=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, response) = send(&app, get("/api/entries?userId=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!([]));
}

#[tokio::test]
async fn listing_returns_entries_newest_first() {
    let app = app();

    for date in ["2025-03-01", "2025-03-10", "2025-03-05"] {
        let (status, _) =
            send(&app, json_request("POST", "/api/entries", entry_body(1, date))).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    // Another user's entry must not leak into the listing.
    let (status, _) =
        send(&app, json_request("POST", "/api/entries", entry_body(2, "2025-03-10"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, listed) = send(&app, get("/api/entries?userId=1")).await;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-03-10", "2025-03-05", "2025-03-01"]);
}

#[tokio::test]
async fn date_endpoint_filters_by_calendar_day() {
    let app = app();

    for date in ["2025-03-09", "2025-03-09", "2025-03-10"] {
        send(&app, json_request("POST", "/api/entries", entry_body(1, date))).await;
    }

    let (status, matched) = send(&app, get("/api/entries/date/2025-03-09?userId=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(matched.as_array().unwrap().len(), 2);

    // A datetime path parameter is coerced down to its date component.
    let (status, matched) =
        send(&app, get("/api/entries/date/2025-03-10T08:00:00Z?userId=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(matched.as_array().unwrap().len(), 1);

    let (status, matched) = send(&app, get("/api/entries/date/2024-01-01?userId=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(matched, json!([]));

    let (status, _) = send(&app, get("/api/entries/date/not-a-date?userId=1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/api/entries/date/2025-03-09")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn range_endpoint_includes_both_boundaries() {
    let app = app();

    for date in ["2025-01-01", "2025-01-05", "2025-01-10", "2025-01-11"] {
        send(&app, json_request("POST", "/api/entries", entry_body(1, date))).await;
    }

    let (status, ranged) = send(
        &app,
        get("/api/entries/range?userId=1&startDate=2025-01-01&endDate=2025-01-10"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = ranged
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-01-10", "2025-01-05", "2025-01-01"]);

    let (status, _) = send(
        &app,
        get("/api/entries/range?userId=1&startDate=bogus&endDate=2025-01-10"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/api/entries/range?startDate=2025-01-01&endDate=2025-01-10")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn partial_update_touches_only_supplied_fields() {
    let app = app();

    let (_, created) =
        send(&app, json_request("POST", "/api/entries", entry_body(1, "2025-03-09"))).await;

    let (status, updated) = send(
        &app,
        json_request("PUT", "/api/entries/1", json!({ "anxietyLevel": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["anxietyLevel"], 2);
    assert_eq!(updated["description"], created["description"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["date"], created["date"]);

    let (status, _) = send(
        &app,
        json_request("PUT", "/api/entries/1", json!({ "anxietyLevel": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, response) = send(
        &app,
        json_request("PUT", "/api/entries/999", json!({ "anxietyLevel": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "Entry not found");
}

#[tokio::test]
async fn delete_is_terminal_and_reports_absence_after() {
    let app = app();

    send(&app, json_request("POST", "/api/entries", entry_body(1, "2025-03-09"))).await;

    let (status, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/api/entries/1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, get("/api/entries/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/api/entries/1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_and_malformed_entry_ids() {
    let app = app();

    let (status, response) = send(&app, get("/api/entries/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "Entry not found");

    let (status, _) = send(&app, get("/api/entries/forty-two")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn catalog_and_coping_strategies_are_served() {
    let app = app();

    let (status, catalog) = send(&app, get("/api/catalog")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        catalog["emotions"],
        json!(["calm", "happy", "anxious", "sad", "angry"])
    );
    assert_eq!(
        catalog["triggers"],
        json!(["home", "school", "work", "social"])
    );
    assert_eq!(catalog["quadrants"]["mind"].as_array().unwrap().len(), 5);
    assert_eq!(
        catalog["quadrants"]["behaviors"][0]["id"],
        "avoiding-situations"
    );

    let (status, strategies) = send(&app, get("/api/coping-strategies")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(strategies.as_array().unwrap().len(), 6);
    assert_eq!(strategies[0]["title"], "Deep Breathing");
    assert_eq!(strategies[0]["category"], "relaxation");
}

#[tokio::test]
async fn health_and_readiness_report_ok() {
    let app = app();

    let (status, health) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["service"], "stillpoint-api");

    let (status, ready) = send(&app, get("/readyz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ready["checks"]["store"], "ok");
}
