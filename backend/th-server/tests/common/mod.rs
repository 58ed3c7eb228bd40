#![allow(dead_code)]

//! Test infrastructure for th-server API tests

use th_core::ManualClock;
use th_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const SEED_TICKET_ID: i64 = 1;

/// AppState over a fresh in-memory database, with a manual clock
pub async fn create_test_app_state() -> (AppState, Arc<ManualClock>) {
    let pool = th_db::open_in_memory_pool()
        .await
        .expect("Failed to create test database");
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap(),
    ));

    (AppState::new(pool, clock.clone()), clock)
}

pub async fn create_test_app() -> (Router, AppState, Arc<ManualClock>) {
    let (state, clock) = create_test_app_state().await;
    (build_router(state.clone()), state, clock)
}

/// Send one request through the router and decode the JSON body (Null when empty)
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// POST a ticket and return the created JSON
pub async fn create_ticket(app: &Router, name: &str, priority: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/tickets",
        Some(serde_json::json!({
            "name": name,
            "problemDescription": format!("Problem with {}", name),
            "priority": priority,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["ticket"].clone()
}
