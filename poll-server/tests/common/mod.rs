#![allow(dead_code)]

//! Test infrastructure for poll-server API tests

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use poll_config::{CorsConfig, Environment, RateLimitConfig};
use poll_server::rate_limit::ApiRateLimiter;
use poll_server::{AppState, build_router};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// In-memory SQLite with migrations applied; a single pooled connection
/// keeps every request on the same database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    poll_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState for testing; production environment so envelopes stay terse.
pub async fn create_test_state() -> AppState {
    create_test_state_with(RateLimitConfig::default()).await
}

pub async fn create_test_state_with(rate_limit: RateLimitConfig) -> AppState {
    let pool = create_test_pool().await;
    AppState::new(
        pool,
        ApiRateLimiter::new(&rate_limit),
        Environment::Production,
    )
}

pub async fn create_test_app() -> Router {
    build_router(create_test_state().await, &CorsConfig::default())
}

/// Fire one request at the router and decode the JSON body (Null when the
/// body is empty).
pub async fn send_request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };

    (status, json)
}

/// Create a poll through the API and return the poll JSON from the envelope.
pub async fn create_poll(app: &Router, title: &str, options: &[&str]) -> serde_json::Value {
    let (status, body) = send_request(
        app.clone(),
        "POST",
        "/api/polls",
        Some(serde_json::json!({ "title": title, "options": options })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    body["poll"].clone()
}
