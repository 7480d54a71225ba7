//! Integration tests for the per-address request quota.

mod common;

use crate::common::{create_test_state_with, send_request};

use axum::http::StatusCode;
use poll_config::{CorsConfig, RateLimitConfig};
use poll_server::build_router;

#[tokio::test]
async fn test_requests_beyond_the_quota_are_rejected() {
    let state = create_test_state_with(RateLimitConfig {
        max_requests: 3,
        window_secs: 3600,
    })
    .await;
    let app = build_router(state, &CorsConfig::default());

    for _ in 0..3 {
        let (status, _) = send_request(app.clone(), "GET", "/api/polls", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send_request(app, "GET", "/api/polls", None).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Too many requests from this IP, please try again later."
    );
}

#[tokio::test]
async fn test_health_is_never_rate_limited() {
    let state = create_test_state_with(RateLimitConfig {
        max_requests: 1,
        window_secs: 3600,
    })
    .await;
    let app = build_router(state, &CorsConfig::default());

    // Exhaust the API quota
    let (status, _) = send_request(app.clone(), "GET", "/api/polls", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_request(app.clone(), "GET", "/api/polls", None).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    // /health sits outside the limited namespace
    for _ in 0..5 {
        let (status, _) = send_request(app.clone(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
