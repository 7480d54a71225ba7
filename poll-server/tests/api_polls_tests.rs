//! Integration tests for the poll API: health, list, get, create, delete,
//! and the catch-all envelope.

mod common;

use crate::common::{create_poll, create_test_app, send_request};

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health_reports_process_status() {
    let app = create_test_app().await;

    let (status, body) = send_request(app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "production");
    assert!(body["uptime"].is_u64());
    assert!(body["timestamp"].is_string());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_list_polls_empty_returns_bare_array() {
    let app = create_test_app().await;

    let (status, body) = send_request(app, "GET", "/api/polls", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_poll_returns_envelope_with_zeroed_options() {
    let app = create_test_app().await;

    let (status, body) = send_request(
        app,
        "POST",
        "/api/polls",
        Some(json!({ "title": "Favorite color?", "options": ["Red", "Blue", "Green"] })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Poll created successfully");

    let poll = &body["poll"];
    assert_eq!(poll["title"], "Favorite color?");
    assert!(poll["id"].is_string());
    assert!(poll["createdAt"].is_string());
    assert!(poll["updatedAt"].is_string());

    let options = poll["options"].as_array().unwrap();
    assert_eq!(options.len(), 3);
    for option in options {
        assert_eq!(option["votes"], 0);
    }
    assert_eq!(options[0]["text"], "Red");
    assert_eq!(options[2]["text"], "Green");
}

#[tokio::test]
async fn test_create_poll_lists_every_violated_field() {
    let app = create_test_app().await;

    let (status, body) = send_request(
        app,
        "POST",
        "/api/polls",
        Some(json!({ "title": "hi", "options": ["only one"] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");

    let errors = body["errors"].as_array().unwrap();
    let fields: Vec<&str> = errors
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "options"]);
}

#[tokio::test]
async fn test_create_poll_escapes_markup_before_storage() {
    let app = create_test_app().await;

    let poll = create_poll(&app, "<b>Best?</b> really", &["a & b", "plain"]).await;

    assert_eq!(poll["title"], "&lt;b&gt;Best?&lt;&#x2F;b&gt; really");
    assert_eq!(poll["options"][0]["text"], "a &amp; b");
}

#[tokio::test]
async fn test_create_poll_with_malformed_body_still_gets_envelope() {
    let app = create_test_app().await;

    let (status, body) = send_request(
        app,
        "POST",
        "/api/polls",
        Some(json!({ "title": "Favorite color?" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["errors"].is_array());
}

#[tokio::test]
async fn test_get_poll_round_trips_created_state() {
    let app = create_test_app().await;
    let created = create_poll(&app, "Favorite color?", &["Red", "Blue"]).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send_request(app.clone(), "GET", &format!("/api/polls/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], *id);
    assert_eq!(body["title"], "Favorite color?");
    assert_eq!(body["options"][0]["text"], "Red");
    assert_eq!(body["options"][1]["text"], "Blue");
    assert_eq!(body["options"][0]["votes"], 0);
}

#[tokio::test]
async fn test_get_poll_with_invalid_id_is_rejected() {
    let app = create_test_app().await;

    let (status, body) = send_request(app, "GET", "/api/polls/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid poll ID");
}

#[tokio::test]
async fn test_get_missing_poll_is_not_found() {
    let app = create_test_app().await;

    let (status, body) = send_request(
        app,
        "GET",
        &format!("/api/polls/{}", uuid::Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Poll not found");
}

#[tokio::test]
async fn test_list_polls_newest_first() {
    let app = create_test_app().await;
    create_poll(&app, "First question?", &["a", "b"]).await;
    create_poll(&app, "Second question?", &["a", "b"]).await;
    create_poll(&app, "Third question?", &["a", "b"]).await;

    let (status, body) = send_request(app, "GET", "/api/polls", None).await;

    assert_eq!(status, StatusCode::OK);
    let polls = body.as_array().unwrap();
    assert_eq!(polls.len(), 3);
    assert_eq!(polls[0]["title"], "Third question?");
    assert_eq!(polls[2]["title"], "First question?");
}

#[tokio::test]
async fn test_delete_poll_removes_it() {
    let app = create_test_app().await;
    let created = create_poll(&app, "Favorite color?", &["Red", "Blue"]).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) =
        send_request(app.clone(), "DELETE", &format!("/api/polls/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Poll deleted successfully");

    let (status, _) = send_request(app, "GET", &format!("/api/polls/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_poll_is_not_found() {
    let app = create_test_app().await;

    let (status, body) = send_request(
        app,
        "DELETE",
        &format!("/api/polls/{}", uuid::Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_unknown_api_route_answers_with_envelope() {
    let app = create_test_app().await;

    let (status, body) = send_request(app, "GET", "/api/does-not-exist", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "API endpoint not found");
}

#[tokio::test]
async fn test_example_flow_two_votes_on_blue() {
    let app = create_test_app().await;
    let created = create_poll(&app, "Favorite color?", &["Red", "Blue", "Green"]).await;
    let id = created["id"].as_str().unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    for _ in 0..2 {
        let (status, _) = send_request(
            app.clone(),
            "POST",
            &format!("/api/polls/{}/vote", id),
            Some(json!({ "optionIndex": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send_request(app, "GET", &format!("/api/polls/{}", id), None).await;
    assert_eq!(body["options"][0]["votes"], 0);
    assert_eq!(body["options"][1]["votes"], 2);
    assert_eq!(body["options"][2]["votes"], 0);

    let created_at =
        chrono::DateTime::parse_from_rfc3339(body["createdAt"].as_str().unwrap()).unwrap();
    let updated_at =
        chrono::DateTime::parse_from_rfc3339(body["updatedAt"].as_str().unwrap()).unwrap();
    assert!(updated_at > created_at);
}
