use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - process status, outside the /api namespace so it is never
/// rate-limited or enveloped.
pub async fn health(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs(),
        "environment": state.environment.as_str(),
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(health)).into_response()
}
