use crate::api::error::ApiError;
use crate::{AppState, api, health, rate_limit};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use poll_config::CorsConfig;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

/// Request bodies over this size are rejected outright.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    let api_routes = Router::new()
        .route(
            "/polls",
            get(api::polls::polls::list_polls).post(api::polls::polls::create_poll),
        )
        .route(
            "/polls/{id}",
            get(api::polls::polls::get_poll).delete(api::polls::polls::delete_poll),
        )
        .route("/polls/{id}/vote", post(api::polls::polls::record_vote))
        // Catch-all so unknown /api routes answer with the envelope
        .fallback(api_not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce,
        ));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(build_cors_layer(cors))
        // Last resort: a panicking handler becomes a 500 envelope instead
        // of tearing down the connection
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn api_not_found() -> ApiError {
    ApiError::not_found("API endpoint not found")
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        String::from("unknown panic")
    };

    ApiError::internal("Internal server error", Some(detail)).into_response()
}

fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    if cors.allow_any_origin() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}
