use crate::rate_limit::ApiRateLimiter;

use std::time::Instant;

use poll_config::Environment;
use sqlx::SqlitePool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub rate_limiter: ApiRateLimiter,
    pub environment: Environment,
    /// Process start, for the /health uptime figure
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pool: SqlitePool, rate_limiter: ApiRateLimiter, environment: Environment) -> Self {
        Self {
            pool,
            rate_limiter,
            environment,
            started_at: Instant::now(),
        }
    }
}
