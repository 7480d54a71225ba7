//! Per-client-address request quota for the /api namespace.
//!
//! Requests beyond the quota are rejected outright with the uniform
//! envelope; nothing is queued or delayed.

use crate::AppState;
use crate::api::error::ApiError;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};
use poll_config::RateLimitConfig;

/// Keyed token bucket: each client address may spend the whole quota as a
/// burst, which then refills evenly across the window.
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>>,
}

impl ApiRateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
        }
    }

    /// True if this request fits the client's remaining quota.
    pub fn check(&self, addr: IpAddr) -> bool {
        self.limiter.check_key(&addr).is_ok()
    }
}

/// Middleware applied to the /api router.
pub async fn enforce(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let addr = client_addr(&request);

    if state.rate_limiter.check(addr) {
        next.run(request).await
    } else {
        ApiError::rate_limited().into_response()
    }
}

fn client_addr(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}
