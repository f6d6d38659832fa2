use crate::rate_limit::RateLimiter;
use std::time::Duration;
// app's shared state

pub struct AppState {
    pub client: reqwest::Client,
    pub backend_url: String, // base URL of the upstream, no trailing slash
    pub rate_limiter: RateLimiter,
    pub upstream_timeout: Duration,
}
