use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::error::GatewayError;
use crate::metrics::{REQUEST_TOTAL, REQUESTS_REJECTED, UPSTREAM_FAILURES, UPSTREAM_LATENCY};
use crate::state::AppState;

// Clients without a forwarded address all share one budget
const FALLBACK_KEY: &str = "unknown";

// First address in x-forwarded-for, or the shared fallback key
fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .unwrap_or(FALLBACK_KEY)
        .to_string()
}

// POST handler: admit via the rate limiter, forward the JSON body to the
// backend unchanged, relay its status and body
pub async fn interview_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), GatewayError> {
    REQUEST_TOTAL.inc();

    let key = client_key(&headers);
    if !state.rate_limiter.check(&key) {
        REQUESTS_REJECTED.inc();
        tracing::warn!(client = %key, "rate limit exceeded");
        return Err(GatewayError::RateLimited);
    }

    // reject bad input before touching the upstream
    let payload: Value =
        serde_json::from_slice(&body).map_err(|_| GatewayError::InvalidBody)?;

    let start_time = Instant::now();

    let result = state
        .client
        .post(format!("{}/api/v1/interview", state.backend_url))
        .json(&payload)
        .timeout(state.upstream_timeout)
        .send()
        .await;

    let res = match result {
        Ok(res) => res,
        Err(e) => {
            UPSTREAM_FAILURES.inc();
            tracing::error!(client = %key, error = %e, "upstream request failed");
            if e.is_timeout() {
                return Err(GatewayError::UpstreamTimeout);
            }
            return Err(GatewayError::UpstreamUnavailable);
        }
    };

    // relay the upstream status as-is
    let status = StatusCode::from_u16(res.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);

    let body: Value = match res.json().await {
        Ok(body) => body,
        Err(e) => {
            UPSTREAM_FAILURES.inc();
            tracing::error!(client = %key, error = %e, "upstream returned non-JSON body");
            return Err(GatewayError::UpstreamUnavailable);
        }
    };

    UPSTREAM_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok((status, Json(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn key_is_first_forwarded_address() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("1.2.3.4, 10.0.0.1"),
        );
        assert_eq!(client_key(&headers), "1.2.3.4");
    }

    #[test]
    fn missing_header_uses_fallback_key() {
        let headers = HeaderMap::new();
        assert_eq!(client_key(&headers), "unknown");
    }

    #[test]
    fn blank_header_uses_fallback_key() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("  "));
        assert_eq!(client_key(&headers), "unknown");
    }
}
