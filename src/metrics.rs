use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("gateway_requests_total", "Total number of requests").unwrap();
    pub static ref REQUESTS_REJECTED: Counter = register_counter!(
        "gateway_requests_rejected_total",
        "Requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref UPSTREAM_FAILURES: Counter = register_counter!(
        "gateway_upstream_failures_total",
        "Upstream calls that failed or returned non-JSON"
    )
    .unwrap();
    pub static ref UPSTREAM_LATENCY: Histogram = register_histogram!(
        "gateway_upstream_latency_seconds",
        "Upstream request latency in seconds"
    )
    .unwrap();
    pub static ref TRACKED_KEYS: Gauge = register_gauge!(
        "gateway_tracked_keys",
        "Current number of client keys tracked by the rate limiter"
    )
    .unwrap();
}
