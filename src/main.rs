use clap::Parser;
use interview_gateway::app;
use interview_gateway::config::Args;
use interview_gateway::metrics::TRACKED_KEYS;
use interview_gateway::rate_limit::RateLimiter;
use interview_gateway::state::AppState;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments
    let args = Args::parse();

    // creating shared state
    let state = Arc::new(AppState {
        client: reqwest::Client::new(),
        backend_url: args.backend_url.trim_end_matches('/').to_string(),
        rate_limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
        upstream_timeout: Duration::from_secs(args.upstream_timeout),
    });

    // periodically drop expired rate-limit entries
    let sweep_state = state.clone();
    let sweep_every = Duration::from_secs(args.sweep_interval);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_every);
        loop {
            interval.tick().await;
            sweep_state.rate_limiter.sweep(Instant::now());
            TRACKED_KEYS.set(sweep_state.rate_limiter.len() as f64);
        }
    });

    let app = app(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!(port = args.port, "gateway listening");
    tracing::info!(backend = %args.backend_url, "forwarding to backend");
    tracing::info!(
        limit = args.rate_limit,
        window_secs = args.rate_window,
        "rate limit configured"
    );
    axum::serve(listener, app).await.unwrap();
}
