mod health;
mod interview;
mod metrics;

pub use health::health_handler;
pub use interview::interview_handler;
pub use metrics::metrics_handler;
