use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;

// JSON envelope returned on every failure path
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

// Everything a handler can fail with. Nothing propagates past the gateway
// boundary: each variant maps to a status code and a JSON envelope.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Rate limit exceeded. Try again later.")]
    RateLimited,

    #[error("Invalid JSON body")]
    InvalidBody,

    // network failure, unreachable host, or a non-JSON upstream response
    #[error("Failed to contact backend")]
    UpstreamUnavailable,

    // upstream call exceeded the configured deadline
    #[error("Failed to contact backend")]
    UpstreamTimeout,
}

impl GatewayError {
    fn status(&self) -> StatusCode {
        match self {
            GatewayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::InvalidBody => StatusCode::BAD_REQUEST,
            GatewayError::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            GatewayError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
