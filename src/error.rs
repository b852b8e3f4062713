use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// Everything a request handler can fail with. Each variant maps to one HTTP
/// status; the body is always the `{ok:false, error:<message>}` envelope.
#[derive(Debug)]
pub enum AppError {
    /// One or more required request fields absent or empty.
    MissingField(Vec<&'static str>),
    /// Upstream returned a non-success status; carries status and body text.
    Upstream { status: u16, body: String },
    /// The upstream call did not complete within the configured bound.
    UpstreamTimeout,
    /// Webhook signature verification failed.
    Unauthorized,
    /// Anything unexpected: network failure, malformed JSON, etc.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(fields) => {
                write!(f, "Missing required field(s): {}", fields.join(", "))
            }
            Self::Upstream { status, body } => write!(f, "Vapi error {status}: {body}"),
            Self::UpstreamTimeout => write!(f, "Vapi call timed out"),
            Self::Unauthorized => write!(f, "Invalid signature"),
            Self::Internal(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Upstream failures mirror the upstream status. An unrepresentable code
    /// degrades to 500.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({ "ok": false, "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
