//! Upstream failure kinds and their mapping to API errors.

use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::error::AppError;

/// Failure of a single upstream call.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream responded with status {status}")]
    Status { status: StatusCode, body: String },

    /// The upstream answered successfully but the body could not be read.
    #[error("invalid upstream response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The configured base URL cannot carry path segments.
    #[error("upstream base URL cannot be used as a base: {0}")]
    InvalidBaseUrl(String),
}

impl UpstreamError {
    /// Returns true for a 4xx upstream response.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if status.is_client_error())
    }
}

/// Keeps a JSON upstream body structured, wraps anything else as a string.
fn body_value(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Status { status, body } => AppError::upstream(
                status,
                "Upstream request failed",
                json!({ "body": body_value(body) }),
            ),
            UpstreamError::Transport(source) => AppError::bad_gateway(
                "Upstream service unavailable",
                json!({ "reason": source.to_string() }),
            ),
            UpstreamError::Decode(source) => AppError::bad_gateway(
                "Invalid upstream response",
                json!({ "reason": source.to_string() }),
            ),
            UpstreamError::InvalidBaseUrl(url) => {
                AppError::internal("Invalid upstream base URL", json!({ "url": url }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_keeps_status_and_json_body() {
        let err = UpstreamError::Status {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"message":"salary must be positive"}"#.to_string(),
        };

        match AppError::from(err) {
            AppError::Upstream {
                status, details, ..
            } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(details["body"]["message"], "salary must be positive");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_error_wraps_plain_body() {
        let err = UpstreamError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };

        match AppError::from(err) {
            AppError::Upstream { details, .. } => assert_eq!(details["body"], "boom"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_is_client_error() {
        let not_found = UpstreamError::Status {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        };
        let unavailable = UpstreamError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: String::new(),
        };

        assert!(not_found.is_client_error());
        assert!(!unavailable.is_client_error());
        assert!(!UpstreamError::InvalidBaseUrl("x".to_string()).is_client_error());
    }
}
