//! Error types for the torero API server.
//!
//! This module provides custom error types that implement `IntoResponse`
//! for seamless integration with Axum handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use torero_exec::ExecError;

/// Application-level errors for the API facade.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Not found error
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request error (bad query parameter, endpoint/type mismatch)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The torero binary is missing, unreachable, or emitted unusable output
    #[error("torero unavailable: {0}")]
    ToolUnavailable(String),

    /// A torero invocation exceeded its deadline
    #[error("torero timed out: {0}")]
    Timeout(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::ToolUnavailable(msg) => {
                tracing::error!(error = %msg, "torero unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, msg.clone())
            }
            ApiError::Timeout(msg) => {
                tracing::warn!(error = %msg, "torero timeout");
                (StatusCode::GATEWAY_TIMEOUT, msg.clone())
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// Result type alias using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<ExecError> for ApiError {
    fn from(err: ExecError) -> Self {
        match err {
            ExecError::Unavailable(msg) => ApiError::ToolUnavailable(msg),
            ExecError::Process(msg) => ApiError::ToolUnavailable(msg),
            ExecError::Timeout(secs) => {
                ApiError::Timeout(format!("torero command timed out after {} seconds", secs))
            }
            // Listing subcommands that fail or emit unusable output mean the
            // tool cannot serve as a data source right now.
            ExecError::Failure { exit_code, stderr } => {
                ApiError::ToolUnavailable(format!("torero exited with code {}: {}", exit_code, stderr))
            }
            ExecError::InvalidOutput(msg) => {
                ApiError::ToolUnavailable(format!("invalid JSON from torero: {}", msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ApiError::NotFound("Service 'x' not found".to_string());
        assert_eq!(err.to_string(), "Resource not found: Service 'x' not found");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ToolUnavailable("x".into()).into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Timeout("x".into()).into_response().status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ApiError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_exec_error_mapping() {
        let err: ApiError = ExecError::Timeout(30).into();
        assert!(matches!(err, ApiError::Timeout(_)));

        let err: ApiError = ExecError::Unavailable("not in PATH".into()).into();
        assert!(matches!(err, ApiError::ToolUnavailable(_)));

        let err: ApiError = ExecError::InvalidOutput("expected value".into()).into();
        assert!(matches!(err, ApiError::ToolUnavailable(_)));

        let err: ApiError = ExecError::Failure {
            exit_code: 1,
            stderr: "boom".into(),
        }
        .into();
        assert!(matches!(err, ApiError::ToolUnavailable(_)));
    }
}
