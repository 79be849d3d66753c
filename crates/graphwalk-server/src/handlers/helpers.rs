//! Shared handler helpers for Graphwalk REST API.
//!
//! Keeps error responses consistent across handlers.

use axum::{http::StatusCode, Json};

use crate::types::ErrorResponse;

/// Map a core error to HTTP 400 with its machine code.
///
/// Every core error describes a problem with the submitted graph, so none
/// of them is a server fault.
pub fn bad_request(err: &graphwalk_core::Error) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(code = err.code(), error = %err, "Request rejected");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
            code: Some(err.code().to_string()),
        }),
    )
}

/// Build an internal server error response without leaking implementation details.
///
/// Logs the full error server-side via `tracing::error!` and returns a generic
/// message to the client.
pub fn internal_error(
    context: &str,
    err: &dyn std::fmt::Display,
) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(%context, error = %err, "Internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("{context}: internal error"),
            code: None,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwalk_core::Error;

    #[test]
    fn test_bad_request_carries_code() {
        let (status, Json(body)) = bad_request(&Error::UnknownLabel("Z".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code.as_deref(), Some("UNKNOWN_LABEL"));
        assert!(body.error.contains('Z'));
    }

    #[test]
    fn test_internal_error_does_not_leak_details() {
        let detail = "JoinError: task panicked with sensitive data";
        let (status, Json(body)) = internal_error("Traversal", &detail);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("internal error"));
        assert!(!body.error.contains("panicked"));
        assert!(!body.error.contains("sensitive"));
        assert!(body.code.is_none());
    }
}
