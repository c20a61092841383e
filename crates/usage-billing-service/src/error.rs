//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use usage_billing_core::BillingError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An upstream message or report fetch failed.
    #[error("upstream error: failed to fetch {resource}: {message}")]
    Upstream {
        /// What was being fetched.
        resource: String,
        /// Underlying error, logged but not returned to the caller.
        message: String,
    },

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            Self::Upstream { resource, message } => {
                tracing::error!(resource = %resource, error = %message, "Upstream fetch failed");
                ("upstream_error", format!("Failed to fetch {resource}"))
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                ("internal_error", "An internal error occurred".to_string())
            }
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::Source(source) => Self::Upstream {
                resource: source.resource().to_string(),
                message: source.to_string(),
            },
            BillingError::Configuration(msg) | BillingError::InvalidAmount(msg) => {
                Self::Internal(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usage_billing_core::SourceError;

    #[test]
    fn source_errors_become_upstream_errors() {
        let err: ApiError = BillingError::from(SourceError::retrieval("report 9", "HTTP 502")).into();

        assert!(matches!(err, ApiError::Upstream { ref resource, .. } if resource == "report 9"));
    }

    #[test]
    fn every_error_is_a_server_error() {
        let upstream = ApiError::Upstream {
            resource: "messages".into(),
            message: "timed out".into(),
        };
        assert_eq!(
            upstream.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let internal = ApiError::Internal("boom".into());
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
