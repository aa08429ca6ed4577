//! Error-to-envelope mapping.
//!
//! Every failure is delivered as a `{status, value}` envelope. Validation
//! outcomes (codes 1 to 5) use HTTP 200 so clients branch on `status` alone.
//! Unmatched routes (404) and internal failures (10) also carry HTTP 404 and
//! 500 so that access logs and proxies see them as failed requests. Clients
//! that check the HTTP status before parsing the body must still read the
//! envelope for those two codes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mhwsync_domain::{RangeTarget, TrackerError};
use thiserror::Error;

use crate::dto::response::{StatusResponse, status};

// =============================================================================
// ApiError
// =============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    /// A validation outcome from the access layer.
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// No route matched, or a path segment did not parse.
    #[error("{url}")]
    RouteNotFound { url: String },

    /// Anything unexpected while handling a request.
    #[error("{diagnostic}, request: {request}")]
    Internal { diagnostic: String, request: String },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub fn route_not_found(url: impl Into<String>) -> Self {
        Self::RouteNotFound { url: url.into() }
    }

    #[must_use]
    pub fn internal(diagnostic: impl Into<String>, request: impl Into<String>) -> Self {
        Self::Internal {
            diagnostic: diagnostic.into(),
            request: request.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl ApiError {
    /// The code placed in the `status` field of the envelope.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Tracker(error) => match error {
                TrackerError::SessionNotFound { .. } => status::SESSION_NOT_FOUND,
                TrackerError::SessionAlreadyExists { .. } => status::SESSION_ALREADY_EXISTS,
                TrackerError::OutOfRange { target, .. } => match target {
                    RangeTarget::Monster => status::MONSTER_OUT_OF_RANGE,
                    RangeTarget::Part => status::PART_OUT_OF_RANGE,
                    RangeTarget::Ailment => status::AILMENT_OUT_OF_RANGE,
                },
            },
            Self::RouteNotFound { .. } => status::ROUTE_NOT_FOUND,
            Self::Internal { .. } => status::INTERNAL_FAILURE,
        }
    }

    /// The HTTP status line. Validation outcomes are reported in the body
    /// with `200 OK`.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::Tracker(_) => StatusCode::OK,
            Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn to_status_response(&self) -> StatusResponse {
        StatusResponse::new(self.status_code(), self.to_string())
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Tracker(error) => {
                tracing::debug!(code = self.status_code(), %error, "Request rejected");
            }
            Self::RouteNotFound { url } => {
                tracing::debug!(%url, "No route matched");
            }
            Self::Internal {
                diagnostic,
                request,
            } => {
                tracing::error!(%diagnostic, %request, "Unhandled failure while serving request");
            }
        }

        (self.http_status(), Json(self.to_status_response())).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    mod status_code {
        use super::*;

        #[rstest]
        #[case(TrackerError::session_not_found("a"), 1)]
        #[case(TrackerError::session_already_exists("a"), 2)]
        #[case(TrackerError::out_of_range(RangeTarget::Monster, 3), 3)]
        #[case(TrackerError::out_of_range(RangeTarget::Part, 50), 4)]
        #[case(TrackerError::out_of_range(RangeTarget::Ailment, -1), 5)]
        fn tracker_errors_map_to_stable_codes(#[case] error: TrackerError, #[case] code: u16) {
            let error = ApiError::from(error);

            assert_eq!(error.status_code(), code);
            assert_eq!(error.http_status(), StatusCode::OK);
        }

        #[rstest]
        fn route_not_found_is_404() {
            let error = ApiError::route_not_found("http://localhost/nope");

            assert_eq!(error.status_code(), 404);
            assert_eq!(error.http_status(), StatusCode::NOT_FOUND);
        }

        #[rstest]
        fn internal_is_10() {
            let error = ApiError::internal("boom", "/session/a/?");

            assert_eq!(error.status_code(), 10);
            assert_eq!(error.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    mod display {
        use super::*;

        #[rstest]
        fn tracker_error_is_transparent() {
            let error = ApiError::from(TrackerError::out_of_range(RangeTarget::Monster, 3));

            assert_eq!(error.to_string(), "monster outside range");
        }

        #[rstest]
        fn route_not_found_shows_url() {
            let error = ApiError::route_not_found("http://localhost:5000/nope");

            assert_eq!(error.to_string(), "http://localhost:5000/nope");
        }

        #[rstest]
        fn internal_includes_request() {
            let error = ApiError::internal("panic: boom", "/session/a/?x=1");

            assert_eq!(error.to_string(), "panic: boom, request: /session/a/?x=1");
        }
    }

    mod into_response {
        use super::*;

        #[rstest]
        #[tokio::test]
        async fn body_is_status_envelope() {
            let response = ApiError::from(TrackerError::session_not_found("a")).into_response();

            assert_eq!(response.status(), StatusCode::OK);
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: StatusResponse = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, StatusResponse::new(1, "session does not exist"));
        }
    }
}
