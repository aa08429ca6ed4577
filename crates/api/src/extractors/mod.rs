//! Request extractors.
//!
//! - [`TrackerPath`]: typed path parameters whose parse failures surface as
//!   route-not-found envelopes instead of axum's plain-text rejections
//! - [`RequestTarget`]: the request path and query, for failure diagnostics

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path};
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Uri};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

// =============================================================================
// TrackerPath
// =============================================================================

/// Typed path parameters.
///
/// A segment that does not deserialize (a non-numeric index, a negative
/// field value, an unknown field name) means no tracker route applies, so
/// the rejection is [`ApiError::RouteNotFound`] with the requested URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerPath<T>(pub T);

impl<State, T> FromRequestParts<State> for TrackerPath<T>
where
    T: DeserializeOwned + Send,
    State: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &State) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(parameters)) => Ok(Self(parameters)),
            Err(rejection) => {
                tracing::debug!(%rejection, uri = %parts.uri, "Path parameters did not parse");
                Err(ApiError::route_not_found(requested_url(
                    &parts.headers,
                    &parts.uri,
                )))
            }
        }
    }
}

// =============================================================================
// RequestTarget
// =============================================================================

/// The path and query of the current request, e.g. `/session/a/?x=1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget(pub String);

impl RequestTarget {
    #[must_use]
    pub fn from_uri(uri: &Uri) -> Self {
        Self(
            uri.path_and_query()
                .map_or_else(|| uri.path().to_owned(), ToString::to_string),
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<State> FromRequestParts<State> for RequestTarget
where
    State: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &State) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}

// =============================================================================
// URL Reconstruction
// =============================================================================

/// Rebuilds the URL a client asked for.
///
/// Absolute-form request targets are returned as is. Otherwise the `Host`
/// header, when present, is combined with the path and query.
#[must_use]
pub fn requested_url(headers: &HeaderMap, uri: &Uri) -> String {
    if uri.authority().is_some() {
        return uri.to_string();
    }

    let target = RequestTarget::from_uri(uri);
    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map_or_else(
            || target.0.clone(),
            |host| format!("http://{host}{}", target.as_str()),
        )
}

// =============================================================================
// Tests
// =============================================================================
