use axum::http::{HeaderMap, Uri};

use crate::errors::ApiError;
use crate::extractors::requested_url;

/// Answers every request no route matched with a 404 envelope carrying the
/// requested URL.
pub async fn route_not_found(uri: Uri, headers: HeaderMap) -> ApiError {
    ApiError::route_not_found(requested_url(&headers, &uri))
}
