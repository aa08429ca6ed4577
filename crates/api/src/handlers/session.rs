use axum::Json;
use axum::extract::State;
use mhwsync_domain::TrackerError;

use crate::dto::StatusResponse;
use crate::dto::request::SessionPath;
use crate::errors::ApiError;
use crate::extractors::{RequestTarget, TrackerPath};
use crate::handlers::to_payload;
use crate::state::AppState;

// =============================================================================
// Lifecycle Handlers
// =============================================================================

pub async fn session_exists(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<SessionPath>,
) -> Result<Json<StatusResponse>, ApiError> {
    if state.tracker.session_exists(&path.session) {
        Ok(Json(StatusResponse::ok()))
    } else {
        Err(TrackerError::session_not_found(path.session).into())
    }
}

pub async fn create_session(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<SessionPath>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.tracker.create_session(&path.session)?;

    tracing::info!(
        session = %path.session,
        sessions = state.tracker.registry().len(),
        "Session created"
    );

    Ok(Json(StatusResponse::ok()))
}

pub async fn delete_session(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<SessionPath>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.tracker.delete_session(&path.session)?;

    tracing::info!(
        session = %path.session,
        sessions = state.tracker.registry().len(),
        "Session deleted"
    );

    Ok(Json(StatusResponse::ok()))
}

// =============================================================================
// Read Handler
// =============================================================================

/// Full session structure: `{"monsters": [..]}`.
pub async fn get_session(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<SessionPath>,
    target: RequestTarget,
) -> Result<Json<StatusResponse>, ApiError> {
    let session = state.tracker.session_snapshot(&path.session)?;

    Ok(Json(StatusResponse::ok_with(to_payload(&session, &target)?)))
}
