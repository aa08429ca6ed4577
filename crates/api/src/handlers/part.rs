use axum::Json;
use axum::extract::State;
use mhwsync_domain::monster::Part;

use crate::dto::StatusResponse;
use crate::dto::request::{PartFieldPath, PartFieldUpdatePath, PartPath, PartUpdatePath};
use crate::errors::ApiError;
use crate::extractors::{RequestTarget, TrackerPath};
use crate::handlers::to_payload;
use crate::state::AppState;

// =============================================================================
// Read Handlers
// =============================================================================

/// Part structure: `{"current_hp", "max_hp", "times_broken"}`.
pub async fn get_part(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<PartPath>,
    target: RequestTarget,
) -> Result<Json<StatusResponse>, ApiError> {
    let part = state
        .tracker
        .part(&path.session, path.monster.get(), path.part.get())?;

    Ok(Json(StatusResponse::ok_with(to_payload(&part, &target)?)))
}

/// A single field, returned as a bare string such as `"5"`.
pub async fn get_part_field(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<PartFieldPath>,
) -> Result<Json<StatusResponse>, ApiError> {
    let value = state
        .tracker
        .part_field(&path.session, path.monster.get(), path.part.get(), path.field)?;

    Ok(Json(StatusResponse::scalar(value)))
}

// =============================================================================
// Write Handlers
// =============================================================================

pub async fn set_part_field(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<PartFieldUpdatePath>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.tracker.set_part_field(
        &path.session,
        path.monster.get(),
        path.part.get(),
        path.field,
        path.value,
    )?;

    Ok(Json(StatusResponse::ok()))
}

pub async fn set_part_all(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<PartUpdatePath>,
) -> Result<Json<StatusResponse>, ApiError> {
    let part = Part::new(path.current_hp, path.max_hp, path.times_broken);

    state
        .tracker
        .set_part_all(&path.session, path.monster.get(), path.part.get(), part)?;

    Ok(Json(StatusResponse::ok()))
}
