use axum::Json;
use axum::extract::State;
use mhwsync_domain::monster::Ailment;

use crate::dto::StatusResponse;
use crate::dto::request::{
    AilmentFieldPath, AilmentFieldUpdatePath, AilmentPath, AilmentUpdatePath,
};
use crate::errors::ApiError;
use crate::extractors::{RequestTarget, TrackerPath};
use crate::handlers::to_payload;
use crate::state::AppState;

// =============================================================================
// Read Handlers
// =============================================================================

pub async fn get_ailment(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<AilmentPath>,
    target: RequestTarget,
) -> Result<Json<StatusResponse>, ApiError> {
    let ailment = state
        .tracker
        .ailment(&path.session, path.monster.get(), path.ailment.get())?;

    Ok(Json(StatusResponse::ok_with(to_payload(&ailment, &target)?)))
}

pub async fn get_ailment_field(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<AilmentFieldPath>,
) -> Result<Json<StatusResponse>, ApiError> {
    let value = state.tracker.ailment_field(
        &path.session,
        path.monster.get(),
        path.ailment.get(),
        path.field,
    )?;

    Ok(Json(StatusResponse::scalar(value)))
}

// =============================================================================
// Write Handlers
// =============================================================================

pub async fn set_ailment_field(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<AilmentFieldUpdatePath>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.tracker.set_ailment_field(
        &path.session,
        path.monster.get(),
        path.ailment.get(),
        path.field,
        path.value,
    )?;

    Ok(Json(StatusResponse::ok()))
}

pub async fn set_ailment_all(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<AilmentUpdatePath>,
) -> Result<Json<StatusResponse>, ApiError> {
    let ailment = Ailment::new(path.current, path.max);

    state.tracker.set_ailment_all(
        &path.session,
        path.monster.get(),
        path.ailment.get(),
        ailment,
    )?;

    Ok(Json(StatusResponse::ok()))
}
