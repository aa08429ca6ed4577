use axum::Json;
use axum::extract::State;

use crate::dto::StatusResponse;
use crate::dto::request::MonsterPath;
use crate::errors::ApiError;
use crate::extractors::{RequestTarget, TrackerPath};
use crate::handlers::to_payload;
use crate::state::AppState;

/// Monster structure: `{"parts": [..], "ailments": [..]}`.
pub async fn get_monster(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<MonsterPath>,
    target: RequestTarget,
) -> Result<Json<StatusResponse>, ApiError> {
    let monster = state
        .tracker
        .monster_snapshot(&path.session, path.monster.get())?;

    Ok(Json(StatusResponse::ok_with(to_payload(&monster, &target)?)))
}

/// Resets every part and ailment of one monster.
pub async fn clear_monster(
    State(state): State<AppState>,
    TrackerPath(path): TrackerPath<MonsterPath>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.tracker.clear_monster(&path.session, path.monster.get())?;

    tracing::info!(session = %path.session, monster = path.monster.get(), "Monster cleared");

    Ok(Json(StatusResponse::ok()))
}
