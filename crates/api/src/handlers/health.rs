use axum::Json;
use axum::extract::State;

use crate::dto::StatusResponse;
use crate::state::AppState;

// =============================================================================
// Liveness
// =============================================================================

/// `GET /`: answers with an empty success envelope while the process is up.
pub async fn alive() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}

// =============================================================================
// Version
// =============================================================================

/// `GET /version`: the API version as a number.
pub async fn version(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse::ok_with(state.api_version))
}
