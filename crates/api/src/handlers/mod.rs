//! Request handlers.
//!
//! Every handler answers with the `{status, value}` envelope. Handlers only
//! translate between paths and [`mhwsync_domain::Tracker`] calls; all
//! validation lives in the domain.

pub mod ailment;
pub mod fallback;
pub mod health;
pub mod monster;
pub mod part;
pub mod session;

pub use ailment::{get_ailment, get_ailment_field, set_ailment_all, set_ailment_field};
pub use fallback::route_not_found;
pub use health::{alive, version};
pub use monster::{clear_monster, get_monster};
pub use part::{get_part, get_part_field, set_part_all, set_part_field};
pub use session::{create_session, delete_session, get_session, session_exists};

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::errors::ApiError;
use crate::extractors::RequestTarget;

/// Serializes a structured read into the envelope payload.
pub(crate) fn to_payload<T: Serialize>(
    value: &T,
    target: &RequestTarget,
) -> Result<JsonValue, ApiError> {
    serde_json::to_value(value)
        .map_err(|error| ApiError::internal(error.to_string(), target.as_str()))
}
