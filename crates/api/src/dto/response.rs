//! The response envelope shared by every endpoint.
//!
//! All responses, successful or not, carry a JSON body of the form
//! `{"status": <code>, "value": <payload>}`. Clients branch on `status`;
//! the codes are listed in [`status`].

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// =============================================================================
// Status Codes
// =============================================================================

/// Stable status codes carried in [`StatusResponse::status`].
pub mod status {
    pub const OK: u16 = 0;
    pub const SESSION_NOT_FOUND: u16 = 1;
    pub const SESSION_ALREADY_EXISTS: u16 = 2;
    pub const MONSTER_OUT_OF_RANGE: u16 = 3;
    pub const PART_OUT_OF_RANGE: u16 = 4;
    pub const AILMENT_OUT_OF_RANGE: u16 = 5;
    pub const INTERNAL_FAILURE: u16 = 10;
    pub const ROUTE_NOT_FOUND: u16 = 404;
}

// =============================================================================
// StatusResponse
// =============================================================================

/// Envelope returned by every endpoint.
///
/// A fresh value is built for each response; nothing is shared between
/// requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Outcome code.
    pub status: u16,

    /// Payload: an empty string for plain acknowledgements, a string for
    /// scalar reads and messages, a number for the API version, or a nested
    /// object for structured reads.
    pub value: JsonValue,
}

impl StatusResponse {
    #[must_use]
    pub fn new(status: u16, value: impl Into<JsonValue>) -> Self {
        Self {
            status,
            value: value.into(),
        }
    }

    /// Success with an empty string payload.
    #[must_use]
    pub fn ok() -> Self {
        Self::new(status::OK, "")
    }

    /// Success carrying `value`.
    #[must_use]
    pub fn ok_with(value: impl Into<JsonValue>) -> Self {
        Self::new(status::OK, value)
    }

    /// Success carrying a single numeric field rendered as a string.
    #[must_use]
    pub fn scalar(value: u64) -> Self {
        Self::new(status::OK, value.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn ok_has_empty_string_value() {
        let response = StatusResponse::ok();

        assert_eq!(response.status, status::OK);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": 0, "value": ""})
        );
    }

    #[rstest]
    fn scalar_is_rendered_as_string() {
        let response = StatusResponse::scalar(42);

        assert_eq!(response.value, json!("42"));
    }

    #[rstest]
    fn ok_with_keeps_numbers_as_numbers() {
        let response = StatusResponse::ok_with(2);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": 0, "value": 2})
        );
    }

    #[rstest]
    fn error_codes_are_distinct() {
        let codes = [
            status::OK,
            status::SESSION_NOT_FOUND,
            status::SESSION_ALREADY_EXISTS,
            status::MONSTER_OUT_OF_RANGE,
            status::PART_OUT_OF_RANGE,
            status::AILMENT_OUT_OF_RANGE,
            status::INTERNAL_FAILURE,
            status::ROUTE_NOT_FOUND,
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();

        assert_eq!(unique.len(), codes.len());
    }
}
