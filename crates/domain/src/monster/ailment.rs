//! Monster ailments.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// AilmentField
// =============================================================================

/// Selects a single numeric field of an [`Ailment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AilmentField {
    CurrentBuildup,
    MaxBuildup,
}

impl AilmentField {
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::CurrentBuildup, Self::MaxBuildup]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CurrentBuildup => "current_buildup",
            Self::MaxBuildup => "max_buildup",
        }
    }
}

impl fmt::Display for AilmentField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

// =============================================================================
// Ailment
// =============================================================================

/// Status-effect buildup on a monster (poison, paralysis, ...).
///
/// Serializes as `{"current_buildup": .., "max_buildup": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ailment {
    current_buildup: u64,
    max_buildup: u64,
}

impl Ailment {
    #[must_use]
    pub const fn new(current_buildup: u64, max_buildup: u64) -> Self {
        Self {
            current_buildup,
            max_buildup,
        }
    }

    #[must_use]
    pub const fn current_buildup(&self) -> u64 {
        self.current_buildup
    }

    #[must_use]
    pub const fn max_buildup(&self) -> u64 {
        self.max_buildup
    }

    #[must_use]
    pub const fn get(&self, field: AilmentField) -> u64 {
        match field {
            AilmentField::CurrentBuildup => self.current_buildup,
            AilmentField::MaxBuildup => self.max_buildup,
        }
    }

    pub fn set(&mut self, field: AilmentField, value: u64) {
        match field {
            AilmentField::CurrentBuildup => self.current_buildup = value,
            AilmentField::MaxBuildup => self.max_buildup = value,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_is_all_zero() {
        let ailment = Ailment::default();

        for field in AilmentField::all() {
            assert_eq!(ailment.get(field), 0);
        }
    }

    #[rstest]
    #[case(AilmentField::CurrentBuildup)]
    #[case(AilmentField::MaxBuildup)]
    fn set_touches_only_the_selected_field(#[case] field: AilmentField) {
        let mut ailment = Ailment::new(5, 180);
        let before = ailment;

        ailment.set(field, 90);

        for other in AilmentField::all() {
            let expected = if other == field { 90 } else { before.get(other) };
            assert_eq!(ailment.get(other), expected);
        }
    }

    #[rstest]
    #[case("\"current_buildup\"", AilmentField::CurrentBuildup)]
    #[case("\"max_buildup\"", AilmentField::MaxBuildup)]
    fn field_deserializes_from_name(#[case] json: &str, #[case] expected: AilmentField) {
        let parsed: AilmentField = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.name(), expected.to_string());
    }

    #[rstest]
    fn serializes_with_field_names() {
        let json = serde_json::to_value(Ailment::new(30, 200)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"current_buildup": 30, "max_buildup": 200})
        );
    }
}
