//! Path parameters for tracker routes.
//!
//! Any integer segment is accepted as an index, so negative and oversized
//! values reach the access layer and are reported as out-of-range instead of
//! as unknown routes. Field values are unsigned; a negative or non-numeric
//! value fails extraction.

use std::fmt;

use mhwsync_domain::monster::{AilmentField, PartField};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};

// =============================================================================
// PathIndex
// =============================================================================

/// A monster, part, or ailment index taken from the path.
///
/// Integer segments outside the `i64` range saturate to `i64::MIN` or
/// `i64::MAX`; they are out of range for every collection either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathIndex(pub i64);

impl PathIndex {
    /// Parses an optionally signed run of ASCII digits.
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        if let Ok(index) = segment.parse() {
            return Some(Self(index));
        }

        let (digits, saturated) = match segment.strip_prefix('-') {
            Some(digits) => (digits, i64::MIN),
            None => (segment.strip_prefix('+').unwrap_or(segment), i64::MAX),
        };

        (!digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()))
            .then_some(Self(saturated))
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for PathIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(PathIndexVisitor)
    }
}

struct PathIndexVisitor;

impl Visitor<'_> for PathIndexVisitor {
    type Value = PathIndex;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an integer index")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        PathIndex::parse(value).ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(PathIndex(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(PathIndex(i64::try_from(value).unwrap_or(i64::MAX)))
    }
}

// =============================================================================
// Sessions and Monsters
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionPath {
    pub session: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonsterPath {
    pub session: String,
    pub monster: PathIndex,
}

// =============================================================================
// Parts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartPath {
    pub session: String,
    pub monster: PathIndex,
    pub part: PathIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartFieldPath {
    pub session: String,
    pub monster: PathIndex,
    pub part: PathIndex,
    pub field: PartField,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartFieldUpdatePath {
    pub session: String,
    pub monster: PathIndex,
    pub part: PathIndex,
    pub field: PartField,
    pub value: u64,
}

/// Parameters of the `set_all` route for parts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartUpdatePath {
    pub session: String,
    pub monster: PathIndex,
    pub part: PathIndex,
    pub current_hp: u64,
    pub max_hp: u64,
    pub times_broken: u64,
}

// =============================================================================
// Ailments
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AilmentPath {
    pub session: String,
    pub monster: PathIndex,
    pub ailment: PathIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AilmentFieldPath {
    pub session: String,
    pub monster: PathIndex,
    pub ailment: PathIndex,
    pub field: AilmentField,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AilmentFieldUpdatePath {
    pub session: String,
    pub monster: PathIndex,
    pub ailment: PathIndex,
    pub field: AilmentField,
    pub value: u64,
}

/// Parameters of the `set_all` route for ailments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AilmentUpdatePath {
    pub session: String,
    pub monster: PathIndex,
    pub ailment: PathIndex,
    pub current: u64,
    pub max: u64,
}

// =============================================================================
// Tests
// =============================================================================
