//! Error types for tracker operations.
//!
//! Every failure the domain can produce is a deterministic validation
//! outcome: a missing session, a duplicate session, or an index outside the
//! fixed bounds of a collection. The `Display` output of each variant is the
//! message reported to clients, so it must stay stable.

use std::fmt;

use thiserror::Error;

// =============================================================================
// RangeTarget
// =============================================================================

/// The collection an index was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeTarget {
    /// One of the three monsters of a session.
    Monster,
    /// A part slot of a monster.
    Part,
    /// An ailment slot of a monster.
    Ailment,
}

impl RangeTarget {
    /// Returns the lowercase name used in client-facing messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use mhwsync_domain::errors::RangeTarget;
    ///
    /// assert_eq!(RangeTarget::Ailment.name(), "ailment");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monster => "monster",
            Self::Part => "part",
            Self::Ailment => "ailment",
        }
    }

    /// Resolves a raw, possibly negative, index against a collection of
    /// `length` elements.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::OutOfRange`] when `index` is negative or not
    /// smaller than `length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mhwsync_domain::errors::RangeTarget;
    ///
    /// assert_eq!(RangeTarget::Part.resolve(4, 50), Ok(4));
    /// assert!(RangeTarget::Part.resolve(-1, 50).is_err());
    /// assert!(RangeTarget::Part.resolve(50, 50).is_err());
    /// ```
    pub fn resolve(self, index: i64, length: usize) -> Result<usize, TrackerError> {
        usize::try_from(index)
            .ok()
            .filter(|position| *position < length)
            .ok_or(TrackerError::OutOfRange {
                target: self,
                index,
            })
    }
}

impl fmt::Display for RangeTarget {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

// =============================================================================
// TrackerError
// =============================================================================

/// Errors produced while resolving or mutating tracked state.
///
/// Validation happens in a fixed order (session, then monster, then part or
/// ailment), so the first failing step decides which variant is returned.
///
/// # Examples
///
/// ```
/// use mhwsync_domain::errors::TrackerError;
///
/// let error = TrackerError::session_not_found("alice");
/// assert!(error.is_not_found());
/// assert_eq!(error.to_string(), "session does not exist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// No session is registered under the given name.
    #[error("session does not exist")]
    SessionNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A session with the given name is already registered.
    #[error("session already exists")]
    SessionAlreadyExists {
        /// The name that was requested.
        name: String,
    },

    /// An index fell outside the bounds of its collection.
    #[error("{target} outside range")]
    OutOfRange {
        /// The collection the index was resolved against.
        target: RangeTarget,
        /// The rejected index.
        index: i64,
    },
}

impl TrackerError {
    #[must_use]
    pub fn session_not_found(name: impl Into<String>) -> Self {
        Self::SessionNotFound { name: name.into() }
    }

    #[must_use]
    pub fn session_already_exists(name: impl Into<String>) -> Self {
        Self::SessionAlreadyExists { name: name.into() }
    }

    #[must_use]
    pub const fn out_of_range(target: RangeTarget, index: i64) -> Self {
        Self::OutOfRange { target, index }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SessionNotFound { .. })
    }

    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::SessionAlreadyExists { .. })
    }

    /// Returns the collection an out-of-range index was checked against.
    #[must_use]
    pub const fn range_target(&self) -> Option<RangeTarget> {
        match self {
            Self::OutOfRange { target, .. } => Some(*target),
            _ => None,
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

    mod range_target {
        use super::*;

        #[rstest]
        #[case(0, 3, Some(0))]
        #[case(2, 3, Some(2))]
        #[case(3, 3, None)]
        #[case(-1, 3, None)]
        #[case(i64::MIN, 3, None)]
        #[case(i64::MAX, 3, None)]
        #[case(0, 0, None)]
        fn resolve_checks_both_bounds(
            #[case] index: i64,
            #[case] length: usize,
            #[case] expected: Option<usize>,
        ) {
            assert_eq!(RangeTarget::Monster.resolve(index, length).ok(), expected);
        }

        #[rstest]
        fn resolve_reports_target_and_index() {
            let error = RangeTarget::Ailment.resolve(-7, 50).unwrap_err();

            assert_eq!(error, TrackerError::out_of_range(RangeTarget::Ailment, -7));
            assert_eq!(error.range_target(), Some(RangeTarget::Ailment));
        }

        #[rstest]
        fn display_uses_lowercase_name() {
            assert_eq!(RangeTarget::Monster.to_string(), "monster");
            assert_eq!(RangeTarget::Part.to_string(), "part");
        }
    }

    mod display {
        use super::*;

        #[rstest]
        #[case(TrackerError::session_not_found("a"), "session does not exist")]
        #[case(TrackerError::session_already_exists("a"), "session already exists")]
        #[case(
            TrackerError::out_of_range(RangeTarget::Monster, 3),
            "monster outside range"
        )]
        #[case(TrackerError::out_of_range(RangeTarget::Part, 50), "part outside range")]
        #[case(
            TrackerError::out_of_range(RangeTarget::Ailment, -1),
            "ailment outside range"
        )]
        fn messages_are_stable(#[case] error: TrackerError, #[case] expected: &str) {
            assert_eq!(error.to_string(), expected);
        }
    }

    mod queries {
        use super::*;

        #[rstest]
        fn not_found_is_not_already_exists() {
            let error = TrackerError::session_not_found("hunt");

            assert!(error.is_not_found());
            assert!(!error.is_already_exists());
            assert_eq!(error.range_target(), None);
        }

        #[rstest]
        fn already_exists_keeps_name() {
            let error = TrackerError::session_already_exists("hunt");

            assert!(error.is_already_exists());
            match error {
                TrackerError::SessionAlreadyExists { name } => assert_eq!(name, "hunt"),
                _ => panic!("Expected SessionAlreadyExists variant"),
            }
        }
    }
}
