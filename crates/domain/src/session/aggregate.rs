//! The session aggregate.

use serde::Serialize;

use crate::errors::{RangeTarget, TrackerError};
use crate::monster::Monster;

/// Number of monsters tracked by every session.
pub const MONSTER_COUNT: usize = 3;

// =============================================================================
// Session
// =============================================================================

/// One tracked hunt: exactly three monsters, addressed by position 0 to 2.
///
/// Serializes as `{"monsters": [..]}` in index order.
///
/// # Examples
///
/// ```
/// use mhwsync_domain::session::Session;
///
/// let session = Session::new(50);
/// assert_eq!(session.monsters().len(), 3);
/// assert!(session.monster(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    monsters: [Monster; MONSTER_COUNT],
}

impl Session {
    /// Creates a session whose monsters each hold `buffer_size` part and
    /// ailment slots.
    #[must_use]
    pub fn new(buffer_size: usize) -> Self {
        Self {
            monsters: std::array::from_fn(|_| Monster::new(buffer_size)),
        }
    }

    #[must_use]
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// # Errors
    ///
    /// Returns [`TrackerError::OutOfRange`] for the monster target when
    /// `index` is outside `[0, 3)`.
    pub fn monster(&self, index: i64) -> Result<&Monster, TrackerError> {
        let position = RangeTarget::Monster.resolve(index, MONSTER_COUNT)?;
        Ok(&self.monsters[position])
    }

    /// # Errors
    ///
    /// Same bounds as [`Session::monster`].
    pub fn monster_mut(&mut self, index: i64) -> Result<&mut Monster, TrackerError> {
        let position = RangeTarget::Monster.resolve(index, MONSTER_COUNT)?;
        Ok(&mut self.monsters[position])
    }

    /// Resets every part and ailment of one monster.
    ///
    /// # Errors
    ///
    /// Same bounds as [`Session::monster`].
    pub fn clear_monster(&mut self, index: i64) -> Result<(), TrackerError> {
        self.monster_mut(index)?.clear();
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
