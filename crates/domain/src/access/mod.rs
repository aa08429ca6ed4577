//! Path-based access to tracked state.
//!
//! [`Tracker`] resolves a `(session, monster, part | ailment)` path and then
//! reads or writes the addressed value. Resolution always runs in the same
//! order:
//!
//! 1. the session must be registered,
//! 2. the monster index must be in `[0, 3)`,
//! 3. the part or ailment index must be in `[0, buffer_size)`.
//!
//! The first failing step decides the returned [`TrackerError`]. Each call
//! holds the session lock for its whole duration, so multi-field writes are
//! never observed half-applied.

use crate::errors::TrackerError;
use crate::monster::{Ailment, AilmentField, Monster, Part, PartField};
use crate::session::{Session, SessionRegistry};

// =============================================================================
// Tracker
// =============================================================================

/// Access layer over a [`SessionRegistry`].
///
/// # Examples
///
/// ```
/// use mhwsync_domain::Tracker;
/// use mhwsync_domain::monster::{Part, PartField};
///
/// let tracker = Tracker::with_buffer_size(50);
/// tracker.create_session("alice").unwrap();
///
/// tracker.set_part_all("alice", 1, 0, Part::new(5, 5, 0)).unwrap();
/// assert_eq!(tracker.part_field("alice", 1, 0, PartField::CurrentHp), Ok(5));
///
/// tracker.clear_monster("alice", 1).unwrap();
/// assert_eq!(tracker.part_field("alice", 1, 0, PartField::CurrentHp), Ok(0));
/// ```
#[derive(Debug, Default)]
pub struct Tracker {
    registry: SessionRegistry,
}

impl Tracker {
    #[must_use]
    pub const fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self::new(SessionRegistry::new(buffer_size))
    }

    #[must_use]
    pub const fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn session_exists(&self, name: &str) -> bool {
        self.registry.exists(name)
    }

    /// # Errors
    ///
    /// See [`SessionRegistry::create`].
    pub fn create_session(&self, name: &str) -> Result<(), TrackerError> {
        self.registry.create(name)
    }

    /// # Errors
    ///
    /// See [`SessionRegistry::delete`].
    pub fn delete_session(&self, name: &str) -> Result<(), TrackerError> {
        self.registry.delete(name)
    }

    // -------------------------------------------------------------------------
    // Sessions and monsters
    // -------------------------------------------------------------------------

    /// Copies the whole session under its lock.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::SessionNotFound`] for an unknown session.
    pub fn session_snapshot(&self, name: &str) -> Result<Session, TrackerError> {
        self.with_session(name, |session| Ok(session.clone()))
    }

    /// Copies one monster under the session lock.
    ///
    /// # Errors
    ///
    /// Fails on an unknown session or a monster index outside `[0, 3)`.
    pub fn monster_snapshot(&self, name: &str, monster: i64) -> Result<Monster, TrackerError> {
        self.with_session(name, |session| session.monster(monster).cloned())
    }

    /// # Errors
    ///
    /// Fails on an unknown session or a monster index outside `[0, 3)`.
    pub fn clear_monster(&self, name: &str, monster: i64) -> Result<(), TrackerError> {
        self.with_session(name, |session| session.clear_monster(monster))
    }

    // -------------------------------------------------------------------------
    // Parts
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Fails on an unknown session, a bad monster index, or a bad part index,
    /// checked in that order.
    pub fn part(&self, name: &str, monster: i64, part: i64) -> Result<Part, TrackerError> {
        self.with_monster(name, monster, |monster| monster.part(part).copied())
    }

    /// # Errors
    ///
    /// Same as [`Tracker::part`].
    pub fn part_field(
        &self,
        name: &str,
        monster: i64,
        part: i64,
        field: PartField,
    ) -> Result<u64, TrackerError> {
        self.part(name, monster, part).map(|value| value.get(field))
    }

    /// # Errors
    ///
    /// Same as [`Tracker::part`].
    pub fn set_part_field(
        &self,
        name: &str,
        monster: i64,
        part: i64,
        field: PartField,
        value: u64,
    ) -> Result<(), TrackerError> {
        self.with_monster(name, monster, |monster| {
            monster.set_part_field(part, field, value)
        })
    }

    /// Overwrites current hp, max hp, and break count of one part in a single
    /// locked step.
    ///
    /// # Errors
    ///
    /// Same as [`Tracker::part`].
    pub fn set_part_all(
        &self,
        name: &str,
        monster: i64,
        part: i64,
        value: Part,
    ) -> Result<(), TrackerError> {
        self.with_monster(name, monster, |monster| monster.set_part_all(part, value))
    }

    // -------------------------------------------------------------------------
    // Ailments
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Fails on an unknown session, a bad monster index, or a bad ailment
    /// index, checked in that order.
    pub fn ailment(&self, name: &str, monster: i64, ailment: i64) -> Result<Ailment, TrackerError> {
        self.with_monster(name, monster, |monster| monster.ailment(ailment).copied())
    }

    /// # Errors
    ///
    /// Same as [`Tracker::ailment`].
    pub fn ailment_field(
        &self,
        name: &str,
        monster: i64,
        ailment: i64,
        field: AilmentField,
    ) -> Result<u64, TrackerError> {
        self.ailment(name, monster, ailment)
            .map(|value| value.get(field))
    }

    /// # Errors
    ///
    /// Same as [`Tracker::ailment`].
    pub fn set_ailment_field(
        &self,
        name: &str,
        monster: i64,
        ailment: i64,
        field: AilmentField,
        value: u64,
    ) -> Result<(), TrackerError> {
        self.with_monster(name, monster, |monster| {
            monster.set_ailment_field(ailment, field, value)
        })
    }

    /// # Errors
    ///
    /// Same as [`Tracker::ailment`].
    pub fn set_ailment_all(
        &self,
        name: &str,
        monster: i64,
        ailment: i64,
        value: Ailment,
    ) -> Result<(), TrackerError> {
        self.with_monster(name, monster, |monster| {
            monster.set_ailment_all(ailment, value)
        })
    }

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------

    fn with_session<T>(
        &self,
        name: &str,
        operation: impl FnOnce(&mut Session) -> Result<T, TrackerError>,
    ) -> Result<T, TrackerError> {
        let session = self.registry.get(name)?;
        let mut guard = session.lock();
        operation(&mut guard)
    }

    fn with_monster<T>(
        &self,
        name: &str,
        monster: i64,
        operation: impl FnOnce(&mut Monster) -> Result<T, TrackerError>,
    ) -> Result<T, TrackerError> {
        self.with_session(name, |session| operation(session.monster_mut(monster)?))
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::errors::RangeTarget;
    use crate::session::MONSTER_COUNT;
    use proptest::prelude::*;

    const BUFFER_SIZE: usize = 50;

    fn tracker_with(name: &str) -> Tracker {
        let tracker = Tracker::with_buffer_size(BUFFER_SIZE);
        tracker.create_session(name).unwrap();
        tracker
    }

    proptest! {
        #[test]
        fn prop_create_then_exists(name in ".{0,24}") {
            let tracker = Tracker::default();

            prop_assert!(tracker.create_session(&name).is_ok());
            prop_assert!(tracker.session_exists(&name));
            prop_assert!(tracker.create_session(&name).unwrap_err().is_already_exists());
        }

        #[test]
        fn prop_set_part_all_round_trips(
            monster in 0i64..3,
            part in 0i64..50,
            current_hp in any::<u64>(),
            max_hp in any::<u64>(),
            times_broken in any::<u64>(),
        ) {
            let tracker = tracker_with("hunt");
            let value = Part::new(current_hp, max_hp, times_broken);

            tracker.set_part_all("hunt", monster, part, value).unwrap();

            prop_assert_eq!(tracker.part("hunt", monster, part), Ok(value));
        }

        #[test]
        fn prop_monster_outside_range_is_rejected(
            monster in prop_oneof![i64::MIN..0, 3i64..i64::MAX],
            part in any::<i64>(),
        ) {
            let tracker = tracker_with("hunt");
            let expected = TrackerError::out_of_range(RangeTarget::Monster, monster);

            prop_assert_eq!(tracker.part("hunt", monster, part), Err(expected.clone()));
            prop_assert_eq!(tracker.ailment("hunt", monster, part), Err(expected.clone()));
            prop_assert_eq!(tracker.clear_monster("hunt", monster), Err(expected));
        }

        #[test]
        fn prop_clear_resets_only_target(
            target in 0i64..3,
            writes in proptest::collection::vec((0i64..3, 0i64..50, 1u64..1_000), 1..40),
        ) {
            let tracker = tracker_with("hunt");
            for (monster, slot, value) in &writes {
                tracker.set_part_all("hunt", *monster, *slot, Part::new(*value, *value, 0)).unwrap();
                tracker.set_ailment_all("hunt", *monster, *slot, Ailment::new(*value, *value)).unwrap();
            }
            let before = tracker.session_snapshot("hunt").unwrap();

            tracker.clear_monster("hunt", target).unwrap();

            let after = tracker.session_snapshot("hunt").unwrap();
            for index in 0..MONSTER_COUNT {
                let monster = i64::try_from(index).unwrap();
                if monster == target {
                    prop_assert_eq!(after.monster(monster).unwrap(), &Monster::new(BUFFER_SIZE));
                } else {
                    prop_assert_eq!(after.monster(monster).unwrap(), before.monster(monster).unwrap());
                }
            }
        }
    }
}
