//! The monster aggregate.

use serde::Serialize;

use super::{Ailment, AilmentField, Part, PartField};
use crate::errors::{RangeTarget, TrackerError};

// =============================================================================
// Monster
// =============================================================================

/// A tracked monster with fixed-size part and ailment collections.
///
/// Both collections are allocated once with `buffer_size` default entries and
/// never change length. The position of an entry is its identity.
///
/// Serializes as `{"parts": [..], "ailments": [..]}` in index order.
///
/// # Examples
///
/// ```
/// use mhwsync_domain::monster::{Monster, Part};
///
/// let mut monster = Monster::new(50);
/// monster.set_part_all(3, Part::new(10, 20, 1)).unwrap();
/// assert_eq!(monster.part(3).unwrap().max_hp(), 20);
///
/// monster.clear();
/// assert_eq!(*monster.part(3).unwrap(), Part::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monster {
    parts: Vec<Part>,
    ailments: Vec<Ailment>,
}

impl Monster {
    #[must_use]
    pub fn new(buffer_size: usize) -> Self {
        Self {
            parts: vec![Part::default(); buffer_size],
            ailments: vec![Ailment::default(); buffer_size],
        }
    }

    /// Number of part slots, which is also the number of ailment slots.
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[must_use]
    pub fn ailments(&self) -> &[Ailment] {
        &self.ailments
    }

    /// Replaces every part and ailment with a default instance.
    pub fn clear(&mut self) {
        self.parts.fill(Part::default());
        self.ailments.fill(Ailment::default());
    }

    // -------------------------------------------------------------------------
    // Parts
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Returns [`TrackerError::OutOfRange`] for the part target when `index`
    /// is outside `[0, buffer_size)`.
    pub fn part(&self, index: i64) -> Result<&Part, TrackerError> {
        let position = RangeTarget::Part.resolve(index, self.parts.len())?;
        Ok(&self.parts[position])
    }

    /// # Errors
    ///
    /// Same bounds as [`Monster::part`].
    pub fn part_mut(&mut self, index: i64) -> Result<&mut Part, TrackerError> {
        let position = RangeTarget::Part.resolve(index, self.parts.len())?;
        Ok(&mut self.parts[position])
    }

    /// # Errors
    ///
    /// Same bounds as [`Monster::part`].
    pub fn set_part_field(
        &mut self,
        index: i64,
        field: PartField,
        value: u64,
    ) -> Result<(), TrackerError> {
        self.part_mut(index)?.set(field, value);
        Ok(())
    }

    /// Overwrites all three fields of one part at once.
    ///
    /// # Errors
    ///
    /// Same bounds as [`Monster::part`].
    pub fn set_part_all(&mut self, index: i64, part: Part) -> Result<(), TrackerError> {
        *self.part_mut(index)? = part;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Ailments
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Returns [`TrackerError::OutOfRange`] for the ailment target when
    /// `index` is outside `[0, buffer_size)`.
    pub fn ailment(&self, index: i64) -> Result<&Ailment, TrackerError> {
        let position = RangeTarget::Ailment.resolve(index, self.ailments.len())?;
        Ok(&self.ailments[position])
    }

    /// # Errors
    ///
    /// Same bounds as [`Monster::ailment`].
    pub fn ailment_mut(&mut self, index: i64) -> Result<&mut Ailment, TrackerError> {
        let position = RangeTarget::Ailment.resolve(index, self.ailments.len())?;
        Ok(&mut self.ailments[position])
    }

    /// # Errors
    ///
    /// Same bounds as [`Monster::ailment`].
    pub fn set_ailment_field(
        &mut self,
        index: i64,
        field: AilmentField,
        value: u64,
    ) -> Result<(), TrackerError> {
        self.ailment_mut(index)?.set(field, value);
        Ok(())
    }

    /// # Errors
    ///
    /// Same bounds as [`Monster::ailment`].
    pub fn set_ailment_all(&mut self, index: i64, ailment: Ailment) -> Result<(), TrackerError> {
        *self.ailment_mut(index)? = ailment;
        Ok(())
    }
}

impl Default for Monster {
    fn default() -> Self {
        Self::new(super::DEFAULT_BUFFER_SIZE)
    }
}

// =============================================================================
// Tests
// =============================================================================
