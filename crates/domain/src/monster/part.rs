//! Monster parts.
//!
//! A part is a damageable sub-component of a monster. It tracks current and
//! maximum health plus how many times it has been broken. No relation between
//! the fields is enforced: clients report whatever the game shows.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// PartField
// =============================================================================

/// Selects a single numeric field of a [`Part`].
///
/// Deserializes from the snake_case field name, which lets path segments such
/// as `current_hp` map directly onto a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartField {
    CurrentHp,
    MaxHp,
    TimesBroken,
}

impl PartField {
    /// Returns all part fields in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::CurrentHp, Self::MaxHp, Self::TimesBroken]
    }

    /// Returns the field name as it appears in serialized parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use mhwsync_domain::monster::PartField;
    ///
    /// assert_eq!(PartField::TimesBroken.name(), "times_broken");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CurrentHp => "current_hp",
            Self::MaxHp => "max_hp",
            Self::TimesBroken => "times_broken",
        }
    }
}

impl fmt::Display for PartField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

// =============================================================================
// Part
// =============================================================================

/// Health and break state of one monster part.
///
/// Serializes as `{"current_hp": .., "max_hp": .., "times_broken": ..}`.
///
/// # Examples
///
/// ```
/// use mhwsync_domain::monster::{Part, PartField};
///
/// let mut part = Part::new(120, 300, 0);
/// part.set(PartField::TimesBroken, 1);
///
/// assert_eq!(part.get(PartField::CurrentHp), 120);
/// assert_eq!(part.times_broken(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Part {
    current_hp: u64,
    max_hp: u64,
    times_broken: u64,
}

impl Part {
    #[must_use]
    pub const fn new(current_hp: u64, max_hp: u64, times_broken: u64) -> Self {
        Self {
            current_hp,
            max_hp,
            times_broken,
        }
    }

    #[must_use]
    pub const fn current_hp(&self) -> u64 {
        self.current_hp
    }

    #[must_use]
    pub const fn max_hp(&self) -> u64 {
        self.max_hp
    }

    #[must_use]
    pub const fn times_broken(&self) -> u64 {
        self.times_broken
    }

    /// Reads one field.
    #[must_use]
    pub const fn get(&self, field: PartField) -> u64 {
        match field {
            PartField::CurrentHp => self.current_hp,
            PartField::MaxHp => self.max_hp,
            PartField::TimesBroken => self.times_broken,
        }
    }

    /// Overwrites one field, leaving the others untouched.
    pub fn set(&mut self, field: PartField, value: u64) {
        match field {
            PartField::CurrentHp => self.current_hp = value,
            PartField::MaxHp => self.max_hp = value,
            PartField::TimesBroken => self.times_broken = value,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
