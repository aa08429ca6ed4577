//! Monsters and their per-slot state.
//!
//! - [`Part`]: health and break count of a damageable part
//! - [`Ailment`]: status-effect buildup
//! - [`Monster`]: fixed-size collections of both

mod aggregate;
mod ailment;
mod part;

pub use aggregate::Monster;
pub use ailment::{Ailment, AilmentField};
pub use part::{Part, PartField};

/// Default number of part and ailment slots per monster.
pub const DEFAULT_BUFFER_SIZE: usize = 50;
