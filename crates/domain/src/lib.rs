//! Domain layer for the mhwsync hunt tracker
//!
//! A [`session::Session`] holds exactly three [`monster::Monster`]s, and each
//! monster holds fixed-size collections of [`monster::Part`]s and
//! [`monster::Ailment`]s. Sessions live in a [`session::SessionRegistry`],
//! and all indexed reads and writes go through the [`Tracker`] access layer,
//! which validates the session, the monster index, and the slot index in that
//! order.

pub mod access;
pub mod errors;
pub mod monster;
pub mod session;

pub use access::Tracker;
pub use errors::{RangeTarget, TrackerError};
