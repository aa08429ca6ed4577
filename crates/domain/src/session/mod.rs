//! Sessions and the registry that owns them.

mod aggregate;
mod registry;

pub use aggregate::{MONSTER_COUNT, Session};
pub use registry::{SessionRegistry, SharedSession};
