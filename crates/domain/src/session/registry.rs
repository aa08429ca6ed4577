//! The process-wide session registry.
//!
//! The registry owns every session. The name map sits behind a
//! `parking_lot::RwLock` that is held only for insert, remove, and the clone
//! of a session handle; each session then has its own `Mutex`, so writers to
//! different sessions never wait on each other.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::Session;
use crate::errors::TrackerError;
use crate::monster::DEFAULT_BUFFER_SIZE;

/// Handle to a registered session. Lock it to read or mutate the session.
pub type SharedSession = Arc<Mutex<Session>>;

// =============================================================================
// SessionRegistry
// =============================================================================

/// Mapping from case-sensitive session name to session.
///
/// Sessions are only ever created and removed explicitly; lookups never
/// create a missing session.
///
/// # Examples
///
/// ```
/// use mhwsync_domain::session::SessionRegistry;
///
/// let registry = SessionRegistry::new(50);
/// registry.create("alice").unwrap();
///
/// assert!(registry.exists("alice"));
/// assert!(!registry.exists("Alice"));
/// assert!(registry.create("alice").is_err());
/// ```
#[derive(Debug)]
pub struct SessionRegistry {
    buffer_size: usize,
    sessions: RwLock<HashMap<String, SharedSession>>,
}

impl SessionRegistry {
    /// Creates an empty registry whose sessions use `buffer_size` part and
    /// ailment slots per monster.
    #[must_use]
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer_size,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.sessions.read().contains_key(name)
    }

    /// Registers a fresh session under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::SessionAlreadyExists`] if `name` is taken. The
    /// existing session is left as it was.
    pub fn create(&self, name: &str) -> Result<(), TrackerError> {
        match self.sessions.write().entry(name.to_owned()) {
            Entry::Occupied(_) => Err(TrackerError::session_already_exists(name)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(Session::new(self.buffer_size))));
                Ok(())
            }
        }
    }

    /// Removes the session registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::SessionNotFound`] if no such session exists.
    pub fn delete(&self, name: &str) -> Result<(), TrackerError> {
        self.sessions
            .write()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| TrackerError::session_not_found(name))
    }

    /// Returns a handle to the session registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::SessionNotFound`] if no such session exists.
    pub fn get(&self, name: &str) -> Result<SharedSession, TrackerError> {
        self.sessions
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| TrackerError::session_not_found(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::Part;
    use rstest::{fixture, rstest};

    #[fixture]
    fn registry() -> SessionRegistry {
        SessionRegistry::new(8)
    }

    mod lifecycle {
        use super::*;

        #[rstest]
        fn create_then_exists(registry: SessionRegistry) {
            assert!(!registry.exists("hunt"));

            registry.create("hunt").unwrap();

            assert!(registry.exists("hunt"));
            assert_eq!(registry.len(), 1);
        }

        #[rstest]
        fn create_twice_keeps_existing_session(registry: SessionRegistry) {
            registry.create("hunt").unwrap();
            registry
                .get("hunt")
                .unwrap()
                .lock()
                .monster_mut(0)
                .unwrap()
                .set_part_all(0, Part::new(5, 5, 0))
                .unwrap();

            let result = registry.create("hunt");

            assert_eq!(result, Err(TrackerError::session_already_exists("hunt")));
            let session = registry.get("hunt").unwrap();
            assert_eq!(
                *session.lock().monster(0).unwrap().part(0).unwrap(),
                Part::new(5, 5, 0)
            );
        }

        #[rstest]
        fn delete_removes_session(registry: SessionRegistry) {
            registry.create("hunt").unwrap();

            registry.delete("hunt").unwrap();

            assert!(!registry.exists("hunt"));
            assert!(registry.is_empty());
            assert_eq!(
                registry.get("hunt").unwrap_err(),
                TrackerError::session_not_found("hunt")
            );
        }

        #[rstest]
        fn delete_missing_session_fails(registry: SessionRegistry) {
            assert_eq!(
                registry.delete("ghost"),
                Err(TrackerError::session_not_found("ghost"))
            );
        }

        #[rstest]
        fn get_does_not_create(registry: SessionRegistry) {
            assert!(registry.get("ghost").is_err());
            assert!(!registry.exists("ghost"));
        }
    }

    mod names {
        use super::*;

        #[rstest]
        fn are_case_sensitive(registry: SessionRegistry) {
            registry.create("Hunt").unwrap();
            registry.create("hunt").unwrap();

            assert_eq!(registry.len(), 2);
            assert!(registry.exists("Hunt"));
            assert!(!registry.exists("HUNT"));
        }

        #[rstest]
        fn sessions_use_configured_buffer_size(registry: SessionRegistry) {
            registry.create("hunt").unwrap();

            let session = registry.get("hunt").unwrap();
            let guard = session.lock();
            assert!(guard.monsters().iter().all(|monster| monster.buffer_size() == 8));
            assert_eq!(registry.buffer_size(), 8);
        }
    }

    mod concurrency {
        use super::*;

        #[rstest]
        fn concurrent_creates_admit_exactly_one(registry: SessionRegistry) {
            let registry = Arc::new(registry);

            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let registry = Arc::clone(&registry);
                    std::thread::spawn(move || registry.create("race").is_ok())
                })
                .collect();

            let successes = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .filter(|created| *created)
                .count();

            assert_eq!(successes, 1);
            assert_eq!(registry.len(), 1);
        }
    }
}
