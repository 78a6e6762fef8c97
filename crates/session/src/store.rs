//! In-memory session storage.

use crate::state::SessionState;
use catalog::Movie;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// In-memory map of session id to session state.
///
/// Cloning is cheap; clones share the same underlying map. Each entry is
/// only mutated through [`SessionStore::with_session`], which holds the
/// entry's lock for the duration of the closure, so concurrent requests for
/// different sessions never contend.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Create a new empty session and return its id
    pub fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions.insert(id.clone(), SessionState::new());
        debug!("created session {id}");
        id
    }

    /// Run `f` with mutable access to a session's state.
    ///
    /// Returns `None` when the session id is unknown.
    pub fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut SessionState) -> T) -> Option<T> {
        self.sessions.get_mut(id).map(|mut entry| f(&mut entry))
    }

    /// Chronological history for a session, cloned out of the store
    pub fn history(&self, id: &str) -> Option<Vec<Movie>> {
        self.sessions.get(id).map(|entry| entry.history().to_vec())
    }

    /// Clear a session's history and seen titles.
    ///
    /// Returns false for an unknown id.
    pub fn reset(&self, id: &str) -> bool {
        self.with_session(id, |state| state.reset()).is_some()
    }

    /// Discard a session entirely
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            debug!("removed session {id}");
        }
        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            director: "Someone".to_string(),
            rating: "7.0".to_string(),
            mood: "Drama".to_string(),
            summary: "A test record.".to_string(),
        }
    }

    #[test]
    fn test_created_sessions_start_empty() {
        let store = SessionStore::new();
        let id = store.create();

        assert!(store.contains(&id));
        assert_eq!(store.history(&id).unwrap().len(), 0);
    }

    #[test]
    fn test_with_session_mutates_in_place() {
        let store = SessionStore::new();
        let id = store.create();

        let recorded = store.with_session(&id, |state| state.record(movie("Inception")));
        assert!(recorded.is_some());

        let history = store.history(&id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].title, "Inception");
    }

    #[test]
    fn test_unknown_session_reports_absence() {
        let store = SessionStore::new();

        assert!(store.with_session("nope", |_| ()).is_none());
        assert!(store.history("nope").is_none());
        assert!(!store.reset("nope"));
        assert!(!store.remove("nope"));
    }

    #[test]
    fn test_reset_and_remove() {
        let store = SessionStore::new();
        let id = store.create();
        store
            .with_session(&id, |state| state.record(movie("Inception")))
            .unwrap();

        assert!(store.reset(&id));
        assert_eq!(store.history(&id).unwrap().len(), 0);

        assert!(store.remove(&id));
        assert!(!store.contains(&id));
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let store = SessionStore::new();
        let a = store.create();
        let b = store.create();

        store
            .with_session(&a, |state| state.record(movie("Inception")))
            .unwrap();

        assert_eq!(store.history(&a).unwrap().len(), 1);
        assert_eq!(store.history(&b).unwrap().len(), 0);
    }
}
