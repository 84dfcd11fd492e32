//! Session storage
//!
//! Sessions are kept behind a small repository trait rather than a
//! module-global map, so callers choose the storage lifetime and tests can
//! run against their own instances.

use std::collections::HashMap;

use uuid::Uuid;

use crate::session::CreatorSession;

/// Opaque session key.
pub type SessionId = Uuid;

/// Keyed storage for creator sessions.
pub trait SessionRepository {
    /// Store a session under a fresh key.
    fn create(&mut self, session: CreatorSession) -> SessionId;

    fn find(&self, id: &SessionId) -> Option<&CreatorSession>;

    fn find_mut(&mut self, id: &SessionId) -> Option<&mut CreatorSession>;

    /// Drop a session, returning it if it existed.
    fn remove(&mut self, id: &SessionId) -> Option<CreatorSession>;
}

/// Process-local session storage.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: HashMap<SessionId, CreatorSession>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn create(&mut self, session: CreatorSession) -> SessionId {
        let id = Uuid::new_v4();
        self.sessions.insert(id, session);
        tracing::debug!(%id, "created creator session");
        id
    }

    fn find(&self, id: &SessionId) -> Option<&CreatorSession> {
        self.sessions.get(id)
    }

    fn find_mut(&mut self, id: &SessionId) -> Option<&mut CreatorSession> {
        self.sessions.get_mut(id)
    }

    fn remove(&mut self, id: &SessionId) -> Option<CreatorSession> {
        let session = self.sessions.remove(id);
        if session.is_some() {
            tracing::debug!(%id, "removed creator session");
        }
        session
    }
}
