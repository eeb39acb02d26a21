//! Service-layer session registry. Sessions live in process memory only —
//! a restart drops every active interview.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::interview::session::InterviewSession;

/// Shared handle to one session. The mutex serializes turns: a handler holds
/// the lock across both collaborator calls, so a session never sees
/// overlapping mutation. Sessions are independent of each other.
pub type SessionHandle = Arc<Mutex<InterviewSession>>;

/// In-memory registry of active interviews keyed by session id.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session and returns its id with the fixed opening question.
    pub async fn create(&self, resume_text: String) -> (Uuid, &'static str) {
        let (session, opening) = InterviewSession::start(resume_text);
        let session_id = Uuid::new_v4();
        self.sessions
            .write()
            .await
            .insert(session_id, Arc::new(Mutex::new(session)));
        info!("Interview session {session_id} created");
        (session_id, opening)
    }

    pub async fn get(&self, session_id: Uuid) -> Option<SessionHandle> {
        self.sessions.read().await.get(&session_id).cloned()
    }

    /// Removes and returns a session — end-of-interview teardown.
    pub async fn remove(&self, session_id: Uuid) -> Option<SessionHandle> {
        let removed = self.sessions.write().await.remove(&session_id);
        if removed.is_some() {
            info!("Interview session {session_id} removed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::stage::Stage;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = SessionStore::new();
        let (session_id, opening) = store.create("resume".to_string()).await;
        assert!(!opening.is_empty());

        let handle = store.get(session_id).await.expect("session must exist");
        assert_eq!(handle.lock().await.stage(), Stage::Introduction);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = SessionStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
        assert!(store.remove(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_is_terminal() {
        let store = SessionStore::new();
        let (session_id, _) = store.create("resume".to_string()).await;
        assert!(store.remove(session_id).await.is_some());
        assert!(store.get(session_id).await.is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let (first, _) = store.create("resume one".to_string()).await;
        let (second, _) = store.create("resume two".to_string()).await;
        assert_ne!(first, second);

        store.remove(first).await;
        assert!(store.get(second).await.is_some());
    }
}
