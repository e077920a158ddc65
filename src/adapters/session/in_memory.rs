//! In-Memory Session Registry Adapter
//!
//! Holds live sessions behind per-session mutexes. The map lock is only
//! held to resolve a handle; the per-session lock is what a caller holds
//! for the duration of a turn.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::chat::ConversationSession;
use crate::domain::foundation::SessionId;
use crate::ports::{RegistryError, SessionHandle, SessionRegistry};

/// In-memory registry of live sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn create(&self, session: ConversationSession) -> SessionId {
        let id = session.id();
        let handle = Arc::new(Mutex::new(session));
        self.sessions.write().await.insert(id, handle);
        id
    }

    async fn get(&self, id: SessionId) -> Result<SessionHandle, RegistryError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    async fn remove(&self, id: SessionId) -> Result<(), RegistryError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RegistryError::NotFound(id))
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::DEFAULT_REPORT_NUMBER_BASE;

    fn test_session() -> ConversationSession {
        ConversationSession::new(DEFAULT_REPORT_NUMBER_BASE)
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let registry = InMemorySessionRegistry::new();
        let id = registry.create(test_session()).await;

        let handle = registry.get(id).await.unwrap();
        assert_eq!(handle.lock().await.id(), id);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn get_unknown_session_fails() {
        let registry = InMemorySessionRegistry::new();
        let result = registry.get(SessionId::new()).await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn remove_discards_the_session() {
        let registry = InMemorySessionRegistry::new();
        let id = registry.create(test_session()).await;

        registry.remove(id).await.unwrap();

        assert_eq!(registry.len().await, 0);
        assert!(registry.get(id).await.is_err());
    }

    #[tokio::test]
    async fn remove_unknown_session_fails() {
        let registry = InMemorySessionRegistry::new();
        let result = registry.remove(SessionId::new()).await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn removal_mid_turn_abandons_pending_mutation() {
        let registry = InMemorySessionRegistry::new();
        let id = registry.create(test_session()).await;

        // A turn is in flight on a resolved handle.
        let handle = registry.get(id).await.unwrap();
        handle.lock().await.submit("gelombang tinggi").unwrap();

        // Owner tears the session down mid-turn.
        registry.remove(id).await.unwrap();

        // Completing against the detached handle neither crashes nor
        // resurrects registry state.
        handle.lock().await.complete_turn("balasan").unwrap();
        assert!(registry.get(id).await.is_err());
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let registry = InMemorySessionRegistry::new();
        let a = registry.create(test_session()).await;
        let b = registry.create(test_session()).await;

        registry.get(a).await.unwrap().lock().await.submit("satu").unwrap();

        let handle_b = registry.get(b).await.unwrap();
        let session_b = handle_b.lock().await;
        assert_eq!(session_b.message_count(), 0);
        assert_eq!(session_b.report_counter(), DEFAULT_REPORT_NUMBER_BASE);
    }
}
