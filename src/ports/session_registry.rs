//! SessionRegistry port - Ownership of live conversation sessions.
//!
//! Sessions exist only for the lifetime of their owning UI; the registry
//! holds them in memory and hands out an exclusive handle per session. The
//! handle's lock is held for the duration of a turn, so at most one turn
//! mutates a session at a time.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::chat::ConversationSession;
use crate::domain::foundation::SessionId;

/// Exclusive handle to a live session.
pub type SessionHandle = Arc<Mutex<ConversationSession>>;

/// Errors surfaced by a session registry.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),
}

/// Port for creating, resolving, and discarding live sessions.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Registers a session and returns its id.
    async fn create(&self, session: ConversationSession) -> SessionId;

    /// Resolves the exclusive handle for a session.
    async fn get(&self, id: SessionId) -> Result<SessionHandle, RegistryError>;

    /// Discards a session. A pending reply computation holding the old
    /// handle simply completes against a detached session and is dropped.
    async fn remove(&self, id: SessionId) -> Result<(), RegistryError>;

    /// Number of live sessions.
    async fn len(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SessionRegistry) {}

    #[test]
    fn registry_error_displays_session_id() {
        let id = SessionId::new();
        let err = RegistryError::NotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
