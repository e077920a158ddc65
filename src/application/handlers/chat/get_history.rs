//! GetHistoryHandler - Read a session's conversation history.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::chat::{Message, SessionState};
use crate::domain::foundation::SessionId;
use crate::ports::{RegistryError, SessionRegistry};

/// Query for a session's history.
#[derive(Debug, Clone)]
pub struct GetHistoryQuery {
    pub session_id: SessionId,
}

/// Read-model of one session, oldest message first.
#[derive(Debug, Clone)]
pub struct SessionHistoryView {
    pub session_id: SessionId,
    pub state: SessionState,
    pub report_counter: u32,
    pub messages: Vec<Message>,
}

/// Error type for reading history.
#[derive(Debug, Error)]
pub enum GetHistoryError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),
}

impl From<RegistryError> for GetHistoryError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => GetHistoryError::SessionNotFound(id),
        }
    }
}

/// Handler for the history read model.
pub struct GetHistoryHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl GetHistoryHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        query: GetHistoryQuery,
    ) -> Result<SessionHistoryView, GetHistoryError> {
        let handle = self.registry.get(query.session_id).await?;
        let session = handle.lock().await;

        Ok(SessionHistoryView {
            session_id: session.id(),
            state: session.state(),
            report_counter: session.report_counter(),
            messages: session.history().to_vec(),
        })
    }
}
