//! CloseSessionHandler - Discard a session when its UI goes away.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::SessionId;
use crate::ports::{RegistryError, SessionRegistry};

/// Command to close a session.
#[derive(Debug, Clone)]
pub struct CloseSessionCommand {
    pub session_id: SessionId,
}

/// Error type for closing a session.
#[derive(Debug, Error)]
pub enum CloseSessionError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),
}

impl From<RegistryError> for CloseSessionError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => CloseSessionError::SessionNotFound(id),
        }
    }
}

/// Handler that discards a session and everything it owned.
pub struct CloseSessionHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl CloseSessionHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: CloseSessionCommand) -> Result<(), CloseSessionError> {
        self.registry.remove(cmd.session_id).await?;
        info!(session_id = %cmd.session_id, "conversation session closed");
        Ok(())
    }
}
