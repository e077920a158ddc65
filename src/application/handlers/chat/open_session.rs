//! OpenSessionHandler - Start a fresh intake conversation.

use std::sync::Arc;

use tracing::info;

use crate::domain::chat::ConversationSession;
use crate::domain::chat::Message;
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::SessionRegistry;

/// Opening assistant message seeded into every new session.
pub const GREETING: &str = "Selamat datang di Layanan Pelaporan Bencana Pesisir Jawa Tengah. \
     Untuk keadaan DARURAT, segera hubungi nomor darurat: 115 (BASARNAS) atau 129 (SAR). \
     Silakan pilih jenis laporan atau ketik langsung situasi yang Anda amati.";

/// Result of opening a session.
#[derive(Debug, Clone)]
pub struct OpenSessionResult {
    pub session_id: SessionId,
    pub greeting: Message,
}

/// Handler that creates and registers a new conversation session.
pub struct OpenSessionHandler {
    registry: Arc<dyn SessionRegistry>,
    report_number_base: u32,
}

impl OpenSessionHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, report_number_base: u32) -> Self {
        Self {
            registry,
            report_number_base,
        }
    }

    pub async fn handle(&self) -> Result<OpenSessionResult, DomainError> {
        let mut session = ConversationSession::new(self.report_number_base);
        let greeting = session.greet(GREETING)?.clone();

        let session_id = self.registry.create(session).await;
        info!(%session_id, "conversation session opened");

        Ok(OpenSessionResult {
            session_id,
            greeting,
        })
    }
}
