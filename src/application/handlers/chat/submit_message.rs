//! SubmitMessageHandler - Run one conversational turn.
//!
//! Orchestrates the full pipeline for an inbound message: emergency
//! escalation, turn acceptance, intent classification, response synthesis,
//! and reply delivery. The session's exclusive lock is held for the whole
//! turn, so replies are appended in the order their messages were accepted.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::chat::{
    classify, render, EmergencyEscalator, Intent, Message, ResponseContext, SubmitOutcome,
};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::ports::{EmergencyNotifier, RegistryError, SessionRegistry};

/// Command to submit user text to a session.
#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    pub session_id: SessionId,
    pub text: String,
}

/// Outcome of one submission.
#[derive(Debug, Clone)]
pub enum SubmitMessageResult {
    /// Whitespace-only input; nothing changed.
    Ignored,
    /// The turn completed with a synthesized reply.
    Replied(TurnReply),
}

/// The completed turn's observable results.
#[derive(Debug, Clone)]
pub struct TurnReply {
    pub report_number: u32,
    pub intent: Intent,
    pub escalated: bool,
    pub user_message: Message,
    pub reply: Message,
}

/// Error type for submitting a message.
#[derive(Debug, Error)]
pub enum SubmitMessageError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("A reply is already pending for this session")]
    TurnInFlight,

    #[error(transparent)]
    Domain(DomainError),
}

impl From<RegistryError> for SubmitMessageError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => SubmitMessageError::SessionNotFound(id),
        }
    }
}

impl From<DomainError> for SubmitMessageError {
    fn from(err: DomainError) -> Self {
        if err.code == ErrorCode::TurnInFlight {
            SubmitMessageError::TurnInFlight
        } else {
            SubmitMessageError::Domain(err)
        }
    }
}

/// Handler for running one turn against a session.
pub struct SubmitMessageHandler {
    registry: Arc<dyn SessionRegistry>,
    escalator: EmergencyEscalator,
}

impl SubmitMessageHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, notifier: Arc<dyn EmergencyNotifier>) -> Self {
        Self {
            registry,
            escalator: EmergencyEscalator::new(notifier),
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitMessageCommand,
    ) -> Result<SubmitMessageResult, SubmitMessageError> {
        let handle = self.registry.get(cmd.session_id).await?;

        // Exclusive lock for the duration of the turn.
        let mut session = handle.lock().await;

        // Pre-turn side effects only run for input that will open a turn.
        if !session.accepts(&cmd.text) {
            if cmd.text.trim().is_empty() {
                debug!(session_id = %cmd.session_id, "empty submission ignored");
                return Ok(SubmitMessageResult::Ignored);
            }
            return Err(SubmitMessageError::TurnInFlight);
        }

        // Escalation runs before the turn proceeds and never alters it.
        let escalation = self.escalator.evaluate(&cmd.text).await;
        if escalation.triggered {
            info!(session_id = %cmd.session_id, "emergency keywords detected");
        }

        let turn = match session.submit(&cmd.text)? {
            SubmitOutcome::Accepted(turn) => turn,
            SubmitOutcome::Ignored => return Ok(SubmitMessageResult::Ignored),
        };
        let user_message = session
            .last_message()
            .cloned()
            .ok_or_else(|| DomainError::new(ErrorCode::InternalError, "accepted turn left no message"))
            .map_err(SubmitMessageError::Domain)?;

        let intent = classify(&turn.text);
        let context = ResponseContext::new(turn.report_number, Timestamp::now(), turn.text.clone());
        let reply_text = render(intent, &context);
        let reply = session.complete_turn(reply_text)?.clone();

        info!(
            session_id = %cmd.session_id,
            report_number = turn.report_number,
            intent = ?intent,
            escalated = escalation.triggered,
            "turn completed"
        );

        Ok(SubmitMessageResult::Replied(TurnReply {
            report_number: turn.report_number,
            intent,
            escalated: escalation.triggered,
            user_message,
            reply,
        }))
    }
}
