//! Conversation session entity - one citizen's intake dialogue.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};

use super::message::Message;
use super::sequencer::ReportSequencer;
use super::state::SessionState;

/// A user turn accepted by the session, awaiting its assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    /// Report number issued for this turn.
    pub report_number: u32,
    /// The trimmed user text.
    pub text: String,
}

/// Result of submitting text to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Whitespace-only input; nothing changed.
    Ignored,
    /// Turn accepted; a reply must be appended via `complete_turn`.
    Accepted(PendingTurn),
}

/// One conversation session: append-only history, per-session report
/// counter, and the Idle/AwaitingResponse turn state.
///
/// # Invariants
///
/// - `history` is append-only; insertion order is display order
/// - the report counter advances exactly once per accepted user turn
/// - at most one turn is in flight; submissions while a reply is pending
///   are rejected
///
/// Sessions own their state exclusively. They are created when a chat UI
/// opens and discarded when it closes; nothing persists across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSession {
    id: SessionId,
    history: Vec<Message>,
    sequencer: ReportSequencer,
    state: SessionState,
    created_at: Timestamp,
}

impl ConversationSession {
    /// Creates an empty session with the given report-number base.
    pub fn new(report_number_base: u32) -> Self {
        Self {
            id: SessionId::new(),
            history: Vec::new(),
            sequencer: ReportSequencer::new(report_number_base),
            state: SessionState::Idle,
            created_at: Timestamp::now(),
        }
    }

    // === Accessors ===

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Last issued report number (the base if no turn was accepted yet).
    pub fn report_counter(&self) -> u32 {
        self.sequencer.current()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn message_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.history.last()
    }

    /// Returns true if `submit` would accept this text right now.
    ///
    /// Lets the orchestrator run pre-turn side effects (escalation) only
    /// for input that will actually open a turn.
    pub fn accepts(&self, text: &str) -> bool {
        !text.trim().is_empty() && self.state.accepts_user_input()
    }

    // === Turn lifecycle ===

    /// Seeds the opening assistant message for a fresh session.
    ///
    /// Not part of a turn: the counter and the turn state are untouched.
    pub fn greet(&mut self, text: impl Into<String>) -> Result<&Message, DomainError> {
        if !self.state.accepts_user_input() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Cannot greet while a turn is in flight",
            ));
        }
        let message = Message::assistant(text)?;
        self.history.push(message);
        Ok(self.history.last().expect("just pushed"))
    }

    /// Submits user text, opening a turn when the input is accepted.
    ///
    /// Whitespace-only input is a validation short-circuit, not an error:
    /// history, counter, and state are left untouched. Accepted input
    /// appends the trimmed user message, issues the next report number,
    /// and moves the session to `AwaitingResponse`.
    ///
    /// # Errors
    ///
    /// - `TurnInFlight` if a reply is still pending for a previous turn
    /// - `MessageTooLong` if the trimmed text exceeds the message limit
    pub fn submit(&mut self, text: &str) -> Result<SubmitOutcome, DomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }
        if !self.state.accepts_user_input() {
            return Err(DomainError::new(
                ErrorCode::TurnInFlight,
                "A reply is already pending for this session",
            ));
        }

        // Validate before mutating so a rejected message leaves no trace.
        let message = Message::user(trimmed)?;
        self.history.push(message);
        let report_number = self.sequencer.next();
        self.state = SessionState::AwaitingResponse;

        Ok(SubmitOutcome::Accepted(PendingTurn {
            report_number,
            text: trimmed.to_string(),
        }))
    }

    /// Appends the assistant reply for the in-flight turn and returns the
    /// session to `Idle`.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if no turn is in flight
    pub fn complete_turn(&mut self, reply: impl Into<String>) -> Result<&Message, DomainError> {
        if !self.state.has_pending_reply() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "No turn in flight to complete",
            ));
        }

        let message = Message::assistant(reply)?;
        self.history.push(message);
        self.state = SessionState::Idle;
        Ok(self.history.last().expect("just pushed"))
    }
}
