//! Chat domain module - the conversational intake core.
//!
//! Covers the full turn pipeline: keyword matching, emergency escalation,
//! intent classification, report numbering, response synthesis, and the
//! session state machine that orchestrates them.

mod escalation;
mod intent;
mod matcher;
mod message;
mod response;
mod sequencer;
mod session;
mod state;

pub use escalation::{Advisory, EmergencyEscalator, EscalationOutcome, EMERGENCY_LEXICON};
pub use intent::{classify, Intent};
pub use matcher::matches_any;
pub use message::{Message, Sender, MAX_MESSAGE_CHARS};
pub use response::{extract_status_token, render, ResponseContext};
pub use sequencer::{ReportSequencer, DEFAULT_REPORT_NUMBER_BASE};
pub use session::{ConversationSession, PendingTurn, SubmitOutcome};
pub use state::SessionState;
