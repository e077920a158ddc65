//! Request/response DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::chat::{SessionHistoryView, TurnReply};
use crate::domain::chat::{Intent, Message, Sender, SessionState};

/// Quick-pick report categories offered by the intake UI. Submitted as
/// ordinary message text when chosen.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Gelombang Tinggi",
    "Angin Kencang",
    "Korban Terseret Ombak",
    "Kerusakan Infrastruktur",
    "Lokasi Pengungsian",
    "Info Cuaca",
];

/// One rendered message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub created_at: String,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            sender: message.sender(),
            text: message.text().to_string(),
            created_at: message.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Response for opening a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenSessionResponse {
    pub session_id: String,
    pub greeting: MessageDto,
    pub suggested_categories: Vec<String>,
}

/// Request body for submitting a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitMessageRequest {
    pub text: String,
}

/// Response for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitMessageResponse {
    /// Whitespace-only input; nothing changed.
    Ignored,
    /// The turn completed with a synthesized reply.
    Replied {
        report_number: u32,
        intent: Intent,
        escalated: bool,
        user_message: MessageDto,
        reply: MessageDto,
    },
}

impl From<&TurnReply> for SubmitMessageResponse {
    fn from(reply: &TurnReply) -> Self {
        SubmitMessageResponse::Replied {
            report_number: reply.report_number,
            intent: reply.intent,
            escalated: reply.escalated,
            user_message: MessageDto::from(&reply.user_message),
            reply: MessageDto::from(&reply.reply),
        }
    }
}

/// Response for reading history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHistoryResponse {
    pub session_id: String,
    pub state: SessionState,
    pub report_counter: u32,
    pub messages: Vec<MessageDto>,
}

impl From<&SessionHistoryView> for SessionHistoryResponse {
    fn from(view: &SessionHistoryView) -> Self {
        Self {
            session_id: view.session_id.to_string(),
            state: view.state,
            report_counter: view.report_counter,
            messages: view.messages.iter().map(MessageDto::from).collect(),
        }
    }
}

/// Error body shared by the chat endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }
}
