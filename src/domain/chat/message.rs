//! Message entity for conversation sessions.
//!
//! Messages are immutable records of user/assistant exchanges. Each message
//! has a sender, trimmed non-empty text, and a creation timestamp.

use crate::domain::foundation::{DomainError, ErrorCode, MessageId, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum accepted message length in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Sender of a message within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// Citizen input.
    User,
    /// Synthesized intake reply.
    Assistant,
}

/// An immutable message within a conversation session.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `text` is trimmed, non-empty, and at most [`MAX_MESSAGE_CHARS`] characters
/// - `created_at` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    text: String,
    created_at: Timestamp,
}

impl Message {
    /// Creates a new message with the given sender and text.
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the trimmed text is empty
    /// - `MessageTooLong` if the trimmed text exceeds [`MAX_MESSAGE_CHARS`]
    pub fn new(sender: Sender, text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into().trim().to_string();
        Self::validate_text(&text)?;

        Ok(Self {
            id: MessageId::new(),
            sender,
            text,
            created_at: Timestamp::now(),
        })
    }

    /// Creates a user message.
    pub fn user(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Sender::User, text)
    }

    /// Creates an assistant message.
    pub fn assistant(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Sender::Assistant, text)
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }

    fn validate_text(text: &str) -> Result<(), DomainError> {
        if text.is_empty() {
            return Err(DomainError::validation(
                "text",
                "Message text cannot be empty",
            ));
        }
        let chars = text.chars().count();
        if chars > MAX_MESSAGE_CHARS {
            return Err(DomainError::new(
                ErrorCode::MessageTooLong,
                format!(
                    "Message text exceeds {} characters ({})",
                    MAX_MESSAGE_CHARS, chars
                ),
            ));
        }
        Ok(())
    }
}
