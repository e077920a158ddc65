//! Session turn state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The turn state of a conversation session.
///
/// A session alternates between waiting for input and holding exactly one
/// pending assistant reply. There is no terminal state; the session lives
/// until its owner discards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No turn in flight, user input accepted.
    #[default]
    Idle,

    /// A user message was accepted and its reply is pending. Further
    /// submissions are rejected until the reply is appended.
    AwaitingResponse,
}

impl SessionState {
    /// Returns true if user submissions are accepted in this state.
    pub fn accepts_user_input(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if an assistant reply is pending.
    pub fn has_pending_reply(&self) -> bool {
        matches!(self, Self::AwaitingResponse)
    }
}

impl StateMachine for SessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionState::*;
        matches!(
            (self, target),
            // Accepted user turn opens a pending reply
            (Idle, AwaitingResponse) |
            // Appending the reply closes the turn
            (AwaitingResponse, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionState::*;
        match self {
            Idle => vec![AwaitingResponse],
            AwaitingResponse => vec![Idle],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(SessionState::default(), SessionState::Idle);
    }

    #[test]
    fn idle_accepts_user_input() {
        assert!(SessionState::Idle.accepts_user_input());
        assert!(!SessionState::Idle.has_pending_reply());
    }

    #[test]
    fn awaiting_response_rejects_user_input() {
        assert!(!SessionState::AwaitingResponse.accepts_user_input());
        assert!(SessionState::AwaitingResponse.has_pending_reply());
    }

    #[test]
    fn idle_transitions_to_awaiting_response() {
        assert!(SessionState::Idle.can_transition_to(&SessionState::AwaitingResponse));
    }

    #[test]
    fn awaiting_response_transitions_back_to_idle() {
        assert!(SessionState::AwaitingResponse.can_transition_to(&SessionState::Idle));
    }

    #[test]
    fn no_state_is_terminal() {
        assert!(!SessionState::Idle.is_terminal());
        assert!(!SessionState::AwaitingResponse.is_terminal());
    }

    #[test]
    fn self_transitions_are_invalid() {
        assert!(!SessionState::Idle.can_transition_to(&SessionState::Idle));
        assert!(
            !SessionState::AwaitingResponse.can_transition_to(&SessionState::AwaitingResponse)
        );
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&SessionState::AwaitingResponse).unwrap();
        assert_eq!(json, "\"awaiting_response\"");
    }
}
