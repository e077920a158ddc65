//! Chat handlers - session lifecycle and turn orchestration.

mod close_session;
mod get_history;
mod open_session;
mod submit_message;

pub use close_session::{CloseSessionCommand, CloseSessionError, CloseSessionHandler};
pub use get_history::{GetHistoryError, GetHistoryHandler, GetHistoryQuery, SessionHistoryView};
pub use open_session::{OpenSessionHandler, OpenSessionResult, GREETING};
pub use submit_message::{
    SubmitMessageCommand, SubmitMessageError, SubmitMessageHandler, SubmitMessageResult, TurnReply,
};
