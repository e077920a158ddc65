//! Chat HTTP adapter - REST surface for the conversational core.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, MessageDto, OpenSessionResponse, SessionHistoryResponse, SubmitMessageRequest,
    SubmitMessageResponse, SUGGESTED_CATEGORIES,
};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
