//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{close_session, get_history, open_session, submit_message, ChatHandlers};

/// Creates the chat router with all endpoints.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/sessions", post(open_session))
        .route(
            "/sessions/:id",
            get(get_history).delete(close_session),
        )
        .route("/sessions/:id/messages", post(submit_message))
        .with_state(handlers)
}
