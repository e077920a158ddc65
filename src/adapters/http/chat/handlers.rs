//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::chat::{
    CloseSessionCommand, CloseSessionError, CloseSessionHandler, GetHistoryError,
    GetHistoryHandler, GetHistoryQuery, OpenSessionHandler, SubmitMessageCommand,
    SubmitMessageError, SubmitMessageHandler, SubmitMessageResult,
};
use crate::domain::foundation::SessionId;

use super::dto::{
    ErrorResponse, MessageDto, OpenSessionResponse, SessionHistoryResponse, SubmitMessageRequest,
    SubmitMessageResponse, SUGGESTED_CATEGORIES,
};

/// Shared handler state for the chat router.
#[derive(Clone)]
pub struct ChatHandlers {
    open_handler: Arc<OpenSessionHandler>,
    submit_handler: Arc<SubmitMessageHandler>,
    history_handler: Arc<GetHistoryHandler>,
    close_handler: Arc<CloseSessionHandler>,
}

impl ChatHandlers {
    pub fn new(
        open_handler: Arc<OpenSessionHandler>,
        submit_handler: Arc<SubmitMessageHandler>,
        history_handler: Arc<GetHistoryHandler>,
        close_handler: Arc<CloseSessionHandler>,
    ) -> Self {
        Self {
            open_handler,
            submit_handler,
            history_handler,
            close_handler,
        }
    }
}

/// POST /api/chat/sessions - Open a new conversation session
pub async fn open_session(State(handlers): State<ChatHandlers>) -> Response {
    match handlers.open_handler.handle().await {
        Ok(result) => {
            let response = OpenSessionResponse {
                session_id: result.session_id.to_string(),
                greeting: MessageDto::from(&result.greeting),
                suggested_categories: SUGGESTED_CATEGORIES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.code.to_string(), e.message)),
        )
            .into_response(),
    }
}

/// POST /api/chat/sessions/:id/messages - Submit one user message
pub async fn submit_message(
    State(handlers): State<ChatHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitMessageRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitMessageCommand {
        session_id,
        text: req.text,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(SubmitMessageResult::Ignored) => {
            (StatusCode::OK, Json(SubmitMessageResponse::Ignored)).into_response()
        }
        Ok(SubmitMessageResult::Replied(reply)) => {
            (StatusCode::OK, Json(SubmitMessageResponse::from(&reply))).into_response()
        }
        Err(e) => handle_submit_error(e),
    }
}

/// GET /api/chat/sessions/:id - Read a session's history
pub async fn get_history(
    State(handlers): State<ChatHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .history_handler
        .handle(GetHistoryQuery { session_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(SessionHistoryResponse::from(&view))).into_response(),
        Err(GetHistoryError::SessionNotFound(id)) => not_found(id),
    }
}

/// DELETE /api/chat/sessions/:id - Close a session
pub async fn close_session(
    State(handlers): State<ChatHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .close_handler
        .handle(CloseSessionCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(CloseSessionError::SessionNotFound(id)) => not_found(id),
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn not_found(id: SessionId) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(format!("Session not found: {}", id))),
    )
        .into_response()
}

fn handle_submit_error(err: SubmitMessageError) -> Response {
    match err {
        SubmitMessageError::SessionNotFound(id) => not_found(id),
        SubmitMessageError::TurnInFlight => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new("TURN_IN_FLIGHT", err.to_string())),
        )
            .into_response(),
        SubmitMessageError::Domain(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.code.to_string(), e.message)),
        )
            .into_response(),
    }
}
