//! The chat endpoint: one inbound message in, one augmented history out.

use crate::error::RelayError;
use crate::models::{ChatRequest, ChatResponse, Turn};
use crate::startup::AppState;
use crate::utils::jwt::decode_jwt_claims;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
};
use validator::Validate;

/// `POST /chat`
///
/// Forwards the message to the generation service and returns the history
/// with the user turn and assistant turn appended, in that order.
pub async fn chat_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, RelayError> {
    log_caller_identity(&headers);

    let Json(request) = payload.map_err(|e| RelayError::Parse(e.body_text()))?;
    request
        .validate()
        .map_err(|e| RelayError::Parse(e.to_string()))?;

    tracing::info!(
        history_len = request.conversation_history.len(),
        "Processing chat message"
    );

    let reply = state
        .generation
        .generate(&request.message)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Generation request failed");
            RelayError::from(e)
        })?;

    let mut history = request.conversation_history;
    history.push(Turn::user(request.message));
    history.push(Turn::assistant(reply.clone()));

    Ok(Json(ChatResponse::success(reply, history)))
}

/// `OPTIONS /chat` — browser preflight; the CORS middleware supplies the
/// actual headers.
pub async fn chat_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Log who is calling, when the fronting gateway passed a bearer token
/// through. Read-only: a missing or undecodable token never fails a request.
fn log_caller_identity(headers: &HeaderMap) {
    let claims = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(|token| decode_jwt_claims(token).ok());

    if let Some(identity) = claims.as_ref().and_then(|c| c.identity()) {
        tracing::info!(user = %identity, "Authenticated caller");
    }
}
