use crate::models::ChatResponse;
use crate::services::GenerationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request-level failures, one variant per taxonomy case.
///
/// Every variant maps deterministically to a status code and the
/// `{success:false, error}` envelope; nothing propagates past the handler
/// boundary.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid request: {0}")]
    Parse(String),

    #[error("FastAPI request failed: {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("No response content from generation service")]
    EmptyResponse,

    #[error("Generation request timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

impl From<GenerationError> for RelayError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Upstream { status, body } => RelayError::Upstream { status, body },
            GenerationError::EmptyResponse => RelayError::EmptyResponse,
            GenerationError::Timeout => RelayError::Timeout,
            GenerationError::Network(msg) => RelayError::Other(msg),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::Parse(_) => StatusCode::BAD_REQUEST,
            // Relay the upstream's status verbatim.
            RelayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::EmptyResponse => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ChatResponse::failure(self.to_string()))).into_response()
    }
}
