//! Server error types.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use tictactoe_engine::{ErrorResponse, MoveError};
use tracing::warn;

/// Category of a server error, deciding the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ServerErrorKind {
    /// The client asked for an illegal move or sent a malformed one.
    InvalidMove,
    /// Shared state was unusable.
    Internal,
}

/// Server error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Server error ({}): {} at {}:{}", kind, message, file, line)]
pub struct ServerError {
    /// Error category.
    pub kind: ServerErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ServerError {
    /// Creates a new server error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self.kind {
            ServerErrorKind::InvalidMove => StatusCode::BAD_REQUEST,
            ServerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MoveError> for ServerError {
    #[track_caller]
    fn from(err: MoveError) -> Self {
        Self::new(ServerErrorKind::InvalidMove, err.to_string())
    }
}

impl From<JsonRejection> for ServerError {
    #[track_caller]
    fn from(err: JsonRejection) -> Self {
        Self::new(
            ServerErrorKind::InvalidMove,
            format!("Invalid move request: {}", err.body_text()),
        )
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Request rejected");
        let body = ErrorResponse {
            error: self.message.clone(),
        };
        (self.status(), Json(body)).into_response()
    }
}
