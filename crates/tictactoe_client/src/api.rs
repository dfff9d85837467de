//! The game API seam.

use derive_more::{Display, Error};
use tictactoe_engine::{GameStateResponse, MoveResponse, ResetResponse};

/// Remote game service the view delegates to.
///
/// Every call names the session it acts on.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    /// `GET /game`: current board, result and scoreboard.
    async fn fetch_state(&self, session_id: &str) -> Result<GameStateResponse, ApiError>;

    /// `POST /move`: play the cell at `index`.
    async fn submit_move(&self, session_id: &str, index: usize) -> Result<MoveResponse, ApiError>;

    /// `GET /reset`: start a fresh game, keeping the scoreboard.
    async fn reset_game(&self, session_id: &str) -> Result<ResetResponse, ApiError>;

    /// `POST /delete_session`: forget the session server-side.
    async fn delete_session(&self, session_id: &str) -> Result<(), ApiError>;
}

/// Why an API call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ApiErrorKind {
    /// Request never produced a response.
    #[display("transport")]
    Transport,
    /// Server answered with a non-success status.
    #[display("status {_0}")]
    Status(u16),
    /// Response body was not the expected JSON.
    #[display("decode")]
    Decode,
}

/// API error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("API error ({}): {} at {}:{}", kind, message, file, line)]
pub struct ApiError {
    /// Failure category.
    pub kind: ApiErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ApiError {
    /// Creates a new API error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
