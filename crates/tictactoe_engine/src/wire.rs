//! JSON shapes exchanged between the game view and the game API.

use crate::types::{Board, Scoreboard};
use serde::{Deserialize, Serialize};

/// Session used when a request carries no `session_id`.
pub const DEFAULT_SESSION: &str = "default";

/// Query string carried by `/game`, `/reset` and `/delete_session`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionQuery {
    /// Opaque session token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl SessionQuery {
    /// Query for the given session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
        }
    }

    /// Session id, falling back to [`DEFAULT_SESSION`].
    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or(DEFAULT_SESSION)
    }
}

/// Response of `GET /game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateResponse {
    /// Current board.
    pub board: Board,
    /// Present only once the game is over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Session tally.
    pub scoreboard: Scoreboard,
}

/// Body of `POST /move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Cell index (0-8).
    #[serde(rename = "move")]
    pub index: usize,
    /// Opaque session token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Response of `POST /move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Board after the human move and any AI reply.
    pub board: Board,
    /// Human-readable status line.
    pub message: String,
    /// Session tally, when the server sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoreboard: Option<Scoreboard>,
}

/// Response of `GET /reset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    /// Fresh board.
    pub board: Board,
    /// Human-readable status line.
    pub message: String,
}

/// Response of `POST /delete_session`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSessionResponse {
    /// Whether a session was removed.
    pub deleted: bool,
}

/// Error body for rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_request_uses_move_key() {
        let req = MoveRequest {
            index: 4,
            session_id: Some("abc".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"move": 4, "session_id": "abc"}));
    }

    #[test]
    fn test_move_response_without_scoreboard() {
        let json = r#"{"board":["X"," "," "," ","O"," "," "," "," "],"message":"AI played 5. Your turn."}"#;
        let resp: MoveResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.scoreboard, None);
        assert_eq!(resp.message, "AI played 5. Your turn.");
    }

    #[test]
    fn test_game_state_without_result() {
        let json = r#"{"board":[" "," "," "," "," "," "," "," "," "],"scoreboard":{"human":1,"ai":0,"draw":2}}"#;
        let resp: GameStateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.result, None);
        assert_eq!(resp.scoreboard.draw, 2);
    }

    #[test]
    fn test_session_query_default() {
        assert_eq!(SessionQuery::default().session_id(), DEFAULT_SESSION);
        assert_eq!(SessionQuery::new("s1").session_id(), "s1");
    }
}
