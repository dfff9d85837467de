//! Game session management.

use crate::error::{ServerError, ServerErrorKind};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tictactoe_engine::{AiPlayer, Board, Game, GameStatus, Mark, MoveError, Scoreboard};
use tracing::{debug, info, instrument};

/// Unique identifier for a game session.
pub type SessionId = String;

/// The human always plays X.
const HUMAN: Mark = Mark::X;

/// One player's game against the AI plus the running tally.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    game: Game,
    scoreboard: Scoreboard,
}

/// What a move request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Board after the human move and any AI reply.
    pub board: Board,
    /// Status line for the client.
    pub message: String,
    /// Tally after this move.
    pub scoreboard: Scoreboard,
    /// Game status after this move.
    pub status: GameStatus,
}

impl GameSession {
    /// Creates a session with an empty board and zeroed scoreboard.
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            game: Game::new(),
            scoreboard: Scoreboard::default(),
        }
    }

    /// Current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Session tally.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Final result label, present only once the game is over.
    pub fn result(&self) -> Option<&'static str> {
        match self.game.status() {
            GameStatus::InProgress => None,
            GameStatus::Won(Mark::X) => Some("human wins"),
            GameStatus::Won(Mark::O) => Some("ai wins"),
            GameStatus::Draw => Some("draw"),
        }
    }

    /// Plays the human move at `index`, then lets `ai` reply if the game
    /// continues. A finished game bumps exactly one scoreboard counter.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the human move is illegal; the session is
    /// left unchanged in that case.
    #[instrument(skip(self, ai), fields(session_id = %self.id))]
    pub fn play(&mut self, index: usize, ai: &AiPlayer) -> Result<MoveReport, MoveError> {
        let mut status = self.game.play(index, HUMAN)?;
        let mut reply = None;

        if !status.is_over()
            && let Some(choice) = ai.choose_move(self.game.board())
        {
            status = self.game.play(choice, ai.mark())?;
            reply = Some(choice);
        }

        let message = match status {
            GameStatus::Won(mark) => {
                self.scoreboard.record_win(mark);
                match mark {
                    Mark::X => "Human wins!".to_string(),
                    Mark::O => "AI wins!".to_string(),
                }
            }
            GameStatus::Draw => {
                self.scoreboard.record_draw();
                "It's a draw!".to_string()
            }
            GameStatus::InProgress => match reply {
                Some(choice) => format!("AI played {}. Your turn.", choice + 1),
                None => "Your turn.".to_string(),
            },
        };

        info!(index, ?reply, ?status, "Move completed");
        Ok(MoveReport {
            board: *self.game.board(),
            message,
            scoreboard: self.scoreboard,
            status,
        })
    }

    /// Starts a fresh game, keeping the scoreboard.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.game = Game::new();
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates an empty session manager.
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, GameSession>>, ServerError> {
        self.sessions
            .lock()
            .map_err(|e| ServerError::new(ServerErrorKind::Internal, format!("Session store poisoned: {}", e)))
    }

    /// Runs `f` against the session, creating it first if needed.
    ///
    /// The store stays locked for the duration of `f`.
    #[instrument(skip(self, f))]
    pub fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> T,
    ) -> Result<T, ServerError> {
        let mut sessions = self.lock()?;
        let session = sessions
            .entry(id.to_string())
            .or_insert_with(|| GameSession::new(id.to_string()));
        Ok(f(session))
    }

    /// Removes a session. Returns whether it existed.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<bool, ServerError> {
        let removed = self.lock()?.remove(id).is_some();
        info!(session_id = id, removed, "Session deleted");
        Ok(removed)
    }

    /// Whether a session exists.
    pub fn contains(&self, id: &str) -> Result<bool, ServerError> {
        Ok(self.lock()?.contains_key(id))
    }

}
