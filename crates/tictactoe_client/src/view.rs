//! Game view state machine.
//!
//! User intents go in through [`GameView::fetch_state`],
//! [`GameView::submit_move`], [`GameView::reset_game`] and
//! [`GameView::reset_score`], each of which either rejects locally or yields
//! the [`Command`] to send. Server replies come back as [`Outcome`]s through
//! [`GameView::apply`]. The view never decides game results itself.

use crate::api::ApiError;
use derive_getters::Getters;
use tictactoe_engine::{Board, GameStateResponse, MoveResponse, ResetResponse, Scoreboard};
use tracing::{debug, info, instrument, warn};

/// Shown when fetching the game state fails.
pub const CONNECTION_ERROR: &str = "Error connecting to server";

/// Shown when a move request fails.
pub const MOVE_ERROR: &str = "Error making move";

/// Shown when a reset request fails.
pub const RESET_ERROR: &str = "Error resetting game";

/// Request the view wants sent to the game API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `GET /game`
    FetchState,
    /// `POST /move` for the given cell.
    SubmitMove(usize),
    /// `GET /reset`
    ResetGame,
    /// `POST /delete_session`
    DeleteSession,
}

/// Result of running a [`Command`].
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Reply to [`Command::FetchState`].
    StateFetched(Result<GameStateResponse, ApiError>),
    /// Reply to [`Command::SubmitMove`].
    MoveSubmitted(Result<MoveResponse, ApiError>),
    /// Reply to [`Command::ResetGame`].
    GameReset(Result<ResetResponse, ApiError>),
    /// Reply to [`Command::DeleteSession`].
    SessionDeleted(Result<(), ApiError>),
}

/// Everything the player sees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct GameView {
    /// Board as last reported by the server.
    board: Board,
    /// Status line.
    message: String,
    /// Tally as last reported by the server.
    scoreboard: Scoreboard,
    /// A move or reset request is in flight.
    loading: bool,
    /// Set by a finishing move, cleared only by a reset.
    game_over: bool,
}

impl GameView {
    /// Creates a view with a blank board and zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether selecting `index` would send a move.
    pub fn can_play(&self, index: usize) -> bool {
        !self.loading && !self.game_over && self.board.is_blank(index)
    }

    /// Requests the current state. Always sent; does not mark loading.
    #[instrument(skip(self))]
    pub fn fetch_state(&mut self) -> Command {
        debug!("Fetching game state");
        Command::FetchState
    }

    /// Requests a move at `index`.
    ///
    /// Returns `None` without touching state when the cell is out of range
    /// or occupied, a request is in flight, or the game is over.
    #[instrument(skip(self), fields(loading = self.loading, game_over = self.game_over))]
    pub fn submit_move(&mut self, index: usize) -> Option<Command> {
        if !self.can_play(index) {
            debug!("Move rejected locally");
            return None;
        }
        self.loading = true;
        info!("Submitting move");
        Some(Command::SubmitMove(index))
    }

    /// Requests a fresh game. Rejected while a request is in flight.
    #[instrument(skip(self), fields(loading = self.loading))]
    pub fn reset_game(&mut self) -> Option<Command> {
        if self.loading {
            debug!("Reset rejected while loading");
            return None;
        }
        self.loading = true;
        Some(Command::ResetGame)
    }

    /// Zeroes the scoreboard and blanks the board locally, then asks the
    /// server to forget the session. Rejected while a request is in flight;
    /// the delete itself counts as one until its reply arrives.
    #[instrument(skip(self), fields(loading = self.loading))]
    pub fn reset_score(&mut self) -> Option<Command> {
        if self.loading {
            debug!("Score reset rejected while loading");
            return None;
        }
        self.scoreboard = Scoreboard::default();
        self.board = Board::new();
        self.message.clear();
        self.game_over = false;
        self.loading = true;
        info!("Scoreboard reset");
        Some(Command::DeleteSession)
    }

    /// Applies a server reply.
    #[instrument(skip_all)]
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::StateFetched(Ok(state)) => {
                self.board = state.board;
                self.message = state.result.map(|r| r.to_uppercase()).unwrap_or_default();
                self.scoreboard = state.scoreboard;
            }
            Outcome::StateFetched(Err(e)) => {
                warn!(error = %e, "Failed to fetch game state");
                self.message = CONNECTION_ERROR.to_string();
            }
            Outcome::MoveSubmitted(Ok(reply)) => {
                self.board = reply.board;
                if let Some(scoreboard) = reply.scoreboard {
                    self.scoreboard = scoreboard;
                }
                if reply.message.contains("wins") || reply.message.contains("draw") {
                    info!(message = %reply.message, "Game over");
                    self.game_over = true;
                }
                self.message = reply.message;
                self.loading = false;
            }
            Outcome::MoveSubmitted(Err(e)) => {
                warn!(error = %e, "Move failed");
                self.message = MOVE_ERROR.to_string();
                self.loading = false;
            }
            Outcome::GameReset(Ok(reply)) => {
                self.board = reply.board;
                self.message = reply.message;
                self.game_over = false;
                self.loading = false;
            }
            Outcome::GameReset(Err(e)) => {
                warn!(error = %e, "Reset failed");
                self.message = RESET_ERROR.to_string();
                self.loading = false;
            }
            Outcome::SessionDeleted(Ok(())) => {
                debug!("Session deleted");
                self.loading = false;
            }
            Outcome::SessionDeleted(Err(e)) => {
                warn!(error = %e, "Session delete failed");
                self.loading = false;
            }
        }
    }
}
