//! Game state and move validation.

use crate::rules;
use crate::types::{Board, Cell, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with three in a row.
    Won(Mark),
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Reasons a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index past the last cell.
    #[display("Cell {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(#[error(not(source))] usize),
    /// Cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(#[error(not(source))] usize),
    /// Move attempted by the mark that is not on turn.
    #[display("It is not {_0}'s turn")]
    OutOfTurn(#[error(not(source))] Mark),
    /// Game already finished.
    #[display("Game is already over")]
    GameOver,
}

/// A single tic-tac-toe game. X always moves first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    board: Board,
    status: GameStatus,
    history: Vec<usize>,
}

impl Game {
    /// Creates a new game on an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Cell indices played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Mark whose turn it is.
    pub fn next_mark(&self) -> Mark {
        if self.history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Places `mark` at `index` and updates the status.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is over, the index is out of
    /// bounds, the cell is occupied, or it is not `mark`'s turn.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn play(&mut self, index: usize, mark: Mark) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            warn!("Move attempted after game over");
            return Err(MoveError::GameOver);
        }
        match self.board.get(index) {
            None => return Err(MoveError::OutOfBounds(index)),
            Some(cell) if !cell.is_blank() => return Err(MoveError::Occupied(index)),
            Some(_) => {}
        }
        if mark != self.next_mark() {
            return Err(MoveError::OutOfTurn(mark));
        }

        self.board.set(index, Cell::from(mark))?;
        self.history.push(index);
        self.status = rules::outcome(&self.board);

        debug!(status = ?self.status, "Move applied");
        Ok(self.status)
    }
}
