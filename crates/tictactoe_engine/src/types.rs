//! Core domain types for tic-tac-toe.

use crate::game::MoveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's mark. The human plays `X` and moves first; the AI plays `O`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Mark {
    /// Human player (goes first).
    X,
    /// AI player.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single board cell, serialized as `"X"`, `"O"` or `" "`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    #[default]
    #[serde(rename = " ")]
    Blank,
    /// Occupied by X.
    #[serde(rename = "X")]
    X,
    /// Occupied by O.
    #[serde(rename = "O")]
    O,
}

impl Cell {
    /// Returns the mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Blank => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    /// Whether the cell is unoccupied.
    pub fn is_blank(self) -> bool {
        self == Cell::Blank
    }

    /// Wire symbol for this cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Blank => " ",
            Cell::X => "X",
            Cell::O => "O",
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// 3x3 board in row-major order (index 0 is top-left, 8 is bottom-right).
///
/// Serializes transparently as a JSON array of nine cell symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices past the last cell.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), MoveError> {
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds(index))?;
        *slot = cell;
        Ok(())
    }

    /// Whether the cell at `index` exists and is unoccupied.
    pub fn is_blank(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Blank))
    }

    /// Indices of all unoccupied cells, ascending.
    pub fn blanks(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_blank())
            .map(|(index, _)| index)
            .collect()
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_blank())
    }

    /// All cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell; 9] {
        &mut self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Blank => write!(f, "{}", index + 1)?,
                    cell => write!(f, "{}", cell.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Cumulative tally of finished games within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by the human.
    pub human: u32,
    /// Games won by the AI.
    pub ai: u32,
    /// Drawn games.
    pub draw: u32,
}

impl Scoreboard {
    /// Credits a win to `mark`'s owner.
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.human += 1,
            Mark::O => self.ai += 1,
        }
    }

    /// Credits a draw.
    pub fn record_draw(&mut self) {
        self.draw += 1;
    }

    /// Total number of finished games.
    pub fn total(&self) -> u32 {
        self.human + self.ai + self.draw
    }
}
