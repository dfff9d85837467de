//! Key bindings.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the client.
    Quit,
    /// Move the cursor to a new cell.
    Cursor(Position),
    /// Play the given cell index.
    Play(usize),
    /// Start a fresh game.
    ResetGame,
    /// Zero the scoreboard and forget the session.
    ResetScore,
    /// Key has no binding.
    Ignore,
}

/// Maps a key to an action given the current cursor.
///
/// `1`-`9` play a cell directly; arrows move the cursor; `Enter` or `Space`
/// play the cell under the cursor.
pub fn action_for(code: KeyCode, cursor: Position) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::ResetGame,
        KeyCode::Char('s') => Action::ResetScore,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Play(cursor.to_index()),
        KeyCode::Char(c @ '1'..='9') => match c.to_digit(10) {
            Some(digit) => Action::Play(digit as usize - 1),
            None => Action::Ignore,
        },
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, code))
        }
        _ => Action::Ignore,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
