//! Win and draw detection.

use crate::game::GameStatus;
use crate::types::{Board, Mark};
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark holding three in a row, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a].mark()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then_some(mark)
    })
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

/// Classifies a board position.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> GameStatus {
    match winner(board) {
        Some(mark) => GameStatus::Won(mark),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn board(cells: &str) -> Board {
        let mut board = Board::new();
        for (index, ch) in cells.chars().enumerate() {
            let cell = match ch {
                'X' => Cell::X,
                'O' => Cell::O,
                _ => Cell::Blank,
            };
            board.set(index, cell).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
        assert_eq!(outcome(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXXOO....")), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO.XO..O.")), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(winner(&board("XXO.O.O.X")), Some(Mark::O));
    }

    #[test]
    fn test_full_board_draw() {
        let b = board("XOXXOOOXX");
        assert!(is_draw(&b));
        assert_eq!(outcome(&b), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let b = board("XXXOOXOXO");
        assert!(!is_draw(&b));
        assert_eq!(outcome(&b), GameStatus::Won(Mark::X));
    }
}
