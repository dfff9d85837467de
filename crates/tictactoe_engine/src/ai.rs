//! Minimax opponent.

use crate::rules;
use crate::types::{Board, Cell, Mark};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How hard the AI plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Full minimax search; never loses.
    #[default]
    Hard,
}

/// Computer player choosing moves for one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiPlayer {
    mark: Mark,
    difficulty: Difficulty,
}

const WIN_SCORE: i32 = 10;

impl AiPlayer {
    /// Creates an AI playing `mark`.
    pub fn new(mark: Mark, difficulty: Difficulty) -> Self {
        Self { mark, difficulty }
    }

    /// Mark this AI plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Difficulty setting.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks a cell index to play, or `None` when the board has no blanks
    /// or the game is already decided.
    #[instrument(skip(self, board), fields(mark = %self.mark, difficulty = %self.difficulty))]
    pub fn choose_move(&self, board: &Board) -> Option<usize> {
        if rules::winner(board).is_some() {
            return None;
        }
        let mut rng = rand::thread_rng();
        let choice = match self.difficulty {
            Difficulty::Easy => board.blanks().choose(&mut rng).copied(),
            Difficulty::Hard => self.best_moves(board).choose(&mut rng).copied(),
        };
        debug!(?choice, "AI chose move");
        choice
    }

    /// All moves sharing the best minimax score for this AI.
    pub fn best_moves(&self, board: &Board) -> Vec<usize> {
        let mut best_score = i32::MIN;
        let mut best = Vec::new();
        let mut scratch = *board;

        for index in board.blanks() {
            scratch.cells_mut()[index] = Cell::from(self.mark);
            let score = minimax(&mut scratch, self.mark, self.mark.opponent(), 1);
            scratch.cells_mut()[index] = Cell::Blank;

            if score > best_score {
                best_score = score;
                best.clear();
                best.push(index);
            } else if score == best_score {
                best.push(index);
            }
        }
        best
    }
}

/// Scores `board` from `me`'s perspective with `to_move` on turn.
///
/// Quicker wins score higher and slower losses score less negative.
fn minimax(board: &mut Board, me: Mark, to_move: Mark, depth: i32) -> i32 {
    if let Some(winner) = rules::winner(board) {
        return if winner == me {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if board.is_full() {
        return 0;
    }

    let maximizing = to_move == me;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in board.blanks() {
        board.cells_mut()[index] = Cell::from(to_move);
        let score = minimax(board, me, to_move.opponent(), depth + 1);
        board.cells_mut()[index] = Cell::Blank;
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameStatus};
    use strum::IntoEnumIterator;

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
    fn test_takes_immediate_win() {
        // O can win at 5 (row 3-4-5); X threatens 2.
        let ai = AiPlayer::new(Mark::O, Difficulty::Hard);
        assert_eq!(ai.best_moves(&board("XX.OO.X..")), vec![5]);
    }

    #[test]
    fn test_blocks_opponent_win() {
        let ai = AiPlayer::new(Mark::O, Difficulty::Hard);
        assert_eq!(ai.best_moves(&board("XX..O....")), vec![2]);
    }

    #[test]
    fn test_answers_corner_opening_with_center() {
        let ai = AiPlayer::new(Mark::O, Difficulty::Hard);
        assert_eq!(ai.best_moves(&board("X........")), vec![4]);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let ai = AiPlayer::new(Mark::O, Difficulty::Hard);
        assert_eq!(ai.choose_move(&board("XOXXOOOXX")), None);
    }

    #[test]
    fn test_easy_picks_a_blank() {
        let ai = AiPlayer::new(Mark::O, Difficulty::Easy);
        let b = board("XOX.O.X..");
        for _ in 0..20 {
            let choice = ai.choose_move(&b).unwrap();
            assert!(b.is_blank(choice));
        }
    }

    /// Explores every human line of play against the hard AI.
    fn explore(game: Game, ai: &AiPlayer) {
        match game.status() {
            GameStatus::Won(mark) => assert_ne!(mark, Mark::X, "human beat the AI: {:?}", game),
            GameStatus::Draw => {}
            GameStatus::InProgress => {
                for index in game.board().blanks() {
                    let mut next = game.clone();
                    if next.play(index, Mark::X).unwrap().is_over() {
                        explore(next, ai);
                        continue;
                    }
                    for reply in ai.best_moves(next.board()) {
                        let mut branch = next.clone();
                        branch.play(reply, Mark::O).unwrap();
                        explore(branch, ai);
                    }
                }
            }
        }
    }

    #[test]
    fn test_hard_ai_never_loses() {
        let ai = AiPlayer::new(Mark::O, Difficulty::Hard);
        explore(Game::new(), &ai);
    }

    #[test]
    fn test_difficulty_parses_lowercase() {
        for difficulty in Difficulty::iter() {
            let parsed: Difficulty = difficulty.to_string().parse().unwrap();
            assert_eq!(parsed, difficulty);
        }
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    }
}
