//! Tests for full games played through the public engine API.

use tictactoe_engine::{AiPlayer, Board, Difficulty, Game, GameStatus, Mark, MoveError, Position};

#[test]
fn test_human_vs_hard_ai_never_human_win() {
    let ai = AiPlayer::new(Mark::O, Difficulty::Hard);
    for opening in 0..Board::SIZE {
        let mut game = Game::new();
        game.play(opening, Mark::X).expect("Opening move failed");

        while !game.status().is_over() {
            match game.next_mark() {
                Mark::O => {
                    let reply = ai.choose_move(game.board()).expect("AI found no move");
                    game.play(reply, Mark::O).expect("AI made illegal move");
                }
                Mark::X => {
                    // Human plays the lowest free cell.
                    let index = game.board().blanks()[0];
                    game.play(index, Mark::X).expect("Human made illegal move");
                }
            }
        }

        assert_ne!(game.status(), GameStatus::Won(Mark::X), "opening {opening}");
    }
}

#[test]
fn test_draw_detected_on_last_move() {
    let mut game = Game::new();
    let moves = [0, 4, 8, 1, 7, 6, 2, 5, 3];
    let mut last = None;
    for index in moves {
        let mark = game.next_mark();
        last = Some(game.play(index, mark).expect("Move failed"));
    }
    assert_eq!(last, Some(GameStatus::Draw));
    assert!(game.board().is_full());
}

#[test]
fn test_occupied_cell_reports_index() {
    let mut game = Game::new();
    game.play(Position::Center.to_index(), Mark::X).unwrap();
    let err = game.play(4, Mark::O).unwrap_err();
    assert_eq!(err, MoveError::Occupied(4));
    assert_eq!(err.to_string(), "Cell 4 is already occupied");
}

#[test]
fn test_ai_declines_decided_board() {
    let mut game = Game::new();
    for (index, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)] {
        game.play(index, mark).unwrap();
    }
    let ai = AiPlayer::new(Mark::O, Difficulty::Hard);
    assert_eq!(ai.choose_move(game.board()), None);
}
