//! View and dispatcher driven against a scripted game API.

use std::sync::{Arc, Mutex};
use tictactoe_client::{
    ApiError, ApiErrorKind, Command, Dispatcher, GameApi, GameView, MOVE_ERROR, Outcome,
    execute,
};
use tictactoe_engine::{
    Board, Cell, GameStateResponse, MoveResponse, ResetResponse, Scoreboard,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Fetch(String),
    Move(String, usize),
    Reset(String),
    Delete(String),
}

/// Replies with a fixed board and message, recording every call.
#[derive(Default)]
struct ScriptedApi {
    calls: Mutex<Vec<Call>>,
    move_board: Board,
    move_message: String,
    fail_moves: bool,
}

impl ScriptedApi {
    fn replying(board: Board, message: &str) -> Self {
        Self {
            move_board: board,
            move_message: message.to_string(),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl GameApi for ScriptedApi {
    async fn fetch_state(&self, session_id: &str) -> Result<GameStateResponse, ApiError> {
        self.record(Call::Fetch(session_id.to_string()));
        Ok(GameStateResponse {
            board: Board::new(),
            result: None,
            scoreboard: Scoreboard { human: 1, ai: 2, draw: 3 },
        })
    }

    async fn submit_move(&self, session_id: &str, index: usize) -> Result<MoveResponse, ApiError> {
        self.record(Call::Move(session_id.to_string(), index));
        if self.fail_moves {
            return Err(ApiError::new(ApiErrorKind::Status(400), "bad move"));
        }
        Ok(MoveResponse {
            board: self.move_board,
            message: self.move_message.clone(),
            scoreboard: None,
        })
    }

    async fn reset_game(&self, session_id: &str) -> Result<ResetResponse, ApiError> {
        self.record(Call::Reset(session_id.to_string()));
        Ok(ResetResponse {
            board: Board::new(),
            message: "New game started. You are X.".into(),
        })
    }

    async fn delete_session(&self, session_id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete(session_id.to_string()));
        Err(ApiError::new(ApiErrorKind::Transport, "server gone"))
    }
}

fn board_with(cells: &[(usize, Cell)]) -> Board {
    let mut board = Board::new();
    for &(index, cell) in cells {
        board.set(index, cell).unwrap();
    }
    board
}

#[tokio::test]
async fn test_dispatcher_round_trip_replaces_board() {
    let reply = board_with(&[(0, Cell::X), (4, Cell::O)]);
    let api = Arc::new(ScriptedApi::replying(reply, "AI played 5. Your turn."));
    let (dispatcher, mut outcomes) = Dispatcher::new(api.clone(), "abc".into());

    let mut view = GameView::new();
    dispatcher.dispatch(view.fetch_state()).await.unwrap();
    view.apply(outcomes.recv().await.unwrap());
    assert_eq!(view.scoreboard().ai, 2);

    let command = view.submit_move(0).expect("Move should be sent");
    dispatcher.dispatch(command).await.unwrap();
    view.apply(outcomes.recv().await.unwrap());

    assert_eq!(*view.board(), reply);
    assert_eq!(view.message(), "AI played 5. Your turn.");
    assert!(!*view.loading());
    assert_eq!(
        api.calls(),
        vec![Call::Fetch("abc".into()), Call::Move("abc".into(), 0)]
    );
}

#[tokio::test]
async fn test_occupied_cell_sends_nothing() {
    let api = ScriptedApi::replying(board_with(&[(0, Cell::X), (4, Cell::O)]), "AI played 5. Your turn.");
    let mut view = GameView::new();

    let command = view.submit_move(0).unwrap();
    view.apply(execute(&api, "abc", command).await);

    assert_eq!(view.submit_move(0), None);
    assert_eq!(view.submit_move(4), None);
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn test_finished_game_blocks_moves_until_reset() {
    let won = board_with(&[(0, Cell::X), (1, Cell::X), (2, Cell::X), (3, Cell::O), (4, Cell::O)]);
    let api = ScriptedApi::replying(won, "Human wins!");
    let mut view = GameView::new();

    let command = view.submit_move(2).unwrap();
    view.apply(execute(&api, "abc", command).await);
    assert!(*view.game_over());
    assert_eq!(view.submit_move(8), None);

    let command = view.reset_game().unwrap();
    view.apply(execute(&api, "abc", command).await);
    assert!(!*view.game_over());
    assert_eq!(view.message(), "New game started. You are X.");
    assert_eq!(view.submit_move(8), Some(Command::SubmitMove(8)));
}

#[tokio::test]
async fn test_reset_score_ignores_delete_failure() {
    let api = ScriptedApi::default();
    let mut view = GameView::new();
    view.apply(execute(&api, "abc", Command::FetchState).await);
    assert_eq!(view.scoreboard().draw, 3);

    let command = view.reset_score().unwrap();
    assert_eq!(*view.scoreboard(), Scoreboard::default());

    let outcome = execute(&api, "abc", command).await;
    assert!(matches!(outcome, Outcome::SessionDeleted(Err(_))));
    view.apply(outcome);
    assert_eq!(*view.scoreboard(), Scoreboard::default());
    assert_eq!(*view.board(), Board::new());
    assert!(!*view.loading());
    assert_eq!(api.calls().last(), Some(&Call::Delete("abc".into())));
}

#[tokio::test]
async fn test_move_waits_for_score_reset_delete() {
    let won = board_with(&[(0, Cell::O), (4, Cell::O), (8, Cell::O), (1, Cell::X), (2, Cell::X)]);
    let api = Arc::new(ScriptedApi::replying(won, "AI wins!"));
    let (dispatcher, mut outcomes) = Dispatcher::new(api.clone(), "abc".into());
    let mut view = GameView::new();

    let command = view.submit_move(2).unwrap();
    dispatcher.dispatch(command).await.unwrap();
    view.apply(outcomes.recv().await.unwrap());
    assert!(*view.game_over());

    let delete = dispatcher.dispatch(view.reset_score().unwrap());
    assert_eq!(view.submit_move(0), None);
    assert_eq!(view.reset_game(), None);

    delete.await.unwrap();
    view.apply(outcomes.recv().await.unwrap());
    assert_eq!(view.submit_move(0), Some(Command::SubmitMove(0)));
    assert_eq!(
        api.calls(),
        vec![Call::Move("abc".into(), 2), Call::Delete("abc".into())]
    );
}

#[tokio::test]
async fn test_rejected_move_shows_error() {
    let api = ScriptedApi {
        fail_moves: true,
        ..ScriptedApi::default()
    };
    let mut view = GameView::new();

    let command = view.submit_move(3).unwrap();
    view.apply(execute(&api, "abc", command).await);

    assert_eq!(view.message(), MOVE_ERROR);
    assert!(!*view.loading());
    assert_eq!(*view.board(), Board::new());
}
