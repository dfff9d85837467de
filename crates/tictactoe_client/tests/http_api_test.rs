//! HttpGameApi against a live game server on a loopback port.

use tictactoe_client::{ApiErrorKind, GameApi, GameView, HttpGameApi, execute};
use tictactoe_engine::{Board, Cell, Difficulty};
use tictactoe_server::{AppState, serve};
use tokio::net::TcpListener;

async fn spawn_server() -> HttpGameApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, AppState::new(Difficulty::Hard)));
    HttpGameApi::new(format!("http://{}/", addr))
}

#[tokio::test]
async fn test_fetch_move_reset_delete() {
    let api = spawn_server().await;

    let state = api.fetch_state("e2e").await.unwrap();
    assert_eq!(state.board, Board::new());
    assert_eq!(state.result, None);

    let reply = api.submit_move("e2e", 0).await.unwrap();
    assert_eq!(reply.board.get(0), Some(Cell::X));
    assert_eq!(reply.message, "AI played 5. Your turn.");
    assert_eq!(reply.board.get(4), Some(Cell::O));

    let reset = api.reset_game("e2e").await.unwrap();
    assert_eq!(reset.board, Board::new());
    assert_eq!(reset.message, "New game started. You are X.");

    api.delete_session("e2e").await.unwrap();
}

#[tokio::test]
async fn test_rejected_move_is_status_error() {
    let api = spawn_server().await;
    api.submit_move("e2e", 0).await.unwrap();

    let err = api.submit_move("e2e", 0).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Status(400));
    assert!(err.message.contains("already occupied"));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpGameApi::new(format!("http://{}", addr));
    let err = api.fetch_state("e2e").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Transport);
}

#[tokio::test]
async fn test_view_plays_to_completion() {
    let api = spawn_server().await;
    let mut view = GameView::new();
    let command = view.fetch_state();
    view.apply(execute(&api, "full", command).await);

    // Play the lowest blank until the game ends; hard AI never loses.
    for _ in 0..5 {
        let Some(index) = (0..9).find(|&i| view.can_play(i)) else {
            break;
        };
        let command = view.submit_move(index).unwrap();
        view.apply(execute(&api, "full", command).await);
        if *view.game_over() {
            break;
        }
    }

    assert!(*view.game_over());
    assert_ne!(view.message(), "Human wins!");
    let score = view.scoreboard();
    assert_eq!(score.human, 0);
    assert_eq!(score.ai + score.draw, 1);
}
