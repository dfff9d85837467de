//! Tic-tac-toe engine - board model, rules, and AI opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`Scoreboard`]
//! - **Rules**: win and draw detection over the eight lines
//! - **Game**: move validation and status tracking
//! - **AI**: minimax opponent with configurable [`Difficulty`]
//! - **Wire**: JSON shapes shared by the HTTP server and client
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, Mark, GameStatus};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     let mark = game.next_mark();
//!     game.play(index, mark).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod game;
mod position;
mod rules;
mod types;
mod wire;

pub use ai::{AiPlayer, Difficulty};
pub use game::{Game, GameStatus, MoveError};
pub use position::Position;
pub use rules::{is_draw, outcome, winner, LINES};
pub use types::{Board, Cell, Mark, Scoreboard};
pub use wire::{
    DeleteSessionResponse, ErrorResponse, GameStateResponse, MoveRequest, MoveResponse,
    ResetResponse, SessionQuery, DEFAULT_SESSION,
};
