//! HTTP game API for tic-tac-toe against an AI.
//!
//! Serves four endpoints keyed by an opaque session token:
//!
//! - `GET /game?session_id=` - current board, result and scoreboard
//! - `POST /move` - play a cell; the AI replies in the same request
//! - `GET /reset?session_id=` - fresh board, scoreboard kept
//! - `POST /delete_session?session_id=` - forget the session
//!
//! Sessions live in memory only.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod routes;
mod session;

pub use config::{ConfigError, ServerConfig};
pub use error::{ServerError, ServerErrorKind};
pub use routes::{router, serve, AppState};
pub use session::{GameSession, MoveReport, SessionManager};
