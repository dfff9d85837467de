//! Terminal game view for tic-tac-toe against a remote AI.
//!
//! All game logic lives behind the HTTP game API; this crate only keeps
//! view state (board, message, scoreboard, loading flag, game-over latch)
//! and replaces it from server responses.
//!
//! # Architecture
//!
//! - **View**: [`GameView`] state machine turning user intents into [`Command`]s
//!   and applying [`Outcome`]s
//! - **API**: [`GameApi`] seam with the reqwest-backed [`HttpGameApi`]
//! - **Dispatcher**: runs commands on background tasks
//! - **TUI**: ratatui rendering and the crossterm event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod dispatcher;
mod http_client;
mod session_store;
mod tui;
mod view;

pub use api::{ApiError, ApiErrorKind, GameApi};
pub use config::{ClientConfig, ConfigError, API_URL_ENV};
pub use dispatcher::{execute, Dispatcher};
pub use http_client::HttpGameApi;
pub use session_store::{SessionStore, SessionStoreError};
pub use tui::{draw, run_tui, Action};
pub use view::{Command, GameView, Outcome, CONNECTION_ERROR, MOVE_ERROR, RESET_ERROR};
