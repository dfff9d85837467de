//! Tic-tac-toe - unified CLI
//!
//! `serve` runs the HTTP game API; `play` runs the terminal client.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_client::{ClientConfig, SessionStore};
use tictactoe_engine::Difficulty;
use tictactoe_server::{AppState, ServerConfig};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            difficulty,
        } => run_server(config, host, port, difficulty).await,
        Command::Play {
            config,
            api_url,
            session_file,
            keep_session,
        } => run_client(config, api_url, session_file, keep_session).await,
    }
}

/// Run the HTTP game API
async fn run_server(
    config: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    }
    .with_overrides(host, port, difficulty);

    info!(
        host = %config.host(),
        port = *config.port(),
        difficulty = %config.difficulty(),
        "Starting tic-tac-toe game API"
    );

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    tictactoe_server::serve(listener, AppState::new(*config.difficulty())).await?;

    Ok(())
}

/// Run the terminal client
#[instrument(skip_all)]
async fn run_client(
    config: Option<PathBuf>,
    api_url: Option<String>,
    session_file: Option<PathBuf>,
    keep_session: bool,
) -> Result<()> {
    let config =
        ClientConfig::load(config.as_deref())?.with_overrides(api_url, session_file, keep_session);

    let store = SessionStore::new(config.session_file().clone());
    let session_id = match store.load_or_create() {
        Ok(id) => id,
        Err(e) => {
            // Play on with an unsaved token rather than refusing to start.
            warn!(error = %e, "Session file unavailable, using a temporary session");
            SessionStore::generate()
        }
    };

    tictactoe_client::run_tui(config, session_id).await
}
