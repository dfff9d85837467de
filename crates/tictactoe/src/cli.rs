//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Difficulty;

/// Tic-tac-toe against an AI, served over HTTP and played in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game API
    Serve {
        /// Path to a TOML server config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// AI strength (easy or hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },

    /// Play in the terminal against a running game API
    Play {
        /// Path to a TOML client config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Game API base URL (overrides config and TICTACTOE_API_URL)
        #[arg(long)]
        api_url: Option<String>,

        /// File the session token is kept in
        #[arg(long)]
        session_file: Option<PathBuf>,

        /// Leave the server-side session in place on exit
        #[arg(long)]
        keep_session: bool,
    },
}
