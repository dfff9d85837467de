//! Terminal UI event loop.

mod input;
mod ui;

pub use input::Action;
pub use ui::draw;

use crate::api::GameApi;
use crate::config::ClientConfig;
use crate::dispatcher::Dispatcher;
use crate::http_client::HttpGameApi;
use crate::view::GameView;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use tictactoe_engine::Position;
use tokio::sync::mpsc;
use tokio::time::{Duration, timeout};
use tracing::{error, info, instrument, warn};

/// Upper bound on the exit-time session delete so a dead server cannot
/// hold the terminal hostage.
const EXIT_GRACE: Duration = Duration::from_secs(2);

/// How long to wait for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal client against the configured game API.
///
/// Logs go to the configured log file so they do not corrupt the screen.
pub async fn run_tui(config: ClientConfig, session_id: String) -> Result<()> {
    init_file_logging(&config)?;
    info!(api_url = %config.api_url(), session_id = %session_id, "Starting tic-tac-toe TUI");

    let api: Arc<dyn GameApi> = Arc::new(HttpGameApi::new(config.api_url().clone()));
    let (dispatcher, mut outcomes) = Dispatcher::new(Arc::clone(&api), session_id.clone());

    let mut terminal = setup_terminal()?;
    let res = run_loop(&mut terminal, &dispatcher, &mut outcomes).await;
    if let Err(err) = restore_terminal(&mut terminal) {
        error!(error = ?err, "Failed to restore terminal");
    }

    if *config.delete_on_exit() {
        delete_on_exit(api.as_ref(), &session_id).await;
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Best-effort session delete, bounded by [`EXIT_GRACE`]. Never fails.
async fn delete_on_exit(api: &dyn GameApi, session_id: &str) {
    match timeout(EXIT_GRACE, api.delete_session(session_id)).await {
        Ok(Ok(())) => info!("Session deleted on exit"),
        Ok(Err(e)) => warn!(error = %e, "Session delete on exit failed"),
        Err(_) => warn!("Session delete on exit timed out"),
    }
}

fn init_file_logging(config: &ClientConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draws, applies server replies, and turns key presses into commands
/// until the user quits.
#[instrument(skip_all, fields(session_id = %dispatcher.session_id()))]
async fn run_loop(
    terminal: &mut Tui,
    dispatcher: &Dispatcher,
    outcomes: &mut mpsc::UnboundedReceiver<crate::view::Outcome>,
) -> Result<()> {
    let mut view = GameView::new();
    let mut cursor = Position::Center;
    dispatcher.dispatch(view.fetch_state());

    loop {
        while let Ok(outcome) = outcomes.try_recv() {
            view.apply(outcome);
        }

        terminal.draw(|f| ui::draw(f, &view, cursor))?;

        // Keep the loop responsive to server replies while idle.
        if !event::poll(POLL_INTERVAL)? {
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let command = match input::action_for(key.code, cursor) {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Cursor(position) => {
                cursor = position;
                None
            }
            Action::Play(index) => {
                if let Some(position) = Position::from_index(index) {
                    cursor = position;
                }
                view.submit_move(index)
            }
            Action::ResetGame => view.reset_game(),
            Action::ResetScore => view.reset_score(),
            Action::Ignore => None,
        };

        if let Some(command) = command {
            dispatcher.dispatch(command);
        }
    }
}
