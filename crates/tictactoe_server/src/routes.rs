//! HTTP routes for the game API.

use crate::error::ServerError;
use crate::session::SessionManager;
use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::Request;
use axum::routing::{get, post};
use axum::{Json, Router};
use tictactoe_engine::{
    AiPlayer, Board, DeleteSessionResponse, Difficulty, GameStateResponse, Mark, MoveRequest,
    MoveResponse, ResetResponse, SessionQuery, DEFAULT_SESSION,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    sessions: SessionManager,
    ai: AiPlayer,
}

impl AppState {
    /// Creates state with fresh sessions and an AI of the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_sessions(SessionManager::new(), difficulty)
    }

    /// Creates state sharing an existing session manager.
    pub fn with_sessions(sessions: SessionManager, difficulty: Difficulty) -> Self {
        Self {
            sessions,
            ai: AiPlayer::new(Mark::O, difficulty),
        }
    }

    /// Session manager backing this state.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}

/// Builds the API router with request logging.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/game", get(get_game))
        .route("/move", post(make_move))
        .route("/reset", get(reset_game))
        .route("/delete_session", post(delete_session))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(state)
}

/// Serves the API on an already-bound listener until the task is dropped.
#[instrument(skip_all)]
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Game API listening");
    }
    axum::serve(listener, router(state)).await
}

#[instrument(skip(state), fields(session_id = query.session_id()))]
async fn get_game(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<GameStateResponse>, ServerError> {
    let response = state.sessions.with_session(query.session_id(), |session| GameStateResponse {
        board: *session.game().board(),
        result: session.result().map(str::to_string),
        scoreboard: session.scoreboard(),
    })?;
    debug!(result = ?response.result, "Returning game state");
    Ok(Json(response))
}

#[instrument(skip_all)]
async fn make_move(
    State(state): State<AppState>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ServerError> {
    let Json(req) = payload?;
    debug!(index = req.index, "Move requested");
    let session_id = req.session_id.as_deref().unwrap_or(DEFAULT_SESSION);
    let report = state
        .sessions
        .with_session(session_id, |session| session.play(req.index, &state.ai))??;
    Ok(Json(MoveResponse {
        board: report.board,
        message: report.message,
        scoreboard: Some(report.scoreboard),
    }))
}

#[instrument(skip(state), fields(session_id = query.session_id()))]
async fn reset_game(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<ResetResponse>, ServerError> {
    state.sessions.with_session(query.session_id(), |session| session.reset())?;
    Ok(Json(ResetResponse {
        board: Board::new(),
        message: "New game started. You are X.".to_string(),
    }))
}

#[instrument(skip(state), fields(session_id = query.session_id()))]
async fn delete_session(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<DeleteSessionResponse>, ServerError> {
    let deleted = state.sessions.remove(query.session_id())?;
    Ok(Json(DeleteSessionResponse { deleted }))
}
