//! reqwest-backed game API client.

use crate::api::{ApiError, ApiErrorKind, GameApi};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use tictactoe_engine::{GameStateResponse, MoveRequest, MoveResponse, ResetResponse};
use tracing::{debug, instrument, warn};

/// HTTP client for the game API.
#[derive(Debug, Clone)]
pub struct HttpGameApi {
    /// Base URL without a trailing slash.
    base_url: String,
    client: reqwest::Client,
}

impl HttpGameApi {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `<base>/<path>?session_id=<id>`.
    fn session_url(&self, path: &str, session_id: &str) -> Result<Url, ApiError> {
        let mut url = self.url(path)?;
        url.query_pairs_mut().append_pair("session_id", session_id);
        Ok(url)
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Url::parse(&format!("{}/{}", self.base_url, path)).map_err(|e| {
            ApiError::new(
                ApiErrorKind::Transport,
                format!("Invalid API URL '{}': {}", self.base_url, e),
            )
        })
    }

    /// Rejects non-success statuses and decodes the JSON body.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "Server rejected request");
            return Err(ApiError::new(
                ApiErrorKind::Status(status.as_u16()),
                format!("Server returned {}: {}", status, body),
            ));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::new(ApiErrorKind::Decode, format!("Invalid response body: {}", e)))
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::new(ApiErrorKind::Transport, format!("HTTP request failed: {}", err))
}

#[async_trait::async_trait]
impl GameApi for HttpGameApi {
    #[instrument(skip(self))]
    async fn fetch_state(&self, session_id: &str) -> Result<GameStateResponse, ApiError> {
        let url = self.session_url("game", session_id)?;
        debug!(%url, "Fetching game state");
        let response = self.client.get(url).send().await.map_err(transport)?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn submit_move(&self, session_id: &str, index: usize) -> Result<MoveResponse, ApiError> {
        let url = self.url("move")?;
        let body = MoveRequest {
            index,
            session_id: Some(session_id.to_string()),
        };
        debug!(%url, "Submitting move");
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn reset_game(&self, session_id: &str) -> Result<ResetResponse, ApiError> {
        let url = self.session_url("reset", session_id)?;
        debug!(%url, "Resetting game");
        let response = self.client.get(url).send().await.map_err(transport)?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn delete_session(&self, session_id: &str) -> Result<(), ApiError> {
        let url = self.session_url("delete_session", session_id)?;
        debug!(%url, "Deleting session");
        let response = self.client.post(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiErrorKind::Status(status.as_u16()),
                format!("Session delete returned {}", status),
            ));
        }
        Ok(())
    }
}
