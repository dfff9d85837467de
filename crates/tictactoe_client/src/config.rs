//! Client configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable holding the game API base URL.
pub const API_URL_ENV: &str = "TICTACTOE_API_URL";

/// Configuration for the terminal client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Game API base URL.
    #[serde(default = "default_api_url")]
    api_url: String,

    /// File the session token is kept in.
    #[serde(default = "default_session_file")]
    session_file: PathBuf,

    /// Delete the server-side session when the client exits.
    #[serde(default = "default_delete_on_exit")]
    delete_on_exit: bool,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_session_file() -> PathBuf {
    PathBuf::from(".tictactoe_session")
}

fn default_delete_on_exit() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_tui.log")
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            session_file: default_session_file(),
            delete_on_exit: default_delete_on_exit(),
            log_file: default_log_file(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading client config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(api_url = %config.api_url, "Client config loaded");
        Ok(config)
    }

    /// Loads the file if given (defaults otherwise), then applies
    /// [`API_URL_ENV`] from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_api_url_env(std::env::var(API_URL_ENV).ok()))
    }

    /// Replaces the API URL with a non-blank environment value.
    pub fn with_api_url_env(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            debug!(api_url = %url, "API URL taken from environment");
            self.api_url = url;
        }
        self
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        session_file: Option<PathBuf>,
        keep_session: bool,
    ) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(session_file) = session_file {
            self.session_file = session_file;
        }
        if keep_session {
            self.delete_on_exit = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
