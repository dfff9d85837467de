//! File-backed session token.

use derive_more::{Display, Error};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Length of the random part of a generated token.
const TOKEN_LEN: usize = 16;

/// Keeps the session token across restarts in a small text file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by `path`. Nothing is read until
    /// [`SessionStore::load_or_create`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File holding the token.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Generates a fresh opaque token.
    pub fn generate() -> String {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        format!("session_{}", token)
    }

    /// Returns the stored token, generating and saving one if the file is
    /// missing or blank.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] if the file exists but cannot be read,
    /// or a new token cannot be written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_or_create(&self) -> Result<String, SessionStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if !content.trim().is_empty() => {
                let id = content.trim().to_string();
                debug!(session_id = %id, "Loaded session id");
                return Ok(id);
            }
            Ok(_) => debug!("Session file blank"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => debug!("No session file yet"),
            Err(e) => {
                return Err(SessionStoreError::new(format!(
                    "Failed to read session file: {}",
                    e
                )));
            }
        }

        let id = Self::generate();
        self.save(&id)?;
        info!(session_id = %id, "Created new session id");
        Ok(id)
    }

    /// Overwrites the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] if the file cannot be written.
    pub fn save(&self, id: &str) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                SessionStoreError::new(format!("Failed to create session directory: {}", e))
            })?;
        }
        std::fs::write(&self.path, format!("{}\n", id))
            .map_err(|e| SessionStoreError::new(format!("Failed to write session file: {}", e)))
    }
}

/// Session store error.
#[derive(Debug, Clone, Display, Error)]
#[display("Session store error: {} at {}:{}", message, file, line)]
pub struct SessionStoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionStoreError {
    /// Creates a new session store error.
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
