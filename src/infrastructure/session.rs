// src/infrastructure/session.rs
use crate::constants::{APP_DIR_NAME, SESSION_FILE_NAME};
use crate::domain::DomainError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The persisted session established by `login`.
///
/// `access_token` authenticates data-service calls; `identity_id` is the
/// storage identity the media binding uses to build object paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub identity_id: String,
    pub username: String,
}

/// The auth gate: a session file under the platform data dir.
///
/// Note commands load the session or refuse to run; `logout` removes it,
/// discarding any in-memory notes with it.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Session store at the default platform location.
    pub fn open_default() -> Result<Self> {
        let data_dir = dirs::data_dir().context("Could not find data directory")?;
        Ok(Self::new(data_dir.join(APP_DIR_NAME).join(SESSION_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if one exists.
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No session file");
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(&self.path).context("Failed to read session file")?;
        let session: Session =
            serde_json::from_str(&content).context("Failed to parse session file")?;
        Ok(Some(session))
    }

    /// Load the session or fail with `NotAuthenticated`.
    pub fn require(&self) -> Result<Session> {
        self.load()?
            .ok_or_else(|| DomainError::NotAuthenticated.into())
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create session directory")?;
        }
        let content =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;
        std::fs::write(&self.path, content).context("Failed to write session file")?;
        info!(username = %session.username, "Session saved");
        Ok(())
    }

    /// Remove the session file. Succeeds if no session exists.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).context("Failed to remove session file")?;
            info!("Session cleared");
        }
        Ok(())
    }
}
