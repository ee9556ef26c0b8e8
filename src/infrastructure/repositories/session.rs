//! JSON Session Repository
//!
//! Persists the resolved session identity at `~/.gymdesk/session.json`.

use std::fs;
use std::path::PathBuf;

use crate::domain::entities::User;
use crate::domain::ports::{SessionStore, SessionStoreError};

pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new() -> Self {
        Self {
            path: default_session_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for JsonSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self) -> Result<Option<User>, SessionStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| SessionStoreError::AccessError {
                message: e.to_string(),
            })?;

        let user: User =
            serde_json::from_str(&content).map_err(|e| SessionStoreError::SerializationError {
                message: e.to_string(),
            })?;

        Ok(Some(user))
    }

    fn save(&self, user: &User) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionStoreError::AccessError {
                message: e.to_string(),
            })?;
        }

        let content =
            serde_json::to_string_pretty(user).map_err(|e| SessionStoreError::SerializationError {
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| SessionStoreError::AccessError {
            message: e.to_string(),
        })
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::AccessError {
                message: e.to_string(),
            }),
        }
    }
}

fn default_session_path() -> PathBuf {
    // Allow override for testing and scripted setups
    if let Ok(path) = std::env::var("GYMDESK_SESSION_FILE") {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .map(|h| h.join(".gymdesk/session.json"))
        .unwrap_or_else(|| PathBuf::from("~/.gymdesk/session.json"))
}
