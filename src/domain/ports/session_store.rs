//! SessionStore port
//!
//! Persists the resolved session identity at `~/.gymdesk/session.json` so a
//! login survives process restarts.

use crate::domain::entities::User;

pub trait SessionStore: Send + Sync {
    /// The persisted identity, or `None` when no session is stored.
    fn load(&self) -> Result<Option<User>, SessionStoreError>;
    fn save(&self, user: &User) -> Result<(), SessionStoreError>;
    /// Remove the persisted identity. Absent state is not an error.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("Failed to access session file: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize session: {message}")]
    SerializationError { message: String },
}
