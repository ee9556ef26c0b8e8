//! Session resolver
//!
//! Resolves a submitted email against the gym's users and keeps the
//! resolved identity across restarts through the `SessionStore` port.

use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::entities::{Gym, User};
use crate::domain::ports::SessionStore;

/// Where the resolver currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    Authenticating,
    Authenticated(User),
}

/// Owns the session identity for the running process.
///
/// Construction restores any persisted identity; `login` re-resolves against
/// the live store and persists the result. Persistence failures degrade to a
/// memory-only session rather than failing the login.
#[derive(Debug)]
pub struct SessionResolver<S: SessionStore> {
    store: S,
    state: SessionState,
    login_delay: Duration,
}

impl<S: SessionStore> SessionResolver<S> {
    /// Restore a persisted identity if one exists. Unreadable or malformed
    /// persisted state is treated as no session.
    pub fn new(store: S) -> Self {
        let state = match store.load() {
            Ok(Some(user)) => {
                debug!("restored session for {}", user.email());
                SessionState::Authenticated(user)
            }
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                warn!("ignoring unreadable session state: {}", e);
                SessionState::Unauthenticated
            }
        };
        Self {
            store,
            state,
            login_delay: Duration::ZERO,
        }
    }

    /// Simulated resolution latency, applied inside `login`.
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Resolve `email` to a user and establish the session. The password is
    /// accepted but never checked against the stored value. Returns whether
    /// a matching identity was found.
    pub fn login(&mut self, gym: &Gym, email: &str, _password: &str) -> bool {
        self.state = SessionState::Authenticating;
        if !self.login_delay.is_zero() {
            thread::sleep(self.login_delay);
        }
        match gym.user_by_email(email) {
            Some(user) => {
                if let Err(e) = self.store.save(&user) {
                    warn!("session not persisted: {}", e);
                }
                debug!("session established for {} ({})", user.email(), user.role());
                self.state = SessionState::Authenticated(user);
                true
            }
            None => {
                warn!("login failed: no user with email: {}", email);
                self.state = SessionState::Unauthenticated;
                false
            }
        }
    }

    /// Clear the in-memory session and the persisted slot.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!("persisted session not cleared: {}", e);
        }
        self.state = SessionState::Unauthenticated;
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_student(&self) -> bool {
        matches!(self.current_user(), Some(User::Student(_)))
    }

    pub fn is_teacher(&self) -> bool {
        matches!(self.current_user(), Some(User::Teacher(_)))
    }

    /// True while a login is resolving.
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Authenticating
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
