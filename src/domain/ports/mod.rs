//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod session_store;

pub use session_store::{SessionStore, SessionStoreError};
