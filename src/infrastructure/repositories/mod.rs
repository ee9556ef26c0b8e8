//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod session;

pub use session::JsonSessionStore;
