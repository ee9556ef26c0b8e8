//! Domain Services
//!
//! Business logic that operates on domain entities. Session persistence is
//! the only I/O, and it goes through the `SessionStore` port.

mod session;

pub use session::{SessionResolver, SessionState};
