//! Presentation layer for the gymdesk binary
//!
//! Shared rendering between command handlers: plain text tables for humans
//! and explicit JSON projections for scripting. Stored passwords never
//! appear in any projection here; the credentials command builds its own
//! document.

pub mod output;
