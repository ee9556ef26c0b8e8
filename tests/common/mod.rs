//! Common test utilities for gymdesk CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with a temp home and session slot
//! - Assertion macros: `assert_success!`, `assert_output_contains!`, etc.
//! - Fixtures: seed ids and emails the tests sign in with

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
