//! Student credential pair and its derivation rules
//!
//! Usernames are derived deterministically from the student's display name;
//! passwords are short random strings. Neither is hardened: credentials here
//! are opaque handles the dashboard shows to the teacher, not a security
//! boundary.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

const SEPARATOR: char = '.';
const PASSWORD_LEN: usize = 6;

/// Opaque username/password pair stored on a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Generate a fresh pair for the given display name.
    ///
    /// The username is stable for a given name; the password is random on
    /// every call.
    pub fn generate(name: &str) -> Self {
        Self {
            username: derive_username(name),
            password: generate_password(),
        }
    }
}

/// Derive a username from a display name.
///
/// Lower-cases, folds accented Latin letters to ASCII, collapses whitespace
/// runs to a single `.`, and drops everything else. "Miguel Rodríguez"
/// becomes `miguel.rodriguez`.
pub fn derive_username(name: &str) -> String {
    let mut username = String::new();
    for c in name.to_lowercase().chars() {
        let c = fold_accent(c);
        if c.is_ascii_alphanumeric() {
            username.push(c);
        } else if c.is_whitespace() && !username.is_empty() && !username.ends_with(SEPARATOR) {
            username.push(SEPARATOR);
        }
    }
    while username.ends_with(SEPARATOR) {
        username.pop();
    }
    username
}

/// Random lowercase alphanumeric password
fn generate_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PASSWORD_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

/// Fold the accented Latin letters that show up in member names to ASCII.
/// Anything not covered is dropped later by the alphanumeric filter.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}
