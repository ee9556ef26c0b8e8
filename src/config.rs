//! Configuration module for Gymdesk
//!
//! Implements a small configuration hierarchy:
//! 1. Environment variables (GYMDESK_*, highest priority)
//! 2. User config (~/.config/gymdesk/config.toml)
//! 3. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GymdeskResult;

/// Billing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Amount stamped on auto-created payment records
    #[serde(default = "default_monthly_fee")]
    pub monthly_fee: u32,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            monthly_fee: default_monthly_fee(),
        }
    }
}

fn default_monthly_fee() -> u32 {
    50
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Session file path; defaults to `~/.gymdesk/session.json`
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Simulated login latency in milliseconds
    #[serde(default)]
    pub login_delay_ms: u64,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub billing: BillingConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GymdeskResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GymdeskResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| crate::error::GymdeskError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .last()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from user config or defaults
    pub fn load_or_default() -> Self {
        let (config, _warnings) = Self::load_or_default_with_warnings();
        config
    }

    /// Load from user config or defaults, collecting non-fatal warnings.
    pub fn load_or_default_with_warnings() -> (Self, Vec<ConfigWarning>) {
        if let Some(user_config_dir) = dirs_config_dir() {
            let user_config = user_config_dir.join("gymdesk/config.toml");
            if user_config.exists() {
                match Self::load_with_warnings(&user_config) {
                    Ok((config, warnings)) => return (config.with_env_overrides(), warnings),
                    Err(e) => warn!("ignoring unreadable config: {}", e),
                }
            }
        }

        (Self::default().with_env_overrides(), Vec::new())
    }

    /// Apply environment variable overrides (GYMDESK_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        // GYMDESK_MONTHLY_FEE
        if let Ok(fee) = std::env::var("GYMDESK_MONTHLY_FEE") {
            match fee.parse() {
                Ok(parsed) => self.billing.monthly_fee = parsed,
                Err(_) => warn!("ignoring non-numeric GYMDESK_MONTHLY_FEE: {}", fee),
            }
        }

        // GYMDESK_SESSION_FILE
        if let Ok(file) = std::env::var("GYMDESK_SESSION_FILE") {
            self.session.file = Some(PathBuf::from(file));
        }

        // GYMDESK_LOGIN_DELAY_MS
        if let Ok(delay) = std::env::var("GYMDESK_LOGIN_DELAY_MS") {
            match delay.parse() {
                Ok(parsed) => self.session.login_delay_ms = parsed,
                Err(_) => warn!("ignoring non-numeric GYMDESK_LOGIN_DELAY_MS: {}", delay),
            }
        }

        self
    }

    /// Simulated login latency as a `Duration`
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.session.login_delay_ms)
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "billing",
        "monthly_fee",
        "session",
        "file",
        "login_delay_ms",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
