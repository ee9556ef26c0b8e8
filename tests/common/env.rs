//! Test environment builder for isolated gymdesk testing.
//!
//! Provides `TestEnv` - a temp home directory plus helpers to run the
//! compiled gymdesk binary against it. The store reseeds on every run;
//! only the session file under the temp home carries state across runs.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a gymdesk CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if the command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout should be valid JSON: {}\nstdout:\n{}",
                e, self.stdout
            )
        })
    }
}

/// Isolated test environment with a temp home directory.
///
/// Every run gets HOME and XDG_CONFIG_HOME pointed at the temp dir and,
/// unless disabled, GYMDESK_SESSION_FILE pinned to a slot inside it, so
/// parallel tests never share state.
pub struct TestEnv {
    pub home: TempDir,
    bin: PathBuf,
    session_override: bool,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get a path relative to the temp home
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home.path().join(relative)
    }

    /// The session slot this environment pins via GYMDESK_SESSION_FILE
    pub fn session_file(&self) -> PathBuf {
        self.home_path("session.json")
    }

    /// Run gymdesk with the default environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run gymdesk with extra environment variables on top of the defaults
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"))
            .env_remove("RUST_LOG")
            .env_remove("GYMDESK_MONTHLY_FEE")
            .env_remove("GYMDESK_LOGIN_DELAY_MS");
        if self.session_override {
            cmd.env("GYMDESK_SESSION_FILE", self.session_file());
        } else {
            cmd.env_remove("GYMDESK_SESSION_FILE");
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute gymdesk");
        output_to_result(output)
    }

    /// Sign in, panicking if it does not work
    pub fn login(&self, email: &str) -> TestResult {
        let result = self.run(&["login", email]);
        assert!(
            result.success,
            "login as {} should succeed.\nstderr: {}",
            email, result.stderr
        );
        result
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv
pub struct TestEnvBuilder {
    config: Option<String>,
    session_override: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            session_override: true,
        }
    }

    /// Write this TOML as the user config before the first run
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    /// Leave GYMDESK_SESSION_FILE unset so the config file or the default
    /// path under the temp home applies
    pub fn without_session_override(mut self) -> Self {
        self.session_override = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let home = TempDir::new().expect("Failed to create temp home");
        if let Some(config) = &self.config {
            let config_path = home.path().join(".config/gymdesk/config.toml");
            std::fs::create_dir_all(config_path.parent().expect("config path has a parent"))
                .expect("Failed to create config dir");
            std::fs::write(&config_path, config).expect("Failed to write config");
        }
        TestEnv {
            home,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_gymdesk")),
            session_override: self.session_override,
        }
    }
}
