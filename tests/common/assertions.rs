//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros fail with the full command output to aid debugging.

/// Assert that a command succeeded.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected command to succeed (exit {}).\nstdout:\n{}\nstderr:\n{}",
            $result.exit_code, $result.stdout, $result.stderr
        );
    };
}

/// Assert that a command failed with a non-zero exit code.
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        assert!(
            !$result.success,
            "Expected command to fail, but it succeeded.\nstdout:\n{}",
            $result.stdout
        );
    };
}

/// Assert that stdout contains the given needle.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        assert!(
            $result.stdout.contains($needle),
            "Expected stdout to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that stderr contains the given needle.
#[macro_export]
macro_rules! assert_stderr_contains {
    ($result:expr, $needle:expr) => {
        assert!(
            $result.stderr.contains($needle),
            "Expected stderr to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}
