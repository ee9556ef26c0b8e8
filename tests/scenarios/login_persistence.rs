//! Scenario: Session Persistence Across Invocations
//!
//! Journey: Miguel signs in once and keeps using the CLI over several
//! invocations without re-authenticating, then signs out.
//!
//! Steps:
//! 1. Miguel signs in with his email (no password needed)
//! 2. A later invocation reads his identity from the persisted slot
//! 3. He checks his routine and logs a workout, still without logging in
//! 4. He signs out; the next invocation is unauthenticated
//!
//! Success Criteria:
//! - The session file is the only state carried between invocations
//! - Every command after login sees the same identity
//! - Logout removes the slot and commands fail closed afterwards

use crate::common::*;

/// SCENARIO: One login carries a student through a whole workout session.
#[test]
fn scenario_login_once_work_all_session() {
    let env = TestEnv::new();

    // Step 1: Sign in
    let result = env.run(&["login", STUDENT_MIGUEL]);
    assert_success!(result);
    assert_output_contains!(result, "Signed in as Miguel Rodríguez");
    assert!(env.session_file().exists(), "Step 1: slot should be written");

    // Step 2: A fresh invocation restores the identity
    let result = env.run(&["whoami"]);
    assert_success!(result);
    assert_output_contains!(result, "Miguel Rodríguez");

    // Step 3: Routine lookup and workout logging ride the same session
    let result = env.run(&["my-routine"]);
    assert_success!(result);
    assert_output_contains!(result, "Fuerza Superior (r1)");

    let result = env.run(&[
        "log-progress",
        "--exercise",
        "ex2",
        "--sets",
        "4",
        "--reps",
        "8",
        "--weight",
        "70",
    ]);
    assert_success!(result);
    assert_output_contains!(result, "Logged Press de banca 4x8");

    // Step 4: Sign out and fail closed
    let result = env.run(&["logout"]);
    assert_success!(result);
    assert!(
        !env.session_file().exists(),
        "Step 4: slot should be removed"
    );

    let result = env.run(&["my-routine"]);
    assert_failure!(result);
    assert_stderr_contains!(result, "not signed in");
}
