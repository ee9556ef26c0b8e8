//! Scenario: Retiring a Shared Routine
//!
//! Journey: Carlos retires the upper-body routine that two students from
//! different rosters are training on.
//!
//! Steps:
//! 1. Carlos signs in and reviews the routine he wants to retire
//! 2. He confirms who is assigned to it across both rosters
//! 3. He removes it; the command reports the cascade
//! 4. The JSON form carries the unassignment count for scripting
//!
//! Success Criteria:
//! - The removal never leaves a student pointing at the retired id
//! - The cascade is visible in the command output, not silent

use crate::common::*;

/// SCENARIO: Removing a routine unassigns every student on it.
#[test]
fn scenario_retiring_a_shared_routine() {
    let env = TestEnv::new();

    // Step 1: Review the routine
    env.login(TEACHER_CARLOS);
    let result = env.run(&["routine", "r1"]);
    assert_success!(result);
    assert_output_contains!(result, "Fuerza Superior (r1)");
    assert_output_contains!(result, "Press de banca");

    // Step 2: Miguel trains it on Carlos's roster, Roberto on Ana's
    let result = env.run(&["students", "--search", "miguel"]);
    assert_output_contains!(result, "r1");
    let result = env.run(&["students", "--teacher", "t2", "--search", "roberto"]);
    assert_output_contains!(result, "r1");

    // Step 3: Retire it
    let result = env.run(&["remove-routine", "r1"]);
    assert_success!(result);
    assert_output_contains!(result, "Removed Fuerza Superior (r1)");
    assert_output_contains!(result, "Unassigned 2 students");

    // Step 4: Same cascade, machine-readable
    let result = env.run(&["remove-routine", "r1", "--json"]);
    assert_success!(result);
    let doc = result.json();
    assert_eq!(doc["event"], "remove-routine");
    assert_eq!(doc["students_unassigned"], 2);
}
