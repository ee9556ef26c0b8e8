//! Scenario: Monthly Billing Review
//!
//! Journey: Ana reviews the payment dashboard and collects Elena's
//! outstanding fee.
//!
//! Steps:
//! 1. Ana signs in and checks the payment summary
//! 2. She drills into Elena's records and finds the open pending one
//! 3. She marks Elena paid; the settled record is echoed back
//! 4. She reads the updated status from the same command in JSON form
//!
//! Success Criteria:
//! - The summary reflects the seeded ledger
//! - Settling reuses the pending record instead of minting a duplicate
//! - The settled record carries today's date

use crate::common::*;

/// SCENARIO: A teacher walks the billing dashboard and settles a fee.
#[test]
fn scenario_monthly_billing_review() {
    let env = TestEnv::new();

    // Step 1: Sign in and take stock
    env.login(TEACHER_ANA);
    let result = env.run(&["payments", "--summary"]);
    assert_success!(result);
    assert_output_contains!(result, "Collected: 200 (4 payments)");
    assert_output_contains!(result, "Pending:   2 students");

    // Step 2: Elena's ledger holds exactly one open record
    let result = env.run(&["payments", "--student", "s4", "--json"]);
    assert_success!(result);
    let doc = result.json();
    assert_eq!(doc["count"], 1, "Step 2: Elena should have one record");
    assert_eq!(doc["payments"][0]["status"], "pending");

    // Step 3: Collect the fee
    let result = env.run(&["mark-paid", "s4"]);
    assert_success!(result);
    assert_output_contains!(result, "Elena García marked paid");
    assert_output_contains!(result, "Payment: pay4 (50)");

    // Step 4: The JSON form exposes the settled record for scripting
    let result = env.run(&["mark-paid", "s4", "--json"]);
    assert_success!(result);
    let doc = result.json();
    assert_eq!(doc["payment_status"], "paid");
    assert_eq!(
        doc["payment"]["id"], "pay4",
        "Step 4: the pending record should be settled, not duplicated"
    );
    assert_eq!(
        doc["payment"]["date"],
        chrono::Utc::now().date_naive().to_string()
    );
}
