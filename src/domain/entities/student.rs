//! Student entity and the draft type used to enroll one

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Credentials, PaymentStatus};

/// An enrolled gym member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub teacher_id: String,
    /// Routine currently assigned, if any
    #[serde(default)]
    pub routine_id: Option<String>,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub last_payment_date: Option<NaiveDate>,
    pub is_active: bool,
    pub credentials: Credentials,
}

/// Input for enrolling a new student. Every field is required; the id,
/// credentials, and payment fields are filled in by the store.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub teacher_id: String,
    pub routine_id: String,
}
