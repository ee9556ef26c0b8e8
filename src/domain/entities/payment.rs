//! Payment entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PaymentStatus;

/// One payment record for a student's monthly fee.
///
/// `date: None` means the payment exists but has not been settled yet (a
/// pending record created ahead of collection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub student_id: String,
    /// Fee amount in whole currency units
    pub amount: u32,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub status: PaymentStatus,
}
