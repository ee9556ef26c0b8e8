//! Payment status value object
//!
//! Shared by `Student.payment_status` and `Payment.status`. The mark-paid
//! mutation on the store keeps the two views consistent.

use serde::{Deserialize, Serialize};

/// Payment state of a student or of an individual payment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Current month settled
    Paid,
    /// Payment due
    Pending,
    /// Payment past due
    Overdue,
}

impl PaymentStatus {
    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Overdue => "overdue",
        }
    }

    /// Returns true for any state that still owes money
    pub fn is_outstanding(&self) -> bool {
        !matches!(self, PaymentStatus::Paid)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
