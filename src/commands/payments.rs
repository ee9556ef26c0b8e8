//! Payment record commands

use anyhow::Result;
use serde_json::json;

use gymdesk::{Gym, SessionResolver, SessionStore};

use crate::presentation::output::{self, OutputFormat};

use super::require_teacher;

pub fn cmd_payments<S: SessionStore>(
    gym: &Gym,
    resolver: &SessionResolver<S>,
    student: Option<String>,
    summary: bool,
    fmt: OutputFormat,
) -> Result<()> {
    require_teacher(resolver)?;
    if summary {
        let totals = output::payment_totals(gym);
        match fmt {
            OutputFormat::Json => {
                let doc = json!({
                    "event": "data",
                    "command": "payments",
                    "summary": {
                        "collected": totals.collected,
                        "paid_count": totals.paid_count,
                        "pending_students": totals.pending_students,
                        "overdue_students": totals.overdue_students,
                    },
                });
                println!("{}", doc);
            }
            OutputFormat::Text => print!("{}", output::payments_summary(gym)),
        }
        return Ok(());
    }
    let payments = match &student {
        Some(id) => gym.payments_of_student(id),
        None => gym.payments().iter().collect(),
    };
    match fmt {
        OutputFormat::Json => {
            let items: Vec<_> = payments.iter().map(|p| output::payment_json(p)).collect();
            let doc = json!({
                "event": "data",
                "command": "payments",
                "count": items.len(),
                "payments": items,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => print!("{}", output::payments_table(&payments, gym)),
    }
    Ok(())
}
