//! Progress tracking commands

use anyhow::{bail, Result};
use chrono::Utc;
use serde_json::json;

use gymdesk::{Gym, NewProgressEntry, SessionResolver, SessionStore, User};

use crate::presentation::output::{self, OutputFormat};

use super::{require_session, require_student};

pub fn cmd_progress<S: SessionStore>(
    gym: &Gym,
    resolver: &SessionResolver<S>,
    student: Option<String>,
    exercise: Option<String>,
    fmt: OutputFormat,
) -> Result<()> {
    let user = require_session(resolver)?;
    let mut entries = match user {
        User::Student(me) => {
            if let Some(other) = &student {
                if other != &me.id {
                    bail!("students can only view their own progress");
                }
            }
            gym.progress_of_student(&me.id)
        }
        User::Teacher(_) => match &student {
            Some(id) => gym.progress_of_student(id),
            None => gym.progress().iter().collect(),
        },
    };
    if let Some(ex) = &exercise {
        entries.retain(|p| &p.exercise_id == ex);
    }
    entries.sort_by_key(|p| p.date);
    match fmt {
        OutputFormat::Json => {
            let items: Vec<_> = entries.iter().map(|p| output::progress_json(p)).collect();
            let doc = json!({
                "event": "data",
                "command": "progress",
                "count": items.len(),
                "entries": items,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => print!("{}", output::progress_table(&entries, gym)),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_log_progress<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    exercise: String,
    sets: u32,
    reps: u32,
    weight: f32,
    notes: Option<String>,
    fmt: OutputFormat,
) -> Result<()> {
    let student_id = require_student(resolver)?.id.clone();
    let draft = NewProgressEntry {
        student_id: student_id.clone(),
        exercise_id: exercise,
        date: Utc::now().date_naive(),
        sets_completed: sets,
        reps_completed: reps,
        weight_used: weight,
        notes,
    };
    let entry = match gym.add_progress(draft) {
        Some(entry) => entry,
        None => bail!(
            "progress not recorded: {} is not in the store; run `gymdesk login` again",
            student_id
        ),
    };
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "log-progress",
                "entry": output::progress_json(&entry),
            });
            println!("{}", doc);
        }
        OutputFormat::Text => {
            let name = gym
                .exercise(&entry.exercise_id)
                .map(|e| e.name.clone())
                .unwrap_or_else(|| entry.exercise_id.clone());
            println!(
                "✓ Logged {} {}x{} for {} ({})",
                name, entry.sets_completed, entry.reps_completed, entry.date, entry.id
            );
        }
    }
    Ok(())
}
