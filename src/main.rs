//! Gymdesk CLI - gym management dashboard for the command line
//!
//! Usage: gymdesk <COMMAND>
//!
//! The store is seeded fresh on every run; only the session slot persists
//! between invocations (`~/.gymdesk/session.json` by default). Sign in
//! with `gymdesk login <email>`, then manage students, routines, progress
//! and payments according to your role.

mod cli;
mod commands;
mod logger;
mod presentation;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use gymdesk::{Config, Gym, JsonSessionStore, SessionResolver};

use crate::cli::{Cli, Commands};
use crate::presentation::output::OutputFormat;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let (config, warnings) = Config::load_or_default_with_warnings();
    for warning in &warnings {
        let mut message = format!("⚠ unknown config key `{}`", warning.key);
        if let Some(line) = warning.line {
            message.push_str(&format!(" ({}:{})", warning.file.display(), line));
        }
        if let Some(suggestion) = &warning.suggestion {
            message.push_str(&format!("; did you mean `{}`?", suggestion));
        }
        eprintln!("{}", message);
    }

    let mut gym = Gym::with_seed_data(config.billing.monthly_fee);
    let store = match &config.session.file {
        Some(path) => JsonSessionStore::with_path(path.clone()),
        None => JsonSessionStore::new(),
    };
    let mut resolver = SessionResolver::new(store).with_login_delay(config.login_delay());
    let fmt = OutputFormat::from_flag(cli.json);

    let command = match cli.command {
        Some(command) => command,
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    match command {
        Commands::Login { email, password } => {
            commands::cmd_login(&gym, &mut resolver, &email, &password, fmt)
        }
        Commands::Logout => commands::cmd_logout(&mut resolver, fmt),
        Commands::Whoami => commands::cmd_whoami(&gym, &resolver, fmt),
        Commands::Students { teacher, search } => {
            commands::cmd_students(&gym, &resolver, teacher, search, fmt)
        }
        Commands::Student { id } => commands::cmd_student(&gym, &resolver, &id, fmt),
        Commands::AddStudent {
            name,
            email,
            phone,
            teacher,
            routine,
        } => commands::cmd_add_student(
            &mut gym, &resolver, name, email, phone, teacher, routine, fmt,
        ),
        Commands::RemoveStudent { id } => {
            commands::cmd_remove_student(&mut gym, &resolver, &id, fmt)
        }
        Commands::SetActive { id, active } => {
            commands::cmd_set_active(&mut gym, &resolver, &id, active, fmt)
        }
        Commands::AssignRoutine { student, routine } => {
            commands::cmd_assign_routine(&mut gym, &resolver, &student, &routine, fmt)
        }
        Commands::MarkPaid { id, status } => {
            commands::cmd_mark_paid(&mut gym, &resolver, &id, status, fmt)
        }
        Commands::Credentials {
            student_id,
            regenerate,
        } => commands::cmd_credentials(&mut gym, &resolver, &student_id, regenerate, fmt),
        Commands::Routines { mine } => commands::cmd_routines(&gym, &resolver, mine, fmt),
        Commands::Routine { id } => commands::cmd_routine(&gym, &resolver, &id, fmt),
        Commands::AddRoutine {
            name,
            description,
            level,
            kind,
        } => commands::cmd_add_routine(&mut gym, &resolver, name, description, level, kind, fmt),
        Commands::RemoveRoutine { id } => {
            commands::cmd_remove_routine(&mut gym, &resolver, &id, fmt)
        }
        Commands::AddExercise {
            routine,
            name,
            muscle_group,
            sets,
            reps,
            weight,
            instructions,
            notes,
        } => commands::cmd_add_exercise(
            &mut gym,
            &resolver,
            &routine,
            name,
            muscle_group,
            sets,
            reps,
            weight,
            instructions,
            notes,
            fmt,
        ),
        Commands::RemoveExercise { routine, exercise } => {
            commands::cmd_remove_exercise(&mut gym, &resolver, &routine, &exercise, fmt)
        }
        Commands::Exercises => commands::cmd_exercises(&gym, &resolver, fmt),
        Commands::MyRoutine => commands::cmd_my_routine(&gym, &resolver, fmt),
        Commands::Progress { student, exercise } => {
            commands::cmd_progress(&gym, &resolver, student, exercise, fmt)
        }
        Commands::LogProgress {
            exercise,
            sets,
            reps,
            weight,
            notes,
        } => commands::cmd_log_progress(&mut gym, &resolver, exercise, sets, reps, weight, notes, fmt),
        Commands::Payments { student, summary } => {
            commands::cmd_payments(&gym, &resolver, student, summary, fmt)
        }
    }
}
