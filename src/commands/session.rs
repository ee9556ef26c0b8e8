//! Session commands: login, logout, whoami

use anyhow::{bail, Result};
use serde_json::json;

use gymdesk::{Gym, SessionResolver, SessionStore, User};

use crate::presentation::output::{self, OutputFormat};

use super::require_session;

pub fn cmd_login<S: SessionStore>(
    gym: &Gym,
    resolver: &mut SessionResolver<S>,
    email: &str,
    password: &str,
    fmt: OutputFormat,
) -> Result<()> {
    if !resolver.login(gym, email, password) {
        bail!("no account matches {}", email);
    }
    if let Some(user) = resolver.current_user() {
        match fmt {
            OutputFormat::Json => {
                let doc = json!({
                    "event": "login",
                    "user": output::user_json(user),
                });
                println!("{}", doc);
            }
            OutputFormat::Text => {
                println!(
                    "✓ Signed in as {} <{}> ({})",
                    user.name(),
                    user.email(),
                    user.role()
                );
            }
        }
    }
    Ok(())
}

pub fn cmd_logout<S: SessionStore>(
    resolver: &mut SessionResolver<S>,
    fmt: OutputFormat,
) -> Result<()> {
    let name = resolver.current_user().map(|u| u.name().to_string());
    resolver.logout();
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "logout",
                "was_signed_in": name.is_some(),
            });
            println!("{}", doc);
        }
        OutputFormat::Text => match name {
            Some(name) => println!("✓ Signed out {}", name),
            None => println!("No active session."),
        },
    }
    Ok(())
}

pub fn cmd_whoami<S: SessionStore>(
    gym: &Gym,
    resolver: &SessionResolver<S>,
    fmt: OutputFormat,
) -> Result<()> {
    let user = require_session(resolver)?;
    if fmt == OutputFormat::Json {
        let doc = json!({
            "event": "data",
            "command": "whoami",
            "user": output::user_json(user),
        });
        println!("{}", doc);
        return Ok(());
    }
    match user {
        User::Teacher(t) => {
            println!("{} <{}> (teacher)", t.name, t.email);
            println!("  Students: {}", gym.students_of(&t.id).len());
            println!("  Routines: {}", gym.routines_created_by(&t.id).len());
        }
        User::Student(s) => {
            println!("{} <{}> (student)", s.name, s.email);
            let current = gym.student(&s.id);
            let routine = current
                .and_then(|c| c.routine_id.as_deref())
                .and_then(|rid| gym.routine(rid));
            match routine {
                Some(r) => println!("  Routine: {} ({})", r.name, r.id),
                None => println!("  Routine: -"),
            }
            if let Some(c) = current {
                println!("  Payment: {}", c.payment_status);
            }
        }
    }
    Ok(())
}
