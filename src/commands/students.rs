//! Student roster commands

use anyhow::{bail, Result};
use serde_json::json;

use gymdesk::{Gym, NewStudent, PaymentStatus, SessionResolver, SessionStore, User};

use crate::presentation::output::{self, OutputFormat};

use super::{require_session, require_teacher};

pub fn cmd_students<S: SessionStore>(
    gym: &Gym,
    resolver: &SessionResolver<S>,
    teacher: Option<String>,
    search: Option<String>,
    fmt: OutputFormat,
) -> Result<()> {
    let me = require_teacher(resolver)?.id.clone();
    let roster_of = teacher.unwrap_or(me);
    let mut students = gym.students_of(&roster_of);
    if let Some(term) = &search {
        let term = term.to_lowercase();
        students.retain(|s| {
            s.name.to_lowercase().contains(&term) || s.email.to_lowercase().contains(&term)
        });
    }
    match fmt {
        OutputFormat::Json => {
            let items: Vec<_> = students.iter().map(|s| output::student_json(s)).collect();
            let doc = json!({
                "event": "data",
                "command": "students",
                "teacher": roster_of,
                "count": items.len(),
                "students": items,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => print!("{}", output::students_table(&students)),
    }
    Ok(())
}

pub fn cmd_student<S: SessionStore>(
    gym: &Gym,
    resolver: &SessionResolver<S>,
    id: &str,
    fmt: OutputFormat,
) -> Result<()> {
    match require_session(resolver)? {
        User::Teacher(_) => {}
        User::Student(me) if me.id == id => {}
        User::Student(_) => bail!("students can only view their own record"),
    }
    let student = match gym.student(id) {
        Some(s) => s,
        None => bail!("unknown student: {}", id),
    };
    let routine = student
        .routine_id
        .as_deref()
        .and_then(|rid| gym.routine(rid));
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "data",
                "command": "student",
                "student": output::student_json(student),
                "routine": routine.map(output::routine_json),
            });
            println!("{}", doc);
        }
        OutputFormat::Text => print!("{}", output::student_detail(student, routine)),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_add_student<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    name: String,
    email: String,
    phone: String,
    teacher: Option<String>,
    routine: String,
    fmt: OutputFormat,
) -> Result<()> {
    let me = require_teacher(resolver)?.id.clone();
    let draft = NewStudent {
        name,
        email,
        phone,
        teacher_id: teacher.unwrap_or(me),
        routine_id: routine,
    };
    if !gym.add_student(draft) {
        bail!("student not added: all fields must be non-empty and the email unused");
    }
    let student = match gym.students().last() {
        Some(s) => s,
        None => bail!("student not added"),
    };
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "add-student",
                "student": output::student_json(student),
                "credentials": {
                    "username": student.credentials.username,
                    "password": student.credentials.password,
                },
            });
            println!("{}", doc);
        }
        OutputFormat::Text => {
            println!("✓ Added {} ({})", student.name, student.id);
            println!("  Username: {}", student.credentials.username);
            println!("  Password: {}", student.credentials.password);
        }
    }
    Ok(())
}

pub fn cmd_remove_student<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    id: &str,
    fmt: OutputFormat,
) -> Result<()> {
    require_teacher(resolver)?;
    let name = match gym.student(id) {
        Some(s) => s.name.clone(),
        None => bail!("unknown student: {}", id),
    };
    if !gym.remove_student(id) {
        bail!("unknown student: {}", id);
    }
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "remove-student",
                "id": id,
                "name": name,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => println!("✓ Removed {} ({})", name, id),
    }
    Ok(())
}

pub fn cmd_set_active<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    id: &str,
    active: bool,
    fmt: OutputFormat,
) -> Result<()> {
    require_teacher(resolver)?;
    if !gym.set_active(id, active) {
        bail!("unknown student: {}", id);
    }
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "set-active",
                "id": id,
                "active": active,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => {
            println!(
                "✓ {} is now {}",
                id,
                if active { "active" } else { "inactive" }
            );
        }
    }
    Ok(())
}

pub fn cmd_assign_routine<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    student: &str,
    routine: &str,
    fmt: OutputFormat,
) -> Result<()> {
    require_teacher(resolver)?;
    if !gym.assign_routine(student, routine) {
        bail!(
            "assignment failed: check the student ({}) and routine ({}) ids",
            student,
            routine
        );
    }
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "assign-routine",
                "student": student,
                "routine": routine,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => println!("✓ Assigned {} to {}", routine, student),
    }
    Ok(())
}

pub fn cmd_mark_paid<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    id: &str,
    status: PaymentStatus,
    fmt: OutputFormat,
) -> Result<()> {
    require_teacher(resolver)?;
    // Marking paid settles the most recent pending record, or creates one;
    // remember which record that will be so it can be shown afterwards.
    let pending_before = gym
        .payments_of_student(id)
        .into_iter()
        .rev()
        .find(|p| p.status == PaymentStatus::Pending)
        .map(|p| p.id.clone());
    if !gym.set_payment_status(id, status) {
        bail!("unknown student: {}", id);
    }
    let student = match gym.student(id) {
        Some(s) => s,
        None => bail!("unknown student: {}", id),
    };
    let payment = match (status, pending_before) {
        (PaymentStatus::Paid, Some(pid)) => gym.payments().iter().find(|p| p.id == pid),
        (PaymentStatus::Paid, None) => gym.payments_of_student(id).pop(),
        _ => None,
    };
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "mark-paid",
                "id": id,
                "payment_status": student.payment_status,
                "last_payment_date": student.last_payment_date,
                "payment": payment.map(output::payment_json),
            });
            println!("{}", doc);
        }
        OutputFormat::Text => {
            match student.last_payment_date {
                Some(date) => println!("✓ {} marked {} (last paid {})", student.name, status, date),
                None => println!("✓ {} marked {}", student.name, status),
            }
            if let Some(p) = payment {
                println!(
                    "  Payment: {} ({}) on {}",
                    p.id,
                    p.amount,
                    output::fmt_date(p.date)
                );
            }
        }
    }
    Ok(())
}

pub fn cmd_credentials<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    student_id: &str,
    regenerate: bool,
    fmt: OutputFormat,
) -> Result<()> {
    require_teacher(resolver)?;
    let credentials = if regenerate {
        match gym.regenerate_credentials(student_id) {
            Some(c) => c,
            None => bail!("unknown student: {}", student_id),
        }
    } else {
        match gym.credentials(student_id) {
            Some(c) => c.clone(),
            None => bail!("unknown student: {}", student_id),
        }
    };
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "credentials",
                "student_id": student_id,
                "regenerated": regenerate,
                "username": credentials.username,
                "password": credentials.password,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => {
            if regenerate {
                println!("✓ Rotated credentials for {}", student_id);
            }
            println!("  Username: {}", credentials.username);
            println!("  Password: {}", credentials.password);
        }
    }
    Ok(())
}
