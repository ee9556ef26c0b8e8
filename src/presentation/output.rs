//! Output rendering
//!
//! Text views are aligned tables built as strings so handlers can print
//! them in one call; JSON views are field-by-field projections.

use chrono::NaiveDate;
use serde_json::{json, Value};

use gymdesk::{Exercise, Gym, Payment, PaymentStatus, ProgressEntry, Routine, Student, User};

/// Output format selected by the global `--json` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn fmt_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.to_string(),
        None => "-".to_string(),
    }
}

fn fmt_weight(weight: f32) -> String {
    if weight == 0.0 {
        "bodyweight".to_string()
    } else {
        format!("{} kg", weight)
    }
}

pub fn students_table(students: &[&Student]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<5} {:<22} {:<24} {:<9} {:<8} {}\n",
        "ID", "NAME", "EMAIL", "PAYMENT", "ROUTINE", "ACTIVE"
    ));
    for s in students {
        out.push_str(&format!(
            "{:<5} {:<22} {:<24} {:<9} {:<8} {}\n",
            s.id,
            s.name,
            s.email,
            s.payment_status,
            s.routine_id.as_deref().unwrap_or("-"),
            if s.is_active { "yes" } else { "no" },
        ));
    }
    out.push_str(&format!("\n{} students\n", students.len()));
    out
}

pub fn student_detail(student: &Student, routine: Option<&Routine>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", student.name, student.id));
    out.push_str(&format!("  Email:    {}\n", student.email));
    out.push_str(&format!(
        "  Phone:    {}\n",
        student.phone.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!("  Teacher:  {}\n", student.teacher_id));
    match routine {
        Some(r) => out.push_str(&format!("  Routine:  {} ({})\n", r.name, r.id)),
        None => out.push_str("  Routine:  -\n"),
    }
    out.push_str(&format!(
        "  Payment:  {} (last paid {})\n",
        student.payment_status,
        fmt_date(student.last_payment_date)
    ));
    out.push_str(&format!(
        "  Active:   {}\n",
        if student.is_active { "yes" } else { "no" }
    ));
    out
}

pub fn routines_table(routines: &[&Routine]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<5} {:<18} {:<13} {:<12} {:<10} {}\n",
        "ID", "NAME", "LEVEL", "KIND", "EXERCISES", "CREATED-BY"
    ));
    for r in routines {
        out.push_str(&format!(
            "{:<5} {:<18} {:<13} {:<12} {:<10} {}\n",
            r.id,
            r.name,
            r.level,
            r.kind,
            r.exercises.len(),
            r.created_by,
        ));
    }
    out.push_str(&format!("\n{} routines\n", routines.len()));
    out
}

pub fn routine_detail(routine: &Routine) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", routine.name, routine.id));
    if !routine.description.is_empty() {
        out.push_str(&format!("  {}\n", routine.description));
    }
    out.push_str(&format!(
        "  Level: {} · Kind: {} · Created by: {}\n",
        routine.level, routine.kind, routine.created_by
    ));
    if let Some(schedule) = &routine.schedule {
        let rest: Vec<String> = schedule.rest_days.iter().map(|d| d.to_string()).collect();
        out.push_str(&format!(
            "  Schedule: {} days/week, rest days [{}]\n",
            schedule.days_per_week,
            rest.join(", ")
        ));
    }
    out.push('\n');
    if routine.exercises.is_empty() {
        out.push_str("  No exercises yet.\n");
    } else {
        for e in &routine.exercises {
            out.push_str(&format!(
                "  {:<5} {:<24} {:<10} {}x{} @ {}\n",
                e.id,
                e.name,
                e.muscle_group,
                e.sets,
                e.reps,
                fmt_weight(e.weight),
            ));
        }
    }
    out
}

pub fn exercises_table(exercises: &[Exercise]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<5} {:<26} {:<10} {:<8} {}\n",
        "ID", "NAME", "MUSCLE", "SETS", "WEIGHT"
    ));
    for e in exercises {
        out.push_str(&format!(
            "{:<5} {:<26} {:<10} {:<8} {}\n",
            e.id,
            e.name,
            e.muscle_group,
            format!("{}x{}", e.sets, e.reps),
            fmt_weight(e.weight),
        ));
    }
    out.push_str(&format!("\n{} exercises\n", exercises.len()));
    out
}

pub fn progress_table(entries: &[&ProgressEntry], gym: &Gym) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<5} {:<12} {:<10} {:<24} {:<8} {:<12} {}\n",
        "ID", "DATE", "STUDENT", "EXERCISE", "SETS", "WEIGHT", "NOTES"
    ));
    for p in entries {
        let exercise = gym
            .exercise(&p.exercise_id)
            .map(|e| e.name.as_str())
            .unwrap_or(p.exercise_id.as_str());
        out.push_str(&format!(
            "{:<5} {:<12} {:<10} {:<24} {:<8} {:<12} {}\n",
            p.id,
            p.date,
            p.student_id,
            exercise,
            format!("{}x{}", p.sets_completed, p.reps_completed),
            fmt_weight(p.weight_used),
            p.notes.as_deref().unwrap_or("-"),
        ));
    }
    out.push_str(&format!("\n{} entries\n", entries.len()));
    out
}

pub fn payments_table(payments: &[&Payment], gym: &Gym) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<10} {:<22} {:<8} {:<12} {}\n",
        "ID", "STUDENT", "NAME", "AMOUNT", "DATE", "STATUS"
    ));
    for p in payments {
        let name = gym
            .student(&p.student_id)
            .map(|s| s.name.as_str())
            .unwrap_or("-");
        out.push_str(&format!(
            "{:<6} {:<10} {:<22} {:<8} {:<12} {}\n",
            p.id,
            p.student_id,
            name,
            p.amount,
            fmt_date(p.date),
            p.status,
        ));
    }
    out.push_str(&format!("\n{} payments\n", payments.len()));
    out
}

/// Aggregates shown on the payments dashboard card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentTotals {
    pub collected: u32,
    pub paid_count: usize,
    pub pending_students: usize,
    pub overdue_students: usize,
}

pub fn payment_totals(gym: &Gym) -> PaymentTotals {
    let paid: Vec<&Payment> = gym
        .payments()
        .iter()
        .filter(|p| p.status == PaymentStatus::Paid)
        .collect();
    PaymentTotals {
        collected: paid.iter().map(|p| p.amount).sum(),
        paid_count: paid.len(),
        pending_students: gym
            .students()
            .iter()
            .filter(|s| s.payment_status == PaymentStatus::Pending)
            .count(),
        overdue_students: gym
            .students()
            .iter()
            .filter(|s| s.payment_status == PaymentStatus::Overdue)
            .count(),
    }
}

pub fn payments_summary(gym: &Gym) -> String {
    let totals = payment_totals(gym);
    let mut out = String::new();
    out.push_str("💰 Payments\n");
    out.push_str(&format!(
        "  Collected: {} ({} payments)\n",
        totals.collected, totals.paid_count
    ));
    out.push_str(&format!(
        "  Pending:   {} students\n",
        totals.pending_students
    ));
    out.push_str(&format!(
        "  Overdue:   {} students\n",
        totals.overdue_students
    ));
    out
}

pub fn student_json(s: &Student) -> Value {
    json!({
        "id": s.id,
        "name": s.name,
        "email": s.email,
        "phone": s.phone,
        "teacher_id": s.teacher_id,
        "routine_id": s.routine_id,
        "payment_status": s.payment_status,
        "last_payment_date": s.last_payment_date,
        "is_active": s.is_active,
        "username": s.credentials.username,
    })
}

pub fn user_json(user: &User) -> Value {
    match user {
        User::Teacher(t) => json!({
            "role": "teacher",
            "id": t.id,
            "name": t.name,
            "email": t.email,
            "student_ids": t.student_ids,
        }),
        User::Student(s) => json!({
            "role": "student",
            "id": s.id,
            "name": s.name,
            "email": s.email,
            "routine_id": s.routine_id,
            "payment_status": s.payment_status,
        }),
    }
}

pub fn routine_json(r: &Routine) -> Value {
    json!({
        "id": r.id,
        "name": r.name,
        "description": r.description,
        "level": r.level,
        "kind": r.kind,
        "created_by": r.created_by,
        "exercises": r.exercises.iter().map(exercise_json).collect::<Vec<_>>(),
        "schedule": r.schedule,
    })
}

pub fn exercise_json(e: &Exercise) -> Value {
    json!({
        "id": e.id,
        "name": e.name,
        "muscle_group": e.muscle_group,
        "sets": e.sets,
        "reps": e.reps,
        "weight": e.weight,
        "instructions": e.instructions,
        "notes": e.notes,
    })
}

pub fn progress_json(p: &ProgressEntry) -> Value {
    json!({
        "id": p.id,
        "student_id": p.student_id,
        "exercise_id": p.exercise_id,
        "date": p.date,
        "sets_completed": p.sets_completed,
        "reps_completed": p.reps_completed,
        "weight_used": p.weight_used,
        "notes": p.notes,
    })
}

pub fn payment_json(p: &Payment) -> Value {
    json!({
        "id": p.id,
        "student_id": p.student_id,
        "amount": p.amount,
        "date": p.date,
        "status": p.status,
    })
}
