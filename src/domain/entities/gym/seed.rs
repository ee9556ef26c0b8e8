//! Seed dataset loaded at process start

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::entities::{Exercise, Gym, Payment, ProgressEntry, Routine, Student, Teacher};
use crate::domain::value_objects::{
    Credentials, MuscleGroup, PaymentStatus, RoutineKind, RoutineLevel, WeeklySchedule,
};

impl Gym {
    /// A store populated with the demo gym: two teachers, five students,
    /// ten library exercises, three routines, and the matching progress and
    /// payment history. Id counters continue past the seeded records.
    pub fn with_seed_data(monthly_fee: u32) -> Self {
        let exercises = exercise_library();

        let routines = vec![
            Routine {
                id: "r1".to_string(),
                name: "Fuerza Superior".to_string(),
                description:
                    "Rutina enfocada en desarrollar la fuerza de la parte superior del cuerpo"
                        .to_string(),
                level: RoutineLevel::Intermediate,
                kind: RoutineKind::Strength,
                created_by: "t1".to_string(),
                exercises: pick(&exercises, &["ex2", "ex4", "ex5", "ex6", "ex10"]),
                schedule: Some(WeeklySchedule::new(3, [0, 3, 6])),
            },
            Routine {
                id: "r2".to_string(),
                name: "Fuerza Inferior".to_string(),
                description:
                    "Rutina enfocada en desarrollar la fuerza de la parte inferior del cuerpo"
                        .to_string(),
                level: RoutineLevel::Beginner,
                kind: RoutineKind::Strength,
                created_by: "t2".to_string(),
                exercises: pick(&exercises, &["ex1", "ex3", "ex7", "ex8"]),
                schedule: None,
            },
            Routine {
                id: "r3".to_string(),
                name: "Full Body".to_string(),
                description: "Rutina completa para trabajar todo el cuerpo".to_string(),
                level: RoutineLevel::Beginner,
                kind: RoutineKind::Endurance,
                created_by: "t1".to_string(),
                exercises: pick(&exercises, &["ex1", "ex2", "ex9", "ex5", "ex10"]),
                schedule: None,
            },
        ];

        let teachers = vec![
            teacher("t1", "Carlos Pérez", "carlos@gimnasio.com", &["s1", "s2", "s3"]),
            teacher("t2", "Ana López", "ana@gimnasio.com", &["s4", "s5"]),
        ];

        let students = vec![
            student(
                "s1",
                "Miguel Rodríguez",
                "miguel@ejemplo.com",
                "t1",
                "r1",
                PaymentStatus::Paid,
                Some(date(2023, 6, 15)),
            ),
            student(
                "s2",
                "Laura Sánchez",
                "laura@ejemplo.com",
                "t1",
                "r2",
                PaymentStatus::Pending,
                Some(date(2023, 5, 15)),
            ),
            student(
                "s3",
                "Javier Martínez",
                "javier@ejemplo.com",
                "t1",
                "r3",
                PaymentStatus::Paid,
                Some(date(2023, 6, 10)),
            ),
            student(
                "s4",
                "Elena García",
                "elena@ejemplo.com",
                "t2",
                "r2",
                PaymentStatus::Pending,
                None,
            ),
            student(
                "s5",
                "Roberto Fernández",
                "roberto@ejemplo.com",
                "t2",
                "r1",
                PaymentStatus::Paid,
                Some(date(2023, 6, 20)),
            ),
        ];

        let progress = vec![
            entry("p1", "s1", "ex2", date(2023, 6, 1), 4, 8, 60.0, "Buena forma"),
            entry("p2", "s1", "ex2", date(2023, 6, 8), 4, 8, 65.0, "Aumenté peso"),
            entry("p3", "s1", "ex2", date(2023, 6, 15), 4, 8, 70.0, "Difícil pero completado"),
            entry("p4", "s2", "ex1", date(2023, 5, 28), 3, 12, 30.0, "Primera vez con este peso"),
            entry("p5", "s2", "ex1", date(2023, 6, 5), 3, 12, 35.0, "Mejorando la técnica"),
        ];

        let payments = vec![
            payment("pay1", "s1", Some(date(2023, 6, 15)), PaymentStatus::Paid),
            payment("pay2", "s2", Some(date(2023, 5, 15)), PaymentStatus::Paid),
            payment("pay3", "s3", Some(date(2023, 6, 10)), PaymentStatus::Paid),
            payment("pay4", "s4", None, PaymentStatus::Pending),
            payment("pay5", "s5", Some(date(2023, 6, 20)), PaymentStatus::Paid),
        ];

        debug!(
            "seeded store: {} teachers, {} students, {} routines, {} exercises",
            teachers.len(),
            students.len(),
            routines.len(),
            exercises.len()
        );

        Self {
            teachers,
            students,
            routines,
            exercises,
            progress,
            payments,
            monthly_fee,
            next_student_id: 6,
            next_routine_id: 4,
            next_exercise_id: 11,
            next_progress_id: 6,
            next_payment_id: 6,
        }
    }
}

fn exercise_library() -> Vec<Exercise> {
    vec![
        exercise("ex1", "Sentadillas", MuscleGroup::Legs, 3, 12, 30.0),
        exercise("ex2", "Press de banca", MuscleGroup::Chest, 4, 8, 60.0),
        exercise("ex3", "Peso muerto", MuscleGroup::Back, 3, 10, 80.0),
        exercise("ex4", "Dominadas", MuscleGroup::Back, 3, 8, 0.0),
        exercise("ex5", "Curl de bíceps", MuscleGroup::Arms, 3, 12, 15.0),
        exercise("ex6", "Extensiones de tríceps", MuscleGroup::Arms, 3, 12, 20.0),
        exercise("ex7", "Zancadas", MuscleGroup::Legs, 3, 10, 20.0),
        exercise("ex8", "Prensa de piernas", MuscleGroup::Legs, 4, 12, 120.0),
        exercise("ex9", "Remo", MuscleGroup::Back, 3, 12, 40.0),
        exercise("ex10", "Press militar", MuscleGroup::Shoulders, 3, 10, 30.0),
    ]
}

/// Copies of the named library exercises, in the given order
fn pick(library: &[Exercise], ids: &[&str]) -> Vec<Exercise> {
    ids.iter()
        .filter_map(|id| library.iter().find(|e| e.id == *id))
        .cloned()
        .collect()
}

// Fixed seed dates are always valid
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn exercise(
    id: &str,
    name: &str,
    muscle_group: MuscleGroup,
    sets: u32,
    reps: u32,
    weight: f32,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        muscle_group,
        sets,
        reps,
        weight,
        instructions: None,
        notes: None,
    }
}

fn teacher(id: &str, name: &str, email: &str, student_ids: &[&str]) -> Teacher {
    Teacher {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        student_ids: student_ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn student(
    id: &str,
    name: &str,
    email: &str,
    teacher_id: &str,
    routine_id: &str,
    payment_status: PaymentStatus,
    last_payment_date: Option<NaiveDate>,
) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        teacher_id: teacher_id.to_string(),
        routine_id: Some(routine_id.to_string()),
        payment_status,
        last_payment_date,
        is_active: true,
        credentials: Credentials::generate(name),
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    student_id: &str,
    exercise_id: &str,
    date: NaiveDate,
    sets_completed: u32,
    reps_completed: u32,
    weight_used: f32,
    notes: &str,
) -> ProgressEntry {
    ProgressEntry {
        id: id.to_string(),
        student_id: student_id.to_string(),
        exercise_id: exercise_id.to_string(),
        date,
        sets_completed,
        reps_completed,
        weight_used,
        notes: Some(notes.to_string()),
    }
}

fn payment(
    id: &str,
    student_id: &str,
    date: Option<NaiveDate>,
    status: PaymentStatus,
) -> Payment {
    Payment {
        id: id.to_string(),
        student_id: student_id.to_string(),
        amount: 50,
        date,
        status,
    }
}
