//! Gym domain store
//!
//! Single source of truth for every entity collection. All reads hand out
//! references or clones; all writes go through methods that keep the
//! cross-entity invariants intact (roster mirrors, routine references,
//! payment reconciliation). Validation failures return `false`/`None` and
//! are logged at `warn`; callers surface their own message.

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::entities::{
    Exercise, NewExercise, NewProgressEntry, NewRoutine, NewStudent, Payment, ProgressEntry,
    Routine, Student, Teacher, User,
};
use crate::domain::value_objects::{Credentials, PaymentStatus};

mod seed;

#[derive(Debug, Clone, PartialEq)]
pub struct Gym {
    teachers: Vec<Teacher>,
    students: Vec<Student>,
    routines: Vec<Routine>,
    exercises: Vec<Exercise>,
    progress: Vec<ProgressEntry>,
    payments: Vec<Payment>,
    /// Amount stamped on auto-created payment records
    monthly_fee: u32,
    next_student_id: u32,
    next_routine_id: u32,
    next_exercise_id: u32,
    next_progress_id: u32,
    next_payment_id: u32,
}

impl Gym {
    /// An empty store. Ids start at 1 for every collection.
    pub fn new(monthly_fee: u32) -> Self {
        Self {
            teachers: Vec::new(),
            students: Vec::new(),
            routines: Vec::new(),
            exercises: Vec::new(),
            progress: Vec::new(),
            payments: Vec::new(),
            monthly_fee,
            next_student_id: 1,
            next_routine_id: 1,
            next_exercise_id: 1,
            next_progress_id: 1,
            next_payment_id: 1,
        }
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Every student across all teachers
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn students_of(&self, teacher_id: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.teacher_id == teacher_id)
            .collect()
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn routine(&self, id: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.id == id)
    }

    pub fn routines_created_by(&self, teacher_id: &str) -> Vec<&Routine> {
        self.routines
            .iter()
            .filter(|r| r.created_by == teacher_id)
            .collect()
    }

    /// The shared exercise library (routine lists hold their own copies)
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn progress(&self) -> &[ProgressEntry] {
        &self.progress
    }

    pub fn progress_of_student(&self, student_id: &str) -> Vec<&ProgressEntry> {
        self.progress
            .iter()
            .filter(|p| p.student_id == student_id)
            .collect()
    }

    pub fn progress_for_exercise(&self, exercise_id: &str) -> Vec<&ProgressEntry> {
        self.progress
            .iter()
            .filter(|p| p.exercise_id == exercise_id)
            .collect()
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn payments_of_student(&self, student_id: &str) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|p| p.student_id == student_id)
            .collect()
    }

    /// Resolve an email to a role-tagged user, scanning teachers then
    /// students. Case-insensitive; this is the login lookup.
    pub fn user_by_email(&self, email: &str) -> Option<User> {
        let needle = email.to_lowercase();
        if let Some(teacher) = self.teachers.iter().find(|t| t.email.to_lowercase() == needle) {
            return Some(User::Teacher(teacher.clone()));
        }
        self.students
            .iter()
            .find(|s| s.email.to_lowercase() == needle)
            .map(|s| User::Student(s.clone()))
    }

    /// Enroll a student. Rejects blank fields and emails already in use by
    /// any user. Generates credentials and mirrors the id into the owning
    /// teacher's roster; a nonexistent teacher or routine id is accepted
    /// as-is (no referential check on the draft).
    pub fn add_student(&mut self, draft: NewStudent) -> bool {
        if is_blank(&draft.name)
            || is_blank(&draft.email)
            || is_blank(&draft.phone)
            || is_blank(&draft.teacher_id)
            || is_blank(&draft.routine_id)
        {
            warn!("add student rejected: missing required field");
            return false;
        }
        if self.user_by_email(&draft.email).is_some() {
            warn!("add student rejected: email already in use: {}", draft.email);
            return false;
        }

        let id = format!("s{}", self.next_student_id);
        self.next_student_id += 1;
        if let Some(teacher) = self.teachers.iter_mut().find(|t| t.id == draft.teacher_id) {
            teacher.student_ids.push(id.clone());
        }
        let credentials = Credentials::generate(&draft.name);
        self.students.push(Student {
            id,
            name: draft.name,
            email: draft.email,
            phone: Some(draft.phone),
            teacher_id: draft.teacher_id,
            routine_id: Some(draft.routine_id),
            payment_status: PaymentStatus::Pending,
            last_payment_date: None,
            is_active: true,
            credentials,
        });
        true
    }

    /// Remove a student and its roster entry. `false` for an unknown id.
    pub fn remove_student(&mut self, student_id: &str) -> bool {
        let Some(index) = self.students.iter().position(|s| s.id == student_id) else {
            warn!("remove student failed: unknown id: {}", student_id);
            return false;
        };
        let student = self.students.remove(index);
        if let Some(teacher) = self.teachers.iter_mut().find(|t| t.id == student.teacher_id) {
            teacher.student_ids.retain(|id| id != student_id);
        }
        true
    }

    /// Set a student's payment status. Marking paid stamps today's date and
    /// reconciles the payment records: the most recent pending payment for
    /// the student is settled, or a new paid record is created at the
    /// monthly fee. Any other status clears the last-payment date.
    pub fn set_payment_status(&mut self, student_id: &str, status: PaymentStatus) -> bool {
        let Some(student) = self.students.iter_mut().find(|s| s.id == student_id) else {
            warn!("payment update failed: unknown student: {}", student_id);
            return false;
        };
        student.payment_status = status;
        if status == PaymentStatus::Paid {
            let today = Utc::now().date_naive();
            student.last_payment_date = Some(today);
            let pending = self
                .payments
                .iter()
                .rposition(|p| p.student_id == student_id && p.status == PaymentStatus::Pending);
            match pending {
                Some(index) => {
                    let payment = &mut self.payments[index];
                    payment.status = PaymentStatus::Paid;
                    payment.date = Some(today);
                }
                None => {
                    let id = format!("pay{}", self.next_payment_id);
                    self.next_payment_id += 1;
                    self.payments.push(Payment {
                        id,
                        student_id: student_id.to_string(),
                        amount: self.monthly_fee,
                        date: Some(today),
                        status: PaymentStatus::Paid,
                    });
                }
            }
        } else {
            student.last_payment_date = None;
        }
        true
    }

    /// Assign a routine to a student. Fails without mutating if either id
    /// is unknown.
    pub fn assign_routine(&mut self, student_id: &str, routine_id: &str) -> bool {
        if !self.routines.iter().any(|r| r.id == routine_id) {
            warn!("routine assignment failed: unknown routine: {}", routine_id);
            return false;
        }
        let Some(student) = self.students.iter_mut().find(|s| s.id == student_id) else {
            warn!("routine assignment failed: unknown student: {}", student_id);
            return false;
        };
        student.routine_id = Some(routine_id.to_string());
        true
    }

    pub fn set_active(&mut self, student_id: &str, active: bool) -> bool {
        let Some(student) = self.students.iter_mut().find(|s| s.id == student_id) else {
            warn!("active flag update failed: unknown student: {}", student_id);
            return false;
        };
        student.is_active = active;
        true
    }

    /// Replace a student's credential pair with a freshly generated one and
    /// return it. The username is derived from the student's current name.
    pub fn regenerate_credentials(&mut self, student_id: &str) -> Option<Credentials> {
        let Some(student) = self.students.iter_mut().find(|s| s.id == student_id) else {
            warn!("credential regeneration failed: unknown student: {}", student_id);
            return None;
        };
        let credentials = Credentials::generate(&student.name);
        student.credentials = credentials.clone();
        Some(credentials)
    }

    pub fn credentials(&self, student_id: &str) -> Option<&Credentials> {
        self.students
            .iter()
            .find(|s| s.id == student_id)
            .map(|s| &s.credentials)
    }

    /// Add a routine. Rejects a blank name or creator id.
    pub fn add_routine(&mut self, draft: NewRoutine) -> bool {
        if is_blank(&draft.name) || is_blank(&draft.created_by) {
            warn!("add routine rejected: missing required field");
            return false;
        }
        let id = format!("r{}", self.next_routine_id);
        self.next_routine_id += 1;
        self.routines.push(Routine {
            id,
            name: draft.name,
            description: draft.description,
            level: draft.level,
            kind: draft.kind,
            created_by: draft.created_by,
            exercises: draft.exercises,
            schedule: draft.schedule,
        });
        true
    }

    /// Remove a routine and unassign every student that referenced it.
    pub fn remove_routine(&mut self, routine_id: &str) -> bool {
        let len_before = self.routines.len();
        self.routines.retain(|r| r.id != routine_id);
        if self.routines.len() == len_before {
            warn!("remove routine failed: unknown id: {}", routine_id);
            return false;
        }
        for student in &mut self.students {
            if student.routine_id.as_deref() == Some(routine_id) {
                student.routine_id = None;
            }
        }
        true
    }

    /// Append an exercise to a routine's list. Fails on an unknown routine
    /// or a blank exercise name.
    pub fn add_exercise(&mut self, routine_id: &str, draft: NewExercise) -> bool {
        let Some(routine) = self.routines.iter_mut().find(|r| r.id == routine_id) else {
            warn!("add exercise failed: unknown routine: {}", routine_id);
            return false;
        };
        if is_blank(&draft.name) {
            warn!("add exercise rejected: missing exercise name");
            return false;
        }
        let id = format!("ex{}", self.next_exercise_id);
        self.next_exercise_id += 1;
        routine.exercises.push(Exercise {
            id,
            name: draft.name,
            muscle_group: draft.muscle_group,
            sets: draft.sets,
            reps: draft.reps,
            weight: draft.weight,
            instructions: draft.instructions,
            notes: draft.notes,
        });
        true
    }

    /// Remove an exercise from a routine's list. An unknown routine fails;
    /// an unknown exercise id within a known routine is a no-op success.
    pub fn remove_exercise(&mut self, routine_id: &str, exercise_id: &str) -> bool {
        let Some(routine) = self.routines.iter_mut().find(|r| r.id == routine_id) else {
            warn!("remove exercise failed: unknown routine: {}", routine_id);
            return false;
        };
        routine.exercises.retain(|e| e.id != exercise_id);
        true
    }

    /// Append a progress entry and return the stored record. `None` when
    /// the student id references no one.
    pub fn add_progress(&mut self, draft: NewProgressEntry) -> Option<ProgressEntry> {
        if !self.students.iter().any(|s| s.id == draft.student_id) {
            warn!("progress entry rejected: unknown student: {}", draft.student_id);
            return None;
        }
        let id = format!("p{}", self.next_progress_id);
        self.next_progress_id += 1;
        let entry = ProgressEntry {
            id,
            student_id: draft.student_id,
            exercise_id: draft.exercise_id,
            date: draft.date,
            sets_completed: draft.sets_completed,
            reps_completed: draft.reps_completed,
            weight_used: draft.weight_used,
            notes: draft.notes,
        };
        self.progress.push(entry.clone());
        debug!("progress entry {} logged for {}", entry.id, entry.student_id);
        Some(entry)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
