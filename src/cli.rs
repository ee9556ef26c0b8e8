use clap::{Parser, Subcommand};

use gymdesk::{MuscleGroup, PaymentStatus, RoutineKind, RoutineLevel};

/// Gymdesk - gym management dashboard for the command line
#[derive(Parser, Debug)]
#[command(name = "gymdesk")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'gymdesk login <email>' to start a session.")]
pub struct Cli {
    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with an account email and persist the session
    Login {
        /// Account email (case-insensitive)
        email: String,

        /// Account password (accepted as-is; identity comes from the email)
        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Clear the persisted session
    Logout,

    /// Show who is signed in
    Whoami,

    /// List students on a roster (teachers)
    Students {
        /// Another teacher's id instead of your own roster
        #[arg(long)]
        teacher: Option<String>,

        /// Filter by name or email substring
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one student in detail
    Student {
        /// Student id, e.g. s1
        id: String,
    },

    /// Register a new student and print their generated credentials (teachers)
    AddStudent {
        /// Full name
        #[arg(long)]
        name: String,

        /// Contact email (must be unused)
        #[arg(long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Owning teacher id (defaults to the signed-in teacher)
        #[arg(long)]
        teacher: Option<String>,

        /// Initial routine id
        #[arg(long)]
        routine: String,
    },

    /// Remove a student and their roster entry (teachers)
    RemoveStudent {
        /// Student id
        id: String,
    },

    /// Activate or deactivate a student account (teachers)
    SetActive {
        /// Student id
        id: String,

        /// true or false
        active: bool,
    },

    /// Assign a routine to a student (teachers)
    AssignRoutine {
        /// Student id
        student: String,

        /// Routine id
        routine: String,
    },

    /// Update a student's payment status (teachers)
    MarkPaid {
        /// Student id
        id: String,

        /// Target status
        #[arg(long, value_enum, default_value_t = PaymentStatus::Paid)]
        status: PaymentStatus,
    },

    /// Show or rotate a student's sign-in credentials (teachers)
    Credentials {
        /// Student id
        student_id: String,

        /// Generate a fresh password
        #[arg(long)]
        regenerate: bool,
    },

    /// List workout routines
    Routines {
        /// Only routines you created (teachers)
        #[arg(long)]
        mine: bool,
    },

    /// Show one routine with its exercises and schedule
    Routine {
        /// Routine id, e.g. r1
        id: String,
    },

    /// Create a new routine (teachers)
    AddRoutine {
        /// Routine name
        #[arg(long)]
        name: String,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,

        /// Difficulty level
        #[arg(long, value_enum, default_value_t = RoutineLevel::Beginner)]
        level: RoutineLevel,

        /// Training goal
        #[arg(long, value_enum, default_value_t = RoutineKind::Strength)]
        kind: RoutineKind,
    },

    /// Delete a routine and unassign its students (teachers)
    RemoveRoutine {
        /// Routine id
        id: String,
    },

    /// Add an exercise to a routine (teachers)
    AddExercise {
        /// Routine id
        routine: String,

        /// Exercise name
        #[arg(long)]
        name: String,

        /// Primary muscle group
        #[arg(long, value_enum)]
        muscle_group: MuscleGroup,

        /// Number of sets
        #[arg(long, default_value_t = 3)]
        sets: u32,

        /// Repetitions per set
        #[arg(long, default_value_t = 10)]
        reps: u32,

        /// Working weight in kg (0 for bodyweight)
        #[arg(long, default_value_t = 0.0)]
        weight: f32,

        /// How to perform the exercise
        #[arg(long)]
        instructions: Option<String>,

        /// Coaching notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove an exercise from a routine (teachers)
    RemoveExercise {
        /// Routine id
        routine: String,

        /// Exercise id
        exercise: String,
    },

    /// List the exercise library
    Exercises,

    /// Show your assigned routine (students)
    MyRoutine,

    /// Show progress entries, oldest first
    Progress {
        /// Student id (teachers; students always see their own)
        #[arg(long)]
        student: Option<String>,

        /// Filter by exercise id
        #[arg(long)]
        exercise: Option<String>,
    },

    /// Record a workout result for today (students)
    LogProgress {
        /// Exercise id
        #[arg(long)]
        exercise: String,

        /// Sets completed
        #[arg(long)]
        sets: u32,

        /// Repetitions per set
        #[arg(long)]
        reps: u32,

        /// Weight used in kg
        #[arg(long, default_value_t = 0.0)]
        weight: f32,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show payment records (teachers)
    Payments {
        /// Filter by student id
        #[arg(long)]
        student: Option<String>,

        /// Print collected/pending/overdue aggregates instead of records
        #[arg(long)]
        summary: bool,
    },
}
