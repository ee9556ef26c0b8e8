//! Test fixtures - seed accounts and config snippets the tests rely on.

/// Teacher Carlos Pérez (t1), roster s1-s3
pub const TEACHER_CARLOS: &str = "carlos@gimnasio.com";

/// Teacher Ana López (t2), roster s4-s5
pub const TEACHER_ANA: &str = "ana@gimnasio.com";

/// Student Miguel Rodríguez (s1, routine r1, paid)
pub const STUDENT_MIGUEL: &str = "miguel@ejemplo.com";

/// Student Laura Sánchez (s2, routine r2, pending)
pub const STUDENT_LAURA: &str = "laura@ejemplo.com";

/// Student Elena García (s4, routine r2, pending, never paid)
pub const STUDENT_ELENA: &str = "elena@ejemplo.com";

/// Config that raises the fee stamped on newly created payment records
pub const FEE_75_CONFIG: &str = "[billing]\nmonthly_fee = 75\n";

/// Config with a misspelled key that should draw a suggestion
pub const TYPO_CONFIG: &str = "[billing]\nmontly_fee = 60\n";
