//! Property tests for the gym store's cross-entity invariants.

use std::collections::HashSet;

use chrono::Utc;
use proptest::prelude::*;

use gymdesk::{
    Gym, NewRoutine, NewStudent, PaymentStatus, RoutineKind, RoutineLevel,
};

/// One mutation against the store. Indices are mapped onto a small id pool
/// so sequences hit both known and unknown ids.
#[derive(Debug, Clone)]
enum Op {
    AddStudent(u8),
    RemoveStudent(u8),
    SetActive(u8, bool),
    AssignRoutine(u8, u8),
    AddRoutine(u8),
    RemoveRoutine(u8),
    SetPayment(u8, PaymentStatus),
}

fn payment_status() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![
        Just(PaymentStatus::Paid),
        Just(PaymentStatus::Pending),
        Just(PaymentStatus::Overdue),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..12).prop_map(Op::AddStudent),
        (0u8..12).prop_map(Op::RemoveStudent),
        ((0u8..12), any::<bool>()).prop_map(|(n, active)| Op::SetActive(n, active)),
        ((0u8..12), (0u8..7)).prop_map(|(s, r)| Op::AssignRoutine(s, r)),
        (0u8..12).prop_map(Op::AddRoutine),
        (0u8..7).prop_map(Op::RemoveRoutine),
        ((0u8..12), payment_status()).prop_map(|(s, status)| Op::SetPayment(s, status)),
    ]
}

fn apply(gym: &mut Gym, op: &Op) {
    match op {
        Op::AddStudent(n) => {
            gym.add_student(NewStudent {
                name: format!("Nuevo Socio {}", n),
                email: format!("nuevo{}@ejemplo.com", n),
                phone: "600-000-000".to_string(),
                teacher_id: if n % 2 == 0 { "t1" } else { "t2" }.to_string(),
                routine_id: "r1".to_string(),
            });
        }
        Op::RemoveStudent(n) => {
            gym.remove_student(&format!("s{}", n));
        }
        Op::SetActive(n, active) => {
            gym.set_active(&format!("s{}", n), *active);
        }
        Op::AssignRoutine(s, r) => {
            gym.assign_routine(&format!("s{}", s), &format!("r{}", r));
        }
        Op::AddRoutine(n) => {
            gym.add_routine(NewRoutine {
                name: format!("Rutina {}", n),
                description: String::new(),
                level: RoutineLevel::Beginner,
                kind: RoutineKind::Strength,
                created_by: if n % 2 == 0 { "t1" } else { "t2" }.to_string(),
                exercises: Vec::new(),
                schedule: None,
            });
        }
        Op::RemoveRoutine(n) => {
            gym.remove_routine(&format!("r{}", n));
        }
        Op::SetPayment(n, status) => {
            gym.set_payment_status(&format!("s{}", n), *status);
        }
    }
}

fn rosters_mirrored(gym: &Gym) -> bool {
    gym.teachers().iter().all(|t| {
        let expected: HashSet<&str> = gym
            .students()
            .iter()
            .filter(|s| s.teacher_id == t.id)
            .map(|s| s.id.as_str())
            .collect();
        let actual: HashSet<&str> = t.student_ids.iter().map(|id| id.as_str()).collect();
        actual.len() == t.student_ids.len() && expected == actual
    })
}

fn emails_unique(gym: &Gym) -> bool {
    let mut seen = HashSet::new();
    gym.teachers()
        .iter()
        .map(|t| t.email.to_lowercase())
        .chain(gym.students().iter().map(|s| s.email.to_lowercase()))
        .all(|email| seen.insert(email))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After every mutation, teacher rosters mirror the students'
    /// back-references, emails stay unique and student ids never collide.
    #[test]
    fn property_ops_keep_rosters_mirrored(
        ops in proptest::collection::vec(op_strategy(), 0..24),
    ) {
        let mut gym = Gym::with_seed_data(50);
        for op in &ops {
            apply(&mut gym, op);
            prop_assert!(rosters_mirrored(&gym), "roster mirror broken after {:?}", op);
            prop_assert!(emails_unique(&gym), "duplicate email after {:?}", op);
        }
        let ids: HashSet<&str> = gym.students().iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(ids.len(), gym.students().len());
    }

    /// PROPERTY: A successful routine removal leaves no student assigned to
    /// the removed id, whatever happened before it.
    #[test]
    fn property_remove_routine_leaves_no_dangling_assignments(
        ops in proptest::collection::vec(op_strategy(), 0..24),
    ) {
        let mut gym = Gym::with_seed_data(50);
        for op in &ops {
            if let Op::RemoveRoutine(n) = op {
                let id = format!("r{}", n);
                if gym.remove_routine(&id) {
                    prop_assert!(gym
                        .students()
                        .iter()
                        .all(|s| s.routine_id.as_deref() != Some(id.as_str())));
                }
            } else {
                apply(&mut gym, op);
            }
        }
    }

    /// PROPERTY: Marking a student paid settles an existing pending record
    /// or mints exactly one new one, stamped today.
    #[test]
    fn property_mark_paid_settles_or_creates_one_record(
        n in 1u8..=5,
        ops in proptest::collection::vec(op_strategy(), 0..12),
    ) {
        let mut gym = Gym::with_seed_data(50);
        for op in &ops {
            apply(&mut gym, op);
        }
        let id = format!("s{}", n);
        let records_before = gym.payments().len();
        if gym.set_payment_status(&id, PaymentStatus::Paid) {
            let today = Utc::now().date_naive();
            let student = gym.student(&id).expect("updated student still in the store");
            prop_assert_eq!(student.payment_status, PaymentStatus::Paid);
            prop_assert_eq!(student.last_payment_date, Some(today));
            prop_assert!(gym.payments().len() <= records_before + 1);
            prop_assert!(gym
                .payments_of_student(&id)
                .iter()
                .any(|p| p.status == PaymentStatus::Paid && p.date == Some(today)));
        } else {
            prop_assert_eq!(gym.payments().len(), records_before);
        }
    }

    /// PROPERTY: Lookups and mutations never panic on arbitrary id strings.
    #[test]
    fn property_arbitrary_ids_never_panic(id in "(?s).{0,32}") {
        let mut gym = Gym::with_seed_data(50);
        let _ = gym.teacher(&id);
        let _ = gym.student(&id);
        let _ = gym.routine(&id);
        let _ = gym.exercise(&id);
        let _ = gym.user_by_email(&id);
        let _ = gym.credentials(&id);
        let _ = gym.progress_of_student(&id);
        let _ = gym.payments_of_student(&id);
        let _ = gym.remove_student(&id);
        let _ = gym.remove_routine(&id);
        let _ = gym.set_active(&id, true);
        let _ = gym.assign_routine(&id, &id);
        let _ = gym.regenerate_credentials(&id);
        let _ = gym.set_payment_status(&id, PaymentStatus::Paid);
    }
}
