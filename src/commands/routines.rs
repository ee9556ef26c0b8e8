//! Routine and exercise-library commands

use anyhow::{bail, Result};
use serde_json::json;

use gymdesk::{
    Gym, MuscleGroup, NewExercise, NewRoutine, RoutineKind, RoutineLevel, SessionResolver,
    SessionStore, User,
};

use crate::presentation::output::{self, OutputFormat};

use super::{require_session, require_student, require_teacher};

pub fn cmd_routines<S: SessionStore>(
    gym: &Gym,
    resolver: &SessionResolver<S>,
    mine: bool,
    fmt: OutputFormat,
) -> Result<()> {
    let user = require_session(resolver)?;
    let routines = if mine {
        match user {
            User::Teacher(t) => gym.routines_created_by(&t.id),
            User::Student(_) => {
                bail!("--mine is for teachers; students can run `gymdesk my-routine`")
            }
        }
    } else {
        gym.routines().iter().collect()
    };
    match fmt {
        OutputFormat::Json => {
            let items: Vec<_> = routines.iter().map(|r| output::routine_json(r)).collect();
            let doc = json!({
                "event": "data",
                "command": "routines",
                "count": items.len(),
                "routines": items,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => print!("{}", output::routines_table(&routines)),
    }
    Ok(())
}

pub fn cmd_routine<S: SessionStore>(
    gym: &Gym,
    resolver: &SessionResolver<S>,
    id: &str,
    fmt: OutputFormat,
) -> Result<()> {
    require_session(resolver)?;
    let routine = match gym.routine(id) {
        Some(r) => r,
        None => bail!("unknown routine: {}", id),
    };
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "data",
                "command": "routine",
                "routine": output::routine_json(routine),
            });
            println!("{}", doc);
        }
        OutputFormat::Text => print!("{}", output::routine_detail(routine)),
    }
    Ok(())
}

pub fn cmd_add_routine<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    name: String,
    description: String,
    level: RoutineLevel,
    kind: RoutineKind,
    fmt: OutputFormat,
) -> Result<()> {
    let me = require_teacher(resolver)?.id.clone();
    let draft = NewRoutine {
        name,
        description,
        level,
        kind,
        created_by: me,
        exercises: Vec::new(),
        schedule: None,
    };
    if !gym.add_routine(draft) {
        bail!("routine not added: a non-empty name is required");
    }
    let routine = match gym.routines().last() {
        Some(r) => r,
        None => bail!("routine not added"),
    };
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "add-routine",
                "routine": output::routine_json(routine),
            });
            println!("{}", doc);
        }
        OutputFormat::Text => println!("✓ Added {} ({})", routine.name, routine.id),
    }
    Ok(())
}

pub fn cmd_remove_routine<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    id: &str,
    fmt: OutputFormat,
) -> Result<()> {
    require_teacher(resolver)?;
    let name = match gym.routine(id) {
        Some(r) => r.name.clone(),
        None => bail!("unknown routine: {}", id),
    };
    let unassigned = gym
        .students()
        .iter()
        .filter(|s| s.routine_id.as_deref() == Some(id))
        .count();
    if !gym.remove_routine(id) {
        bail!("unknown routine: {}", id);
    }
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "remove-routine",
                "id": id,
                "name": name,
                "students_unassigned": unassigned,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => {
            println!("✓ Removed {} ({})", name, id);
            if unassigned > 0 {
                println!("  Unassigned {} students", unassigned);
            }
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_add_exercise<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    routine: &str,
    name: String,
    muscle_group: MuscleGroup,
    sets: u32,
    reps: u32,
    weight: f32,
    instructions: Option<String>,
    notes: Option<String>,
    fmt: OutputFormat,
) -> Result<()> {
    require_teacher(resolver)?;
    let draft = NewExercise {
        name,
        muscle_group,
        sets,
        reps,
        weight,
        instructions,
        notes,
    };
    if !gym.add_exercise(routine, draft) {
        bail!(
            "exercise not added: check the routine id ({}) and use a non-empty name",
            routine
        );
    }
    if let Some(exercise) = gym.routine(routine).and_then(|r| r.exercises.last()) {
        match fmt {
            OutputFormat::Json => {
                let doc = json!({
                    "event": "add-exercise",
                    "routine": routine,
                    "exercise": output::exercise_json(exercise),
                });
                println!("{}", doc);
            }
            OutputFormat::Text => {
                println!("✓ Added {} ({}) to {}", exercise.name, exercise.id, routine);
            }
        }
    }
    Ok(())
}

pub fn cmd_remove_exercise<S: SessionStore>(
    gym: &mut Gym,
    resolver: &SessionResolver<S>,
    routine: &str,
    exercise: &str,
    fmt: OutputFormat,
) -> Result<()> {
    require_teacher(resolver)?;
    if !gym.remove_exercise(routine, exercise) {
        bail!("unknown routine: {}", routine);
    }
    match fmt {
        OutputFormat::Json => {
            let doc = json!({
                "event": "remove-exercise",
                "routine": routine,
                "exercise": exercise,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => println!("✓ Removed {} from {}", exercise, routine),
    }
    Ok(())
}

pub fn cmd_exercises<S: SessionStore>(
    gym: &Gym,
    resolver: &SessionResolver<S>,
    fmt: OutputFormat,
) -> Result<()> {
    require_session(resolver)?;
    match fmt {
        OutputFormat::Json => {
            let items: Vec<_> = gym.exercises().iter().map(output::exercise_json).collect();
            let doc = json!({
                "event": "data",
                "command": "exercises",
                "count": items.len(),
                "exercises": items,
            });
            println!("{}", doc);
        }
        OutputFormat::Text => print!("{}", output::exercises_table(gym.exercises())),
    }
    Ok(())
}

pub fn cmd_my_routine<S: SessionStore>(
    gym: &Gym,
    resolver: &SessionResolver<S>,
    fmt: OutputFormat,
) -> Result<()> {
    let me = require_student(resolver)?.id.clone();
    let routine = gym
        .student(&me)
        .and_then(|s| s.routine_id.as_deref())
        .and_then(|rid| gym.routine(rid));
    match routine {
        Some(r) => match fmt {
            OutputFormat::Json => {
                let doc = json!({
                    "event": "data",
                    "command": "my-routine",
                    "routine": output::routine_json(r),
                });
                println!("{}", doc);
            }
            OutputFormat::Text => print!("{}", output::routine_detail(r)),
        },
        None => match fmt {
            OutputFormat::Json => {
                let doc = json!({
                    "event": "data",
                    "command": "my-routine",
                    "routine": null,
                });
                println!("{}", doc);
            }
            OutputFormat::Text => println!("No routine assigned."),
        },
    }
    Ok(())
}
