//! Tag lookup and construction of workouts from raw sensor values.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::errors::WorkoutError;
use crate::models::{ActivityKind, Workout, WorkoutSample};

type Constructor = fn(&[f64]) -> Result<Workout, WorkoutError>;

static ACTIVITY_TABLE: LazyLock<HashMap<&'static str, (ActivityKind, Constructor)>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                ActivityKind::Running.tag(),
                (ActivityKind::Running, running as Constructor),
            ),
            (
                ActivityKind::SportsWalking.tag(),
                (ActivityKind::SportsWalking, sports_walking as Constructor),
            ),
            (
                ActivityKind::Swimming.tag(),
                (ActivityKind::Swimming, swimming as Constructor),
            ),
        ])
    });

impl ActivityKind {
    /// Looks up the kind registered for a sensor tag.
    pub fn from_tag(tag: &str) -> Option<ActivityKind> {
        ACTIVITY_TABLE.get(tag).map(|(kind, _)| *kind)
    }
}

/// Builds a workout by binding `raw_args` positionally to the fields of the
/// kind registered for `tag`.
pub fn create_activity(tag: &str, raw_args: &[f64]) -> Result<Workout, WorkoutError> {
    let Some((kind, construct)) = ACTIVITY_TABLE.get(tag) else {
        warn!(tag, "Rejected unknown activity tag");
        return Err(WorkoutError::UnknownActivityType(tag.to_string()));
    };

    if raw_args.len() != kind.arg_count() {
        return Err(WorkoutError::ArgumentCount {
            tag: kind.tag(),
            expected: kind.arg_count(),
            actual: raw_args.len(),
        });
    }

    let workout = construct(raw_args)?;
    debug!(tag, kind = %kind, "Created workout");
    Ok(workout)
}

fn running(args: &[f64]) -> Result<Workout, WorkoutError> {
    Ok(Workout::Running {
        sample: sample(args)?,
    })
}

fn sports_walking(args: &[f64]) -> Result<Workout, WorkoutError> {
    Ok(Workout::SportsWalking {
        sample: sample(args)?,
        height: args[3],
    })
}

fn swimming(args: &[f64]) -> Result<Workout, WorkoutError> {
    Ok(Workout::Swimming {
        sample: sample(args)?,
        pool_length: args[3],
        laps: whole_number("laps", args[4])?,
    })
}

// Callers have checked the argument count.
fn sample(args: &[f64]) -> Result<WorkoutSample, WorkoutError> {
    Ok(WorkoutSample::new(
        whole_number("action", args[0])?,
        args[1],
        args[2],
    ))
}

fn whole_number(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidArgument { field, value })
    }
}
