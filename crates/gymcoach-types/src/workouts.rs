//! Workout catalog records served by `GET /api/workouts`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// The workout catalog: a titled list of training programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct WorkoutCatalog {
    /// Catalog heading.
    pub title: String,
    /// Programs ordered from easiest to hardest.
    pub programs: Vec<Program>,
}

/// Experience level a program is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub enum Level {
    /// New to structured training.
    Beginner,
    /// Comfortable with the main barbell lifts.
    Intermediate,
    /// High weekly volume and frequency.
    Advanced,
}

/// A training program: a weekly split and its core exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct Program {
    /// Program name.
    pub name: String,
    /// Target experience level.
    pub level: Level,
    /// Training days per week.
    pub days: u32,
    /// Exercises, in the order they are performed.
    pub exercises: Vec<Exercise>,
}

/// A single exercise prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct Exercise {
    /// Exercise name.
    pub name: String,
    /// Number of working sets.
    pub sets: u32,
    /// Rep range or hold duration as display text (`12–15`, `30–45s`).
    pub reps: String,
}
