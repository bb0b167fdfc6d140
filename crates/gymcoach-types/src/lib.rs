//! Shared response types for the Gym Coach API.
//!
//! Every body the API returns is a concrete, typed record defined here.
//! Types flow downstream to `TypeScript` via `ts-rs` for the web client.
//!
//! # Modules
//!
//! - [`diet`] -- Diet guide, meals, and hydration guidance
//! - [`workouts`] -- Workout catalog, programs, and exercises
//! - [`recovery`] -- Recovery toolkit and its pillars
//! - [`diagnostics`] -- Diagnostic report returned by the database probe

pub mod diagnostics;
pub mod diet;
pub mod recovery;
pub mod workouts;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

// Re-export all public types at crate root for convenience.
pub use diagnostics::{ConnectionStatus, DatabaseStatus, DiagnosticReport, EnvFlag};
pub use diet::{DietGuide, Hydration, Meal, WeightLiters};
pub use recovery::{BreathingRoutine, Pillar, RecoveryToolkit, Stretch};
pub use workouts::{Exercise, Level, Program, WorkoutCatalog};

/// A plain `{"message": ...}` body used by the liveness and greeting routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct Message {
    /// Human-readable message text.
    pub message: String,
}

impl Message {
    /// Build a message body from any string-like value.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
