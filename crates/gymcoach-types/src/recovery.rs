//! Recovery toolkit records served by `GET /api/recovery`.
//!
//! Pillars are heterogeneous: each kind carries a different payload. On
//! the wire the pillar kind is the `name` field, so [`Pillar`] is an
//! internally tagged enum rather than a loose map.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// The recovery toolkit: pillars of recovery plus post-workout guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct RecoveryToolkit {
    /// Toolkit heading.
    pub title: String,
    /// Recovery pillars, in display order.
    pub pillars: Vec<Pillar>,
    /// Steps to take right after a session.
    pub post_workout: Vec<String>,
}

/// One pillar of recovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(tag = "name")]
#[ts(export, export_to = "bindings/")]
pub enum Pillar {
    /// Sleep hygiene habits.
    Sleep {
        /// Habits to tick off each night.
        checklist: Vec<String>,
    },
    /// Mobility work.
    Mobility {
        /// Stretches with their hold times.
        stretches: Vec<Stretch>,
    },
    /// Breathing routines for down-regulation.
    Breathwork {
        /// Breathing routines.
        routines: Vec<BreathingRoutine>,
    },
}

impl Pillar {
    /// The pillar's display name, as serialized in the `name` field.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sleep { .. } => "Sleep",
            Self::Mobility { .. } => "Mobility",
            Self::Breathwork { .. } => "Breathwork",
        }
    }
}

/// A mobility stretch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct Stretch {
    /// Stretch name.
    pub name: String,
    /// Hold time as display text (e.g. `60s/side`).
    pub time: String,
}

/// A breathing routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct BreathingRoutine {
    /// Routine name.
    pub name: String,
    /// Count pattern (e.g. `4‑4‑4‑4`), if the routine has a fixed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub pattern: Option<String>,
    /// How long to practise, as display text.
    pub duration: String,
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn pillar_name_is_the_serde_tag() {
        let pillar = Pillar::Mobility {
            stretches: vec![Stretch {
                name: String::from("Thoracic Opener"),
                time: String::from("60s"),
            }],
        };
        let json = serde_json::to_value(&pillar).unwrap_or_default();
        assert_eq!(json["name"], pillar.name());
        assert!(json["stretches"].is_array());
    }

    #[test]
    fn routine_without_pattern_omits_the_field() {
        let routine = BreathingRoutine {
            name: String::from("Nasal breathing"),
            pattern: None,
            duration: String::from("3 min"),
        };
        let json = serde_json::to_value(&routine).unwrap_or_default();
        assert!(json.get("pattern").is_none());
        assert_eq!(json["duration"], "3 min");
    }
}
