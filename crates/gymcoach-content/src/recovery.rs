//! The recovery toolkit: sleep, mobility, and breathwork.

use gymcoach_types::{BreathingRoutine, Pillar, RecoveryToolkit, Stretch};

use crate::owned;

/// Helper to build a [`Stretch`].
fn stretch(name: &str, time: &str) -> Stretch {
    Stretch {
        name: name.to_owned(),
        time: time.to_owned(),
    }
}

/// Helper to build a [`BreathingRoutine`].
fn routine(name: &str, pattern: Option<&str>, duration: &str) -> BreathingRoutine {
    BreathingRoutine {
        name: name.to_owned(),
        pattern: pattern.map(str::to_owned),
        duration: duration.to_owned(),
    }
}

/// Build the recovery toolkit served by `GET /api/recovery`.
pub fn recovery_toolkit() -> RecoveryToolkit {
    RecoveryToolkit {
        title: String::from("Recovery Toolkit"),
        pillars: vec![
            Pillar::Sleep {
                checklist: owned(&[
                    "7–9 hours in a cool, dark room",
                    "Fixed wake time",
                    "No screens 60 minutes before bed",
                    "Limit caffeine after noon",
                ]),
            },
            Pillar::Mobility {
                stretches: vec![
                    stretch("Hip Flexor Stretch", "60s/side"),
                    stretch("Thoracic Opener", "60s"),
                    stretch("Hamstring Stretch", "60s/side"),
                ],
            },
            Pillar::Breathwork {
                routines: vec![
                    routine("Box Breathing", Some("4‑4‑4‑4"), "5 min"),
                    routine("Nasal 5‑second inhale / slow exhale", None, "3 min"),
                ],
            },
        ],
        post_workout: owned(&[
            "Light walk 5–10 minutes",
            "Protein + carbs within 1–2 hours",
            "Hydrate and add electrolytes if needed",
        ]),
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn pillars_are_sleep_mobility_breathwork() {
        let toolkit = recovery_toolkit();
        let names: Vec<&str> = toolkit.pillars.iter().map(Pillar::name).collect();
        assert_eq!(names, ["Sleep", "Mobility", "Breathwork"]);
    }

    #[test]
    fn each_pillar_serializes_its_own_payload() {
        let json = serde_json::to_value(recovery_toolkit()).unwrap_or_default();
        assert_eq!(json["pillars"][0]["checklist"][1], "Fixed wake time");
        assert_eq!(json["pillars"][1]["stretches"][0]["time"], "60s/side");
        assert_eq!(json["pillars"][2]["routines"][0]["pattern"], "4‑4‑4‑4");
        assert!(json["pillars"][2]["routines"][1].get("pattern").is_none());
        assert_eq!(json["post_workout"].as_array().map(Vec::len), Some(3));
    }
}
