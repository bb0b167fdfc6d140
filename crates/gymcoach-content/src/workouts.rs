//! The workout catalog: three programs of increasing difficulty.

use gymcoach_types::{Exercise, Level, Program, WorkoutCatalog};

/// Helper to build an [`Exercise`].
fn ex(name: &str, sets: u32, reps: &str) -> Exercise {
    Exercise {
        name: name.to_owned(),
        sets,
        reps: reps.to_owned(),
    }
}

/// Helper to build a [`Program`].
fn program(name: &str, level: Level, days: u32, exercises: Vec<Exercise>) -> Program {
    Program {
        name: name.to_owned(),
        level,
        days,
        exercises,
    }
}

/// Build the workout catalog served by `GET /api/workouts`.
pub fn workout_catalog() -> WorkoutCatalog {
    WorkoutCatalog {
        title: String::from("Workouts"),
        programs: vec![
            program(
                "Full‑Body Starter",
                Level::Beginner,
                3,
                vec![
                    ex("Bodyweight Squat", 3, "12–15"),
                    ex("Push‑ups", 3, "8–12"),
                    ex("Bent‑over Dumbbell Row", 3, "10–12"),
                    ex("Glute Bridge", 3, "12–15"),
                    ex("Plank", 3, "30–45s"),
                ],
            ),
            program(
                "Upper / Lower Split",
                Level::Intermediate,
                4,
                vec![
                    ex("Back Squat", 4, "5–8"),
                    ex("Romanian Deadlift", 3, "8–10"),
                    ex("Bench Press", 4, "5–8"),
                    ex("Pull‑ups", 3, "6–10"),
                    ex("Hanging Leg Raise", 3, "10–12"),
                ],
            ),
            program(
                "Push / Pull / Legs",
                Level::Advanced,
                6,
                vec![
                    ex("Overhead Press", 4, "6–10"),
                    ex("Weighted Pull‑ups", 4, "5–8"),
                    ex("Barbell Row", 4, "6–10"),
                    ex("Deadlift", 3, "3–5"),
                    ex("Front Squat", 4, "6–8"),
                ],
            ),
        ],
    }
}
