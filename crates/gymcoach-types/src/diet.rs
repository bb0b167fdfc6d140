//! Diet guide records served by `GET /api/diet`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// The complete diet guide: tips, sample meals, and hydration guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct DietGuide {
    /// Guide heading.
    pub title: String,
    /// General nutrition tips, in display order.
    pub tips: Vec<String>,
    /// Sample meals, in display order.
    pub meals: Vec<Meal>,
    /// Daily water intake guidance.
    pub hydration: Hydration,
}

/// A single sample meal with its macronutrient breakdown.
///
/// Macros are whole grams; calories are kcal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct Meal {
    /// Meal name.
    pub name: String,
    /// Energy in kcal.
    pub calories: u32,
    /// Protein in grams.
    pub protein: u32,
    /// Carbohydrates in grams.
    pub carbs: u32,
    /// Fat in grams.
    pub fat: u32,
    /// Ingredient list, in display order.
    pub ingredients: Vec<String>,
    /// Preparation time as display text (e.g. `5 min`).
    #[serde(rename = "time")]
    pub prep_time: String,
}

/// Daily hydration guidance keyed by bodyweight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct Hydration {
    /// Caveat shown alongside the table.
    pub note: String,
    /// Litres per day for a set of reference bodyweights, lightest first.
    pub liters_per_day_by_weight: Vec<WeightLiters>,
}

/// One row of the hydration table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct WeightLiters {
    /// Bodyweight in pounds.
    pub weight_lb: u32,
    /// Recommended litres of water per day.
    pub liters: f64,
}
