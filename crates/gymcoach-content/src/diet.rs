//! The diet guide: nutrition tips, four sample meals, and hydration.

use gymcoach_types::{DietGuide, Hydration, Meal, WeightLiters};

use crate::owned;

/// Helper to build a [`Meal`].
fn meal(
    name: &str,
    calories: u32,
    macros: (u32, u32, u32),
    ingredients: &[&str],
    prep_time: &str,
) -> Meal {
    let (protein, carbs, fat) = macros;
    Meal {
        name: name.to_owned(),
        calories,
        protein,
        carbs,
        fat,
        ingredients: owned(ingredients),
        prep_time: prep_time.to_owned(),
    }
}

/// Helper to build a hydration table row.
const fn row(weight_lb: u32, liters: f64) -> WeightLiters {
    WeightLiters { weight_lb, liters }
}

/// Build the diet guide served by `GET /api/diet`.
pub fn diet_guide() -> DietGuide {
    DietGuide {
        title: String::from("Smart Diet Guide"),
        tips: owned(&[
            "Aim for 0.7–1g protein per lb of bodyweight",
            "Fill half your plate with veggies",
            "Drink at least 2–3L of water daily",
            "Prioritize whole, minimally processed foods",
            "80/20 rule: be consistent, not perfect",
        ]),
        meals: vec![
            meal(
                "Greek Yogurt Protein Bowl",
                420,
                (38, 45, 10),
                &["Greek yogurt", "berries", "honey", "granola", "chia seeds"],
                "5 min",
            ),
            meal(
                "Chicken, Rice & Greens",
                560,
                (46, 62, 14),
                &["Chicken breast", "jasmine rice", "broccoli", "olive oil"],
                "25 min",
            ),
            meal(
                "Tofu Stir‑Fry",
                510,
                (28, 58, 18),
                &[
                    "Firm tofu",
                    "mixed veggies",
                    "soy sauce",
                    "garlic",
                    "sesame oil",
                ],
                "20 min",
            ),
            meal(
                "Egg & Avocado Toast",
                390,
                (20, 34, 20),
                &["Sourdough", "eggs", "avocado", "chili flakes", "lemon"],
                "10 min",
            ),
        ],
        hydration: Hydration {
            note: String::from("General guidance. Adjust for climate and activity level."),
            liters_per_day_by_weight: vec![row(120, 2.0), row(160, 2.5), row(200, 3.0)],
        },
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn guide_has_four_meals_in_order() {
        let guide = diet_guide();
        let names: Vec<&str> = guide.meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Greek Yogurt Protein Bowl",
                "Chicken, Rice & Greens",
                "Tofu Stir‑Fry",
                "Egg & Avocado Toast",
            ]
        );
    }

    #[test]
    fn macros_match_published_values() {
        let guide = diet_guide();
        let bowl = guide.meals.first();
        assert_eq!(
            bowl.map(|m| (m.calories, m.protein, m.carbs, m.fat)),
            Some((420, 38, 45, 10))
        );
        assert_eq!(bowl.map(|m| m.prep_time.as_str()), Some("5 min"));
    }

    #[test]
    fn hydration_table_is_ordered_by_weight() {
        let guide = diet_guide();
        let weights: Vec<u32> = guide
            .hydration
            .liters_per_day_by_weight
            .iter()
            .map(|r| r.weight_lb)
            .collect();
        assert_eq!(weights, [120, 160, 200]);
    }

    #[test]
    fn meal_time_serializes_under_time_key() {
        let json = serde_json::to_value(diet_guide()).unwrap_or_default();
        assert_eq!(json["meals"][1]["time"], "25 min");
        let row = &json["hydration"]["liters_per_day_by_weight"][1];
        assert_eq!(row["liters"], 2.5);
        assert_eq!(json["tips"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn builder_is_deterministic() {
        assert_eq!(diet_guide(), diet_guide());
    }
}
