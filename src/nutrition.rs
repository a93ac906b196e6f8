//! Nutrition calculator
//!
//! Independent pure formulas: Mifflin-St Jeor BMR, a training-load derived
//! activity multiplier, TDEE, a slow-cut calorie target and a macro split
//! with a run-day carb bump. Takes scalars derived from settings and the
//! weekly plan; no dependency on the generator's internals.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Basal metabolic rate (kcal/day), Mifflin-St Jeor
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: i64, sex: Sex) -> f64 {
    let common = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Sex::Male => common + 5.0,
        Sex::Female => common - 161.0,
    }
}

/// Activity multiplier from weekly training load. Strength sessions count
/// half a unit each, swims 0.3.
pub fn activity_multiplier(weekly_run_km: f64, strength_sessions: i64, swim_sessions: i64) -> f64 {
    let total_load = weekly_run_km + strength_sessions as f64 * 0.5 + swim_sessions as f64 * 0.3;

    if total_load < 20.0 {
        1.4 // Sedentary
    } else if total_load < 40.0 {
        1.6 // Lightly active
    } else if total_load < 60.0 {
        1.75 // Moderately active
    } else if total_load < 80.0 {
        1.9 // Very active
    } else {
        2.1 // Extremely active
    }
}

/// Total daily energy expenditure (kcal/day)
pub fn tdee(bmr: f64, activity_multiplier: f64) -> f64 {
    bmr * activity_multiplier
}

/// Daily calorie target: a 400 kcal slow-cut deficit while above goal
/// weight, maintenance otherwise.
pub fn calorie_target(tdee: f64, goal_weight_kg: f64, current_weight_kg: f64) -> i64 {
    let deficit = if current_weight_kg > goal_weight_kg {
        400.0
    } else {
        0.0
    };
    (tdee - deficit).round() as i64
}

/// Daily macro split in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fats_g: i64,
    pub calories: i64,
}

/// Split calories into macros: protein at 1.8 g/kg, fat at 25% of calories,
/// carbs from the remainder. Run days add 50 g of carbs on top (and the
/// 200 kcal that come with them).
pub fn macros(calories: i64, weight_kg: f64, is_run_day: bool) -> MacroSplit {
    let protein_g = (weight_kg * 1.8).round() as i64;
    let protein_cal = protein_g * 4;

    let fats_g = (calories as f64 * 0.25 / 9.0).round() as i64;
    let fat_cal = fats_g * 9;

    let carb_cal = calories - protein_cal - fat_cal;
    let carbs_g = ((carb_cal as f64) / 4.0).round() as i64;

    if is_run_day {
        let extra_carbs = 50;
        MacroSplit {
            protein_g,
            carbs_g: carbs_g + extra_carbs,
            fats_g,
            calories: calories + extra_carbs * 4,
        }
    } else {
        MacroSplit {
            protein_g,
            carbs_g,
            fats_g,
            calories,
        }
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
