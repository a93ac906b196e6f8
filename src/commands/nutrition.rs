//! Tauri commands for the nutrition calculator

use serde::{Deserialize, Serialize};

use crate::nutrition::{
    activity_multiplier, bmr, calorie_target, macros, tdee, MacroSplit, Sex,
};

/// Scalar inputs derived from settings and the current training week
#[derive(Debug, Clone, Deserialize)]
pub struct NutritionInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: i64,
    pub sex: Sex,
    pub goal_weight_kg: f64,
    pub weekly_run_km: f64,
    pub strength_sessions: i64,
    pub swim_sessions: i64,
    pub is_run_day: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NutritionTargets {
    pub bmr: f64,
    pub activity_multiplier: f64,
    pub tdee: f64,
    pub calorie_target: i64,
    pub macros: MacroSplit,
}

/// Compute daily nutrition targets from athlete scalars
#[tauri::command]
pub fn get_nutrition_targets(input: NutritionInput) -> Result<NutritionTargets, String> {
    let bmr_kcal = bmr(input.weight_kg, input.height_cm, input.age_years, input.sex);
    let multiplier = activity_multiplier(
        input.weekly_run_km,
        input.strength_sessions,
        input.swim_sessions,
    );
    let tdee_kcal = tdee(bmr_kcal, multiplier);
    let target = calorie_target(tdee_kcal, input.goal_weight_kg, input.weight_kg);

    Ok(NutritionTargets {
        bmr: bmr_kcal,
        activity_multiplier: multiplier,
        tdee: tdee_kcal,
        calorie_target: target,
        macros: macros(target, input.weight_kg, input.is_run_day),
    })
}
