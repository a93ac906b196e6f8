pub mod nutrition;

use crate::generator;
use crate::models::{GeneratedDay, PlanSettings};

/// Generate the full training plan for the given settings.
///
/// Pure and deterministic; the frontend owns persisting the result.
#[tauri::command]
pub fn generate_plan(settings: PlanSettings) -> Result<Vec<GeneratedDay>, String> {
  Ok(generator::generate(&settings))
}
