use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Athlete parameters for plan generation. Immutable input; the generator is
/// a pure function of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSettings {
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  /// IANA timezone identifier. Display-level only; all core date arithmetic
  /// is calendar-date based.
  pub timezone: String,
  /// Runs per week (3 or 4)
  pub run_frequency: i64,
  /// Swims per week (1 or 2)
  pub swim_frequency: i64,
  /// Strength sessions per week (3 or 4). Not branched on yet; reserved.
  pub strength_frequency: i64,
  pub height_cm: f64,
  pub weight_kg: f64,
  /// Passed through for the nutrition calculator
  pub goal_weight_kg: f64,
}
