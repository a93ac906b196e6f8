use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::session::GeneratedSession;

/// One calendar day of the generated plan.
///
/// Sessions keep generation order. Saturdays are never represented here; the
/// driver skips them entirely rather than emitting an empty day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDay {
  pub date: NaiveDate,
  pub sessions: Vec<GeneratedSession>,
  /// Reserved for conflict reporting (e.g. heavy legs adjacent to a run).
  /// Part of the contract but never populated by the current generator.
  pub warning: Option<String>,
}
