use serde::{Deserialize, Serialize};

/// Session discipline. `Padel` and `Sulis` are part of the vocabulary for
/// manually entered sessions; the plan generator never emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
  Run,
  Strength,
  Swim,
  Core,
  Mobility,
  Prehab,
  Futsal,
  Padel,
  Sulis,
}

impl std::fmt::Display for SessionType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      Self::Run => "run",
      Self::Strength => "strength",
      Self::Swim => "swim",
      Self::Core => "core",
      Self::Mobility => "mobility",
      Self::Prehab => "prehab",
      Self::Futsal => "futsal",
      Self::Padel => "padel",
      Self::Sulis => "sulis",
    };
    write!(f, "{}", s)
  }
}

impl std::str::FromStr for SessionType {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "run" => Ok(Self::Run),
      "strength" => Ok(Self::Strength),
      "swim" => Ok(Self::Swim),
      "core" => Ok(Self::Core),
      "mobility" => Ok(Self::Mobility),
      "prehab" => Ok(Self::Prehab),
      "futsal" => Ok(Self::Futsal),
      "padel" => Ok(Self::Padel),
      "sulis" => Ok(Self::Sulis),
      _ => Err(format!("Unknown session type: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunSurface {
  Road,
  Trail,
  Treadmill,
}

/// Run-specific payload, present only on `run` sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDetails {
  pub planned_km: f64,
  pub elevation_gain_meters: i64,
  pub surface: RunSurface,
}

/// Swim-specific payload, present only on `swim` sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwimDetails {
  pub planned_meters: i64,
  pub sets: String,
}

/// One prescribed lift within a strength session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthExercise {
  pub name: String,
  pub sets: i64,
  pub reps: i64,
  pub load_kg: Option<f64>,
  pub rest_seconds: i64,
  pub tempo: Option<String>,
}

/// A single planned session within a generated day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSession {
  #[serde(rename = "type")]
  pub session_type: SessionType,
  pub title: String,
  /// Rate of Perceived Exertion, 1-10
  pub planned_rpe: Option<i64>,
  pub planned_duration_minutes: Option<i64>,
  pub planned_notes: Option<String>,
  pub run_details: Option<RunDetails>,
  pub swim_details: Option<SwimDetails>,
  /// Ordered prescription; order is part of the session
  pub strength_exercises: Option<Vec<StrengthExercise>>,
}
