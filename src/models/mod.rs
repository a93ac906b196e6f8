pub mod day;
pub mod session;
pub mod settings;

pub use day::GeneratedDay;
pub use session::{
  GeneratedSession, RunDetails, RunSurface, SessionType, StrengthExercise, SwimDetails,
};
pub use settings::PlanSettings;
