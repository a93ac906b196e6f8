//! Progression formulas
//!
//! Closed-form distance and elevation progressions for the weekly run
//! volume. Phase caps keep volume inside each macrocycle's ceiling, and
//! deload weeks step back to 75% of the previous week's long run.
//!
//! All functions are pure and total; the calendar driver only calls them
//! with weeks it constructed itself.

use crate::phase::Phase;

const LONG_RUN_BASE_KM: f64 = 12.0;
const LONG_RUN_DELOAD_FLOOR_KM: f64 = 8.0;
const EASY_RUN_BASE_KM: f64 = 6.0;

/// Long run distance for a week.
///
/// Deload weeks recurse one week back at 75% volume with an 8 km floor; the
/// recursion is a simple one-step relation, never a cycle (the `week - 1`
/// call is always non-deload).
pub fn long_run_km(week_number: i64, phase: Phase, is_deload: bool) -> f64 {
    if is_deload {
        return (long_run_km(week_number - 1, phase, false) * 0.75)
            .max(LONG_RUN_DELOAD_FLOOR_KM);
    }

    let progression = (week_number as f64 * 0.5).min(35.0);
    let raw = LONG_RUN_BASE_KM + progression;

    match phase {
        Phase::Base => raw.min(20.0),
        Phase::Build => (raw + 5.0).min(28.0),
        Phase::Specific => (raw + 10.0).min(35.0),
        Phase::Peak => (raw + 12.0).min(40.0),
        Phase::Taper => (raw * 0.6).max(15.0),
    }
}

/// Easy run distance for a week. Deload weeks hold a flat 6 km.
pub fn easy_run_km(week_number: i64, phase: Phase, is_deload: bool) -> f64 {
    if is_deload {
        return EASY_RUN_BASE_KM;
    }

    let progression = (week_number as f64 * 0.2).min(4.0);

    match phase {
        Phase::Base => EASY_RUN_BASE_KM + progression,
        Phase::Build => EASY_RUN_BASE_KM + progression + 2.0,
        Phase::Specific | Phase::Peak => EASY_RUN_BASE_KM + progression + 3.0,
        Phase::Taper => EASY_RUN_BASE_KM,
    }
}

/// Elevation gain target for a run of `km` kilometers.
///
/// Specific/peak weeks target 50 m/km of climbing, build weeks 30 m/km,
/// base and taper stay flat.
pub fn elevation_gain_meters(km: f64, phase: Phase) -> i64 {
    match phase {
        Phase::Specific | Phase::Peak => (km * 50.0).round() as i64,
        Phase::Build => (km * 30.0).round() as i64,
        Phase::Base | Phase::Taper => 0,
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
