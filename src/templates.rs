//! Daily session templates
//!
//! One pure function per training weekday (Sunday through Friday; Saturday
//! is the rest day and never dispatched here). Each combines the week
//! context with the progression formulas to produce that day's ordered
//! session list. Session order is part of the output contract.

use crate::generator::WeekContext;
use crate::models::{
    GeneratedSession, RunDetails, RunSurface, SessionType, StrengthExercise, SwimDetails,
};
use crate::phase::Phase;
use crate::progression::{easy_run_km, elevation_gain_meters, long_run_km};

// ---------------------------------------------------------------------------
/// Session constructors
// ---------------------------------------------------------------------------

fn easy_run(km: f64) -> GeneratedSession {
    GeneratedSession {
        session_type: SessionType::Run,
        title: format!("Easy Run {:.1} km", km),
        planned_rpe: Some(5),
        planned_duration_minutes: Some((km * 6.0).round() as i64),
        planned_notes: Some("Easy conversational pace".to_string()),
        run_details: Some(RunDetails {
            planned_km: km,
            elevation_gain_meters: 0,
            surface: RunSurface::Road,
        }),
        swim_details: None,
        strength_exercises: None,
    }
}

fn swim(title: &str, notes: &str, meters: i64, sets: &str) -> GeneratedSession {
    GeneratedSession {
        session_type: SessionType::Swim,
        title: title.to_string(),
        planned_rpe: Some(4),
        planned_duration_minutes: Some(45),
        planned_notes: Some(notes.to_string()),
        run_details: None,
        swim_details: Some(SwimDetails {
            planned_meters: meters,
            sets: sets.to_string(),
        }),
        strength_exercises: None,
    }
}

fn core(notes: &str) -> GeneratedSession {
    GeneratedSession {
        session_type: SessionType::Core,
        title: "Core Workout".to_string(),
        planned_rpe: None,
        planned_duration_minutes: Some(20),
        planned_notes: Some(notes.to_string()),
        run_details: None,
        swim_details: None,
        strength_exercises: None,
    }
}

fn mobility(duration_minutes: i64, notes: &str) -> GeneratedSession {
    GeneratedSession {
        session_type: SessionType::Mobility,
        title: "Recovery Mobility".to_string(),
        planned_rpe: None,
        planned_duration_minutes: Some(duration_minutes),
        planned_notes: Some(notes.to_string()),
        run_details: None,
        swim_details: None,
        strength_exercises: None,
    }
}

fn lift(name: &str, sets: i64, reps: i64, rest_seconds: i64, tempo: Option<&str>) -> StrengthExercise {
    StrengthExercise {
        name: name.to_string(),
        sets,
        reps,
        load_kg: None,
        rest_seconds,
        tempo: tempo.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
/// Sunday: long run + evening mobility
// ---------------------------------------------------------------------------

pub fn sunday(ctx: &WeekContext) -> Vec<GeneratedSession> {
    let mut sessions = Vec::new();

    let km = long_run_km(ctx.week_number, ctx.phase, ctx.is_deload);
    let is_trail = matches!(ctx.phase, Phase::Specific | Phase::Peak);
    let elevation = if is_trail {
        elevation_gain_meters(km, ctx.phase)
    } else {
        0
    };

    sessions.push(GeneratedSession {
        session_type: SessionType::Run,
        title: format!("Long Run {:.1} km", km),
        planned_rpe: Some(if ctx.phase == Phase::Taper { 5 } else { 6 }),
        // ~6 min/km pacing heuristic
        planned_duration_minutes: Some((km * 6.0).round() as i64),
        planned_notes: Some(format!(
            "Easy aerobic pace. {}",
            if is_trail {
                "Trail focus with elevation."
            } else {
                "Road/trail mix."
            }
        )),
        run_details: Some(RunDetails {
            planned_km: km,
            elevation_gain_meters: elevation,
            surface: if is_trail {
                RunSurface::Trail
            } else {
                RunSurface::Road
            },
        }),
        swim_details: None,
        strength_exercises: None,
    });

    // Shorter when other mobility work lands elsewhere in the week
    let has_other_mobility = ctx.week_number % 2 == 0;
    sessions.push(mobility(
        if has_other_mobility { 15 } else { 25 },
        "Full body stretching, foam rolling, hip mobility",
    ));

    sessions
}

// ---------------------------------------------------------------------------
/// Monday: Upper Body A, optional evening swim
// ---------------------------------------------------------------------------

pub fn monday(ctx: &WeekContext) -> Vec<GeneratedSession> {
    let mut sessions = Vec::new();

    let main_sets = if ctx.is_deload { 3 } else { 4 };
    sessions.push(GeneratedSession {
        session_type: SessionType::Strength,
        title: "Upper Body A".to_string(),
        planned_rpe: Some(if ctx.is_deload { 6 } else { 7 }),
        planned_duration_minutes: Some(60),
        planned_notes: Some(
            "Focus: Chest + Back emphasis (still includes shoulders + arms)".to_string(),
        ),
        run_details: None,
        swim_details: None,
        strength_exercises: Some(vec![
            lift("Bench Press", main_sets, 8, 180, Some("3-1-1-0")),
            lift("Barbell Row", main_sets, 8, 180, Some("2-1-1-0")),
            lift("Incline DB Press", 3, 10, 120, None),
            lift("Pull-ups", 3, 8, 120, None),
            lift("DB Shoulder Press", 3, 10, 120, None),
            lift("Lateral Raises", 3, 12, 90, None),
            lift("Face Pulls", 3, 15, 90, None),
            lift("Tricep Extensions", 3, 12, 90, None),
            lift("Bicep Curls", 3, 12, 90, None),
        ]),
    });

    if ctx.swim_frequency >= 2 && ctx.week_number % 2 == 0 {
        sessions.push(swim(
            "Swim - Recovery",
            "Evening swim after strength, easy recovery",
            1200,
            "200 warm-up, 4x50 drill, 4x100 easy, 200 cool-down",
        ));
    }

    sessions
}

// ---------------------------------------------------------------------------
/// Tuesday: easy run (4-run weeks), optional swim, core, mobility
// ---------------------------------------------------------------------------

pub fn tuesday(ctx: &WeekContext) -> Vec<GeneratedSession> {
    let mut sessions = Vec::new();

    if ctx.run_frequency >= 4 {
        sessions.push(easy_run(easy_run_km(ctx.week_number, ctx.phase, ctx.is_deload)));
    }

    // Second swim alternates with Monday's even-week slot
    if ctx.swim_frequency >= 2 && ctx.week_number % 2 == 1 {
        sessions.push(swim(
            "Swim - Technique Focus",
            "Morning swim, recovery + skill work",
            1200,
            "200 warm-up, 4x50 drill, 4x100 easy, 200 cool-down",
        ));
    }

    sessions.push(core(
        "Anti-rotation, anti-extension, glute med, back endurance",
    ));

    if ctx.week_number % 3 == 0 {
        sessions.push(mobility(20, "Evening mobility, stretching, foam rolling"));
    }

    sessions
}

// ---------------------------------------------------------------------------
/// Wednesday: lower-body prehab only
// ---------------------------------------------------------------------------

/// Thursday always carries a run, so Wednesday stays light: prehab and
/// mobility instead of heavy leg strength, keeping leg days and run days
/// from landing back to back.
pub fn wednesday(_ctx: &WeekContext) -> Vec<GeneratedSession> {
    vec![GeneratedSession {
        session_type: SessionType::Prehab,
        title: "Lower Body Prehab + Mobility".to_string(),
        planned_rpe: Some(4),
        planned_duration_minutes: Some(40),
        planned_notes: Some(
            "Calves, tibialis raises, hip stability, single-leg control, mobility work. \
             Light leg work to avoid conflict with Thursday run."
                .to_string(),
        ),
        run_details: None,
        swim_details: None,
        strength_exercises: None,
    }]
}

// ---------------------------------------------------------------------------
/// Thursday: easy run, primary swim, optional core and mobility
// ---------------------------------------------------------------------------

pub fn thursday(ctx: &WeekContext) -> Vec<GeneratedSession> {
    let mut sessions = Vec::new();

    sessions.push(easy_run(easy_run_km(ctx.week_number, ctx.phase, ctx.is_deload)));

    if ctx.swim_frequency >= 1 {
        sessions.push(swim(
            "Swim - Recovery",
            "Morning swim, easy aerobic, technique drills",
            1500,
            "300 warm-up, 6x50 drill, 4x100 easy, 200 cool-down",
        ));
    }

    if ctx.week_number % 2 == 0 {
        sessions.push(core("Anti-rotation, anti-extension focus"));
    }

    if ctx.week_number % 3 == 1 {
        sessions.push(mobility(20, "Evening mobility, stretching, foam rolling"));
    }

    sessions
}

// ---------------------------------------------------------------------------
/// Friday: Upper Body B, optional evening swim
// ---------------------------------------------------------------------------

pub fn friday(ctx: &WeekContext) -> Vec<GeneratedSession> {
    let mut sessions = Vec::new();

    sessions.push(GeneratedSession {
        session_type: SessionType::Strength,
        title: "Upper Body B".to_string(),
        planned_rpe: Some(if ctx.is_deload { 6 } else { 7 }),
        planned_duration_minutes: Some(60),
        planned_notes: Some(
            "Focus: Shoulders + Arms emphasis (still includes chest + back)".to_string(),
        ),
        run_details: None,
        swim_details: None,
        strength_exercises: Some(vec![
            lift(
                "Overhead Press",
                if ctx.is_deload { 3 } else { 4 },
                8,
                180,
                Some("3-1-1-0"),
            ),
            lift("Weighted Pull-ups", 3, 8, 180, None),
            lift("Lateral Raises", 3, 12, 90, None),
            lift("Rear Delt Flyes", 3, 12, 90, None),
            lift("Close Grip Bench", 3, 10, 120, None),
            lift("Tricep Dips", 3, 12, 90, None),
            lift("Hammer Curls", 3, 12, 90, None),
        ]),
    });

    if ctx.swim_frequency >= 2 && ctx.week_number % 3 == 0 {
        sessions.push(swim(
            "Swim - Technique",
            "Evening swim after strength, technique focus",
            1200,
            "200 warm-up, 6x50 drill, 4x100 easy, 200 cool-down",
        ));
    }

    sessions
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
