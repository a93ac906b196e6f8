//! Training phase calculator
//!
//! Maps a week number within a plan to one of five macrocycle phases using
//! proportional week allocation. Taper and peak lengths are fixed; specific
//! and build each take 30% of the plan; base absorbs the remainder.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
/// Phase: macrocycle segment controlling emphasis and volume ceilings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Base,
    Build,
    Specific,
    Peak,
    Taper,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Specific => "specific",
            Self::Peak => "peak",
            Self::Taper => "taper",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Phase {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Self::Base),
            "build" => Ok(Self::Build),
            "specific" => Ok(Self::Specific),
            "peak" => Ok(Self::Peak),
            "taper" => Ok(Self::Taper),
            _ => Err(format!("Unknown phase: {}", s)),
        }
    }
}

const TAPER_WEEKS: i64 = 2;
const PEAK_WEEKS: i64 = 3;

/// Resolve the phase for a week within a plan of `total_weeks`.
///
/// Thresholds are cumulative sums base -> build -> specific -> peak -> taper.
/// For very short plans the base allocation can be zero or negative; the
/// cascade then simply skips those phases and a week beyond all thresholds
/// clamps to taper. Signed arithmetic keeps this total for any inputs.
pub fn phase_for(week_number: i64, total_weeks: i64) -> Phase {
    let specific_weeks = (total_weeks as f64 * 0.3).floor() as i64;
    let build_weeks = (total_weeks as f64 * 0.3).floor() as i64;
    let base_weeks = total_weeks - build_weeks - specific_weeks - PEAK_WEEKS - TAPER_WEEKS;

    if week_number <= base_weeks {
        Phase::Base
    } else if week_number <= base_weeks + build_weeks {
        Phase::Build
    } else if week_number <= base_weeks + build_weeks + specific_weeks {
        Phase::Specific
    } else if week_number <= base_weeks + build_weeks + specific_weeks + PEAK_WEEKS {
        Phase::Peak
    } else {
        Phase::Taper
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
