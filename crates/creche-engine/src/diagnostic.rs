//! Violation reporting.
//!
//! Each detected rule violation becomes one [`Diagnostic`]: where on the
//! timeline it was observed, plus a [`Violation`] case carrying the evidence
//! for that rule. Diagnostics are pure output — built once, never mutated.

use serde::Serialize;

use crate::plan::Pro;
use crate::time::{DayIndex, Interval, TimeOfDay};

/// The four staggering checkpoints around the day's edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Moment {
    /// First staff member, 15 minutes before the first child.
    FirstArrival,
    /// Last staff member, 30 minutes after the last child.
    LastGo,
    /// Second staff member, 15 minutes before the fourth child.
    SecondArrival,
    /// Second-to-last staff member, 15 minutes after the group drops below
    /// four children.
    BeforeLastGo,
}

impl Moment {
    fn label(self) -> &'static str {
        match self {
            Self::FirstArrival => "first arrival",
            Self::LastGo => "last departure",
            Self::SecondArrival => "second arrival",
            Self::BeforeLastGo => "second-to-last departure",
        }
    }
}

/// One rule violation, with rule-specific evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// More adaptation sessions than staff members; adaptations cannot share
    /// a staff member.
    MissingProForAdaptation { expected: u32, got: i32 },
    /// Not enough staff left for the walker/non-walker groups.
    MissingProForChildren { expected: u32, got: i32 },
    /// A staffing edge does not line up with the child attendance edge.
    StaggeredStaffing {
        moment: Moment,
        expected: TimeOfDay,
        got: TimeOfDay,
    },
    /// A mandatory pause is missing from the day.
    MissingPause { pro: Pro },
    /// The pause overlaps the meal window.
    PauseDuringMeal { pro: Pro, pause: Interval },
    /// The pause is too short or too long for the shift.
    WrongPauseDuration {
        pro: Pro,
        got_minutes: u32,
        min_minutes: u32,
        max_minutes: u32,
    },
    /// A scheduled staff member is absent from the weekly meeting.
    MissingProAtMeeting {
        expected: usize,
        got: usize,
        missing: Pro,
    },
    /// Less than the mandated rest between two consecutive working days.
    NotEnoughRest {
        pro: Pro,
        expected_next: TimeOfDay,
        got_next: TimeOfDay,
    },
    /// An adaptation session outside every allowed clock window.
    WrongAdaptationWindow { child: String, got: Interval },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProForAdaptation { expected, got } => write!(
                f,
                "{expected} adaptation session(s) but only {got} staff present"
            ),
            Self::MissingProForChildren { expected, got } => {
                write!(f, "{expected} staff needed for the children, got {got}")
            }
            Self::StaggeredStaffing {
                moment,
                expected,
                got,
            } => write!(f, "{} at {got}, expected {expected}", moment.label()),
            Self::MissingPause { pro } => write!(f, "{} has no pause on a mandatory day", pro.name),
            Self::PauseDuringMeal { pro, .. } => {
                write!(f, "{}'s pause overlaps the meal window", pro.name)
            }
            Self::WrongPauseDuration {
                pro,
                got_minutes,
                min_minutes,
                max_minutes,
            } => write!(
                f,
                "{}'s pause lasts {got_minutes} min, expected between {min_minutes} and {max_minutes}",
                pro.name
            ),
            Self::MissingProAtMeeting {
                expected,
                got,
                missing,
            } => write!(
                f,
                "meeting attendance {got}/{expected}, {} is missing",
                missing.name
            ),
            Self::NotEnoughRest {
                pro,
                expected_next,
                got_next,
            } => write!(
                f,
                "{} starts at {got_next}, expected no earlier than {expected_next}",
                pro.name
            ),
            Self::WrongAdaptationWindow { child, .. } => {
                write!(f, "adaptation for {child} outside the allowed windows")
            }
        }
    }
}

/// A violation pinned to the timeline: which (week, weekday) and which
/// 5-minute slot it was observed at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub day: DayIndex,
    pub slot: usize,
    pub violation: Violation,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.day,
            crate::grid::time_at(self.slot),
            self.violation
        )
    }
}
