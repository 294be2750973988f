//! The two typed weekly plans the engine consumes.
//!
//! Ingestion (PDF text blocks for children, spreadsheets for staff) lives
//! outside this crate; collaborators hand over these structures, usually as
//! JSON. Every time field deserializes through its validating constructor, so
//! a plan that parses is temporally well-formed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::{Interval, TimeOfDay, Weekday};

/// A child on the attendance plan. `is_walker` fixes the ratio category:
/// 8 walkers or 3 non-walkers per staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub name: String,
    pub birth_date: NaiveDate,
    pub is_walker: bool,
}

/// One scheduled day for a child. Adaptation sessions (onboarding) require a
/// staff member's undivided attention, whatever the child's walker status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildSlot {
    pub hours: Interval,
    pub is_adaptation: bool,
}

/// A child's attendance, week by week. Each week holds Monday through Friday;
/// `None` marks an absent day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildSchedule {
    pub child: Child,
    pub weeks: Vec<[Option<ChildSlot>; 5]>,
}

/// The full attendance plan, anchored on the Monday of its first week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildPlan {
    pub first_monday: NaiveDate,
    pub children: Vec<ChildSchedule>,
}

/// A staff member. The colour is the display identity used by the source
/// spreadsheet. Interim staff get a relaxed break-placement rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pro {
    pub name: String,
    pub color: String,
    pub is_interim: bool,
}

/// One working day: a presence interval and a pause inside it (possibly
/// empty). Ingestion guarantees the pause lies within the presence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkDay {
    pub presence: Interval,
    pub pause: Interval,
}

impl WorkDay {
    /// A day off: no presence, no pause.
    pub fn off() -> Self {
        Self {
            presence: Interval::Empty,
            pause: Interval::Empty,
        }
    }
}

/// A temporary reassignment: during `hours` on weekday `day`, the staff
/// member works elsewhere and does not count towards childcare coverage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detachement {
    pub day: Weekday,
    pub hours: Interval,
}

/// One staff member's week: five working days and at most one détachement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProWeek {
    pub pro: Pro,
    pub days: [WorkDay; 5],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detachement: Option<Detachement>,
}

/// Override for the weekly staff meeting: weekday and start time. The
/// duration is always one hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub day: Weekday,
    pub start: TimeOfDay,
}

/// One planned week of staffing. `week` indexes from the plan's first Monday
/// and may be sparse (weeks without a row are simply unstaffed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffWeek {
    pub week: usize,
    pub pros: Vec<ProWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting: Option<Meeting>,
}

/// The full staffing plan, anchored on the same first Monday as the child
/// plan it is checked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffPlan {
    pub first_monday: NaiveDate,
    pub weeks: Vec<StaffWeek>,
}

impl StaffPlan {
    /// Number of weeks the plan spans: highest week index plus one.
    pub fn week_count(&self) -> usize {
        self.weeks.iter().map(|w| w.week + 1).max().unwrap_or(0)
    }
}
