//! Weekly staff meeting attendance.
//!
//! The meeting is Tuesday 13:30–14:30 unless the week's plan overrides it;
//! every staff member scheduled that week must be present for the whole hour.
//! Children are considered supervised during the meeting, so the ratio check
//! skips this window.

use std::ops::Range;

use crate::diagnostic::{Diagnostic, Violation};
use crate::grid::{slot_in, slot_of, SLOTS_PER_DAY};
use crate::plan::{Meeting, ProWeek, StaffPlan, StaffWeek};
use crate::time::{DayIndex, TimeOfDay, Weekday};

/// Tuesday.
const DEFAULT_MEETING_DAY: Weekday = Weekday::new_unchecked(1);
const DEFAULT_MEETING_START: TimeOfDay = TimeOfDay::new_unchecked(13, 30);
/// One hour of 5-minute slots.
const MEETING_SLOTS: usize = 12;

/// The meeting window for a planned week: weekday and covered slots.
pub(crate) fn meeting_window(week: &StaffWeek) -> (usize, Range<usize>) {
    let meeting = week.meeting.unwrap_or(Meeting {
        day: DEFAULT_MEETING_DAY,
        start: DEFAULT_MEETING_START,
    });
    let first = slot_of(meeting.start);
    (meeting.day.index(), first..(first + MEETING_SLOTS).min(SLOTS_PER_DAY))
}

/// Whether a staff member is actually available for childcare in a slot:
/// present, not on pause, not detached.
pub(crate) fn available_at(pro_week: &ProWeek, day: usize, slot: usize) -> bool {
    let Some(work_day) = pro_week.days.get(day) else {
        return false;
    };
    if !slot_in(work_day.presence, slot) || slot_in(work_day.pause, slot) {
        return false;
    }
    if let Some(det) = &pro_week.detachement {
        if det.day.index() == day && slot_in(det.hours, slot) {
            return false;
        }
    }
    true
}

/// Checks every planned week's meeting: on the first slot where attendance
/// drops below the scheduled head count, reports the first absent staff
/// member. At most one diagnostic per week.
pub fn check_meetings(plan: &StaffPlan) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    for week in &plan.weeks {
        let expected = week.pros.len();
        if expected == 0 {
            continue;
        }
        let (day, slots) = meeting_window(week);

        for slot in slots {
            let absent: Vec<&ProWeek> = week
                .pros
                .iter()
                .filter(|p| !available_at(p, day, slot))
                .collect();
            if let Some(missing) = absent.first() {
                out.push(Diagnostic {
                    day: DayIndex {
                        week: week.week,
                        day,
                    },
                    slot,
                    violation: Violation::MissingProAtMeeting {
                        expected,
                        got: expected - absent.len(),
                        missing: missing.pro.clone(),
                    },
                });
                break;
            }
        }
    }

    out
}
