//! The orchestrator: runs every rule over one pair of plans.

use crate::adaptation::check_adaptations;
use crate::arrivals;
use crate::diagnostic::Diagnostic;
use crate::grid::SLOTS_PER_DAY;
use crate::meeting::{check_meetings, meeting_window};
use crate::normalize::{normalize_children, normalize_staff, HeadCount};
use crate::pauses::check_work_day;
use crate::plan::{ChildPlan, StaffPlan};
use crate::ratio;
use crate::rest::check_rest;
use crate::time::DayIndex;

/// Runs the full rule battery and collects every diagnostic.
///
/// Both plans are projected onto the shared timeline, then checked in a
/// deterministic order: per day (week by week), the ratio check (at most one
/// diagnostic per day, first failing slot, meeting window skipped) followed
/// by the four staggering checkpoints; then adaptation windows over the
/// attendance plan, pause rules per staff day, meeting attendance per week,
/// and inter-day rest.
///
/// The returned list is empty exactly when the staffing plan satisfies every
/// rule. `check` is a pure function: identical inputs give identical output.
pub fn check(children: &ChildPlan, staff: &StaffPlan) -> Vec<Diagnostic> {
    let child_grid = normalize_children(children);
    let staff_grid = normalize_staff(staff);

    let no_children = vec![HeadCount::default(); SLOTS_PER_DAY];
    let no_staff = vec![0i32; SLOTS_PER_DAY];

    let mut out = Vec::new();

    let week_count = child_grid.week_count().max(staff_grid.week_count());
    for week in 0..week_count {
        // The ratio check ignores the meeting hour; children are considered
        // supervised while the whole team meets.
        let meeting = staff
            .weeks
            .iter()
            .find(|w| w.week == week)
            .map(meeting_window);

        for day in 0..5 {
            let counts = child_grid.day(week, day).unwrap_or(&no_children);
            let available = staff_grid.day(week, day).unwrap_or(&no_staff);

            for slot in 0..SLOTS_PER_DAY {
                let in_meeting = meeting
                    .as_ref()
                    .is_some_and(|(m_day, m_slots)| *m_day == day && m_slots.contains(&slot));
                if in_meeting {
                    continue;
                }
                if let Some(violation) = ratio::check_slot(counts[slot], available[slot]) {
                    out.push(Diagnostic {
                        day: DayIndex { week, day },
                        slot,
                        violation,
                    });
                    break;
                }
            }

            for (slot, violation) in arrivals::check_day(counts, available) {
                out.push(Diagnostic {
                    day: DayIndex { week, day },
                    slot,
                    violation,
                });
            }
        }
    }

    out.extend(check_adaptations(children));

    for week in &staff.weeks {
        for pro_week in &week.pros {
            for (day, work_day) in pro_week.days.iter().enumerate() {
                if let Some((slot, violation)) = check_work_day(&pro_week.pro, work_day) {
                    out.push(Diagnostic {
                        day: DayIndex {
                            week: week.week,
                            day,
                        },
                        slot,
                        violation,
                    });
                }
            }
        }
    }

    out.extend(check_meetings(staff));
    out.extend(check_rest(staff));

    out
}
