//! Minimum rest between consecutive working days.

use crate::diagnostic::{Diagnostic, Violation};
use crate::grid::slot_of;
use crate::plan::StaffPlan;
use crate::time::{DayIndex, TimeOfDay};

/// Mandated gap between one day's presence end and the next day's start.
const MIN_REST_MINUTES: u32 = 11 * 60;
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Checks each staff member's Monday→Tuesday through Thursday→Friday pairs.
/// A pair with either day off carries no constraint. The boundary is
/// inclusive: exactly 11 hours of rest passes.
pub fn check_rest(plan: &StaffPlan) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    for week in &plan.weeks {
        for pro_week in &week.pros {
            for day in 0..4 {
                let (Some(end), Some(next_start)) = (
                    pro_week.days[day].presence.end(),
                    pro_week.days[day + 1].presence.start(),
                ) else {
                    continue;
                };

                // Earliest allowed start, as minutes into the next day. When
                // this falls before opening it cannot be violated (and has no
                // TimeOfDay representation), so the pair is done.
                let Some(expected_next) = (end.minutes_from_midnight() + MIN_REST_MINUTES)
                    .checked_sub(MINUTES_PER_DAY)
                    .and_then(TimeOfDay::from_minutes)
                else {
                    continue;
                };

                if next_start < expected_next {
                    out.push(Diagnostic {
                        day: DayIndex {
                            week: week.week,
                            day: day + 1,
                        },
                        slot: slot_of(next_start),
                        violation: Violation::NotEnoughRest {
                            pro: pro_week.pro.clone(),
                            expected_next,
                            got_next: next_start,
                        },
                    });
                }
            }
        }
    }

    out
}
