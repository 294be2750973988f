//! Allowed clock windows for adaptation sessions.

use crate::diagnostic::{Diagnostic, Violation};
use crate::grid::slot_of;
use crate::plan::ChildPlan;
use crate::time::{DayIndex, Interval};

/// The four windows an adaptation session may take place in. A session must
/// fit entirely inside one of them.
const ALLOWED_WINDOWS: [Interval; 4] = [
    Interval::span_unchecked(9, 30, 11, 30),
    Interval::span_unchecked(10, 0, 12, 30),
    Interval::span_unchecked(13, 0, 15, 30),
    Interval::span_unchecked(14, 30, 16, 45),
];

/// Whether an adaptation session fits one of the allowed windows.
pub fn fits_allowed_window(hours: Interval) -> bool {
    ALLOWED_WINDOWS.iter().any(|w| w.includes(hours))
}

/// Checks every adaptation entry in the attendance plan.
pub fn check_adaptations(plan: &ChildPlan) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    for schedule in &plan.children {
        for (week, days) in schedule.weeks.iter().enumerate() {
            for (day, entry) in days.iter().enumerate() {
                let Some(slot_entry) = entry else { continue };
                if !slot_entry.is_adaptation || fits_allowed_window(slot_entry.hours) {
                    continue;
                }
                let slot = slot_entry.hours.start().map(slot_of).unwrap_or(0);
                out.push(Diagnostic {
                    day: DayIndex { week, day },
                    slot,
                    violation: Violation::WrongAdaptationWindow {
                        child: schedule.child.name.clone(),
                        got: slot_entry.hours,
                    },
                });
            }
        }
    }

    out
}
