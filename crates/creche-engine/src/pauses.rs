//! Pause placement and duration rules, per staff member per day.

use crate::diagnostic::Violation;
use crate::grid::slot_of;
use crate::plan::{Pro, WorkDay};
use crate::time::Interval;

/// Presence length (minutes) from which a pause becomes mandatory.
const MANDATORY_FROM_MINUTES: u32 = 360;
/// Presence length (minutes) from which the pause must last a full hour.
const LONG_SHIFT_MINUTES: u32 = 600;
/// Regular pause bounds, in minutes.
const PAUSE_MIN_MINUTES: u32 = 30;
const PAUSE_MAX_MINUTES: u32 = 60;
/// Children's meal service; pauses may not overlap it.
const MEAL_WINDOW: Interval = Interval::span_unchecked(11, 30, 13, 0);
/// Arriving within this window means working straight through the meal, so a
/// pause is mandatory regardless of shift length.
const MEAL_ARRIVAL_WINDOW: Interval = Interval::span_unchecked(11, 0, 12, 0);

/// Checks one working day's pause. Returns the violation and the slot it is
/// reported at — the pause start, or the presence start when the pause is
/// missing entirely.
///
/// The placement rule is waived for interim staff; the duration rule never
/// is. At most one violation is reported per day, placement taking
/// precedence over duration.
pub fn check_work_day(pro: &Pro, day: &WorkDay) -> Option<(usize, Violation)> {
    let start = day.presence.start()?;

    let mandatory = day.presence.duration_minutes() >= MANDATORY_FROM_MINUTES
        || MEAL_ARRIVAL_WINDOW.contains(start);

    let Some(pause_start) = day.pause.start() else {
        if mandatory {
            return Some((slot_of(start), Violation::MissingPause { pro: pro.clone() }));
        }
        return None;
    };
    let slot = slot_of(pause_start);

    if !pro.is_interim && day.pause.overlaps(MEAL_WINDOW) {
        return Some((
            slot,
            Violation::PauseDuringMeal {
                pro: pro.clone(),
                pause: day.pause,
            },
        ));
    }

    let min_minutes = if day.presence.duration_minutes() >= LONG_SHIFT_MINUTES {
        PAUSE_MAX_MINUTES
    } else {
        PAUSE_MIN_MINUTES
    };
    let got_minutes = day.pause.duration_minutes();
    if got_minutes < min_minutes || got_minutes > PAUSE_MAX_MINUTES {
        return Some((
            slot,
            Violation::WrongPauseDuration {
                pro: pro.clone(),
                got_minutes,
                min_minutes,
                max_minutes: PAUSE_MAX_MINUTES,
            },
        ));
    }

    None
}
