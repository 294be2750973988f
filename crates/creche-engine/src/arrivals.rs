//! Staggered arrival and departure of staff around the day's edges.
//!
//! Four independent checkpoints per day, each comparing a staffing edge
//! (first/second arrival, last/second-to-last departure) against the child
//! attendance timeline. Arrival times are the start of the observed slot;
//! departure times are the end of the last active slot.

use crate::diagnostic::{Moment, Violation};
use crate::grid::{time_at, SLOTS_PER_DAY};
use crate::normalize::HeadCount;

/// Slots between the first staff arrival and the first child (15 minutes).
const ARRIVAL_LEAD_SLOTS: usize = 3;
/// Slots between the last child and the last staff departure (30 minutes).
const DEPARTURE_LAG_SLOTS: usize = 6;
/// Slots between the last ≥4-children slot and the second-to-last departure.
const SECOND_DEPARTURE_LAG_SLOTS: usize = 3;
/// Child count at which a second staff member must already be present.
const SECOND_PRO_THRESHOLD: u32 = 4;

/// Scans one day's two timelines and reports every checkpoint that is off,
/// with the slot the problem was observed at.
///
/// A day without children has no checkpoints. A checkpoint whose staffing
/// edge does not exist at all (e.g. no staff ever reaches two) is left to the
/// ratio check and reported nowhere here.
pub fn check_day(children: &[HeadCount], staff: &[i32]) -> Vec<(usize, Violation)> {
    let total: Vec<u32> = children.iter().map(|c| c.total()).collect();

    let Some(first_child) = total.iter().position(|&t| t > 0) else {
        return Vec::new();
    };
    let last_child = total.iter().rposition(|&t| t > 0).unwrap_or(first_child);
    let fourth_child = total.iter().position(|&t| t >= SECOND_PRO_THRESHOLD);
    let last_fourth_child = total.iter().rposition(|&t| t >= SECOND_PRO_THRESHOLD);

    let first_pro = staff.iter().position(|&s| s > 0);
    let last_pro = staff.iter().rposition(|&s| s > 0);
    let first_second_pro = staff.iter().position(|&s| s >= 2);
    let last_second_pro = staff.iter().rposition(|&s| s >= 2);

    let mut issues = Vec::new();

    if let Some(got) = first_pro {
        let expected = first_child.saturating_sub(ARRIVAL_LEAD_SLOTS);
        if got != expected {
            issues.push(arrival(Moment::FirstArrival, expected, got));
        }
    }
    if let Some(got) = last_pro {
        let expected = (last_child + DEPARTURE_LAG_SLOTS).min(SLOTS_PER_DAY - 1);
        if got != expected {
            issues.push(departure(Moment::LastGo, expected, got));
        }
    }
    if let Some(fourth) = fourth_child {
        if let Some(got) = first_second_pro {
            let expected = fourth.saturating_sub(ARRIVAL_LEAD_SLOTS);
            if got != expected {
                issues.push(arrival(Moment::SecondArrival, expected, got));
            }
        }
    }
    if let Some(last_fourth) = last_fourth_child {
        if let Some(got) = last_second_pro {
            let expected = (last_fourth + SECOND_DEPARTURE_LAG_SLOTS).min(SLOTS_PER_DAY - 1);
            if got != expected {
                issues.push(departure(Moment::BeforeLastGo, expected, got));
            }
        }
    }

    issues
}

fn arrival(moment: Moment, expected: usize, got: usize) -> (usize, Violation) {
    (
        got,
        Violation::StaggeredStaffing {
            moment,
            expected: time_at(expected),
            got: time_at(got),
        },
    )
}

/// Departure times read one slot past the last active slot: leaving "during"
/// slot `i` means being gone when slot `i + 1` starts.
fn departure(moment: Moment, expected: usize, got: usize) -> (usize, Violation) {
    (
        got,
        Violation::StaggeredStaffing {
            moment,
            expected: time_at(expected + 1),
            got: time_at(got + 1),
        },
    )
}
