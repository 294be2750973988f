//! Per-slot child-to-staff ratio decision.
//!
//! Adaptation sessions claim whole staff members first. The rest of the staff
//! covers non-walkers in groups of three; a leftover non-walker group becomes
//! a mixed group that absorbs walkers up to three heads, and remaining
//! walkers are covered eight per staff member.

use crate::diagnostic::Violation;
use crate::normalize::HeadCount;

/// Walkers one staff member may supervise.
pub const WALKERS_PER_PRO: u32 = 8;
/// Non-walkers one staff member may supervise.
pub const NON_WALKERS_PER_PRO: u32 = 3;
/// Maximum group size when a single staff member covers both categories.
const LONE_PRO_MAX_CHILDREN: u32 = 3;

/// Decides whether one slot is sufficiently staffed.
///
/// `staff` is the raw available-staff counter; negative values (détachement
/// modeling errors) count as zero available but are reported as-is in the
/// evidence.
pub fn check_slot(count: HeadCount, staff: i32) -> Option<Violation> {
    let available = u32::try_from(staff).unwrap_or(0);

    // Adaptations first: one whole staff member each, no sharing.
    if count.adaptations > available {
        return Some(Violation::MissingProForAdaptation {
            expected: count.adaptations,
            got: staff,
        });
    }
    let remaining = available - count.adaptations;

    let children = count.walkers + count.non_walkers;
    if remaining <= 1 {
        // A lone staff member may watch a small mixed group.
        if children > LONE_PRO_MAX_CHILDREN {
            return Some(Violation::MissingProForChildren {
                expected: 2,
                got: staff,
            });
        }
        return None;
    }

    // Greedy allocation: full non-walker groups, then one mixed group for the
    // remainder, then walkers.
    let full_groups = count.non_walkers / NON_WALKERS_PER_PRO;
    let leftover_non_walkers = count.non_walkers % NON_WALKERS_PER_PRO;
    let mut other_pros = 0;
    let mut walkers_left = count.walkers;
    if leftover_non_walkers > 0 {
        // The mixed group absorbs walkers up to the lone-group cap. The
        // subtraction may exceed the walker count; that just means no
        // walkers are left over.
        other_pros += 1;
        walkers_left =
            walkers_left.saturating_sub(LONE_PRO_MAX_CHILDREN - leftover_non_walkers);
    }
    other_pros += walkers_left.div_ceil(WALKERS_PER_PRO);

    let needed = full_groups + other_pros;
    if needed > remaining {
        return Some(Violation::MissingProForChildren {
            expected: needed,
            got: staff,
        });
    }
    None
}
