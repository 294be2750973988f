//! Projection of both plans onto the shared timeline.
//!
//! The two plans have independent shapes; everything downstream works on the
//! common (week × weekday × slot) grids built here.

use serde::{Deserialize, Serialize};

use crate::grid::{slot_in, slot_range, Grid};
use crate::plan::{ChildPlan, StaffPlan};

/// Children present in one slot, split by ratio category. A child in
/// adaptation counts there and nowhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadCount {
    pub walkers: u32,
    pub non_walkers: u32,
    pub adaptations: u32,
}

impl HeadCount {
    pub fn new(walkers: u32, non_walkers: u32, adaptations: u32) -> Self {
        Self {
            walkers,
            non_walkers,
            adaptations,
        }
    }

    /// All children present, whatever their category.
    pub fn total(self) -> u32 {
        self.walkers + self.non_walkers + self.adaptations
    }
}

/// Projects the attendance plan onto the grid: for every scheduled day entry,
/// each covered slot gains one child in exactly one category.
pub fn normalize_children(plan: &ChildPlan) -> Grid<HeadCount> {
    let week_count = plan.children.iter().map(|c| c.weeks.len()).max().unwrap_or(0);
    let mut grid: Grid<HeadCount> = Grid::new(week_count);

    for schedule in &plan.children {
        for (week, days) in schedule.weeks.iter().enumerate() {
            for (day, entry) in days.iter().enumerate() {
                let Some(slot_entry) = entry else { continue };
                let Some(counts) = grid.day_mut(week, day) else { continue };
                for slot in slot_range(slot_entry.hours) {
                    let count = &mut counts[slot];
                    if slot_entry.is_adaptation {
                        count.adaptations += 1;
                    } else if schedule.child.is_walker {
                        count.walkers += 1;
                    } else {
                        count.non_walkers += 1;
                    }
                }
            }
        }
    }

    grid
}

/// Projects the staffing plan onto the grid: presence minus pause, then minus
/// any détachement.
///
/// A détachement outside the member's presence drives the counter negative.
/// That raw value is preserved — it flags a modeling error in the source
/// plan — and consumers treat it as zero available staff.
pub fn normalize_staff(plan: &StaffPlan) -> Grid<i32> {
    let mut grid = Grid::new(plan.week_count());

    for staff_week in &plan.weeks {
        for pro_week in &staff_week.pros {
            for (day, work_day) in pro_week.days.iter().enumerate() {
                let Some(counts) = grid.day_mut(staff_week.week, day) else { continue };
                for slot in slot_range(work_day.presence) {
                    if !slot_in(work_day.pause, slot) {
                        counts[slot] += 1;
                    }
                }
            }
            if let Some(det) = &pro_week.detachement {
                let Some(counts) = grid.day_mut(staff_week.week, det.day.index()) else { continue };
                for slot in slot_range(det.hours) {
                    counts[slot] -= 1;
                }
            }
        }
    }

    grid
}
