//! The shared 5-minute timeline both plans are projected onto.
//!
//! A day is a dense array of [`SLOTS_PER_DAY`] slots; slot 0 starts at opening
//! time. [`slot_of`] and [`time_at`] are exact inverses on the valid range —
//! no rounding happens anywhere.

use std::ops::Range;

use crate::time::{Interval, TimeOfDay, CLOSING_HOUR, OPENING_HOUR};

/// Minutes covered by one slot.
pub const SLOT_MINUTES: u32 = 5;

/// Number of slots in one operating day.
pub const SLOTS_PER_DAY: usize = 12 * (CLOSING_HOUR - OPENING_HOUR) as usize;

/// Maps a clock time to its slot index. The closing sentinel `21:00` maps to
/// `SLOTS_PER_DAY`, one past the last slot, so it is only meaningful as an
/// exclusive interval end.
pub fn slot_of(t: TimeOfDay) -> usize {
    (t.minutes_from_midnight() - u32::from(OPENING_HOUR) * 60) as usize / SLOT_MINUTES as usize
}

/// Maps a slot index back to the clock time at which the slot starts.
///
/// Defined for `slot <= SLOTS_PER_DAY` (the upper bound gives the closing
/// time); larger values are clamped to closing.
pub fn time_at(slot: usize) -> TimeOfDay {
    let slot = slot.min(SLOTS_PER_DAY);
    let hour = OPENING_HOUR + (slot / 12) as u8;
    let minute = ((slot % 12) as u8) * 5;
    TimeOfDay::new_unchecked(hour, minute)
}

/// Expands an interval to the slots it covers. Empty intervals expand to an
/// empty range; spans cover `[slot_of(start), slot_of(end))`.
pub fn slot_range(interval: Interval) -> Range<usize> {
    match (interval.start(), interval.end()) {
        (Some(start), Some(end)) => slot_of(start)..slot_of(end),
        _ => 0..0,
    }
}

/// Whether a slot falls inside an interval.
pub fn slot_in(interval: Interval, slot: usize) -> bool {
    slot_range(interval).contains(&slot)
}

/// A per-slot accumulator over an entire plan: week → weekday → slot.
///
/// Built once by the normalizers, then read-only. `T` is a child head-count
/// or an available-staff counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    weeks: Vec<[Vec<T>; 5]>,
}

impl<T: Clone + Default> Grid<T> {
    /// A zero-initialized grid covering `week_count` weeks.
    pub fn new(week_count: usize) -> Self {
        Self {
            weeks: (0..week_count)
                .map(|_| std::array::from_fn(|_| vec![T::default(); SLOTS_PER_DAY]))
                .collect(),
        }
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// The slot array for one weekday, or `None` outside the grid.
    pub fn day(&self, week: usize, day: usize) -> Option<&[T]> {
        self.weeks.get(week)?.get(day).map(Vec::as_slice)
    }

    pub(crate) fn day_mut(&mut self, week: usize, day: usize) -> Option<&mut [T]> {
        self.weeks.get_mut(week)?.get_mut(day).map(Vec::as_mut_slice)
    }
}
