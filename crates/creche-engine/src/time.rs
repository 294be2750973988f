//! Clock times, half-open intervals, and day indexing.
//!
//! All plan times live inside one operating day (06:00 to 21:00) and are
//! quantized to 5-minute steps. Intervals are half-open `[start, end)` with a
//! distinguished [`Interval::Empty`] variant: an empty interval never overlaps
//! anything and is included in everything.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// First hour of the operating day (inclusive).
pub const OPENING_HOUR: u8 = 6;
/// Hour at which the operating day closes. `21:00` itself is a valid interval
/// end but no presence extends past it.
pub const CLOSING_HOUR: u8 = 21;

/// A clock time within the operating day, on the 5-minute grid.
///
/// Construction is validated: the hour must fall in
/// `[OPENING_HOUR, CLOSING_HOUR]` (with `CLOSING_HOUR` only paired with
/// minute 0, as an interval-end sentinel) and the minute must be a multiple
/// of 5. Deserialization goes through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTime", into = "RawTime")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

/// Serde representation of [`TimeOfDay`], before validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawTime {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Validated constructor.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidTime`] for hours outside the operating day
    /// or minutes off the 5-minute grid.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        let in_day = hour >= OPENING_HOUR && hour < CLOSING_HOUR;
        let closing = hour == CLOSING_HOUR && minute == 0;
        if (in_day || closing) && minute < 60 && minute % 5 == 0 {
            Ok(Self { hour, minute })
        } else {
            Err(PlanError::InvalidTime { hour, minute })
        }
    }

    /// Constructor for values known valid at compile time (fixed rule windows).
    pub(crate) const fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Builds a time from minutes-since-midnight, if it lands inside the
    /// operating day.
    pub(crate) fn from_minutes(minutes: u32) -> Option<Self> {
        let hour = u8::try_from(minutes / 60).ok()?;
        let minute = (minutes % 60) as u8;
        Self::new(hour, minute).ok()
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<RawTime> for TimeOfDay {
    type Error = PlanError;

    fn try_from(raw: RawTime) -> Result<Self> {
        Self::new(raw.hour, raw.minute)
    }
}

impl From<TimeOfDay> for RawTime {
    fn from(t: TimeOfDay) -> Self {
        Self {
            hour: t.hour,
            minute: t.minute,
        }
    }
}

/// A half-open time interval `[start, end)`, or nothing at all.
///
/// `Empty` is a first-class case, not a sentinel value: it has zero duration,
/// overlaps nothing, and is included in every interval. Serialized as `null`
/// (empty) or `{"start": …, "end": …}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Option<TimeSpan>", into = "Option<TimeSpan>")]
pub enum Interval {
    Empty,
    Span { start: TimeOfDay, end: TimeOfDay },
}

/// Serde representation of a non-empty [`Interval`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct TimeSpan {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Interval {
    /// Builds an interval, normalizing a zero-length span to `Empty`.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidInterval`] when `end < start`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        match end.cmp(&start) {
            std::cmp::Ordering::Less => Err(PlanError::InvalidInterval),
            std::cmp::Ordering::Equal => Ok(Self::Empty),
            std::cmp::Ordering::Greater => Ok(Self::Span { start, end }),
        }
    }

    /// Constructor for spans known valid at compile time (fixed rule windows).
    pub(crate) const fn span_unchecked(sh: u8, sm: u8, eh: u8, em: u8) -> Self {
        Self::Span {
            start: TimeOfDay::new_unchecked(sh, sm),
            end: TimeOfDay::new_unchecked(eh, em),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn start(self) -> Option<TimeOfDay> {
        match self {
            Self::Empty => None,
            Self::Span { start, .. } => Some(start),
        }
    }

    pub fn end(self) -> Option<TimeOfDay> {
        match self {
            Self::Empty => None,
            Self::Span { end, .. } => Some(end),
        }
    }

    /// Length in minutes; zero when empty.
    pub fn duration_minutes(self) -> u32 {
        match self {
            Self::Empty => 0,
            Self::Span { start, end } => end.minutes_from_midnight() - start.minutes_from_midnight(),
        }
    }

    /// Whether a clock time falls inside `[start, end)`.
    pub fn contains(self, t: TimeOfDay) -> bool {
        match self {
            Self::Empty => false,
            Self::Span { start, end } => start <= t && t < end,
        }
    }

    /// Half-open overlap test. An empty interval overlaps nothing.
    pub fn overlaps(self, other: Interval) -> bool {
        match (self, other) {
            (Self::Span { start: a0, end: a1 }, Self::Span { start: b0, end: b1 }) => {
                a0 < b1 && b0 < a1
            }
            _ => false,
        }
    }

    /// Whether `other` lies entirely inside `self`. An empty interval is
    /// included in everything.
    pub fn includes(self, other: Interval) -> bool {
        match (self, other) {
            (_, Self::Empty) => true,
            (Self::Empty, _) => false,
            (Self::Span { start: a0, end: a1 }, Self::Span { start: b0, end: b1 }) => {
                a0 <= b0 && b1 <= a1
            }
        }
    }
}

impl TryFrom<Option<TimeSpan>> for Interval {
    type Error = PlanError;

    fn try_from(raw: Option<TimeSpan>) -> Result<Self> {
        match raw {
            None => Ok(Self::Empty),
            Some(span) => Self::new(span.start, span.end),
        }
    }
}

impl From<Interval> for Option<TimeSpan> {
    fn from(i: Interval) -> Self {
        match i {
            Interval::Empty => None,
            Interval::Span { start, end } => Some(TimeSpan { start, end }),
        }
    }
}

/// A working weekday, Monday (0) through Friday (4).
///
/// Construction is validated; deserialization goes through the same check, so
/// a plan cannot name a day outside the working week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

impl Weekday {
    /// Validated constructor.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidWeekday`] for indices past Friday.
    pub fn new(index: u8) -> Result<Self> {
        if usize::from(index) < DAY_NAMES.len() {
            Ok(Self(index))
        } else {
            Err(PlanError::InvalidWeekday { index })
        }
    }

    /// Constructor for values known valid at compile time (fixed rule days).
    pub(crate) const fn new_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// Position within the week, 0-based from Monday.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn name(self) -> &'static str {
        DAY_NAMES[usize::from(self.0)]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Weekday {
    type Error = PlanError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.0
    }
}

/// A weekday within a plan week: `week` counts from the plan's first Monday,
/// `day` is 0 (Monday) through 4 (Friday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayIndex {
    pub week: usize,
    pub day: usize,
}

pub(crate) const DAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

impl std::fmt::Display for DayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = DAY_NAMES.get(self.day).copied().unwrap_or("?");
        write!(f, "week {} {}", self.week + 1, name)
    }
}

/// Resolves a (week, weekday, clock time) triple to a concrete timestamp,
/// anchored on the plan's first Monday.
pub fn resolve_timestamp(first_monday: NaiveDate, day: DayIndex, t: TimeOfDay) -> NaiveDateTime {
    let date = first_monday + Duration::days((day.week * 7 + day.day) as i64);
    date.and_time(NaiveTime::MIN + Duration::minutes(i64::from(t.minutes_from_midnight())))
}
