//! # creche-engine
//!
//! Deterministic staffing-compliance checks for weekly childcare schedules.
//!
//! Given a per-child attendance plan and a per-staff work plan, the engine
//! projects both onto a shared 5-minute timeline and reports every moment and
//! every rule where staffing falls short: child-to-staff ratios (with mixed
//! walker/non-walker groups and exclusive adaptation sessions), staggered
//! arrivals and departures, pause placement and duration, weekly meeting
//! attendance, inter-day rest, and adaptation clock windows.
//!
//! The engine is pure and total: [`check`] never fails, never blocks, and
//! returns the same diagnostics for the same plans. Ingesting plans from
//! their source documents is a collaborator concern.
//!
//! ## Modules
//!
//! - [`time`] — clock times, half-open intervals, day indexing
//! - [`grid`] — the 5-minute slot timeline and per-plan accumulator grids
//! - [`plan`] — the two input plans (children, staff)
//! - [`normalize`] — projection of both plans onto the timeline
//! - [`ratio`] — per-slot child-to-staff ratio rule
//! - [`arrivals`] — staggered arrival/departure checkpoints
//! - [`pauses`] — pause placement and duration rules
//! - [`meeting`] — weekly meeting attendance
//! - [`rest`] — minimum rest between working days
//! - [`adaptation`] — allowed windows for adaptation sessions
//! - [`check`] — the orchestrator
//! - [`diagnostic`] — violation reporting
//! - [`error`] — construction-time error types

pub mod adaptation;
pub mod arrivals;
pub mod check;
pub mod diagnostic;
pub mod error;
pub mod grid;
pub mod meeting;
pub mod normalize;
pub mod pauses;
pub mod plan;
pub mod ratio;
pub mod rest;
pub mod time;

pub use check::check;
pub use diagnostic::{Diagnostic, Moment, Violation};
pub use error::PlanError;
pub use normalize::{normalize_children, normalize_staff, HeadCount};
pub use plan::{
    Child, ChildPlan, ChildSchedule, ChildSlot, Detachement, Meeting, Pro, ProWeek, StaffPlan,
    StaffWeek, WorkDay,
};
pub use time::{resolve_timestamp, DayIndex, Interval, TimeOfDay, Weekday};
