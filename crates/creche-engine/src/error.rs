//! Error types for plan construction.
//!
//! Only constructors fail. Once a plan is built, every check is total:
//! checkers return diagnostics, never errors (malformed intervals are the
//! ingestion layer's responsibility).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Hour outside the operating day, or minute not on the 5-minute grid.
    #[error("invalid time of day: {hour:02}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },

    /// Interval with its end before its start.
    #[error("invalid interval: ends before it starts")]
    InvalidInterval,

    /// Day index outside Monday (0) through Friday (4).
    #[error("invalid weekday: {index}")]
    InvalidWeekday { index: u8 },
}

/// Convenience alias used throughout creche-engine.
pub type Result<T> = std::result::Result<T, PlanError>;
