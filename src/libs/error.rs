//! Typed errors raised by the time-entry computation and reporting engine.
//!
//! The engine never defaults a bad input to zero. Every condition a caller
//! must react to is one variant of [`HourlyError`], so the command layer and
//! the HTTP adapter in [`crate::libs::response`] can map them to user-facing
//! output without string matching.

use thiserror::Error;

/// Convenience alias for results produced by the core engine.
pub type HourlyResult<T> = std::result::Result<T, HourlyError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HourlyError {
    /// A clock time could not be parsed or is out of range (hour 0-23, minute 0-59).
    #[error("Invalid clock time '{0}', expected HH:MM between 00:00 and 23:59")]
    InvalidClockTime(String),

    /// A required field is missing or a value violates its domain.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A supplied duration disagrees with the one derived from start/end times.
    #[error("Duration of {supplied} min does not match the {derived} min between start and end time")]
    DurationMismatch { supplied: u32, derived: u32 },

    /// There is nothing to render.
    #[error("No data to export")]
    EmptyDataset,

    #[error("Project with ID {0} not found")]
    ProjectNotFound(i64),

    #[error("Time entry with ID {0} not found")]
    EntryNotFound(i64),
}

impl HourlyError {
    /// Returns `true` for conditions caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HourlyError::InvalidClockTime(_) | HourlyError::InvalidInput(_) | HourlyError::DurationMismatch { .. }
        )
    }

    /// Returns `true` when a referenced record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HourlyError::ProjectNotFound(_) | HourlyError::EntryNotFound(_))
    }
}
