//! Hourly rate resolution for time entries.
//!
//! An entry may carry its own rate to bill a one-off block of work
//! differently without touching the project's standing rate. A positive
//! override always wins; an absent or zero override falls back to the
//! project default.

use crate::libs::error::{HourlyError, HourlyResult};
use crate::libs::project::Project;

/// Picks the rate that applies to an entry of `project`.
pub fn resolve_rate(entry_override: Option<f64>, project: &Project) -> f64 {
    match entry_override {
        Some(rate) if rate > 0.0 => rate,
        _ => project.default_hourly_rate,
    }
}

/// Rejects negative or non-finite rates.
pub fn validate_rate(rate: f64) -> HourlyResult<f64> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(HourlyError::InvalidInput(format!("hourly rate must be a non-negative number, got {}", rate)));
    }
    Ok(rate)
}
