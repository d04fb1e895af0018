//! Time entries and the derivation of their computed fields.
//!
//! An [`EntryDraft`] is what a user (or an import) supplies: a project, a
//! date, optional clock times, an optional explicit duration and an optional
//! rate override. [`EntryDraft::derive`] turns it into an immutable
//! [`TimeEntry`] by resolving the applied rate, deriving the duration from
//! the clock times when needed and computing the total.
//!
//! ## Duration Policy
//!
//! When a duration is supplied together with both clock times and the two
//! disagree, the outcome depends on [`DurationPolicy`]:
//!
//! - **Permissive** (default): the supplied value is an explicit override and
//!   is kept; the mismatch is logged
//! - **Strict**: the draft is rejected with [`HourlyError::DurationMismatch`]
//!
//! A duration supplied without clock times is always taken as given.

use crate::libs::error::{HourlyError, HourlyResult};
use crate::libs::interval::{compute_duration, compute_total, ClockTime};
use crate::libs::project::Project;
use crate::libs::rate::{resolve_rate, validate_rate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a supplied duration is checked against the clock-time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DurationPolicy {
    #[default]
    Permissive,
    Strict,
}

impl DurationPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            DurationPolicy::Strict
        } else {
            DurationPolicy::Permissive
        }
    }
}

/// One recorded block of work against a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: Option<i64>,
    pub project_id: i64,
    pub date: NaiveDate,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    /// Worked minutes; `None` for an open entry without a supplied duration.
    pub duration_minutes: Option<u32>,
    pub description: Option<String>,
    pub applied_rate: f64,
    /// `duration_minutes / 60 * applied_rate` at full precision.
    pub total: Option<f64>,
    /// Joined in by the data source for display and sorting.
    pub project_name: Option<String>,
    pub project_color: Option<String>,
}

impl TimeEntry {
    /// Worked minutes, with an open entry counting as zero.
    pub fn minutes(&self) -> u32 {
        self.duration_minutes.unwrap_or(0)
    }

    /// Earned amount, with a missing total counting as zero.
    pub fn amount(&self) -> f64 {
        self.total.unwrap_or(0.0)
    }

    /// An entry with a start time but neither end time nor duration is still running.
    pub fn is_open(&self) -> bool {
        self.end_time.is_none() && self.duration_minutes.is_none()
    }
}

/// User-supplied fields of a time entry before derivation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryDraft {
    pub project_id: i64,
    pub date: NaiveDate,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    pub duration_minutes: Option<u32>,
    pub description: Option<String>,
    pub rate_override: Option<f64>,
}

/// Fields an edit replaces; `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryChanges {
    pub project_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    pub duration_minutes: Option<u32>,
    pub description: Option<String>,
    pub rate_override: Option<f64>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        *self == EntryChanges::default()
    }
}

impl EntryDraft {
    /// Draft for re-deriving `existing` with `changes` applied.
    ///
    /// The stored duration is only dropped when the edit touches the interval
    /// and the result has both ends, so it can be derived again. The stored
    /// rate sticks to the entry until it moves to another project.
    pub fn revise(existing: &TimeEntry, changes: EntryChanges) -> Self {
        let project_id = changes.project_id.unwrap_or(existing.project_id);
        let start_time = changes.start_time.or(existing.start_time);
        let end_time = changes.end_time.or(existing.end_time);
        let interval_changed = changes.start_time.is_some() || changes.end_time.is_some();
        let rederive = interval_changed && start_time.is_some() && end_time.is_some();

        EntryDraft {
            project_id,
            date: changes.date.unwrap_or(existing.date),
            start_time,
            end_time,
            duration_minutes: changes
                .duration_minutes
                .or(if rederive { None } else { existing.duration_minutes }),
            description: changes.description.or_else(|| existing.description.clone()),
            rate_override: changes
                .rate_override
                .or((project_id == existing.project_id).then_some(existing.applied_rate)),
        }
    }

    pub fn new(project_id: i64, date: NaiveDate) -> Self {
        EntryDraft {
            project_id,
            date,
            ..Default::default()
        }
    }

    pub fn interval(mut self, start: ClockTime, end: Option<ClockTime>) -> Self {
        self.start_time = Some(start);
        self.end_time = end;
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn rate(mut self, rate: f64) -> Self {
        self.rate_override = Some(rate);
        self
    }

    /// Resolves rate, duration and total against the owning `project`.
    pub fn derive(self, project: &Project, policy: DurationPolicy) -> HourlyResult<TimeEntry> {
        if let Some(id) = project.id {
            if id != self.project_id {
                return Err(HourlyError::InvalidInput(format!(
                    "entry belongs to project {} but was derived against project {}",
                    self.project_id, id
                )));
            }
        }
        if self.end_time.is_some() && self.start_time.is_none() {
            return Err(HourlyError::InvalidInput("end time given without a start time".to_string()));
        }
        if self.start_time.is_none() && self.duration_minutes.is_none() {
            return Err(HourlyError::InvalidInput("either a start time or a duration is required".to_string()));
        }
        if let Some(rate) = self.rate_override {
            validate_rate(rate)?;
        }

        let derived = match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(compute_duration(start, end)),
            _ => None,
        };

        let duration_minutes = match (self.duration_minutes, derived) {
            (Some(supplied), Some(derived)) if supplied != derived => match policy {
                DurationPolicy::Strict => return Err(HourlyError::DurationMismatch { supplied, derived }),
                DurationPolicy::Permissive => {
                    tracing::warn!(supplied, derived, "keeping supplied duration that differs from the clock-time interval");
                    Some(supplied)
                }
            },
            (Some(supplied), _) => Some(supplied),
            (None, derived) => derived,
        };

        let applied_rate = resolve_rate(self.rate_override, project);
        let total = duration_minutes.map(|minutes| compute_total(minutes, applied_rate));

        Ok(TimeEntry {
            id: None,
            project_id: self.project_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            duration_minutes,
            description: self.description.filter(|d| !d.trim().is_empty()),
            applied_rate,
            total,
            project_name: Some(project.name.clone()),
            project_color: Some(project.color.clone()),
        })
    }
}
