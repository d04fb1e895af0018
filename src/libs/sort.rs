//! Filtering and ordering of time entry listings.
//!
//! Applies an optional project filter followed by a stable single-key sort.
//! Stability is part of the contract: entries that compare equal keep their
//! input order in both directions, so re-sorting a sorted listing is a no-op.

use crate::libs::entry::TimeEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column an entry listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum SortKey {
    #[default]
    Date,
    ProjectName,
    DurationMinutes,
    Total,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current ordering of a listing, toggled the way a sortable table header is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        SortState { key, direction }
    }

    /// Selecting the active key flips the direction; a new key starts ascending.
    pub fn select(self, key: SortKey) -> Self {
        if key == self.key {
            SortState {
                key,
                direction: self.direction.flip(),
            }
        } else {
            SortState {
                key,
                direction: SortDirection::Asc,
            }
        }
    }

    pub fn apply(&self, entries: Vec<TimeEntry>) -> Vec<TimeEntry> {
        sort_entries(entries, self.key, self.direction)
    }
}

fn text_key(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}

/// Compares two entries on `key` in ascending order.
pub fn compare(a: &TimeEntry, b: &TimeEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::ProjectName => text_key(a.project_name.as_deref()).cmp(&text_key(b.project_name.as_deref())),
        SortKey::DurationMinutes => a.minutes().cmp(&b.minutes()),
        SortKey::Total => a.amount().total_cmp(&b.amount()),
        SortKey::Description => text_key(a.description.as_deref()).cmp(&text_key(b.description.as_deref())),
    }
}

/// Keeps only entries of `project_id`; `None` returns the input unchanged.
pub fn filter_by_project(entries: Vec<TimeEntry>, project_id: Option<i64>) -> Vec<TimeEntry> {
    match project_id {
        Some(id) => entries.into_iter().filter(|e| e.project_id == id).collect(),
        None => entries,
    }
}

/// Stable sort of `entries` on `key`.
pub fn sort_entries(mut entries: Vec<TimeEntry>, key: SortKey, direction: SortDirection) -> Vec<TimeEntry> {
    // `sort_by` is a stable merge sort; reversing the comparator keeps ties in input order.
    match direction {
        SortDirection::Asc => entries.sort_by(|a, b| compare(a, b, key)),
        SortDirection::Desc => entries.sort_by(|a, b| compare(a, b, key).reverse()),
    }
    entries
}

/// Filters by project, then sorts.
pub fn filter_and_sort(
    entries: Vec<TimeEntry>,
    project_filter: Option<i64>,
    key: SortKey,
    direction: SortDirection,
) -> Vec<TimeEntry> {
    sort_entries(filter_by_project(entries, project_filter), key, direction)
}
