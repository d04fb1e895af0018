//! Report aggregation by project.
//!
//! Groups time entries that are already scoped to one account and date range
//! into per-project buckets with subtotals, and computes report-wide totals.
//!
//! ## Features
//!
//! - **Encounter Order**: buckets and the entries inside them keep the order in
//!   which they were first seen, so a pre-sorted input stays sorted
//! - **Unknown Projects**: entries pointing at a missing or archived project are
//!   collected under one sentinel bucket instead of being dropped
//! - **Bounded Drift**: grand totals are summed once over the buckets at the end
//! - **No Shared State**: every call folds into a fresh [`ReportAggregate`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hourly::libs::aggregate::{aggregate, BucketOrder};
//!
//! let report = aggregate(&entries, &projects);
//! for bucket in report.buckets(BucketOrder::Name) {
//!     println!("{}: {:.2}", bucket.name, bucket.total_earnings);
//! }
//! ```

use crate::libs::entry::TimeEntry;
use crate::libs::project::Project;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Label of the bucket that collects entries without a known active project.
pub const UNKNOWN_PROJECT_NAME: &str = "Proyecto desconocido";
/// Display color of the unknown-project bucket.
pub const UNKNOWN_PROJECT_COLOR: &str = "#9ca3af";

/// Identifies a report bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BucketKey {
    Project(i64),
    Unknown,
}

/// Subtotal of one project within a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSubtotal {
    pub key: BucketKey,
    pub name: String,
    pub color: String,
    pub total_hours: f64,
    pub total_minutes: u64,
    pub total_earnings: f64,
    pub entries: Vec<TimeEntry>,
}

impl ProjectSubtotal {
    fn empty(key: BucketKey, name: String, color: String) -> Self {
        ProjectSubtotal {
            key,
            name,
            color,
            total_hours: 0.0,
            total_minutes: 0,
            total_earnings: 0.0,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, entry: &TimeEntry) {
        self.total_minutes += entry.minutes() as u64;
        self.total_hours = self.total_minutes as f64 / 60.0;
        self.total_earnings += entry.amount();
        self.entries.push(entry.clone());
    }
}

/// Order in which [`ReportAggregate::buckets`] yields buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketOrder {
    /// First-encounter order of the input entries.
    #[default]
    Encounter,
    /// Case-insensitive by project name, unknown bucket last.
    Name,
}

/// Derived totals for a set of entries. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportAggregate {
    pub by_project: IndexMap<BucketKey, ProjectSubtotal>,
    pub grand_total_hours: f64,
    pub grand_total_minutes: u64,
    pub grand_total_earnings: f64,
    pub entry_count: usize,
    pub average_minutes_per_entry: f64,
    /// Number of distinct dates with at least one entry.
    pub distinct_days: usize,
}

impl ReportAggregate {
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Buckets in the requested order.
    pub fn buckets(&self, order: BucketOrder) -> Vec<&ProjectSubtotal> {
        let mut buckets: Vec<&ProjectSubtotal> = self.by_project.values().collect();
        if order == BucketOrder::Name {
            buckets.sort_by(|a, b| {
                let unknown_a = a.key == BucketKey::Unknown;
                let unknown_b = b.key == BucketKey::Unknown;
                unknown_a
                    .cmp(&unknown_b)
                    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            });
        }
        buckets
    }

    /// Average worked minutes per distinct day, `0` for an empty report.
    pub fn average_minutes_per_day(&self) -> f64 {
        if self.distinct_days == 0 {
            return 0.0;
        }
        self.grand_total_minutes as f64 / self.distinct_days as f64
    }
}

/// Groups `entries` by project and computes subtotals and grand totals.
///
/// `projects` maps project ids to projects; an entry whose id is absent or
/// whose project is archived is placed in the [`BucketKey::Unknown`] bucket.
pub fn aggregate(entries: &[TimeEntry], projects: &HashMap<i64, Project>) -> ReportAggregate {
    let (by_project, days) = entries.iter().fold(
        (IndexMap::<BucketKey, ProjectSubtotal>::new(), HashSet::<NaiveDate>::new()),
        |(mut buckets, mut days), entry| {
            let (key, project) = match projects.get(&entry.project_id) {
                Some(project) if project.active => (BucketKey::Project(entry.project_id), Some(project)),
                _ => (BucketKey::Unknown, None),
            };

            buckets
                .entry(key)
                .or_insert_with(|| match project {
                    Some(project) => ProjectSubtotal::empty(key, project.name.clone(), project.color.clone()),
                    None => {
                        tracing::warn!(project_id = entry.project_id, "entry references an unknown or archived project");
                        ProjectSubtotal::empty(key, UNKNOWN_PROJECT_NAME.to_string(), UNKNOWN_PROJECT_COLOR.to_string())
                    }
                })
                .push(entry);

            days.insert(entry.date);
            (buckets, days)
        },
    );

    let grand_total_minutes: u64 = by_project.values().map(|b| b.total_minutes).sum();
    let grand_total_earnings: f64 = by_project.values().map(|b| b.total_earnings).sum();
    let entry_count: usize = by_project.values().map(|b| b.entries.len()).sum();

    let average_minutes_per_entry = if entry_count > 0 {
        grand_total_minutes as f64 / entry_count as f64
    } else {
        0.0
    };

    tracing::debug!(entry_count, buckets = by_project.len(), "aggregated report");

    ReportAggregate {
        by_project,
        grand_total_hours: grand_total_minutes as f64 / 60.0,
        grand_total_minutes,
        grand_total_earnings,
        entry_count,
        average_minutes_per_entry,
        distinct_days: days.len(),
    }
}
