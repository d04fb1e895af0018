//! Report preparation: fetch, filter, sort and aggregate.
//!
//! This is the only asynchronous step of the pipeline. The blocking reads
//! run on tokio's blocking pool; everything after the fetch works on the
//! materialised collections and is synchronous.

use crate::db::DataSource;
use crate::libs::aggregate::{aggregate, ReportAggregate};
use crate::libs::document::ReportPeriod;
use crate::libs::entry::TimeEntry;
use crate::libs::error::HourlyError;
use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::libs::sort::{filter_and_sort, SortState};
use anyhow::Result;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashMap;

/// What to report on.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub account_id: String,
    pub period: ReportPeriod,
    /// Restrict to one project; `None` keeps all.
    pub project: Option<i64>,
    pub sort: SortState,
}

impl ReportRequest {
    pub fn new(account_id: &str, period: ReportPeriod) -> Self {
        ReportRequest {
            account_id: account_id.to_string(),
            period,
            project: None,
            sort: SortState::default(),
        }
    }

    pub fn project(mut self, project: Option<i64>) -> Self {
        self.project = project;
        self
    }

    pub fn sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }
}

/// Everything a renderer needs, computed once per request.
#[derive(Debug, Clone)]
pub struct PreparedReport {
    pub period: ReportPeriod,
    /// Filtered and sorted entries.
    pub entries: Vec<TimeEntry>,
    pub aggregate: ReportAggregate,
    pub projects: HashMap<i64, Project>,
}

impl PreparedReport {
    pub fn is_empty(&self) -> bool {
        self.aggregate.is_empty()
    }

    /// Entries that are still running and therefore count as zero.
    pub fn open_entries(&self) -> usize {
        self.entries.iter().filter(|e| e.is_open()).count()
    }
}

/// First and last day of the month containing `date`.
pub fn month_period(date: NaiveDate) -> ReportPeriod {
    let from = date.with_day(1).unwrap_or(date);
    let to = from
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date);
    ReportPeriod { from, to }
}

/// Builds a period from optional bounds, defaulting to the month of `today`.
pub fn resolve_period(from: Option<NaiveDate>, to: Option<NaiveDate>, today: NaiveDate) -> Result<ReportPeriod> {
    let month = month_period(today);
    let period = ReportPeriod {
        from: from.unwrap_or(month.from),
        to: to.unwrap_or(month.to),
    };
    if period.from > period.to {
        let message = Message::InvalidDateRange(period.from.to_string(), period.to.to_string());
        return Err(HourlyError::InvalidInput(message.to_string()).into());
    }
    Ok(period)
}

/// Applies the request's filter and ordering to fetched records and aggregates them.
pub fn assemble(request: &ReportRequest, entries: Vec<TimeEntry>, projects: Vec<Project>) -> PreparedReport {
    let projects: HashMap<i64, Project> = projects.into_iter().filter_map(|p| p.id.map(|id| (id, p))).collect();
    let entries = filter_and_sort(entries, request.project, request.sort.key, request.sort.direction);
    let aggregate = aggregate(&entries, &projects);

    PreparedReport {
        period: request.period,
        entries,
        aggregate,
        projects,
    }
}

/// Fetches the request's entries and projects from `source` and assembles the report.
pub async fn prepare<S>(source: &S, request: &ReportRequest) -> Result<PreparedReport>
where
    S: DataSource + Clone + Send + 'static,
{
    let fetch_source = source.clone();
    let account_id = request.account_id.clone();
    let period = request.period;

    let (entries, projects) = tokio::task::spawn_blocking(move || -> Result<(Vec<TimeEntry>, Vec<Project>)> {
        let entries = fetch_source.list_entries(&account_id, Some(period.from), Some(period.to))?;
        let projects = fetch_source.list_projects(&account_id)?;
        Ok((entries, projects))
    })
    .await??;

    tracing::debug!(
        entries = entries.len(),
        projects = projects.len(),
        from = %period.from,
        to = %period.to,
        "fetched report data"
    );

    Ok(assemble(request, entries, projects))
}
