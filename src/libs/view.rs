use crate::libs::aggregate::{BucketOrder, ReportAggregate};
use crate::libs::entry::TimeEntry;
use crate::libs::formatter::{format_date, format_duration, format_hours, format_money, format_time};
use crate::libs::project::Project;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn projects(projects: &[Project], currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "RATE/H", "COLOR", "STATUS", "DESCRIPTION"]);
        for project in projects {
            table.add_row(row![
                project.id.unwrap_or(0),
                project.name,
                format_money(project.default_hourly_rate, currency),
                project.color,
                if project.active { "active" } else { "archived" },
                project.description.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn entries(entries: &[TimeEntry], currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "PROJECT", "START", "END", "DURATION", "RATE/H", "TOTAL", "DESCRIPTION"]);
        for entry in entries {
            table.add_row(row![
                entry.id.unwrap_or(0),
                format_date(entry.date),
                entry.project_name.as_deref().unwrap_or("-"),
                format_time(entry.start_time),
                format_time(entry.end_time),
                format_duration(entry.duration_minutes),
                format_money(entry.applied_rate, currency),
                entry.total.map(|t| format_money(t, currency)).unwrap_or_else(|| "-".to_string()),
                entry.description.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Per-project subtotals followed by a grand total row.
    pub fn report(aggregate: &ReportAggregate, order: BucketOrder, currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PROJECT", "ENTRIES", "HOURS", "EARNINGS"]);
        for bucket in aggregate.buckets(order) {
            table.add_row(row![
                bucket.name,
                bucket.entries.len(),
                format_hours(bucket.total_minutes),
                format_money(bucket.total_earnings, currency)
            ]);
        }
        table.add_row(row![
            b -> "TOTAL",
            b -> aggregate.entry_count,
            b -> format_hours(aggregate.grand_total_minutes),
            b -> format_money(aggregate.grand_total_earnings, currency)
        ]);
        table.printstd();

        let mut stats = Table::new();
        stats.add_row(row!["Average per entry", format_duration(Some(aggregate.average_minutes_per_entry.round() as u32))]);
        stats.add_row(row!["Days worked", aggregate.distinct_days]);
        stats.add_row(row!["Average per day", format_duration(Some(aggregate.average_minutes_per_day().round() as u32))]);
        stats.printstd();

        Ok(())
    }
}
