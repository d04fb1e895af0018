//! Report export to files.
//!
//! Renders a [`PreparedReport`] in one of four formats and writes it to disk.
//!
//! ## Formats
//!
//! - **CSV**: entry rows plus the summary block, see [`crate::libs::csv_export`]
//! - **JSON**: totals, per-project subtotals and the entries, pretty-printed
//! - **Excel**: an entries sheet and a per-project sheet
//! - **PDF**: the paginated report, see [`crate::libs::document`]
//!
//! Every format refuses an empty report with [`HourlyError::EmptyDataset`],
//! so no file is created when there is nothing to show.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hourly::db::Store;
//! use hourly::libs::config::Config;
//! use hourly::libs::export::{ExportFormat, ExportSettings, Exporter};
//! use hourly::libs::report::{month_period, ReportRequest};
//! use chrono::Local;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let now = Local::now().naive_local();
//! let request = ReportRequest::new(&config.account_id, month_period(now.date()));
//! let exporter = Exporter::new(ExportFormat::Pdf, None, config.export_dir.as_deref(), now.date());
//! exporter
//!     .export(&Store::default_location()?, &request, &ExportSettings::from_config(&config, now))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::db::DataSource;
use crate::libs::aggregate::{BucketKey, BucketOrder};
use crate::libs::config::Config;
use crate::libs::csv_export::{render_csv, CSV_HEADER};
use crate::libs::document::{render_document, RenderOptions};
use crate::libs::entry::TimeEntry;
use crate::libs::error::HourlyError;
use crate::libs::messages::Message;
use crate::libs::pdf::write_pdf;
use crate::libs::report::{prepare, PreparedReport, ReportRequest};
use crate::libs::response::{csv_filename, pdf_filename};
use crate::msg_success;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// File name used when the caller gives no output path.
    pub fn default_filename(self, date: NaiveDate) -> String {
        match self {
            ExportFormat::Csv => csv_filename(date),
            ExportFormat::Pdf => pdf_filename(date),
            other => format!("horas-laborales-{}.{}", date.format("%Y-%m-%d"), other.extension()),
        }
    }
}

/// Presentation settings shared by all formats.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub currency: String,
    pub title: String,
    pub subtitle: String,
    pub generated_at: NaiveDateTime,
    pub bucket_order: BucketOrder,
}

impl ExportSettings {
    pub fn from_config(config: &Config, generated_at: NaiveDateTime) -> Self {
        ExportSettings {
            currency: config.currency.clone(),
            title: config.report.title.clone(),
            subtitle: config.report.subtitle.clone().unwrap_or_default(),
            generated_at,
            bucket_order: BucketOrder::Encounter,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportReport {
    pub from: String,
    pub to: String,
    pub generated_at: String,
    pub currency: String,
    pub entry_count: usize,
    pub total_minutes: u64,
    pub total_hours: f64,
    pub total_earnings: f64,
    pub average_minutes_per_entry: f64,
    pub average_minutes_per_day: f64,
    pub projects: Vec<ExportProject>,
    pub entries: Vec<TimeEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportProject {
    /// `None` for the bucket of unknown or archived projects.
    pub id: Option<i64>,
    pub name: String,
    pub color: String,
    pub entry_count: usize,
    pub total_minutes: u64,
    pub total_hours: f64,
    pub total_earnings: f64,
}

impl ExportReport {
    pub fn new(report: &PreparedReport, settings: &ExportSettings) -> Self {
        let aggregate = &report.aggregate;
        ExportReport {
            from: report.period.from.format("%Y-%m-%d").to_string(),
            to: report.period.to.format("%Y-%m-%d").to_string(),
            generated_at: settings.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            currency: settings.currency.clone(),
            entry_count: aggregate.entry_count,
            total_minutes: aggregate.grand_total_minutes,
            total_hours: aggregate.grand_total_hours,
            total_earnings: aggregate.grand_total_earnings,
            average_minutes_per_entry: aggregate.average_minutes_per_entry,
            average_minutes_per_day: aggregate.average_minutes_per_day(),
            projects: aggregate
                .buckets(settings.bucket_order)
                .into_iter()
                .map(|bucket| ExportProject {
                    id: match bucket.key {
                        BucketKey::Project(id) => Some(id),
                        BucketKey::Unknown => None,
                    },
                    name: bucket.name.clone(),
                    color: bucket.color.clone(),
                    entry_count: bucket.entries.len(),
                    total_minutes: bucket.total_minutes,
                    total_hours: bucket.total_hours,
                    total_earnings: bucket.total_earnings,
                })
                .collect(),
            entries: report.entries.clone(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// `output_path` wins; otherwise the default file name is placed in
    /// `export_dir`, or the current directory when that is unset.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, export_dir: Option<&Path>, date: NaiveDate) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            let filename = format.default_filename(date);
            match export_dir {
                Some(dir) => dir.join(filename),
                None => PathBuf::from(filename),
            }
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Prepares the report for `request` and writes it, returning the file path.
    pub async fn export<S>(&self, source: &S, request: &ReportRequest, settings: &ExportSettings) -> Result<PathBuf>
    where
        S: DataSource + Clone + Send + 'static,
    {
        let report = prepare(source, request).await?;
        self.write(&report, settings)?;
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(self.output_path.clone())
    }

    /// Renders `report` and writes it to the output path.
    pub fn write(&self, report: &PreparedReport, settings: &ExportSettings) -> Result<()> {
        let bytes = self.render(report, settings)?;
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.output_path, bytes)?;
        tracing::debug!(format = ?self.format, path = %self.output_path.display(), "export written");
        Ok(())
    }

    /// Renders `report` in this exporter's format without touching the disk.
    pub fn render(&self, report: &PreparedReport, settings: &ExportSettings) -> Result<Vec<u8>> {
        if report.is_empty() {
            return Err(HourlyError::EmptyDataset.into());
        }

        match self.format {
            ExportFormat::Csv => Ok(render_csv(&report.entries, &report.aggregate, &settings.currency)?.into_bytes()),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&ExportReport::new(report, settings))?.into_bytes()),
            ExportFormat::Excel => self.render_excel(report, settings),
            ExportFormat::Pdf => {
                let options = RenderOptions {
                    bucket_order: settings.bucket_order,
                    ..RenderOptions::new(&settings.currency, settings.generated_at)
                };
                let document = render_document(
                    &settings.title,
                    &settings.subtitle,
                    &report.period,
                    &report.aggregate,
                    &options,
                )?;
                Ok(write_pdf(&document))
            }
        }
    }

    fn render_excel(&self, report: &PreparedReport, settings: &ExportSettings) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let money_format = Format::new().set_num_format("0.00");

        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name("Registros")?;

            for (col, label) in CSV_HEADER.iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, *label, &header_format)?;
            }

            for (i, entry) in report.entries.iter().enumerate() {
                let row = i as u32 + 1;
                worksheet.write_string(row, 0, entry.date.format("%Y-%m-%d").to_string())?;
                worksheet.write_string(row, 1, entry.project_name.clone().unwrap_or_default())?;
                worksheet.write_string(row, 2, entry.start_time.map(|t| t.to_string()).unwrap_or_default())?;
                worksheet.write_string(row, 3, entry.end_time.map(|t| t.to_string()).unwrap_or_default())?;
                if let Some(minutes) = entry.duration_minutes {
                    worksheet.write_number(row, 4, minutes as f64)?;
                    worksheet.write_number_with_format(row, 5, minutes as f64 / 60.0, &money_format)?;
                }
                worksheet.write_string(row, 6, entry.description.clone().unwrap_or_default())?;
                worksheet.write_number_with_format(row, 7, entry.applied_rate, &money_format)?;
                if let Some(total) = entry.total {
                    worksheet.write_number_with_format(row, 8, total, &money_format)?;
                }
            }

            worksheet.autofit();
        }

        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name("Proyectos")?;

            let earnings_label = format!("Ganancias ({})", settings.currency);
            let headers: [&str; 4] = ["Proyecto", "Registros", "Horas", &earnings_label];
            for (col, label) in headers.iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, *label, &header_format)?;
            }

            let buckets = report.aggregate.buckets(settings.bucket_order);
            let mut row = 1;
            for bucket in &buckets {
                worksheet.write_string(row, 0, &bucket.name)?;
                worksheet.write_number(row, 1, bucket.entries.len() as f64)?;
                worksheet.write_number_with_format(row, 2, bucket.total_hours, &money_format)?;
                worksheet.write_number_with_format(row, 3, bucket.total_earnings, &money_format)?;
                row += 1;
            }

            let aggregate = &report.aggregate;
            worksheet.write_string_with_format(row, 0, "TOTAL", &header_format)?;
            worksheet.write_number(row, 1, aggregate.entry_count as f64)?;
            worksheet.write_number_with_format(row, 2, aggregate.grand_total_hours, &money_format)?;
            worksheet.write_number_with_format(row, 3, aggregate.grand_total_earnings, &money_format)?;

            worksheet.autofit();
        }

        Ok(workbook.save_to_buffer()?)
    }
}
