//! Command-line front end.
//!
//! Every subcommand runs the same pipeline as the library: read the
//! configuration, open the store, then derive, report or export. Failures
//! are printed once here, either as a message or, with `--json-errors`, as
//! the JSON error envelope an HTTP front end would return.

pub mod entry;
pub mod export;
pub mod init;
pub mod project;
pub mod report;

use crate::libs::document::ReportPeriod;
use crate::libs::error::HourlyError;
use crate::libs::report::resolve_period;
use crate::libs::response::ErrorEnvelope;
use crate::libs::sort::{SortDirection, SortKey, SortState};
use crate::msg_error;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage projects", arg_required_else_help = true)]
    Project(project::ProjectArgs),
    #[command(about = "Record and manage time entries", arg_required_else_help = true)]
    Entry(entry::EntryArgs),
    #[command(about = "Show totals per project for a period")]
    Report(report::ReportArgs),
    #[command(about = "Export a period to CSV, JSON, Excel or PDF")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Print failures as a JSON error envelope on stdout
    #[arg(long, global = true)]
    json_errors: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> ExitCode {
        let cli = Self::parse();
        let json_errors = cli.json_errors;

        match cli.run().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                if json_errors {
                    let (status, envelope) = ErrorEnvelope::from_error(&error);
                    tracing::debug!(status = status.code(), "command failed");
                    println!("{}", envelope.to_json());
                } else {
                    msg_error!(error);
                }
                ExitCode::FAILURE
            }
        }
    }

    async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Project(args) => project::cmd(args).await,
            Commands::Entry(args) => entry::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Period, project filter and ordering shared by `report`, `export` and `entry list`.
#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// First day (YYYY-MM-DD or "today"); defaults to the start of the current month
    #[arg(long)]
    from: Option<String>,

    /// Last day (YYYY-MM-DD or "today"); defaults to the end of the current month
    #[arg(long)]
    to: Option<String>,

    /// Only entries of this project ID
    #[arg(short, long)]
    project: Option<i64>,

    #[arg(short, long, value_enum, default_value = "date")]
    sort: SortKey,

    /// Sort descending
    #[arg(long)]
    desc: bool,
}

impl SelectionArgs {
    pub fn period(&self) -> Result<ReportPeriod> {
        let from = self.from.as_deref().map(parse_date).transpose()?;
        let to = self.to.as_deref().map(parse_date).transpose()?;
        resolve_period(from, to, Local::now().date_naive())
    }

    pub fn project(&self) -> Option<i64> {
        self.project
    }

    pub fn sort_state(&self) -> SortState {
        let direction = if self.desc { SortDirection::Desc } else { SortDirection::Asc };
        SortState::new(self.sort, direction)
    }
}

/// Parses `YYYY-MM-DD`, or `today`.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, HourlyError> {
    if date_str.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| HourlyError::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", date_str)))
}
