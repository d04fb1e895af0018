//! # Hourly - hourly time tracking and invoicing
//!
//! Records worked time against projects with hourly rates and turns it into
//! per-project totals, CSV exports and paginated PDF reports.
//!
//! ## Features
//!
//! - **Time Entries**: clock-time intervals (including overnight shifts) or
//!   explicit durations, billed at the project rate or a per-entry override
//! - **Reports**: per-project subtotals, grand totals and averages for any
//!   date range
//! - **Exports**: CSV with a summary block, JSON, Excel and PDF
//! - **Local Storage**: SQLite database with versioned migrations
//!
//! ## Pipeline
//!
//! ```text
//! DataSource → EntryDraft::derive → filter_and_sort → aggregate → render_csv / render_document → write_pdf
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hourly::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> std::process::ExitCode {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
