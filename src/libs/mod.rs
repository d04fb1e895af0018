//! Core library modules.
//!
//! ## Engine
//!
//! - [`interval`]: clock times, durations and amounts
//! - [`rate`]: which hourly rate applies to an entry
//! - [`entry`], [`project`]: domain records and entry derivation
//! - [`sort`]: project filter and stable ordering
//! - [`aggregate`]: per-project subtotals and grand totals
//! - [`csv_export`], [`document`], [`pdf`]: renderers
//!
//! ## Application
//!
//! - [`report`]: the fetch, filter and aggregate pipeline
//! - [`export`], [`view`], [`response`]: file, console and HTTP outputs
//! - [`config`], [`data_storage`], [`messages`], [`error`], [`formatter`]
//!
//! ## Usage
//!
//! ```rust
//! use hourly::libs::entry::{DurationPolicy, EntryDraft};
//! use hourly::libs::project::Project;
//! use chrono::NaiveDate;
//!
//! let mut project = Project::new("Website", 20.0);
//! project.id = Some(1);
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let entry = EntryDraft::new(1, date)
//!     .interval("09:00".parse()?, Some("17:30".parse()?))
//!     .derive(&project, DurationPolicy::default())?;
//! assert_eq!(entry.total, Some(170.0));
//! # Ok::<(), hourly::libs::error::HourlyError>(())
//! ```

pub mod aggregate;
pub mod config;
pub mod csv_export;
pub mod data_storage;
pub mod document;
pub mod entry;
pub mod error;
pub mod export;
pub mod formatter;
pub mod interval;
pub mod messages;
pub mod pdf;
pub mod project;
pub mod rate;
pub mod report;
pub mod response;
pub mod sort;
pub mod view;
