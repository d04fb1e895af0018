use super::SelectionArgs;
use crate::{
    db::Store,
    libs::{
        aggregate::BucketOrder,
        config::Config,
        export::{ExportFormat, ExportSettings, Exporter},
        report::ReportRequest,
    },
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to a dated file name in the configured export directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    selection: SelectionArgs,

    /// Order projects by name instead of first appearance
    #[arg(long)]
    by_name: bool,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let now = Local::now().naive_local();

    let request = ReportRequest::new(&config.account_id, args.selection.period()?)
        .project(args.selection.project())
        .sort(args.selection.sort_state());

    let mut settings = ExportSettings::from_config(&config, now);
    if args.by_name {
        settings.bucket_order = BucketOrder::Name;
    }

    let exporter = Exporter::new(args.format, args.output, config.export_dir.as_deref(), now.date());
    exporter.export(&Store::default_location()?, &request, &settings).await?;

    Ok(())
}
