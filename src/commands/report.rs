use super::SelectionArgs;
use crate::{
    db::Store,
    libs::{
        aggregate::BucketOrder,
        config::Config,
        messages::Message,
        report::{prepare, ReportRequest},
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Order projects by name instead of first appearance
    #[arg(long)]
    by_name: bool,

    /// Also list the entries
    #[arg(short, long)]
    entries: bool,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let period = args.selection.period()?;
    let request = ReportRequest::new(&config.account_id, period)
        .project(args.selection.project())
        .sort(args.selection.sort_state());

    let report = prepare(&Store::default_location()?, &request).await?;
    if report.is_empty() {
        msg_info!(Message::NoEntriesForPeriod(period.to_string()));
        return Ok(());
    }

    msg_print!(Message::ReportHeader(period.to_string()), true);
    if args.entries {
        View::entries(&report.entries, &config.currency)?;
        msg_print!(Message::ReportProjectsHeader, true);
    }

    let order = if args.by_name { BucketOrder::Name } else { BucketOrder::Encounter };
    View::report(&report.aggregate, order, &config.currency)?;

    let open = report.open_entries();
    if open > 0 {
        msg_warning!(Message::OpenEntriesExcluded(open));
    }

    Ok(())
}
