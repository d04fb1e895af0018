use super::{parse_date, SelectionArgs};
use crate::{
    db::Store,
    libs::{
        config::Config,
        entry::{EntryChanges, EntryDraft},
        error::HourlyError,
        formatter::format_duration,
        interval::ClockTime,
        messages::Message,
        project::Project,
        sort::filter_and_sort,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EntryArgs {
    #[command(subcommand)]
    command: EntryCommand,
}

#[derive(Debug, Subcommand)]
enum EntryCommand {
    /// Record worked time against a project
    Add {
        /// Project ID
        #[arg(short, long)]
        project: i64,
        /// Work date (YYYY-MM-DD or "today")
        #[arg(short, long, default_value = "today")]
        date: String,
        /// Start time, HH:MM
        #[arg(short, long)]
        start: Option<ClockTime>,
        /// End time, HH:MM; earlier than the start means the shift crossed midnight
        #[arg(short, long)]
        end: Option<ClockTime>,
        /// Worked minutes, when not derived from start and end
        #[arg(long)]
        duration: Option<u32>,
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Hourly rate for this entry only
        #[arg(short, long)]
        rate: Option<f64>,
    },
    /// List entries of a period
    List {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Change an entry; totals are recomputed
    Edit {
        id: i64,
        #[arg(short, long)]
        project: Option<i64>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        start: Option<ClockTime>,
        #[arg(short, long)]
        end: Option<ClockTime>,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(short = 'm', long)]
        description: Option<String>,
        #[arg(short, long)]
        rate: Option<f64>,
    },
    /// Delete an entry
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: EntryArgs) -> Result<()> {
    let config = Config::read()?;
    let store = Store::default_location()?;

    match args.command {
        EntryCommand::Add {
            project,
            date,
            start,
            end,
            duration,
            description,
            rate,
        } => {
            let project = active_project(&store, &config, project)?;
            let draft = EntryDraft {
                project_id: project.id.unwrap_or_default(),
                date: parse_date(&date)?,
                start_time: start,
                end_time: end,
                duration_minutes: duration,
                description,
                rate_override: rate,
            };
            let entry = draft.derive(&project, config.duration_policy())?;
            let id = store.entries(&config.account_id)?.insert(&entry)?;
            msg_success!(Message::EntryCreated(id, format_duration(entry.duration_minutes)));
        }
        EntryCommand::List { selection } => {
            let period = selection.period()?;
            let entries = store
                .entries(&config.account_id)?
                .list(Some(period.from), Some(period.to))?;
            let sort = selection.sort_state();
            let entries = filter_and_sort(entries, selection.project(), sort.key, sort.direction);

            if entries.is_empty() {
                msg_info!(Message::NoEntriesForPeriod(period.to_string()));
                return Ok(());
            }
            msg_print!(Message::EntriesHeader(period.to_string()), true);
            View::entries(&entries, &config.currency)?;
        }
        EntryCommand::Edit {
            id,
            project,
            date,
            start,
            end,
            duration,
            description,
            rate,
        } => {
            let changes = EntryChanges {
                project_id: project,
                date: date.as_deref().map(parse_date).transpose()?,
                start_time: start,
                end_time: end,
                duration_minutes: duration,
                description,
                rate_override: rate,
            };
            if changes.is_empty() {
                msg_info!(Message::NoChangesDetected);
                return Ok(());
            }

            let mut entries = store.entries(&config.account_id)?;
            let existing = entries.fetch(id)?;
            let draft = EntryDraft::revise(&existing, changes);
            let owner = active_project(&store, &config, draft.project_id)?;

            let entry = draft.derive(&owner, config.duration_policy())?;
            entries.update(id, &entry)?;
            msg_success!(Message::EntryUpdated(id));
        }
        EntryCommand::Delete { id, yes } => {
            let mut entries = store.entries(&config.account_id)?;
            entries.fetch(id)?;

            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteEntry(id).to_string())
                    .default(false)
                    .interact()?;
            if !confirmed {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }

            entries.delete(id)?;
            msg_success!(Message::EntryDeleted(id));
        }
    }

    Ok(())
}

/// Loads a project that new time may be recorded against.
fn active_project(store: &Store, config: &Config, id: i64) -> Result<Project> {
    let project = store.projects(&config.account_id)?.fetch(id)?;
    if !project.active {
        return Err(HourlyError::InvalidInput(format!("project '{}' is archived", project.name)).into());
    }
    Ok(project)
}
