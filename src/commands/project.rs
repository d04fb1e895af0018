use crate::{
    db::Store,
    libs::{config::Config, messages::Message, project::Project, view::View},
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// Create a project
    Add {
        /// Project name
        name: String,
        /// Default hourly rate
        #[arg(short, long, default_value_t = 0.0)]
        rate: f64,
        #[arg(short, long)]
        description: Option<String>,
        /// Display color, e.g. #3b82f6
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List projects
    List {
        /// Include archived projects
        #[arg(short, long)]
        all: bool,
    },
    /// Change a project's fields
    Edit {
        id: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        rate: Option<f64>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Archive a project; its entries are kept
    Archive { id: i64 },
}

pub async fn cmd(args: ProjectArgs) -> Result<()> {
    let config = Config::read()?;
    let store = Store::default_location()?;

    match args.command {
        ProjectCommand::Add {
            name,
            rate,
            description,
            color,
        } => {
            let project = Project::new(&name, rate).with_description(description).with_color(color);
            store.projects(&config.account_id)?.insert(&project)?;
            msg_success!(Message::ProjectCreated(project.name));
        }
        ProjectCommand::List { all } => {
            let projects = store.projects(&config.account_id)?;
            let projects = if all { projects.list_all()? } else { projects.list_active()? };
            if projects.is_empty() {
                msg_info!(Message::NoProjects);
                return Ok(());
            }
            msg_print!(Message::ProjectsHeader, true);
            View::projects(&projects, &config.currency)?;
        }
        ProjectCommand::Edit {
            id,
            name,
            rate,
            description,
            color,
        } => {
            if name.is_none() && rate.is_none() && description.is_none() && color.is_none() {
                msg_info!(Message::NoChangesDetected);
                return Ok(());
            }

            let mut projects = store.projects(&config.account_id)?;
            let mut project = projects.fetch(id)?;
            if let Some(name) = name {
                project.name = name;
            }
            if let Some(rate) = rate {
                project.default_hourly_rate = rate;
            }
            if description.is_some() {
                project = project.with_description(description);
            }
            project = project.with_color(color);

            projects.update(&project)?;
            msg_success!(Message::ProjectUpdated(project.name));
        }
        ProjectCommand::Archive { id } => {
            let mut projects = store.projects(&config.account_id)?;
            let project = projects.fetch(id)?;
            if !project.active {
                msg_warning!(Message::ProjectAlreadyArchived(project.name));
                return Ok(());
            }
            projects.archive(id)?;
            msg_success!(Message::ProjectArchived(project.name));
        }
    }

    Ok(())
}
