//! Text of every user-facing [`Message`].
//!
//! All wording lives here so commands never build ad-hoc strings for the
//! terminal. Report content itself (document labels, CSV headers) is not a
//! message: it belongs to the renderers.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === PROJECT MESSAGES ===
            Message::ProjectCreated(name) => format!("Project '{}' created", name),
            Message::ProjectUpdated(name) => format!("Project '{}' updated", name),
            Message::ProjectArchived(name) => format!("Project '{}' archived", name),
            Message::ProjectAlreadyArchived(name) => format!("Project '{}' is already archived", name),
            Message::ProjectsHeader => "Projects".to_string(),
            Message::NoProjects => "No projects yet. Create one with `hourly project add`".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),

            // === TIME ENTRY MESSAGES ===
            Message::EntryCreated(id, duration) => format!("Time entry {} recorded ({})", id, duration),
            Message::EntryUpdated(id) => format!("Time entry {} updated", id),
            Message::EntryDeleted(id) => format!("Time entry {} deleted", id),
            Message::EntriesHeader(period) => format!("Time entries for {}", period),
            Message::NoEntriesForPeriod(period) => format!("No time entries found for {}", period),
            Message::OpenEntriesExcluded(count) => {
                format!("{} open entr{} without duration counted as 0", count, if *count == 1 { "y" } else { "ies" })
            }
            Message::ConfirmDeleteEntry(id) => format!("Delete time entry {}?", id),

            // === REPORT MESSAGES ===
            Message::ReportHeader(period) => format!("Report for {}", period),
            Message::ReportProjectsHeader => "By project".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export written to {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults apply again".to_string(),
            Message::ConfigModuleGeneral => "General settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::PromptAccountId => "Account identifier".to_string(),
            Message::PromptCurrency => "Currency symbol".to_string(),
            Message::PromptStrictDurations => "Reject durations that do not match start/end times?".to_string(),
            Message::PromptReportTitle => "Report title".to_string(),
            Message::PromptReportSubtitle => "Report subtitle (leave empty for none)".to_string(),
            Message::PromptExportDir => "Export directory (leave empty for the current directory)".to_string(),

            // === VALIDATION MESSAGES ===
            Message::InvalidDateRange(from, to) => format!("Invalid date range: {} is after {}", from, to),
            Message::NoIdSet => "Record has no ID".to_string(),

            // === FILE SYSTEM MESSAGES ===
            Message::DataStoragePathError => "Could not resolve the data directory".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
        };
        write!(f, "{}", s)
    }
}
