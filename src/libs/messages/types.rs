#[derive(Debug, Clone)]
pub enum Message {
    // === PROJECT MESSAGES ===
    ProjectCreated(String),
    ProjectUpdated(String),
    ProjectArchived(String),
    ProjectAlreadyArchived(String),
    ProjectsHeader,
    NoProjects,
    NoChangesDetected,

    // === TIME ENTRY MESSAGES ===
    EntryCreated(i64, String), // id, duration
    EntryUpdated(i64),
    EntryDeleted(i64),
    EntriesHeader(String), // period
    NoEntriesForPeriod(String),
    OpenEntriesExcluded(usize),
    ConfirmDeleteEntry(i64),

    // === REPORT MESSAGES ===
    ReportHeader(String), // period
    ReportProjectsHeader,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleGeneral,
    ConfigModuleReport,
    PromptAccountId,
    PromptCurrency,
    PromptStrictDurations,
    PromptReportTitle,
    PromptReportSubtitle,
    PromptExportDir,

    // === VALIDATION MESSAGES ===
    InvalidDateRange(String, String), // from, to
    NoIdSet,

    // === FILE SYSTEM MESSAGES ===
    DataStoragePathError,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
