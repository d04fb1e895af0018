//! Versioned schema migrations.
//!
//! Every migration runs inside one transaction together with the other
//! pending ones and is recorded in the `migrations` table, so opening a
//! database is always safe to repeat.
//!
//! ```rust,no_run
//! use hourly::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("hourly.db")?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of schema migrations, applied in ascending version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.add_migration(1, "create_projects_and_time_entries", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS projects (
                    id INTEGER PRIMARY KEY,
                    account_id TEXT NOT NULL,
                    name TEXT NOT NULL,
                    description TEXT,
                    default_hourly_rate REAL NOT NULL DEFAULT 0,
                    color TEXT NOT NULL DEFAULT '#3b82f6',
                    active BOOLEAN NOT NULL DEFAULT TRUE,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS time_entries (
                    id INTEGER PRIMARY KEY,
                    account_id TEXT NOT NULL,
                    project_id INTEGER NOT NULL,
                    date DATE NOT NULL,
                    start_time TEXT,
                    end_time TEXT,
                    duration_minutes INTEGER,
                    description TEXT,
                    applied_rate REAL NOT NULL DEFAULT 0,
                    total REAL,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    FOREIGN KEY (project_id) REFERENCES projects(id)
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_projects_account ON projects(account_id, name)", [])?;
            // Reports always filter by account and date range
            tx.execute(
                "CREATE INDEX IF NOT EXISTS idx_time_entries_account_date ON time_entries(account_id, date)",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_time_entries_project ON time_entries(project_id)", [])?;

            Ok(())
        });

        self.add_migration(2, "add_time_entries_updated_at", |tx| {
            tx.execute("ALTER TABLE time_entries ADD COLUMN updated_at TIMESTAMP", [])?;
            tx.execute("ALTER TABLE projects ADD COLUMN updated_at TIMESTAMP", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Latest schema version known to this build.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applies every migration newer than the recorded version in one transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));
        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            msg_debug!(Message::MigrationCompleted(migration.version));
        }

        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// `(version, name, applied_at)` of every applied migration.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
