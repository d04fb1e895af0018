use crate::db::db::Db;
use crate::libs::error::HourlyError;
use crate::libs::messages::Message;
use crate::libs::project::Project;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_PROJECT: &str = "INSERT INTO projects (account_id, name, description, default_hourly_rate, color, active)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_PROJECT: &str = "UPDATE projects
    SET name = ?3, description = ?4, default_hourly_rate = ?5, color = ?6, active = ?7, updated_at = CURRENT_TIMESTAMP
    WHERE id = ?1 AND account_id = ?2";
const ARCHIVE_PROJECT: &str = "UPDATE projects SET active = FALSE, updated_at = CURRENT_TIMESTAMP
    WHERE id = ?1 AND account_id = ?2";
const SELECT_COLUMNS: &str = "SELECT id, name, description, default_hourly_rate, color, active FROM projects";

/// Project repository scoped to one account.
pub struct Projects {
    conn: Connection,
    account_id: String,
}

impl Projects {
    pub fn new(account_id: &str) -> Result<Self> {
        Ok(Self::with_db(Db::new()?, account_id))
    }

    pub fn with_db(db: Db, account_id: &str) -> Self {
        Self {
            conn: db.conn,
            account_id: account_id.to_string(),
        }
    }

    fn from_row(row: &Row) -> rusqlite::Result<Project> {
        Ok(Project {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            default_hourly_rate: row.get(3)?,
            color: row.get(4)?,
            active: row.get(5)?,
        })
    }

    /// Validates and stores a new project, returning its ID.
    pub fn insert(&mut self, project: &Project) -> Result<i64> {
        project.validate()?;
        self.conn.execute(
            INSERT_PROJECT,
            params![
                self.account_id,
                project.name.trim(),
                project.description,
                project.default_hourly_rate,
                project.color,
                project.active
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update(&mut self, project: &Project) -> Result<()> {
        let id = project
            .id
            .ok_or_else(|| HourlyError::InvalidInput(Message::NoIdSet.to_string()))?;
        project.validate()?;

        let affected = self.conn.execute(
            UPDATE_PROJECT,
            params![
                id,
                self.account_id,
                project.name.trim(),
                project.description,
                project.default_hourly_rate,
                project.color,
                project.active
            ],
        )?;
        if affected == 0 {
            return Err(HourlyError::ProjectNotFound(id).into());
        }
        Ok(())
    }

    /// Marks a project inactive. Its entries stay in place.
    pub fn archive(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(ARCHIVE_PROJECT, params![id, self.account_id])?;
        if affected == 0 {
            return Err(HourlyError::ProjectNotFound(id).into());
        }
        Ok(())
    }

    pub fn get(&self, id: i64) -> Result<Option<Project>> {
        let sql = format!("{} WHERE id = ?1 AND account_id = ?2", SELECT_COLUMNS);
        let project = self
            .conn
            .query_row(&sql, params![id, self.account_id], Self::from_row)
            .optional()?;
        Ok(project)
    }

    /// Like [`Projects::get`], but a missing project is an error.
    pub fn fetch(&self, id: i64) -> Result<Project> {
        self.get(id)?.ok_or_else(|| HourlyError::ProjectNotFound(id).into())
    }

    /// Active projects ordered by name.
    pub fn list_active(&self) -> Result<Vec<Project>> {
        self.list_where("AND active = TRUE")
    }

    /// All projects, archived ones included, ordered by name.
    pub fn list_all(&self) -> Result<Vec<Project>> {
        self.list_where("")
    }

    fn list_where(&self, condition: &str) -> Result<Vec<Project>> {
        let sql = format!(
            "{} WHERE account_id = ?1 {} ORDER BY name COLLATE NOCASE",
            SELECT_COLUMNS, condition
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let projects = stmt
            .query_map(params![self.account_id], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(projects)
    }
}
