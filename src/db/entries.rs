use crate::db::db::Db;
use crate::libs::entry::TimeEntry;
use crate::libs::error::HourlyError;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_ENTRY: &str = "INSERT INTO time_entries
    (account_id, project_id, date, start_time, end_time, duration_minutes, description, applied_rate, total)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const UPDATE_ENTRY: &str = "UPDATE time_entries
    SET project_id = ?3, date = ?4, start_time = ?5, end_time = ?6, duration_minutes = ?7,
        description = ?8, applied_rate = ?9, total = ?10, updated_at = CURRENT_TIMESTAMP
    WHERE id = ?1 AND account_id = ?2";
const DELETE_ENTRY: &str = "DELETE FROM time_entries WHERE id = ?1 AND account_id = ?2";
const SELECT_JOINED: &str = "SELECT e.id, e.project_id, e.date, e.start_time, e.end_time, e.duration_minutes,
        e.description, e.applied_rate, e.total, p.name, p.color
    FROM time_entries e
    LEFT JOIN projects p ON p.id = e.project_id AND p.account_id = e.account_id";
const ORDER_NEWEST_FIRST: &str = "ORDER BY e.date DESC, e.start_time DESC";

/// Time entry repository scoped to one account.
pub struct Entries {
    conn: Connection,
    account_id: String,
}

impl Entries {
    pub fn new(account_id: &str) -> Result<Self> {
        Ok(Self::with_db(Db::new()?, account_id))
    }

    pub fn with_db(db: Db, account_id: &str) -> Self {
        Self {
            conn: db.conn,
            account_id: account_id.to_string(),
        }
    }

    fn from_row(row: &Row) -> rusqlite::Result<TimeEntry> {
        Ok(TimeEntry {
            id: row.get(0)?,
            project_id: row.get(1)?,
            date: row.get(2)?,
            start_time: row.get(3)?,
            end_time: row.get(4)?,
            duration_minutes: row.get(5)?,
            description: row.get(6)?,
            applied_rate: row.get(7)?,
            total: row.get(8)?,
            project_name: row.get(9)?,
            project_color: row.get(10)?,
        })
    }

    /// Stores a derived entry and returns its ID.
    pub fn insert(&mut self, entry: &TimeEntry) -> Result<i64> {
        self.conn.execute(
            INSERT_ENTRY,
            params![
                self.account_id,
                entry.project_id,
                entry.date,
                entry.start_time,
                entry.end_time,
                entry.duration_minutes,
                entry.description,
                entry.applied_rate,
                entry.total
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Replaces the stored fields of the entry with `id`.
    pub fn update(&mut self, id: i64, entry: &TimeEntry) -> Result<()> {
        let affected = self.conn.execute(
            UPDATE_ENTRY,
            params![
                id,
                self.account_id,
                entry.project_id,
                entry.date,
                entry.start_time,
                entry.end_time,
                entry.duration_minutes,
                entry.description,
                entry.applied_rate,
                entry.total
            ],
        )?;
        if affected == 0 {
            return Err(HourlyError::EntryNotFound(id).into());
        }
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_ENTRY, params![id, self.account_id])?;
        if affected == 0 {
            return Err(HourlyError::EntryNotFound(id).into());
        }
        Ok(())
    }

    pub fn get(&self, id: i64) -> Result<Option<TimeEntry>> {
        let sql = format!("{} WHERE e.id = ?1 AND e.account_id = ?2", SELECT_JOINED);
        let entry = self
            .conn
            .query_row(&sql, params![id, self.account_id], Self::from_row)
            .optional()?;
        Ok(entry)
    }

    pub fn fetch(&self, id: i64) -> Result<TimeEntry> {
        self.get(id)?.ok_or_else(|| HourlyError::EntryNotFound(id).into())
    }

    /// Entries within the inclusive date range, newest first.
    ///
    /// Either bound may be open.
    pub fn list(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Vec<TimeEntry>> {
        let sql = format!(
            "{} WHERE e.account_id = ?1 AND (?2 IS NULL OR e.date >= ?2) AND (?3 IS NULL OR e.date <= ?3) {}",
            SELECT_JOINED, ORDER_NEWEST_FIRST
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let entries = stmt
            .query_map(params![self.account_id, from, to], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }
}
